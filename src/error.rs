use thiserror::Error;

/// Diagnosable conditions arising from degenerate or out-of-domain data
/// ranges. None of these abort rendering: the pipeline-facing surfaces
/// ([`CoordSys::aspect`](crate::CoordSys::aspect),
/// [`CoordinateSystem::aspect_ratio`](crate::CoordinateSystem::aspect_ratio))
/// surface them as warnings and fall back to an unset aspect ratio.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    #[error("out of domain: {0}")]
    OutOfDomain(&'static str),
}
