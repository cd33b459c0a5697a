//! *Coordinate system selection and aspect ratio resolution for 2D map
//! plotting.*
//!
//! A map drawn directly in longitude/latitude degrees is stretched
//! east-west: away from the equator, one degree of longitude covers less
//! ground than one degree of latitude, while the plot gives both the same
//! number of pixels. The full cure is a proper projection, reprojecting
//! every graphical primitive point by point. The cheap cure, provided
//! here, is to compute a single panel height/width scale factor that makes
//! the plot approximate a Mercator rendition of the same extent, at the
//! cost of two great-circle distance evaluations per render pass,
//! regardless of how much data the plot contains.
//!
//! The coordinate system variants are a closed set, selected once at plot
//! construction time:
//!
//! - [`CoordSys::Cartesian`]: no forced ratio; the pipeline auto-sizes.
//! - [`CoordSys::FastGeographic`]: the aspect ratio approximation
//!   implemented by this crate.
//! - [`CoordSys::TrueProjection`]: per-primitive reprojection, handled
//!   elsewhere in the pipeline; forces no panel ratio here.
//!
//! ```rust
//! use mapaspect::{CoordSys, Range};
//!
//! // A one-degree square centered on 60°N: longitude degrees are only
//! // about half as long as latitude degrees up there, so the panel
//! // must be roughly twice as tall as it is wide.
//! let aspect = CoordSys::FastGeographic
//!     .aspect(Range::new(170., 171.), Range::new(60., 61.))
//!     .unwrap();
//! assert!((aspect - 2.0).abs() < 0.1);
//! ```

mod aspect;
mod coord;
mod error;
pub mod math;

pub use aspect::CoordSys;
pub use aspect::CoordinateSystem;
pub use coord::GeoPoint;
pub use coord::Range;
pub use error::Error;
