//! Aspect ratio resolution, dispatched over the closed set of coordinate
//! system variants.
//!
//! The `FastGeographic` strategy is the point of this crate: evaluate, at
//! the center of the data range, the ground distance spanned by one degree
//! of longitude and by one degree of latitude, and scale the panel's
//! height/width ratio by their quotient. Exact at the center, increasingly
//! approximate toward the edges - a deliberate trade-off. Evaluating the
//! ratio once rather than averaging it over the extent keeps the cost at
//! two trig evaluations per render pass and is empirically the better
//! choice for typical, non-global map extents.

use log::warn;

use crate::coord::GeoPoint;
use crate::coord::Range;
use crate::math::central_angle;
use crate::Error;

/// Keep the range center at least this many degrees away from a pole.
///
/// The distance probes reach half a degree out from the center, so a
/// smaller margin would send them beyond ±90. And as the center latitude
/// approaches a pole, the per-degree longitude distance vanishes and the
/// aspect ratio grows without bound.
const POLE_MARGIN: f64 = 0.5;

/// The closed set of coordinate system variants a plot can be constructed
/// with. Selected once, at plot construction time; immutable for the
/// lifetime of a render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordSys {
    /// Plain linear axes. No forced panel ratio.
    #[default]
    Cartesian,
    /// Mercator-approximating forced panel ratio, computed here.
    FastGeographic,
    /// Full per-primitive reprojection, performed elsewhere in the
    /// pipeline. No forced panel ratio.
    TrueProjection,
}

impl CoordSys {
    /// The panel height/width scale factor for the given trained data
    /// ranges, or `None` where the variant forces no ratio.
    ///
    /// Degenerate input surfaces as an error rather than as a silent
    /// NaN or infinity:
    ///
    /// - a zero-width longitude range gives [`Error::InvalidRange`]
    /// - a range centered within half a degree of a pole gives
    ///   [`Error::OutOfDomain`]
    ///
    /// A zero-*height* range is mathematically unproblematic (the aspect
    /// collapses to 0) and passes through with a logged advisory.
    pub fn try_aspect(self, x: Range, y: Range) -> Result<Option<f64>, Error> {
        match self {
            CoordSys::Cartesian => Ok(None),
            CoordSys::TrueProjection => Ok(None),
            CoordSys::FastGeographic => fast_geographic_aspect(x, y).map(Some),
        }
    }

    /// The pipeline-facing form of [`try_aspect`](Self::try_aspect):
    /// degenerate input is surfaced through [`log::warn!`] and collapses
    /// to `None`, so rendering proceeds with default auto-sizing instead
    /// of aborting.
    #[must_use]
    pub fn aspect(self, x: Range, y: Range) -> Option<f64> {
        match self.try_aspect(x, y) {
            Ok(aspect) => aspect,
            Err(diagnostic) => {
                warn!("no aspect ratio for x={x:?}, y={y:?}: {diagnostic} - falling back to auto sizing");
                None
            }
        }
    }
}

/// The Mercator approximation: y/x span ratio, rescaled by the quotient of
/// per-degree ground distances at the range center.
fn fast_geographic_aspect(x: Range, y: Range) -> Result<f64, Error> {
    if x.is_degenerate() {
        return Err(Error::InvalidRange("zero-width longitude range"));
    }

    let (cx, cy) = (x.midpoint(), y.midpoint());
    if cy.abs() > 90. - POLE_MARGIN {
        return Err(Error::OutOfDomain("range center too close to a pole"));
    }
    if y.is_degenerate() {
        warn!("zero-height latitude range y={y:?} collapses the panel to aspect 0");
    }

    // Ground distance spanned by one degree of longitude, and one degree
    // of latitude, both at the range center
    let x_dist = central_angle(GeoPoint::gis(cx - 0.5, cy), GeoPoint::gis(cx + 0.5, cy));
    let y_dist = central_angle(GeoPoint::gis(cx, cy - 0.5), GeoPoint::gis(cx, cy + 0.5));

    Ok(y.span() / x.span() * (y_dist / x_dist))
}

/// A caller-constructed coordinate system: the variant to dispatch on,
/// plus optional explicit axis limits. A limit, where given, replaces the
/// trained range of its axis before the aspect computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinateSystem {
    sys: CoordSys,
    xlim: Option<Range>,
    ylim: Option<Range>,
}

impl CoordinateSystem {
    #[must_use]
    pub fn new(sys: CoordSys) -> CoordinateSystem {
        CoordinateSystem {
            sys,
            xlim: None,
            ylim: None,
        }
    }

    /// Override the trained x range with explicit limits, in degrees
    #[must_use]
    pub fn with_xlim(mut self, min: f64, max: f64) -> CoordinateSystem {
        self.xlim = Some(Range::new(min, max));
        self
    }

    /// Override the trained y range with explicit limits, in degrees
    #[must_use]
    pub fn with_ylim(mut self, min: f64, max: f64) -> CoordinateSystem {
        self.ylim = Some(Range::new(min, max));
        self
    }

    #[must_use]
    pub fn sys(&self) -> CoordSys {
        self.sys
    }

    /// The panel height/width scale factor for one render pass, with any
    /// explicit limits substituted for the trained ranges. `None` means
    /// the pipeline should fall back to its default auto-sizing.
    #[must_use]
    pub fn aspect_ratio(&self, trained_x: Range, trained_y: Range) -> Option<f64> {
        let x = self.xlim.unwrap_or(trained_x);
        let y = self.ylim.unwrap_or(trained_y);
        self.sys.aspect(x, y)
    }
}

// ----- T e s t s ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn cartesian_forces_nothing() -> Result<(), Error> {
        let x = Range::new(0., 360.);
        let y = Range::new(-90., 90.);
        assert_eq!(CoordSys::Cartesian.try_aspect(x, y)?, None);
        assert_eq!(CoordSys::Cartesian.aspect(x, y), None);

        // ...even for input FastGeographic would reject
        let degenerate = Range::new(5., 5.);
        assert_eq!(CoordSys::Cartesian.try_aspect(degenerate, y)?, None);
        Ok(())
    }

    #[test]
    fn true_projection_forces_nothing() -> Result<(), Error> {
        let x = Range::new(0., 10.);
        let y = Range::new(50., 60.);
        assert_eq!(CoordSys::TrueProjection.try_aspect(x, y)?, None);
        Ok(())
    }

    #[test]
    fn unit_square_at_equator() {
        // x.dist and y.dist are near-identical at the equator, so a square
        // extent keeps a square panel
        let aspect = CoordSys::FastGeographic
            .aspect(Range::new(0., 1.), Range::new(0., 1.))
            .unwrap();
        assert_float_eq!(aspect, 1., abs <= 0.01);
    }

    #[test]
    fn high_latitude_stretches_the_panel() {
        // At 60.5°N a degree of longitude covers cos(60.5°) of the ground a
        // degree of latitude does, so the local ratio is its reciprocal
        let aspect = CoordSys::FastGeographic
            .aspect(Range::new(170., 171.), Range::new(60., 61.))
            .unwrap();
        assert_float_eq!(aspect, 1. / 60.5f64.to_radians().cos(), abs <= 0.01);
        assert_float_eq!(aspect, 2.0, abs <= 0.1);
    }

    #[test]
    fn span_ratio_scales_linearly() {
        // Doubling the latitude span doubles the aspect, the local ratio
        // at the (unchanged) center latitude notwithstanding
        let narrow = CoordSys::FastGeographic
            .aspect(Range::new(10., 12.), Range::new(54.5, 55.5))
            .unwrap();
        let tall = CoordSys::FastGeographic
            .aspect(Range::new(10., 12.), Range::new(54., 56.))
            .unwrap();
        assert_float_eq!(tall, 2. * narrow, rmax <= 1e-3);
    }

    #[test]
    fn zero_width_is_invalid() {
        let x = Range::new(5., 5.);
        let y = Range::new(0., 10.);
        assert_eq!(
            CoordSys::FastGeographic.try_aspect(x, y),
            Err(Error::InvalidRange("zero-width longitude range"))
        );

        // The pipeline surface never leaks the infinity
        assert_eq!(CoordSys::FastGeographic.aspect(x, y), None);
    }

    #[test]
    fn zero_height_collapses_to_zero() -> Result<(), Error> {
        let aspect = CoordSys::FastGeographic
            .try_aspect(Range::new(0., 10.), Range::new(45., 45.))?
            .unwrap();
        assert_eq!(aspect, 0.);
        Ok(())
    }

    #[test]
    fn polar_center_is_out_of_domain() {
        let x = Range::new(0., 10.);
        for y in [Range::new(89.2, 89.9), Range::new(-90., -89.2)] {
            assert_eq!(
                CoordSys::FastGeographic.try_aspect(x, y),
                Err(Error::OutOfDomain("range center too close to a pole"))
            );
            assert_eq!(CoordSys::FastGeographic.aspect(x, y), None);
        }

        // Just inside the margin the result is large, but finite
        let aspect = CoordSys::FastGeographic
            .aspect(x, Range::new(89., 89.9))
            .unwrap();
        assert!(aspect.is_finite());
    }

    #[test]
    fn idempotent() {
        let x = Range::new(-10.3, 27.9);
        let y = Range::new(33.1, 71.2);
        let first = CoordSys::FastGeographic.aspect(x, y).unwrap();
        let second = CoordSys::FastGeographic.aspect(x, y).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn explicit_limits_override_trained_ranges() {
        let trained_x = Range::new(0., 120.);
        let trained_y = Range::new(-60., 80.);

        let plain = CoordinateSystem::new(CoordSys::FastGeographic);
        let limited = plain.with_xlim(170., 171.).with_ylim(60., 61.);

        let expected = CoordSys::FastGeographic
            .aspect(Range::new(170., 171.), Range::new(60., 61.))
            .unwrap();
        assert_eq!(
            limited.aspect_ratio(trained_x, trained_y),
            Some(expected)
        );

        // Without limits, the trained ranges rule
        assert_eq!(
            plain.aspect_ratio(trained_x, trained_y),
            CoordSys::FastGeographic.aspect(trained_x, trained_y)
        );
    }
}
