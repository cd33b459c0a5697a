//! Spherical distance computation: the great-circle central angle between
//! two points, on a spherical earth model. The sphere is deliberate - the
//! aspect resolver only ever consumes a *ratio* of two such angles, so
//! ellipsoidal refinement would buy nothing but trig evaluations.

use crate::coord::GeoPoint;

/// Great-circle central angle between two points on the unit sphere,
/// in radians.
///
/// Callers may treat the result as a relative ground distance; multiply by
/// an earth radius for an absolute one. Uses the spherical law of cosines,
///
/// ```text
/// cos θ = sin φ1 sin φ2 + cos φ1 cos φ2 cos Δλ
/// ```
///
/// which is simple and adequate for the small, well-conditioned
/// separations the aspect resolver feeds it. Near-antipodal cancellation
/// is a non-issue there; callers who do operate at tiny separations and
/// need the extra conditioning should use [`haversine`] instead.
///
/// Identical points give exactly 0, antipodal points exactly π. Longitude
/// wrap at ±180 needs no special handling: the cosine of Δλ is periodic.
#[must_use]
pub fn central_angle(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.lat().to_radians();
    let phi_2 = to.lat().to_radians();
    let dlon = (to.lon() - from.lon()).to_radians();

    let cosine = phi_1.sin() * phi_2.sin() + phi_1.cos() * phi_2.cos() * dlon.cos();

    // Rounding may push the cosine marginally outside [-1, 1], and acos
    // turns that into NaN. Clamp before inverting.
    cosine.clamp(-1., 1.).acos()
}

/// Great-circle central angle by the haversine formulation, in radians.
///
/// Algebraically identical to [`central_angle`], but conditioned for tiny
/// separations, where the law of cosines loses precision to cancellation.
/// In exchange it degrades near antipodal points. The aspect resolver does
/// not use it; it is provided for pipeline code measuring point-to-point
/// distances.
#[must_use]
pub fn haversine(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.lat().to_radians();
    let phi_2 = to.lat().to_radians();
    let dphi = phi_2 - phi_1;
    let dlon = (to.lon() - from.lon()).to_radians();

    let h = (dphi / 2.).sin().powi(2) + phi_1.cos() * phi_2.cos() * (dlon / 2.).sin().powi(2);
    2. * h.sqrt().min(1.).asin()
}

// ----- T e s t s ---------------------------------------------------------------------
