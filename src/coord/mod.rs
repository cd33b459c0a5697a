//! Value types passed between the rendering pipeline and the aspect
//! resolver. All of them are small `Copy` types, recomputed per render
//! pass; nothing here owns long-lived state.

/// A geographical position in degrees, with no earth model attached.
///
/// Longitude is conceptually unbounded and wraps at ±180; latitude is
/// expected in [-90, 90]. Neither is enforced here: the consumers are
/// cosine-based and tolerate out-of-range values, but feeding them is a
/// caller bug, not a supported feature.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint(pub [f64; 2]);

impl GeoPoint {
    /// A `GeoPoint` from longitude/latitude in degrees (GIS convention)
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> GeoPoint {
        GeoPoint([longitude, latitude])
    }

    /// A `GeoPoint` from latitude/longitude in degrees (geodesy convention)
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint([longitude, latitude])
    }

    /// Longitude, in degrees
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.0[0]
    }

    /// Latitude, in degrees
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.0[1]
    }
}

/// The trained extent of one plot axis, in degrees.
///
/// Construction normalizes the endpoint ordering, so `min <= max` holds
/// for every `Range` in circulation. A range may collapse to a point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Range {
        Range {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The extent covered, `max - min`. Never negative.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.
    }

    /// Has the range collapsed to a single point?
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.
    }
}

// ----- T e s t s ---------------------------------------------------------------------
