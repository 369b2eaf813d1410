//! Geographic coordinate type and route-proximity geometry.
//!
//! `Coord` uses `f64` latitude/longitude.  Safety scores are compared across
//! route alternatives downstream, so the distance math runs in double
//! precision end to end — halving to `f32` shifts rounded scores near
//! bracket boundaries.
//!
//! The point-to-segment projection is deliberately planar: it treats degrees
//! as Cartesian coordinates for the projection step and only converts the
//! clamped nearest point back through the spherical [`Coord::distance_km`].
//! At city-block scale the error is negligible, and every downstream score
//! depends on this exact formulation.  Do not replace it with exact
//! spherical segment geometry.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Total over all finite inputs, symmetric, and zero exactly when both
    /// points are bitwise equal.
    pub fn distance_km(self, other: Coord) -> f64 {
        const R: f64 = 6371.0; // mean Earth radius, km

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Minimum distance in kilometres from `self` to the segment `a`→`b`.
    ///
    /// Projects onto the infinite line in (lat, lon) degree space, clamps
    /// the parameter to [0, 1] so the nearest point stays on the segment,
    /// then measures the spherical distance to that point.  A degenerate
    /// segment (`a == b`) uses `a` as the nearest point.
    pub fn distance_to_segment_km(self, a: Coord, b: Coord) -> f64 {
        let ap_lat = self.lat - a.lat;
        let ap_lon = self.lon - a.lon;
        let ab_lat = b.lat - a.lat;
        let ab_lon = b.lon - a.lon;

        let dot = ap_lat * ab_lat + ap_lon * ab_lon;
        let len_sq = ab_lat * ab_lat + ab_lon * ab_lon;

        // -1.0 forces the param-<-0 branch for zero-length segments.
        let t = if len_sq != 0.0 { dot / len_sq } else { -1.0 };

        let nearest = if t < 0.0 {
            a
        } else if t > 1.0 {
            b
        } else {
            Coord::new(a.lat + t * ab_lat, a.lon + t * ab_lon)
        };

        self.distance_km(nearest)
    }

    /// Minimum distance in kilometres from `self` to a polyline, scanning
    /// every consecutive coordinate pair.
    ///
    /// A polyline with fewer than 2 points has no segments and returns
    /// `f64::INFINITY`: nothing is ever "near" a degenerate route.
    pub fn min_distance_to_polyline_km(self, coords: &[Coord]) -> f64 {
        let mut min = f64::INFINITY;
        for pair in coords.windows(2) {
            let d = self.distance_to_segment_km(pair[0], pair[1]);
            min = min.min(d);
        }
        min
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
