//! Route alternative as supplied by the directions provider.

use crate::error::{CoreError, CoreResult};
use crate::geo::Coord;
use crate::ids::RouteId;

/// One candidate route: an ordered coordinate sequence plus pass-through
/// metadata from the directions provider.
///
/// The coordinate sequence is already decoded from the provider's wire
/// polyline (see `sr-polyline`).  Distance/duration fields are carried
/// through unchanged — the scorer never recomputes them, and the ranker
/// only reads `duration_secs`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id:            RouteId,
    /// Display name, e.g. the provider's route summary.
    pub name:          String,
    pub coords:        Vec<Coord>,
    /// Provider's formatted distance, e.g. "8.2 km".
    pub distance_text: String,
    /// Provider's formatted duration, e.g. "24 mins".
    pub duration_text: String,
    pub distance_m:    u32,
    pub duration_secs: u32,
}

impl Route {
    /// Number of scorable segments: consecutive coordinate pairs.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Reject routes with fewer than 2 coordinates.
    ///
    /// The scorer itself treats such routes as infinitely far from every
    /// incident, which scores them as perfectly safe.  Callers that would
    /// rather surface the data-quality problem call this at the boundary.
    pub fn validate(&self) -> CoreResult<()> {
        if self.coords.len() < 2 {
            return Err(CoreError::DegenerateRoute(self.id, self.coords.len()));
        }
        Ok(())
    }
}
