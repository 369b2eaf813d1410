//! Batch scoring of route alternatives.
//!
//! Routes are scored independently of each other, so the batch path scores
//! one route per Rayon worker when the `parallel` feature is enabled and
//! joins only to rank the complete set.  There is no partial-result
//! contract: each route yields exactly one [`ScoredRoute`].

use sr_core::{Incident, Route};

use crate::describe::describe;
use crate::rank::{rank, ScoredRoute};
use crate::scorer::score_route;

/// Score one route and attach its rationale.
fn score_one(route: Route, incidents: &[Incident], threshold_km: f64) -> ScoredRoute {
    let analysis = score_route(&route.coords, incidents, threshold_km);
    let description = describe(&analysis);
    ScoredRoute { route, analysis, description }
}

/// Score every route against the incident snapshot, then rank the set
/// safest-first (near-ties broken by duration).
pub fn score_and_rank(
    routes: Vec<Route>,
    incidents: &[Incident],
    threshold_km: f64,
) -> Vec<ScoredRoute> {
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<ScoredRoute> = routes
        .into_iter()
        .map(|route| score_one(route, incidents, threshold_km))
        .collect();

    #[cfg(feature = "parallel")]
    let scored: Vec<ScoredRoute> = {
        use rayon::prelude::*;

        routes
            .into_par_iter()
            .map(|route| score_one(route, incidents, threshold_km))
            .collect()
    };

    rank(scored)
}
