//! Safety-first ordering of scored route alternatives.

use std::cmp::Ordering;

use sr_core::Route;

use crate::scorer::SafetyAnalysis;

/// Score difference (points) within which two routes count as a near-tie
/// and duration decides instead of score.
pub const NEAR_TIE_WINDOW: i32 = 10;

/// A route bundled with its analysis and generated rationale — the unit the
/// ranker orders and the display layer consumes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRoute {
    pub route:       Route,
    pub analysis:    SafetyAnalysis,
    pub description: String,
}

/// Pairwise ranking rule: higher safety score first, unless the two scores
/// are within [`NEAR_TIE_WINDOW`] points of each other — then the faster
/// route wins.
pub fn compare(a: &ScoredRoute, b: &ScoredRoute) -> Ordering {
    let diff = i32::from(a.analysis.score) - i32::from(b.analysis.score);
    if diff.abs() > NEAR_TIE_WINDOW {
        b.analysis.score.cmp(&a.analysis.score)
    } else {
        a.route.duration_secs.cmp(&b.route.duration_secs)
    }
}

/// Order route alternatives safest-first with the near-tie duration rule.
///
/// The near-tie rule is not transitive (A can out-score B by 11 while both
/// near-tie C), so the contract of a comparison sort does not hold.  A
/// stable insertion pass leaves every adjacent pair ordered under
/// [`compare`], which also makes `rank` a fixed point: ranking its own
/// output changes nothing.  Route alternative sets are a handful of
/// entries, so the quadratic pass is irrelevant.
pub fn rank(mut routes: Vec<ScoredRoute>) -> Vec<ScoredRoute> {
    for i in 1..routes.len() {
        let mut j = i;
        while j > 0 && compare(&routes[j - 1], &routes[j]) == Ordering::Greater {
            routes.swap(j - 1, j);
            j -= 1;
        }
    }
    routes
}
