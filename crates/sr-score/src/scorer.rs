//! Per-route safety scoring.
//!
//! # Algorithm
//!
//! For every incident, the minimum distance to the route polyline is
//! computed.  Incidents farther than the proximity threshold are ignored
//! entirely.  Each near incident contributes
//!
//! ```text
//! (1 - d/threshold) * (severity/10) * time_weight * 10
//! ```
//!
//! so a max-severity night incident sitting directly on the route is worth
//! 15 points of risk.  The aggregate penalty is half the total contribution,
//! hard-capped at 80 so incident density alone can never drive a score
//! below 20; segments that attract 3 or more incidents cost a further flat
//! 5 points each.
//!
//! Scoring is a pure function of its inputs: no state survives a call, and
//! the same route/incident pair always yields the same analysis.

use rustc_hash::FxHashMap;

use sr_core::{Coord, Incident};

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Default proximity threshold: incidents within 500 m count.
pub const DEFAULT_PROXIMITY_KM: f64 = 0.5;

/// A segment becomes high-risk once this many incidents pick it as their
/// closest segment.
pub const HIGH_RISK_MIN_INCIDENTS: u32 = 3;

/// Flat score deduction per high-risk segment.
pub const HIGH_RISK_SEGMENT_PENALTY: f64 = 5.0;

/// Total risk contribution is scaled by this factor before deduction.
pub const RISK_PENALTY_SCALE: f64 = 0.5;

/// Cap on the incident-density penalty.
pub const MAX_RISK_PENALTY: f64 = 80.0;

// ── Output types ──────────────────────────────────────────────────────────────

/// Coarse risk bucket derived from the safety score via fixed thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Tier for a rounded safety score: ≥75 Low, ≥50 Medium, else High.
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            RiskTier::Low
        } else if score >= 50 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        })
    }
}

/// A route segment that 3+ near incidents picked as their closest segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighRiskSegment {
    /// Starting coordinate of the segment, for map markers.
    pub start:          Coord,
    /// Number of near incidents attributed to this segment.
    pub incident_count: u32,
}

/// The result of scoring one route against the incident set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyAnalysis {
    /// 0–100, 100 = safest.
    pub score:              u8,
    pub tier:               RiskTier,
    /// Incidents within the proximity threshold of the route.
    pub incidents_near:     u32,
    /// High-risk segments in ascending segment-index order.
    pub high_risk_segments: Vec<HighRiskSegment>,
}

impl SafetyAnalysis {
    /// Analysis of a route with no incident exposure at all.
    pub fn pristine() -> Self {
        SafetyAnalysis {
            score:              100,
            tier:               RiskTier::Low,
            incidents_near:     0,
            high_risk_segments: Vec::new(),
        }
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score a route polyline against an incident collection.
///
/// `coords` with fewer than 2 points has no segments; every incident is then
/// infinitely far away and the route scores a perfect 100.  Callers that
/// consider such input malformed should reject it up front via
/// `Route::validate` rather than rely on this default-safe behavior.
pub fn score_route(
    coords: &[Coord],
    incidents: &[Incident],
    threshold_km: f64,
) -> SafetyAnalysis {
    let mut total_risk = 0.0_f64;
    let mut incidents_near = 0_u32;
    // Closest-segment tally, local to this call.
    let mut segment_tally: FxHashMap<usize, u32> = FxHashMap::default();

    for incident in incidents {
        let d = incident.position.min_distance_to_polyline_km(coords);
        if d > threshold_km {
            continue;
        }
        incidents_near += 1;

        // Closer, more severe, and nighttime incidents contribute more.
        let distance_factor = 1.0 - d / threshold_km; // 1 at the route, 0 at the threshold
        let severity_factor = f64::from(incident.severity) / 10.0;
        let time_weight = incident.time_of_day.risk_weight();
        total_risk += distance_factor * severity_factor * time_weight * 10.0;

        if let Some(seg) = closest_segment(incident.position, coords) {
            *segment_tally.entry(seg).or_insert(0) += 1;
        }
    }

    // Segments with 3+ attributed incidents, in ascending index order.
    let mut hot: Vec<(usize, u32)> = segment_tally
        .into_iter()
        .filter(|&(_, count)| count >= HIGH_RISK_MIN_INCIDENTS)
        .collect();
    hot.sort_unstable_by_key(|&(seg, _)| seg);

    let high_risk_segments: Vec<HighRiskSegment> = hot
        .into_iter()
        .map(|(seg, count)| HighRiskSegment {
            start:          coords[seg],
            incident_count: count,
        })
        .collect();

    // Start from 100 and deduct: capped density penalty, then a flat
    // per-high-risk-segment penalty, flooring at 0 after each step.
    let avg_risk = if incidents_near > 0 {
        total_risk / f64::from(incidents_near)
    } else {
        0.0
    };
    let risk_penalty =
        (avg_risk * f64::from(incidents_near) * RISK_PENALTY_SCALE).min(MAX_RISK_PENALTY);

    let mut score = (100.0 - risk_penalty).max(0.0);
    score = (score - high_risk_segments.len() as f64 * HIGH_RISK_SEGMENT_PENALTY).max(0.0);
    let score = score.round() as u8;

    SafetyAnalysis {
        score,
        tier: RiskTier::from_score(score),
        incidents_near,
        high_risk_segments,
    }
}

/// Index of the segment closest to `point`, or `None` for a degenerate
/// polyline.  Ties resolve to the lowest index (strict `<` comparison).
fn closest_segment(point: Coord, coords: &[Coord]) -> Option<usize> {
    let mut closest = None;
    let mut min_d = f64::INFINITY;
    for (i, pair) in coords.windows(2).enumerate() {
        let d = point.distance_to_segment_km(pair[0], pair[1]);
        if d < min_d {
            min_d = d;
            closest = Some(i);
        }
    }
    closest
}
