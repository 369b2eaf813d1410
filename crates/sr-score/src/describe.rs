//! Human-readable rationale for a safety analysis.

use crate::scorer::SafetyAnalysis;

/// One fixed template per score bracket (≥85, ≥70, ≥50, below), with the
/// near-incident count and high-risk-segment count interpolated.  Purely
/// derived from the analysis; no side effects.
pub fn describe(analysis: &SafetyAnalysis) -> String {
    let near = analysis.incidents_near;
    let hot = analysis.high_risk_segments.len();

    if analysis.score >= 85 {
        format!(
            "This route is very safe with minimal incident activity. \
             Only {near} incident(s) reported nearby. Recommended for all times."
        )
    } else if analysis.score >= 70 {
        let caution = if hot > 0 {
            format!("Be cautious in {hot} area(s).")
        } else {
            "Generally safe for travel.".to_string()
        };
        format!("This route is relatively safe with {near} incident(s) nearby. {caution}")
    } else if analysis.score >= 50 {
        let segments = if hot > 0 {
            format!("{hot} high-risk segment(s) identified. ")
        } else {
            String::new()
        };
        format!(
            "This route passes through {near} incident-prone area(s). \
             {segments}Consider alternative routes if possible."
        )
    } else {
        format!(
            "This route has significant safety concerns with {near} incidents nearby \
             and {hot} high-risk area(s). Not recommended, especially at night."
        )
    }
}
