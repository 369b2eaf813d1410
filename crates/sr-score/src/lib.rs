//! `sr-score` — incident-exposure scoring and ranking of route alternatives.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`scorer`]   | `score_route`, `SafetyAnalysis`, `RiskTier`, constants    |
//! | [`describe`] | Rationale text generation                                 |
//! | [`rank`]     | `ScoredRoute`, safety-first/duration-near-tie ordering    |
//! | [`batch`]    | `score_and_rank` over a whole alternative set             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Scores route alternatives on Rayon worker threads.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod batch;
pub mod describe;
pub mod rank;
pub mod scorer;


pub use batch::score_and_rank;
pub use describe::describe;
pub use rank::{rank, ScoredRoute, NEAR_TIE_WINDOW};
pub use scorer::{
    score_route, HighRiskSegment, RiskTier, SafetyAnalysis, DEFAULT_PROXIMITY_KM,
    HIGH_RISK_MIN_INCIDENTS,
};
