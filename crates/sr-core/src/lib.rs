//! `sr-core` — foundational types for the saferoute scoring engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `IncidentId`, `RouteId`                               |
//! | [`geo`]      | `Coord`, haversine and point-to-polyline distance     |
//! | [`incident`] | `Incident`, `TimeOfDay`                               |
//! | [`route`]    | `Route` (coordinates + provider metadata)             |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod incident;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use ids::{IncidentId, RouteId};
pub use incident::{Incident, TimeOfDay};
pub use route::Route;
