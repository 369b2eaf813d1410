//! `sr-ingest` — incident-store loading.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`loader`] | `load_incidents_csv`, `load_incidents_reader`   |
//! | [`error`]  | `IngestError`, `IngestResult`                   |

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{IngestError, IngestResult};
pub use loader::{load_incidents_csv, load_incidents_reader};
