//! CSV incident loader.
//!
//! # CSV format
//!
//! One row per reported incident:
//!
//! ```csv
//! id,lat,lon,category,time_of_day,severity,location_name,date
//! 1,23.7104,90.4074,Mugging,Night,9,Sadarghat,2025-11-10
//! 2,23.7165,90.4080,Robbery,Night,8,Bangshal,2025-11-09
//! ```
//!
//! # Boundary validation
//!
//! The scorer assumes well-formed numeric input, so this loader is where
//! data quality is enforced: non-finite coordinates, latitudes outside
//! [-90, 90], longitudes outside [-180, 180], severities outside 1–10, and
//! unknown time-of-day tags are all rejected with the offending incident ID.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sr_core::{Coord, Incident, IncidentId, TimeOfDay};

use crate::error::{IngestError, IngestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct IncidentRecord {
    id:            u32,
    lat:           f64,
    lon:           f64,
    category:      String,
    time_of_day:   String,
    severity:      u8,
    location_name: String,
    date:          String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the incident collection from a CSV file.
pub fn load_incidents_csv(path: &Path) -> IngestResult<Vec<Incident>> {
    let file = std::fs::File::open(path).map_err(IngestError::Io)?;
    load_incidents_reader(file)
}

/// Like [`load_incidents_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data sets.
pub fn load_incidents_reader<R: Read>(reader: R) -> IngestResult<Vec<Incident>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut incidents = Vec::new();

    for result in csv_reader.deserialize::<IncidentRecord>() {
        let row = result.map_err(|e| IngestError::Parse(e.to_string()))?;
        incidents.push(validate(row)?);
    }

    Ok(incidents)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn validate(row: IncidentRecord) -> IngestResult<Incident> {
    let id = row.id;
    let invalid = move |reason: String| IngestError::Invalid { id, reason };

    if !row.lat.is_finite() || !(-90.0..=90.0).contains(&row.lat) {
        return Err(invalid(format!("latitude {} out of range [-90, 90]", row.lat)));
    }
    if !row.lon.is_finite() || !(-180.0..=180.0).contains(&row.lon) {
        return Err(invalid(format!("longitude {} out of range [-180, 180]", row.lon)));
    }
    if !(1..=10).contains(&row.severity) {
        return Err(invalid(format!("severity {} out of range 1–10", row.severity)));
    }
    let time_of_day: TimeOfDay = row
        .time_of_day
        .parse()
        .map_err(|e: sr_core::CoreError| invalid(e.to_string()))?;

    Ok(Incident {
        id: IncidentId(row.id),
        position: Coord::new(row.lat, row.lon),
        category: row.category,
        time_of_day,
        severity: row.severity,
        location_name: row.location_name,
        date: row.date,
    })
}
