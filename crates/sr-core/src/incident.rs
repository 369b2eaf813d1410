//! Reported-incident record and its time-of-day risk tag.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::geo::Coord;
use crate::ids::IncidentId;

/// Whether an incident was reported during the day or at night.
///
/// Night incidents carry a higher risk weight: the same event at the same
/// distance counts 1.5× toward a route's risk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// Multiplier applied to an incident's risk contribution.
    #[inline]
    pub fn risk_weight(self) -> f64 {
        match self {
            TimeOfDay::Night => 1.5,
            TimeOfDay::Day => 1.0,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Day" => Ok(TimeOfDay::Day),
            "Night" => Ok(TimeOfDay::Night),
            other => Err(CoreError::Parse(format!(
                "invalid time of day {other:?}: expected \"Day\" or \"Night\""
            ))),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        })
    }
}

/// A single geolocated incident report.
///
/// Immutable once loaded; the incident store owns the collection and the
/// scorer borrows it for the duration of one call.  Severity is 1–10 by
/// convention (10 = most severe) but is not enforced here — the ingestion
/// boundary validates, the scorer assumes well-formed input.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    pub id:            IncidentId,
    pub position:      Coord,
    /// Category label, e.g. "Mugging" or "Theft".  Free-form.
    pub category:      String,
    pub time_of_day:   TimeOfDay,
    pub severity:      u8,
    /// Human-readable place name for display, e.g. "Farmgate".
    pub location_name: String,
    /// Report date as an ISO-8601 calendar date string.
    pub date:          String,
}
