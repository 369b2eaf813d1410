//! Unit tests for the CSV incident loader.

use std::io::Cursor;

use sr_core::{IncidentId, TimeOfDay};

use crate::{load_incidents_reader, IngestError};

const HEADER: &str = "id,lat,lon,category,time_of_day,severity,location_name,date\n";

fn load(rows: &str) -> Result<Vec<sr_core::Incident>, IngestError> {
    load_incidents_reader(Cursor::new(format!("{HEADER}{rows}")))
}

#[test]
fn loads_well_formed_rows() {
    let incidents = load(
        "1,23.7104,90.4074,Mugging,Night,9,Sadarghat,2025-11-10\n\
         2,23.7808,90.4142,Theft,Day,5,Gulshan 1,2025-11-08\n",
    )
    .unwrap();

    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0].id, IncidentId(1));
    assert_eq!(incidents[0].time_of_day, TimeOfDay::Night);
    assert_eq!(incidents[0].severity, 9);
    assert_eq!(incidents[0].position.lat, 23.7104);
    assert_eq!(incidents[1].category, "Theft");
    assert_eq!(incidents[1].location_name, "Gulshan 1");
}

#[test]
fn empty_file_is_empty_store() {
    assert!(load("").unwrap().is_empty());
}

#[test]
fn rejects_non_finite_latitude() {
    let err = load("7,NaN,90.0,Theft,Day,5,Somewhere,2025-11-01\n").unwrap_err();
    match err {
        IngestError::Invalid { id: 7, reason } => assert!(reason.contains("latitude")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_out_of_range_longitude() {
    let err = load("8,23.7,190.0,Theft,Day,5,Somewhere,2025-11-01\n").unwrap_err();
    match err {
        IngestError::Invalid { id: 8, reason } => assert!(reason.contains("longitude")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_severity_outside_convention() {
    for bad in ["0", "11"] {
        let err = load(&format!("9,23.7,90.0,Theft,Day,{bad},Somewhere,2025-11-01\n"))
            .unwrap_err();
        match err {
            IngestError::Invalid { id: 9, reason } => assert!(reason.contains("severity")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn rejects_unknown_time_of_day() {
    let err = load("10,23.7,90.0,Theft,Dusk,5,Somewhere,2025-11-01\n").unwrap_err();
    match err {
        IngestError::Invalid { id: 10, reason } => assert!(reason.contains("Dusk")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_malformed_csv() {
    let err = load("not,even,close\n").unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)));
}
