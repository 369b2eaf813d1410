//! dhaka — route safety scoring demo over a Dhaka incident data set.
//!
//! Scores three alternatives from Mirpur 10 to Gulshan 2 / Dhanmondi to
//! Motijheel against 30 reported incidents, then prints the ranked set.
//! Two routes are hand-laid coordinate lists; the third arrives as an
//! encoded polyline, the way a directions provider would ship it.

use std::io::Cursor;

use anyhow::{Context, Result};

use sr_core::{Coord, Route, RouteId};
use sr_ingest::load_incidents_reader;
use sr_score::{score_and_rank, DEFAULT_PROXIMITY_KM};

const INCIDENTS_CSV: &str = include_str!("../data/incidents.csv");

/// Dhanmondi 27 → Motijheel via Shahbagh, as a provider wire polyline.
const DIRECT_POLYLINE: &str = "c||oCwerfPzEgc@vQg^vQg^nKg^nKg^fEg^bBg^bBwj@";

fn mirpur_routes() -> Vec<Route> {
    // Mirpur 10 → Gulshan 2, straight through Mirpur 11/12.
    let fastest = Route {
        id:            RouteId(1),
        name:          "Fastest, Higher Risk".into(),
        coords:        vec![
            Coord::new(23.8223, 90.3654),
            Coord::new(23.8150, 90.3700),
            Coord::new(23.8100, 90.3720),
            Coord::new(23.8050, 90.3750),
            Coord::new(23.8000, 90.3800),
            Coord::new(23.7950, 90.3850),
            Coord::new(23.7900, 90.3900),
            Coord::new(23.7875, 90.3950),
            Coord::new(23.7890, 90.4000),
            Coord::new(23.7920, 90.4050),
            Coord::new(23.7925, 90.4077),
        ],
        distance_text: "8.5 km".into(),
        duration_text: "22 mins".into(),
        distance_m:    8_500,
        duration_secs: 1_320,
    };

    // Same endpoints, detouring north through the quieter Uttara sectors.
    let detour = Route {
        id:            RouteId(2),
        name:          "Safer, Slightly Longer".into(),
        coords:        vec![
            Coord::new(23.8223, 90.3654),
            Coord::new(23.8300, 90.3700),
            Coord::new(23.8400, 90.3750),
            Coord::new(23.8500, 90.3800),
            Coord::new(23.8600, 90.3850),
            Coord::new(23.8650, 90.3900),
            Coord::new(23.8600, 90.3950),
            Coord::new(23.8500, 90.4000),
            Coord::new(23.8350, 90.4050),
            Coord::new(23.8200, 90.4100),
            Coord::new(23.8100, 90.4120),
            Coord::new(23.8000, 90.4100),
            Coord::new(23.7925, 90.4077),
        ],
        distance_text: "10.2 km".into(),
        duration_text: "28 mins".into(),
        distance_m:    10_200,
        duration_secs: 1_680,
    };

    vec![fastest, detour]
}

fn main() -> Result<()> {
    let incidents = load_incidents_reader(Cursor::new(INCIDENTS_CSV))
        .context("loading bundled incident data")?;
    println!("Loaded {} incidents.", incidents.len());

    let mut routes = mirpur_routes();

    let direct_coords =
        sr_polyline::decode(DIRECT_POLYLINE).context("decoding provider polyline")?;
    routes.push(Route {
        id:            RouteId(3),
        name:          "Direct via Shahbagh".into(),
        coords:        direct_coords,
        distance_text: "6.8 km".into(),
        duration_text: "18 mins".into(),
        distance_m:    6_800,
        duration_secs: 1_080,
    });

    for route in &routes {
        route
            .validate()
            .with_context(|| format!("route {:?} failed validation", route.name))?;
    }

    let ranked = score_and_rank(routes, &incidents, DEFAULT_PROXIMITY_KM);

    println!();
    for (pos, r) in ranked.iter().enumerate() {
        println!(
            "{}. {} — score {} ({}), {} incident(s) near, {} high-risk segment(s), {} / {}",
            pos + 1,
            r.route.name,
            r.analysis.score,
            r.analysis.tier,
            r.analysis.incidents_near,
            r.analysis.high_risk_segments.len(),
            r.route.distance_text,
            r.route.duration_text,
        );
        println!("   {}", r.description);
        for seg in &r.analysis.high_risk_segments {
            println!(
                "   high-risk segment at {} ({} incidents)",
                seg.start, seg.incident_count
            );
        }
    }

    Ok(())
}
