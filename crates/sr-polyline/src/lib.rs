//! `sr-polyline` — Encoded Polyline Algorithm codec.
//!
//! Directions providers ship route geometry as a compact ASCII string:
//! each coordinate is a signed delta from the previous one, scaled by 1e5,
//! zigzag-encoded, split into 5-bit groups (low group first, 0x20
//! continuation bit), and offset by 63 into the printable range.  This
//! crate decodes that wire format into a flat [`Coord`] list and encodes
//! the reverse direction; the scoring engine itself only ever sees the
//! decoded coordinates.
//!
//! Round-trip fidelity (`decode(encode(coords)) == coords` at 1e-5 degree
//! resolution) is a tested property of this crate.

use sr_core::Coord;

pub mod error;


pub use error::{PolylineError, PolylineResult};

const SCALE: f64 = 1e5;
/// ASCII offset applied to every 5-bit group.
const OFFSET: u8 = 63;
/// Continuation bit: more 5-bit groups follow.
const CONT: u32 = 0x20;

// ── Decode ────────────────────────────────────────────────────────────────────

/// Decode an encoded polyline into coordinates.
///
/// Rejects bytes outside the encoding alphabet and strings that end in the
/// middle of a value.  An empty string decodes to an empty list.
pub fn decode(encoded: &str) -> PolylineResult<Vec<Coord>> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut at = 0;
    let mut lat = 0_i32;
    let mut lon = 0_i32;

    while at < bytes.len() {
        lat = lat.wrapping_add(next_delta(bytes, &mut at)?);
        lon = lon.wrapping_add(next_delta(bytes, &mut at)?);
        coords.push(Coord::new(f64::from(lat) / SCALE, f64::from(lon) / SCALE));
    }

    Ok(coords)
}

/// Read one zigzag-encoded delta starting at `*at`, advancing the cursor.
fn next_delta(bytes: &[u8], at: &mut usize) -> PolylineResult<i32> {
    let start = *at;
    let mut result = 0_u32;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*at) else {
            return Err(PolylineError::Truncated(start));
        };
        if !(OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte { byte, at: *at });
        }
        if shift >= 32 {
            return Err(PolylineError::Overflow(start));
        }
        *at += 1;

        let group = u32::from(byte - OFFSET);
        result |= (group & 0x1f) << shift;
        shift += 5;

        if group < CONT {
            break;
        }
    }

    // Undo zigzag: LSB is the sign, remaining bits the magnitude.
    Ok(if result & 1 == 1 {
        !(result >> 1) as i32
    } else {
        (result >> 1) as i32
    })
}

// ── Encode ────────────────────────────────────────────────────────────────────

/// Encode coordinates into the polyline wire format.
///
/// Coordinates are rounded to 1e-5 degrees, the format's resolution.
pub fn encode(coords: &[Coord]) -> String {
    let mut out = String::with_capacity(coords.len() * 4);
    let mut prev_lat = 0_i32;
    let mut prev_lon = 0_i32;

    for c in coords {
        let lat = (c.lat * SCALE).round() as i32;
        let lon = (c.lon * SCALE).round() as i32;
        push_delta(&mut out, lat - prev_lat);
        push_delta(&mut out, lon - prev_lon);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn push_delta(out: &mut String, delta: i32) {
    // Zigzag: left-shift, invert when negative so the LSB carries the sign.
    let mut v = if delta < 0 {
        !((delta as u32) << 1)
    } else {
        (delta as u32) << 1
    };

    while v >= CONT {
        out.push(char::from((((v & 0x1f) | CONT) as u8) + OFFSET));
        v >>= 5;
    }
    out.push(char::from(v as u8 + OFFSET));
}
