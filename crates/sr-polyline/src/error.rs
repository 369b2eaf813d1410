//! Polyline codec error type.

use thiserror::Error;

/// Errors produced while decoding an encoded polyline string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    /// A byte outside the printable encoding alphabet (ASCII 63–126).
    #[error("invalid polyline byte {byte:#04x} at offset {at}")]
    InvalidByte { byte: u8, at: usize },

    /// The string ended in the middle of a varint group.
    #[error("polyline truncated mid-value at offset {0}")]
    Truncated(usize),

    /// A value carried more 5-bit groups than fit in 32 bits.
    #[error("polyline value overflows 32 bits at offset {0}")]
    Overflow(usize),
}

pub type PolylineResult<T> = Result<T, PolylineError>;
