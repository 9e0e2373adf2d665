//! Precondition errors for codes, colors, and scoring.

use thiserror::Error;

/// Errors raised when a caller hands the core malformed data.
///
/// These are programmer errors from the collaborator building codes and
/// guesses. They are reported instead of clamped, since clamping would
/// silently corrupt score semantics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Code has {code} colors but guess has {guess}")]
    LengthMismatch { code: usize, guess: usize },

    #[error("Alphabet must contain at least one color")]
    EmptyAlphabet,

    #[error("Alphabet of {size} colors exceeds the maximum of {max}")]
    AlphabetTooLarge { size: usize, max: usize },

    #[error("Position {position} is out of range for a sequence of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Color {color} at position {position} is outside an alphabet of {size} colors")]
    ColorOutOfRange {
        position: usize,
        color: u8,
        size: usize,
    },
}
