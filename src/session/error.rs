//! Session construction and transition errors.

use crate::core::CodeError;
use thiserror::Error;

/// Errors that can occur when building a session or applying an action.
///
/// A transition that fails leaves the session untouched: the error is
/// raised before any new state is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("Alphabet not specified. Call .alphabet(alphabet) before .build()")]
    MissingAlphabet,

    #[error("Secret code not specified. Call .code(code) before .build()")]
    MissingCode,

    #[error("Session failed validation with {} violation(s): {}", .0.len(), join(.0))]
    Invalid(Vec<CodeError>),

    #[error("History holds {guesses} guesses but {scores} scores")]
    HistoryMismatch { guesses: usize, scores: usize },
}

fn join(errors: &[CodeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
