//! Configuration errors.

use crate::core::CodeError;
use crate::session::SessionError;
use thiserror::Error;

/// A single problem with a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Code length must be at least 1")]
    ZeroCodeLength,

    #[error("Alphabet size must be at least 1")]
    EmptyAlphabet,

    #[error("Alphabet size {size} exceeds the maximum of {max}")]
    AlphabetTooLarge { size: usize, max: usize },
}

/// Errors that can occur while loading a configuration or starting a game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config has {} violation(s): {:?}", .0.len(), .0)]
    Invalid(Vec<ConfigViolation>),

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
