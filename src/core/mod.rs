//! Core scoring types and logic.
//!
//! This module contains the pure functional core of the game:
//! - Colors and the alphabet they come from
//! - Codes (the hidden target and every guess)
//! - Bulls-and-cows scoring
//!
//! Nothing in this module has side effects or holds state.

mod code;
mod color;
mod error;
mod score;

pub use code::{Code, Guess};
pub use color::{Alphabet, Color};
pub use error::CodeError;
pub use score::{score, Score};
