//! Session state machine.
//!
//! A session holds the hidden code, the player's in-progress guess, and
//! the history of submitted guesses with their scores.
//!
//! # Key Concepts
//!
//! - **Actions**: A closed set of intents (`SetGuess`, `CycleColor`,
//!   `SubmitGuess`), plus an explicit no-op for anything unrecognized
//! - **Transitions**: `transition(&session, &action)` is a pure function
//!   producing the next session; earlier snapshots stay valid
//! - **History**: Guesses and scores grow together, one entry per
//!   submission, so their lengths always agree
//!
//! The session never ends itself. A perfect score is reported by
//! [`Session::is_solved`], but further actions are still accepted.

mod action;
mod builder;
mod error;
mod history;
mod state;
mod transition;

pub use action::Action;
pub use builder::SessionBuilder;
pub use error::SessionError;
pub use history::GuessHistory;
pub use state::Session;
pub use transition::{cycle_color, replay, transition};
