//! Codebreaker: pure scoring and session logic for Mastermind-style games
//!
//! A hidden code of colors must be deduced through repeated guesses. Each
//! guess is scored by bulls (right color, right position) and cows (right
//! color, wrong position).
//!
//! The crate follows a "pure core, imperative shell" layout. Scoring and
//! session transitions are pure functions over immutable values; the
//! [`store`] module is the thin shell that owns a live session and
//! serializes dispatch.
//!
//! # Core Concepts
//!
//! - **Scoring**: [`core::score`] computes bulls and cows for a guess
//! - **Session**: [`session::Session`] holds the code, the in-progress
//!   guess, and every submitted guess with its score
//! - **Transitions**: [`session::transition`] maps a session and an
//!   [`session::Action`] to the next session
//!
//! # Example
//!
//! ```rust
//! use codebreaker::core::{Alphabet, Code, Score};
//! use codebreaker::session::{transition, Action, Session};
//!
//! let session = Session::new(Alphabet::new(5)?, Code::from(vec![1, 2, 3, 4, 0]))?;
//!
//! let session = transition(&session, &Action::SetGuess(Code::from(vec![1, 2, 3, 4, 0])))?;
//! let session = transition(&session, &Action::SubmitGuess)?;
//!
//! assert_eq!(session.scores(), &[Score::new(5, 0)]);
//! assert!(session.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::{new_game, GameConfig};
pub use self::core::{score, Alphabet, Code, CodeError, Color, Score};
pub use session::{transition, Action, Session, SessionError};
pub use store::{SessionStore, Store};
