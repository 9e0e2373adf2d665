//! The session: one game's code, working guess, and submission history.

use super::builder::SessionBuilder;
use super::error::SessionError;
use super::history::GuessHistory;
use crate::core::{Alphabet, Code, Score};
use serde::{Deserialize, Serialize};

/// One game's accumulated state.
///
/// A session is an immutable value. Transitions produce a new session and
/// leave the previous one valid, so any earlier snapshot can still be
/// inspected, displayed, or restored.
///
/// The alphabet travels with the session as static configuration; it
/// bounds the colors a guess may hold and drives color cycling.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::session::Session;
///
/// let session = Session::builder()
///     .alphabet(Alphabet::new(5)?)
///     .code(Code::from(vec![1, 2, 3, 4, 0]))
///     .build()?;
///
/// assert_eq!(session.guess(), &Code::from(vec![0, 0, 0, 0, 0]));
/// assert_eq!(session.attempts(), 0);
/// assert!(!session.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct Session {
    pub(super) alphabet: Alphabet,
    pub(super) code: Code,
    pub(super) guess: Code,
    pub(super) history: GuessHistory,
}

#[derive(Deserialize)]
struct RawSession {
    alphabet: Alphabet,
    code: Code,
    guess: Code,
    history: GuessHistory,
}

impl TryFrom<RawSession> for Session {
    type Error = SessionError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        SessionBuilder::new()
            .alphabet(raw.alphabet)
            .code(raw.code)
            .initial_guess(raw.guess)
            .history(raw.history)
            .build()
    }
}

impl Session {
    /// Start building a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Create a session for `code` with an all-zero starting guess.
    pub fn new(alphabet: Alphabet, code: Code) -> Result<Self, SessionError> {
        SessionBuilder::new().alphabet(alphabet).code(code).build()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The hidden code.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// The in-progress guess.
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Submitted guesses in submission order.
    pub fn guesses(&self) -> &[Code] {
        self.history.guesses()
    }

    /// Scores in submission order, parallel to `guesses()`.
    pub fn scores(&self) -> &[Score] {
        self.history.scores()
    }

    /// Number of guesses submitted so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Length every guess must have.
    pub fn code_length(&self) -> usize {
        self.code.len()
    }

    /// Whether the most recent submission matched every position.
    ///
    /// This is a query only. The session keeps accepting actions after the
    /// code is cracked; ending the game is the caller's convention.
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, score)| score.is_solved(self.code.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Alphabet::new(5).unwrap(), Code::from(vec![1, 2, 3, 4, 0])).unwrap()
    }

    #[test]
    fn new_session_seeds_all_zero_guess() {
        let session = session();

        assert_eq!(session.guess(), &Code::from(vec![0, 0, 0, 0, 0]));
        assert_eq!(session.code_length(), 5);
        assert!(session.guesses().is_empty());
        assert!(session.scores().is_empty());
    }

    #[test]
    fn solved_reflects_last_score_only() {
        let mut session = session();
        session.history = session
            .history
            .record(Code::from(vec![1, 2, 3, 4, 0]), Score::new(5, 0));
        assert!(session.is_solved());

        session.history = session
            .history
            .record(Code::from(vec![0, 0, 0, 0, 0]), Score::new(1, 0));
        assert!(!session.is_solved());
    }

    #[test]
    fn session_roundtrips_through_json() {
        let session = session();
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, session);
    }

    #[test]
    fn deserialization_rejects_out_of_range_guess() {
        let json = r#"{
            "alphabet": 5,
            "code": [1, 2, 3, 4, 0],
            "guess": [5, 0, 0, 0, 0],
            "history": {"guesses": [], "scores": []}
        }"#;

        let result: Result<Session, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
