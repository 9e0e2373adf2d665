//! Submitted guesses and their scores.
//!
//! Provides immutable tracking of every submission in a session. Guesses
//! and scores live in two parallel sequences that can only grow together.

use super::error::SessionError;
use crate::core::{Code, Score};
use serde::{Deserialize, Serialize};

/// Ordered record of submitted guesses and the score each one earned.
///
/// `guesses()[i]` and `scores()[i]` always describe the i-th submission.
/// History is immutable: `record` returns a new history with one entry
/// appended to both sequences, so the two can never differ in length.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Code, Score};
/// use codebreaker::session::GuessHistory;
///
/// let history = GuessHistory::new();
/// let next = history.record(Code::from(vec![0, 1, 2]), Score::new(1, 1));
///
/// assert_eq!(next.len(), 1);
/// assert_eq!(next.scores(), &[Score::new(1, 1)]);
/// assert!(history.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GuessHistory {
    guesses: Vec<Code>,
    scores: Vec<Score>,
}

#[derive(Deserialize)]
struct RawHistory {
    guesses: Vec<Code>,
    scores: Vec<Score>,
}

impl TryFrom<RawHistory> for GuessHistory {
    type Error = SessionError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.guesses.len() != raw.scores.len() {
            return Err(SessionError::HistoryMismatch {
                guesses: raw.guesses.len(),
                scores: raw.scores.len(),
            });
        }
        Ok(Self {
            guesses: raw.guesses,
            scores: raw.scores,
        })
    }
}

impl GuessHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            guesses: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Record a submission, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the guess and its score appended.
    pub fn record(&self, guess: Code, score: Score) -> Self {
        let mut guesses = self.guesses.clone();
        let mut scores = self.scores.clone();
        guesses.push(guess);
        scores.push(score);
        Self { guesses, scores }
    }

    /// Submitted guesses in submission order.
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// Scores in submission order, parallel to `guesses()`.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Each submission paired with its score.
    pub fn rounds(&self) -> impl Iterator<Item = (&Code, &Score)> {
        self.guesses.iter().zip(self.scores.iter())
    }

    /// The most recent submission, if any.
    pub fn last(&self) -> Option<(&Code, &Score)> {
        self.guesses.last().zip(self.scores.last())
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}
