//! Builder for constructing validated sessions.

use super::error::SessionError;
use super::history::GuessHistory;
use super::state::Session;
use crate::core::{Alphabet, Code, CodeError, Color};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing sessions with a fluent API.
///
/// `build` checks the whole session at once and reports every violation
/// it finds rather than stopping at the first.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::session::{Session, SessionError};
///
/// let result = Session::builder()
///     .alphabet(Alphabet::new(3)?)
///     .code(Code::from(vec![0, 4, 1]))
///     .initial_guess(Code::from(vec![7, 0, 0]))
///     .build();
///
/// match result {
///     Err(SessionError::Invalid(violations)) => assert_eq!(violations.len(), 2),
///     other => panic!("expected violations, got {other:?}"),
/// }
/// # Ok::<(), codebreaker::core::CodeError>(())
/// ```
pub struct SessionBuilder {
    alphabet: Option<Alphabet>,
    code: Option<Code>,
    guess: Option<Code>,
    history: GuessHistory,
}

impl SessionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            alphabet: None,
            code: None,
            guess: None,
            history: GuessHistory::new(),
        }
    }

    /// Set the alphabet (required).
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Set the hidden code (required).
    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    /// Seed the in-progress guess. Defaults to all zeros.
    pub fn initial_guess(mut self, guess: Code) -> Self {
        self.guess = Some(guess);
        self
    }

    /// Resume from an existing history.
    pub fn history(mut self, history: GuessHistory) -> Self {
        self.history = history;
        self
    }

    /// Build the session.
    /// Returns an error if required fields are missing or any sequence
    /// disagrees with the code length or the alphabet.
    pub fn build(self) -> Result<Session, SessionError> {
        let alphabet = self.alphabet.ok_or(SessionError::MissingAlphabet)?;
        let code = self.code.ok_or(SessionError::MissingCode)?;
        let guess = self
            .guess
            .unwrap_or_else(|| Code::filled(code.len(), Color(0)));

        let sequences = std::iter::once(&guess).chain(self.history.guesses().iter());
        match validate(&alphabet, &code, sequences) {
            Validation::Success(_) => Ok(Session {
                alphabet,
                code,
                guess,
                history: self.history,
            }),
            Validation::Failure(violations) => Err(SessionError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the code and every guess against the alphabet and the code
/// length, accumulating ALL violations.
fn validate<'a>(
    alphabet: &Alphabet,
    code: &Code,
    guesses: impl Iterator<Item = &'a Code>,
) -> Validation<(), NonEmptyVec<CodeError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<CodeError>>> = Vec::new();

    for error in code.out_of_range(alphabet) {
        checks.push(Validation::fail(error));
    }

    for guess in guesses {
        if guess.len() != code.len() {
            checks.push(Validation::fail(CodeError::LengthMismatch {
                code: code.len(),
                guess: guess.len(),
            }));
        }
        for error in guess.out_of_range(alphabet) {
            checks.push(Validation::fail(error));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    fn alphabet() -> Alphabet {
        Alphabet::new(5).unwrap()
    }

    #[test]
    fn builder_requires_alphabet() {
        let result = SessionBuilder::new().code(Code::from(vec![0])).build();
        assert_eq!(result, Err(SessionError::MissingAlphabet));
    }

    #[test]
    fn builder_requires_code() {
        let result = SessionBuilder::new().alphabet(alphabet()).build();
        assert_eq!(result, Err(SessionError::MissingCode));
    }

    #[test]
    fn builder_defaults_guess_to_zeros() {
        let session = SessionBuilder::new()
            .alphabet(alphabet())
            .code(Code::from(vec![2, 2, 3, 3]))
            .build()
            .unwrap();

        assert_eq!(session.guess(), &Code::from(vec![0, 0, 0, 0]));
    }

    #[test]
    fn builder_accepts_seeded_guess() {
        let session = SessionBuilder::new()
            .alphabet(alphabet())
            .code(Code::from(vec![1, 2, 3, 4, 0]))
            .initial_guess(Code::from(vec![0, 1, 2, 3, 4]))
            .build()
            .unwrap();

        assert_eq!(session.guess(), &Code::from(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = SessionBuilder::new()
            .alphabet(alphabet())
            .code(Code::from(vec![1, 9, 3]))
            .initial_guess(Code::from(vec![5, 5]))
            .build();

        match result {
            Err(SessionError::Invalid(violations)) => {
                assert_eq!(violations.len(), 4);
                assert!(violations
                    .iter()
                    .any(|e| matches!(e, CodeError::LengthMismatch { code: 3, guess: 2 })));
                assert!(violations
                    .iter()
                    .any(|e| matches!(e, CodeError::ColorOutOfRange { color: 9, .. })));
            }
            other => panic!("Expected violations, got {other:?}"),
        }
    }

    #[test]
    fn builder_validates_resumed_history() {
        let history = GuessHistory::new().record(Code::from(vec![1, 2]), Score::new(0, 0));

        let result = SessionBuilder::new()
            .alphabet(alphabet())
            .code(Code::from(vec![1, 2, 3]))
            .history(history)
            .build();

        assert!(matches!(result, Err(SessionError::Invalid(v)) if v.len() == 1));
    }
}
