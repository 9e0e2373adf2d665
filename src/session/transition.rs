//! Pure session transitions.

use super::action::Action;
use super::error::SessionError;
use super::state::Session;
use crate::core::{score, Alphabet, Code, CodeError};

/// Apply `action` to `session`, returning the next session.
///
/// This is a pure function: the input session is never modified and the
/// same session and action always yield the same result. Malformed input
/// is rejected with an error before any new state is built; an
/// unrecognized action returns the session unchanged.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Code, Score};
/// use codebreaker::session::{transition, Action, Session};
///
/// let session = Session::new(Alphabet::new(5)?, Code::from(vec![1, 2, 3, 4, 0]))?;
///
/// let edited = transition(&session, &Action::SetGuess(Code::from(vec![4, 3, 2, 1, 3])))?;
/// let submitted = transition(&edited, &Action::SubmitGuess)?;
///
/// assert_eq!(submitted.scores(), &[Score::new(0, 4)]);
/// assert_eq!(submitted.guess(), edited.guess()); // Guess stays editable
/// assert_eq!(session.attempts(), 0); // Earlier snapshots unchanged
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn transition(session: &Session, action: &Action) -> Result<Session, SessionError> {
    match action {
        Action::SetGuess(guess) => set_guess(session, guess.clone()),
        Action::CycleColor(position) => {
            let guess = cycle_color(&session.guess, *position, &session.alphabet)?;
            set_guess(session, guess)
        }
        Action::SubmitGuess => submit_guess(session),
        Action::Unrecognized => Ok(session.clone()),
    }
}

/// Apply every action in order, starting from `initial`.
///
/// Stops at the first rejected action and returns its error.
pub fn replay<'a, I>(initial: &Session, actions: I) -> Result<Session, SessionError>
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .try_fold(initial.clone(), |session, action| transition(&session, action))
}

/// Return `guess` with the color at `position` advanced to the next color
/// of `alphabet`, wrapping past the last one.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Code};
/// use codebreaker::session::cycle_color;
///
/// let alphabet = Alphabet::new(5)?;
/// let guess = Code::from(vec![0, 1, 2, 3, 4]);
///
/// assert_eq!(cycle_color(&guess, 0, &alphabet)?, Code::from(vec![1, 1, 2, 3, 4]));
/// assert_eq!(cycle_color(&guess, 4, &alphabet)?, Code::from(vec![0, 1, 2, 3, 0]));
/// # Ok::<(), codebreaker::core::CodeError>(())
/// ```
pub fn cycle_color(guess: &Code, position: usize, alphabet: &Alphabet) -> Result<Code, CodeError> {
    let color = guess.get(position).ok_or(CodeError::PositionOutOfRange {
        position,
        len: guess.len(),
    })?;
    if !alphabet.contains(color) {
        return Err(CodeError::ColorOutOfRange {
            position,
            color: color.0,
            size: alphabet.size(),
        });
    }
    guess.with_color(position, alphabet.next(color))
}

fn set_guess(session: &Session, guess: Code) -> Result<Session, SessionError> {
    if guess.len() != session.code.len() {
        return Err(CodeError::LengthMismatch {
            code: session.code.len(),
            guess: guess.len(),
        }
        .into());
    }
    guess.check_colors(&session.alphabet)?;

    Ok(Session {
        guess,
        ..session.clone()
    })
}

fn submit_guess(session: &Session) -> Result<Session, SessionError> {
    let result = score(&session.code, &session.guess)?;
    let history = session.history.record(session.guess.clone(), result);

    Ok(Session {
        history,
        ..session.clone()
    })
}
