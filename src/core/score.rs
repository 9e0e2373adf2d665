//! Bulls-and-cows scoring.

use super::code::Code;
use super::color::Color;
use super::error::CodeError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of scoring one guess against the hidden code.
///
/// `bulls` counts exact-position matches; `cows` counts right colors in
/// the wrong position. `bulls + cows` never exceeds the code length.
/// Serializes as the pair `[bulls, cows]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Score {
    pub bulls: usize,
    pub cows: usize,
}

impl Score {
    pub fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Pegs earned in total.
    pub fn total(&self) -> usize {
        self.bulls + self.cows
    }

    /// Whether this score cracks a code of length `len`.
    pub fn is_solved(&self, len: usize) -> bool {
        self.bulls == len
    }
}

impl From<(usize, usize)> for Score {
    fn from((bulls, cows): (usize, usize)) -> Self {
        Self { bulls, cows }
    }
}

impl From<Score> for (usize, usize) {
    fn from(score: Score) -> Self {
        (score.bulls, score.cows)
    }
}

/// Score `guess` against `code`.
///
/// Bulls are positions where the colors agree. Cows are counted over the
/// remaining positions only: for each color, the smaller of its leftover
/// count in the guess and in the code. A repeated color therefore never
/// earns more cows than the code has left to match.
///
/// This is a pure function. Colors are not checked against an alphabet;
/// only the lengths must agree.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{score, Code, Score};
///
/// let code = Code::from(vec![2, 2, 3, 3]);
/// let guess = Code::from(vec![1, 3, 2, 3]);
///
/// assert_eq!(score(&code, &guess)?, Score::new(1, 2));
/// # Ok::<(), codebreaker::core::CodeError>(())
/// ```
pub fn score(code: &Code, guess: &Code) -> Result<Score, CodeError> {
    if code.len() != guess.len() {
        return Err(CodeError::LengthMismatch {
            code: code.len(),
            guess: guess.len(),
        });
    }

    let mut bulls = 0;
    let mut code_bins: HashMap<Color, usize> = HashMap::new();
    let mut guess_bins: HashMap<Color, usize> = HashMap::new();

    for (c, g) in code.iter().zip(guess.iter()) {
        if c == g {
            bulls += 1;
        } else {
            *code_bins.entry(*c).or_default() += 1;
            *guess_bins.entry(*g).or_default() += 1;
        }
    }

    let cows = guess_bins
        .iter()
        .map(|(color, count)| (*count).min(code_bins.get(color).copied().unwrap_or(0)))
        .sum();

    Ok(Score { bulls, cows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: &[u8], guess: &[u8]) -> (usize, usize) {
        let result = score(&Code::from(code.to_vec()), &Code::from(guess.to_vec())).unwrap();
        result.into()
    }

    #[test]
    fn scores_against_distinct_code() {
        let code = [1, 2, 3, 4, 0];

        assert_eq!(check(&code, &[4, 3, 2, 1, 3]), (0, 4));
        assert_eq!(check(&code, &[5, 5, 5, 5, 5]), (0, 0));
        assert_eq!(check(&code, &[2, 2, 2, 2, 2]), (1, 0));
        assert_eq!(check(&code, &[2, 2, 2, 3, 3]), (1, 1));
        assert_eq!(check(&code, &[1, 2, 3, 3, 3]), (3, 0));
        assert_eq!(check(&code, &[1, 2, 3, 4, 4]), (4, 0));
        assert_eq!(check(&code, &[1, 2, 3, 4, 0]), (5, 0));
    }

    #[test]
    fn scores_with_duplicates_in_code() {
        let code = [2, 2, 3, 3];

        assert_eq!(check(&code, &[4, 3, 2, 1]), (0, 2));
        assert_eq!(check(&code, &[5, 5, 5, 5]), (0, 0));
        assert_eq!(check(&code, &[2, 2, 2, 2]), (2, 0));
        assert_eq!(check(&code, &[2, 2, 2, 3]), (3, 0));
        assert_eq!(check(&code, &[1, 3, 2, 3]), (1, 2));
        assert_eq!(check(&code, &[2, 2, 3, 3]), (4, 0));
    }

    #[test]
    fn repeated_guess_color_is_capped_by_code() {
        assert_eq!(check(&[0, 1, 1, 1], &[1, 0, 0, 0]), (0, 2));
    }

    #[test]
    fn empty_code_scores_zero() {
        assert_eq!(check(&[], &[]), (0, 0));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let result = score(&Code::from(vec![1, 2, 3]), &Code::from(vec![1, 2]));
        assert_eq!(
            result,
            Err(CodeError::LengthMismatch { code: 3, guess: 2 })
        );
    }

    #[test]
    fn solved_means_all_bulls() {
        assert!(Score::new(5, 0).is_solved(5));
        assert!(!Score::new(4, 1).is_solved(5));
        assert_eq!(Score::new(3, 2).total(), 5);
    }

    #[test]
    fn score_serializes_as_pair() {
        let json = serde_json::to_string(&Score::new(0, 4)).unwrap();
        assert_eq!(json, "[0,4]");

        let deserialized: Score = serde_json::from_str("[3,0]").unwrap();
        assert_eq!(deserialized, Score::new(3, 0));
    }
}
