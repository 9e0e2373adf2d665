//! Color sequences: the hidden code and the player's guesses.

use super::color::{Alphabet, Color};
use super::error::CodeError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of colors.
///
/// The same shape serves as the hidden code and as every guess. Editing
/// operations return a new sequence and leave the original untouched, so
/// a code stored in a snapshot never changes.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Code, Color};
///
/// let guess = Code::from(vec![0, 1, 2, 3, 4]);
/// let edited = guess.with_color(0, Color(1))?;
///
/// assert_eq!(edited, Code::from(vec![1, 1, 2, 3, 4]));
/// assert_eq!(guess, Code::from(vec![0, 1, 2, 3, 4])); // Original unchanged
/// # Ok::<(), codebreaker::core::CodeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Color>);

/// A guess has exactly the shape of a code.
pub type Guess = Code;

impl Code {
    /// Create a code from a sequence of colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// A code of `len` positions all holding `color`.
    ///
    /// This is the usual seed for a fresh guess (`Code::filled(5, Color(0))`).
    pub fn filled(len: usize, color: Color) -> Self {
        Self(vec![color; len])
    }

    /// Draw a code uniformly at random over `alphabet`.
    pub fn random<R: Rng + ?Sized>(len: usize, alphabet: &Alphabet, rng: &mut R) -> Self {
        let colors = (0..len)
            .map(|_| Color(rng.random_range(0..alphabet.size()) as u8))
            .collect();
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    pub fn get(&self, position: usize) -> Option<Color> {
        self.0.get(position).copied()
    }

    /// Return a new code with `position` replaced by `color`.
    pub fn with_color(&self, position: usize, color: Color) -> Result<Self, CodeError> {
        if position >= self.len() {
            return Err(CodeError::PositionOutOfRange {
                position,
                len: self.len(),
            });
        }
        let mut colors = self.0.clone();
        colors[position] = color;
        Ok(Self(colors))
    }

    /// Every color of this code that falls outside `alphabet`.
    ///
    /// Yields one error per offending position so callers can report all
    /// of them at once.
    pub fn out_of_range<'a>(
        &'a self,
        alphabet: &'a Alphabet,
    ) -> impl Iterator<Item = CodeError> + 'a {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, color)| !alphabet.contains(**color))
            .map(|(position, color)| CodeError::ColorOutOfRange {
                position,
                color: color.0,
                size: alphabet.size(),
            })
    }

    /// Check that every color belongs to `alphabet`, failing on the first
    /// one that does not.
    pub fn check_colors(&self, alphabet: &Alphabet) -> Result<(), CodeError> {
        match self.out_of_range(alphabet).next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl From<Vec<u8>> for Code {
    fn from(indices: Vec<u8>) -> Self {
        Self(indices.into_iter().map(Color).collect())
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn filled_repeats_color() {
        let code = Code::filled(4, Color(2));
        assert_eq!(code, Code::from(vec![2, 2, 2, 2]));
    }

    #[test]
    fn with_color_is_immutable() {
        let code = Code::from(vec![0, 1, 2]);
        let edited = code.with_color(2, Color(0)).unwrap();

        assert_eq!(code, Code::from(vec![0, 1, 2]));
        assert_eq!(edited, Code::from(vec![0, 1, 0]));
    }

    #[test]
    fn with_color_rejects_position_past_end() {
        let code = Code::from(vec![0, 1, 2]);
        assert_eq!(
            code.with_color(3, Color(0)),
            Err(CodeError::PositionOutOfRange {
                position: 3,
                len: 3
            })
        );
    }

    #[test]
    fn out_of_range_reports_every_position() {
        let alphabet = Alphabet::new(5).unwrap();
        let code = Code::from(vec![5, 1, 7]);

        let errors: Vec<CodeError> = code.out_of_range(&alphabet).collect();

        assert_eq!(
            errors,
            vec![
                CodeError::ColorOutOfRange {
                    position: 0,
                    color: 5,
                    size: 5
                },
                CodeError::ColorOutOfRange {
                    position: 2,
                    color: 7,
                    size: 5
                },
            ]
        );
        assert!(code.check_colors(&alphabet).is_err());
    }

    #[test]
    fn random_code_stays_inside_alphabet() {
        let alphabet = Alphabet::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let code = Code::random(6, &alphabet, &mut rng);
            assert_eq!(code.len(), 6);
            assert!(code.check_colors(&alphabet).is_ok());
        }
    }

    #[test]
    fn random_code_is_reproducible_from_seed() {
        let alphabet = Alphabet::new(5).unwrap();

        let first = Code::random(5, &alphabet, &mut StdRng::seed_from_u64(42));
        let second = Code::random(5, &alphabet, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn display_lists_indices() {
        assert_eq!(Code::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Code::default().to_string(), "[]");
    }

    #[test]
    fn code_serializes_as_plain_array() {
        let code = Code::from(vec![1, 2, 3, 4, 0]);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "[1,2,3,4,0]");

        let deserialized: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, code);
    }
}
