//! Colors and the finite alphabet they are drawn from.

use super::error::CodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a color within an [`Alphabet`].
///
/// Colors carry no visual meaning here; mapping an index to something a
/// player can see is the presentation layer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    /// The color index as a `usize`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finite, ordered alphabet of `size` colors, indexed `0..size`.
///
/// The alphabet is static configuration for a session: it bounds which
/// colors are legal and defines how a color cycles to the next one.
///
/// # Example
///
/// ```rust
/// use codebreaker::core::{Alphabet, Color};
///
/// let alphabet = Alphabet::new(5)?;
///
/// assert!(alphabet.contains(Color(4)));
/// assert!(!alphabet.contains(Color(5)));
/// assert_eq!(alphabet.next(Color(4)), Color(0));
/// # Ok::<(), codebreaker::core::CodeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// Largest alphabet a [`Color`] can index.
    pub const MAX_SIZE: usize = u8::MAX as usize + 1;

    /// Create an alphabet of `size` colors.
    ///
    /// Fails for an empty alphabet or one too large to index with a `u8`.
    pub fn new(size: usize) -> Result<Self, CodeError> {
        if size == 0 {
            return Err(CodeError::EmptyAlphabet);
        }
        if size > Self::MAX_SIZE {
            return Err(CodeError::AlphabetTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Number of colors in the alphabet.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `color` belongs to this alphabet (pure).
    pub fn contains(&self, color: Color) -> bool {
        color.index() < self.size
    }

    /// The color after `color`, wrapping back to `0` past the last one.
    ///
    /// `color` must belong to the alphabet; callers validate first.
    pub fn next(&self, color: Color) -> Color {
        // size <= 256, so the remainder always fits in a u8
        Color(((color.index() + 1) % self.size) as u8)
    }

    /// All colors of the alphabet, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..self.size).map(|i| Color(i as u8))
    }
}

impl TryFrom<usize> for Alphabet {
    type Error = CodeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Alphabet> for usize {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.size
    }
}
