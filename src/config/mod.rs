//! Game configuration and new-game setup.
//!
//! The only knobs are the code length and the alphabet size. Validation
//! uses Stillwater's `Validation` type to report every problem with a
//! configuration in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use codebreaker::config::{new_game, GameConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = GameConfig::from_toml("code_length = 4\nalphabet_size = 6")?;
//! let session = new_game(&config, &mut StdRng::seed_from_u64(1))?;
//!
//! assert_eq!(session.code_length(), 4);
//! assert_eq!(session.alphabet().size(), 6);
//! # Ok::<(), codebreaker::config::ConfigError>(())
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Alphabet, Code, Color};
use crate::session::Session;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Default number of colors.
pub const DEFAULT_ALPHABET_SIZE: usize = 5;

/// Shape of a game: how long the code is and how many colors it draws on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub code_length: usize,
    pub alphabet_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration, reporting ALL violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }

    fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.code_length == 0 {
            Validation::fail(ConfigViolation::ZeroCodeLength)
        } else {
            Validation::success(())
        });

        checks.push(if self.alphabet_size == 0 {
            Validation::fail(ConfigViolation::EmptyAlphabet)
        } else {
            Validation::success(())
        });

        if self.alphabet_size > Alphabet::MAX_SIZE {
            checks.push(Validation::fail(ConfigViolation::AlphabetTooLarge {
                size: self.alphabet_size,
                max: Alphabet::MAX_SIZE,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// The alphabet this configuration describes.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Ok(Alphabet::new(self.alphabet_size)?)
    }
}

/// Start a game: draw a uniformly random code and seed the guess with
/// all zeros.
pub fn new_game<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Session, ConfigError> {
    config.validate()?;
    let alphabet = config.alphabet()?;
    let code = Code::random(config.code_length, &alphabet, rng);

    let session = Session::builder()
        .alphabet(alphabet)
        .code(code)
        .initial_guess(Code::filled(config.code_length, Color(0)))
        .build()?;

    tracing::debug!(
        code_length = config.code_length,
        alphabet_size = config.alphabet_size,
        "New game created"
    );

    Ok(session)
}
