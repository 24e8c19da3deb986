//! Batch generation.

use rand_core::{CryptoRng, RngCore};

use super::body::{check_reservable, generate_body, BodyRules};
use super::password::Password;
use crate::alphabet::Alphabet;
use crate::analysis::EntropyEstimate;
use crate::config::PasswordConfig;
use crate::error::GenerationError;

/// Password generator for one configuration.
///
/// The alphabet is resolved once on construction and reused for every
/// password. Each password is otherwise generated independently.
#[derive(Debug, Clone)]
pub struct Generator {
    config: PasswordConfig,
    alphabet: Alphabet,
}

impl Generator {
    /// Validates `config` and resolves its alphabet.
    ///
    /// All configuration errors surface here, before any randomness is
    /// consumed.
    pub fn new(config: &PasswordConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        let alphabet = Alphabet::resolve(config)?;

        if config.no_repeat && config.length > alphabet.len() {
            return Err(GenerationError::invalid(format!(
                "no-repeat requested but length ({}) exceeds pool size ({})",
                config.length,
                alphabet.len()
            )));
        }
        if config.no_repeat && config.require_classes {
            check_reservable(alphabet.class_pools())?;
        }

        Ok(Self {
            config: config.clone(),
            alphabet,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// The resolved alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Entropy estimate of the random body.
    pub fn entropy(&self) -> EntropyEstimate {
        EntropyEstimate::new(self.alphabet.len(), self.config.length)
    }

    /// Estimated bits of entropy of the random body.
    pub fn entropy_bits(&self) -> f64 {
        self.entropy().bits
    }

    fn rules(&self) -> BodyRules {
        BodyRules {
            no_repeat: self.config.no_repeat,
            require_classes: self.config.require_classes,
        }
    }

    /// Generates a single password.
    pub fn generate_one<R>(&self, rng: &mut R) -> Result<Password, GenerationError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let body = generate_body(rng, &self.alphabet, self.config.length, self.rules())?;
        Ok(Password::assemble(
            &self.config.prefix,
            &body,
            &self.config.suffix,
        ))
    }

    /// Generates `count` passwords.
    pub fn generate_batch<R>(&self, rng: &mut R) -> Result<Vec<Password>, GenerationError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let passwords = (0..self.config.count)
            .map(|_| self.generate_one(&mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            count = passwords.len(),
            length = self.config.length,
            alphabet_size = self.alphabet.len(),
            "Generated password batch"
        );

        Ok(passwords)
    }
}

/// Generates `config.count` passwords using `rng`.
pub fn generate<R>(config: &PasswordConfig, rng: &mut R) -> Result<Vec<Password>, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    Generator::new(config)?.generate_batch(rng)
}
