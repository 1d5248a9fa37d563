//! Suite configuration
//!
//! Selects which fixtures are emitted and seeds the random fixture. Loaded
//! from JSON; every field is optional and falls back to [`SuiteConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixture::FixtureKind;
use crate::{Error, Language, Result};

/// Default length for generated random strings
pub const DEFAULT_RANDOM_LENGTH: usize = 16;

/// Fixture suite configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Languages to render, in order
    pub languages: Vec<Language>,
    /// Fixtures to render, in order
    pub kinds: Vec<FixtureKind>,
    /// Seed for the random string fixture; `None` uses the thread RNG
    pub seed: Option<u64>,
    /// Length of generated random strings
    pub random_length: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            kinds: FixtureKind::ALL.to_vec(),
            seed: None,
            random_length: DEFAULT_RANDOM_LENGTH,
        }
    }
}

impl SuiteConfig {
    /// Restrict to `languages`
    #[must_use]
    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    /// Restrict to `kinds`
    #[must_use]
    pub fn with_kinds(mut self, kinds: Vec<FixtureKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Set the random seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the random string length
    #[must_use]
    pub fn with_random_length(mut self, length: usize) -> Self {
        self.random_length = length;
        self
    }

    /// Parse from a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] on malformed JSON and
    /// [`Error::Configuration`] if the result fails [`SuiteConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`SuiteConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), ?config, "loaded suite config");
        Ok(config)
    }

    /// Serialize as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject empty selections
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the empty field.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(Error::Configuration("languages must not be empty".into()));
        }
        if self.kinds.is_empty() {
            return Err(Error::Configuration("kinds must not be empty".into()));
        }
        Ok(())
    }
}
