use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HashidConfigError {
    #[error("Failed to load hashid config: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid hashid config: {0}")]
    Invalid(String),
}

/// Parameter set of the obfuscation codec.
///
/// The salt is a secret, treat it like any other credential: tokens are only
/// as opaque as the salt is private.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashidConfig {
    #[serde(default)]
    pub salt: String,
    /// Minimum length of produced tokens.
    #[serde(default)]
    pub pad: Option<usize>,
    #[serde(default)]
    pub alphabet: Option<String>,
}

impl HashidConfig {
    pub fn new<S: Into<String>>(salt: S) -> Self {
        Self {
            salt: salt.into(),
            ..Default::default()
        }
    }

    pub fn with_pad(self, pad: usize) -> Self {
        Self {
            pad: Some(pad),
            ..self
        }
    }

    pub fn with_alphabet<S: Into<String>>(self, alphabet: S) -> Self {
        Self {
            alphabet: Some(alphabet.into()),
            ..self
        }
    }

    /// Layered configuration: an optional file source overridden by
    /// `<prefix>_*` environment variables.
    pub fn load(file: Option<&Path>, env_prefix: &str) -> Result<Self, HashidConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::from(file));
        }
        let s = builder.add_source(Environment::with_prefix(env_prefix)).build()?;

        let cfg: HashidConfig = s.try_deserialize()?;
        log::debug!("hashid config loaded (env prefix: {})", env_prefix);
        Ok(cfg)
    }

    pub fn from_env(env_prefix: &str) -> Result<Self, HashidConfigError> {
        Self::load(None, env_prefix)
    }
}
