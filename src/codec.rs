use crate::{HashidConfig, HashidConfigError};
use harsh::Harsh;
use std::fmt;

/// Reversible identifier obfuscation bound to a fixed parameter set.
///
/// `decode(encode(id)) == id` holds for any id as long as both sides use the
/// same parameters; tokens produced under a different salt, pad or alphabet
/// do not decode. Encode and decode are pure, a codec can be shared across
/// threads for the lifetime of the process.
pub struct HashidCodec {
    harsh: Harsh,
}

impl HashidCodec {
    /// Builds a new primitive instance from the raw parameters.
    pub fn from_config(config: &HashidConfig) -> Result<Self, HashidConfigError> {
        let mut builder = Harsh::builder().salt(config.salt.as_str());
        if let Some(pad) = config.pad {
            builder = builder.length(pad);
        }
        if let Some(alphabet) = &config.alphabet {
            builder = builder.alphabet(alphabet.as_str());
        }

        let harsh = builder
            .build()
            .map_err(|err| HashidConfigError::Invalid(err.to_string()))?;
        Ok(Self { harsh })
    }

    /// Adopts an already configured instance as-is.
    pub fn from_harsh(harsh: Harsh) -> Self {
        Self { harsh }
    }

    pub fn encode(&self, id: u64) -> String {
        self.harsh.encode(&[id])
    }

    /// Zero or more integers; empty when the token does not decode under the
    /// bound parameters.
    pub fn decode(&self, token: &str) -> Vec<u64> {
        self.harsh.decode(token).unwrap_or_default()
    }
}

impl Default for HashidCodec {
    fn default() -> Self {
        Self::from_config(&HashidConfig::default()).expect("default hashid parameters are valid")
    }
}

// The parameter set contains the salt, keep it out of logs.
impl fmt::Debug for HashidCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashidCodec").finish_non_exhaustive()
    }
}
