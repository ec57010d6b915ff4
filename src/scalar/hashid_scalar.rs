use crate::{HashidCodec, HashidConfig, HashidConfigError, HashidScalarError, LiteralValue};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Custom scalar mapping integer identifiers to obfuscated string tokens.
///
/// The codec bound at construction defines the token format and is immutable
/// for the lifetime of the scalar. The scalar itself is stateless, all three
/// operations are pure and safe for concurrent use.
#[derive(Debug)]
pub struct HashidScalar {
    codec: Arc<HashidCodec>,
}

impl HashidScalar {
    /// Shares an already configured codec with other scalars.
    pub fn new(codec: Arc<HashidCodec>) -> Self {
        Self { codec }
    }

    /// Owns a codec built from the raw parameters.
    pub fn from_config(config: &HashidConfig) -> Result<Self, HashidConfigError> {
        Ok(Self::new(Arc::new(HashidCodec::from_config(config)?)))
    }

    pub fn codec(&self) -> &Arc<HashidCodec> {
        &self.codec
    }

    /// Output path: resolved value to token.
    ///
    /// Resolver output is dynamic, so the value is checked to be a whole,
    /// non-negative number before it is encoded.
    pub fn serialize(&self, value: &JsonValue) -> Result<String, HashidScalarError> {
        match integer_value(value) {
            Some(id) => Ok(self.codec.encode(id)),
            None => Err(HashidScalarError::NotAnInteger(raw_text(value))),
        }
    }

    /// Input path for bound variables: token to identifier.
    pub fn parse_value(&self, token: &str) -> Result<u64, HashidScalarError> {
        self.decode_token(token)
    }

    /// Input path for inline literals: string-kind literal to identifier.
    pub fn parse_literal(&self, literal: &LiteralValue) -> Result<u64, HashidScalarError> {
        match literal {
            LiteralValue::String(token) => self.decode_token(token),
            other => Err(HashidScalarError::InvalidLiteralKind {
                kind: other.kind(),
                value: other.to_string(),
            }),
        }
    }

    // A token may decode to multiple integers, the identifier is the first.
    fn decode_token(&self, token: &str) -> Result<u64, HashidScalarError> {
        match self.codec.decode(token).first() {
            Some(&id) => Ok(id),
            None => {
                log::debug!("token '{}' does not decode under the bound parameters", token);
                Err(HashidScalarError::UndecodableToken(token.to_owned()))
            }
        }
    }
}

fn integer_value(value: &JsonValue) -> Option<u64> {
    if let Some(id) = value.as_u64() {
        return Some(id);
    }
    // whole, finite floats still count as integers
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => {
            Some(f as u64)
        }
        _ => None,
    }
}

fn raw_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
