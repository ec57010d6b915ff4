use crate::{HashidCodec, HashidScalar, LiteralValue};
use juniper::{
    GraphQLScalar, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken, ScalarValue, Value,
};
use std::sync::{Arc, OnceLock};
use thiserror::Error as ThisError;

static CODEC: OnceLock<Arc<HashidCodec>> = OnceLock::new();

/// Returned by [`install_codec`] when a codec is already bound; carries the
/// rejected codec back to the caller.
#[derive(Debug, ThisError)]
#[error("A hashid codec is already installed")]
pub struct CodecAlreadyInstalled(pub Arc<HashidCodec>);

/// Installs the codec used by the [`Hashid`] scalar.
///
/// Scalar resolution in juniper is type-level, so the codec is bound once per
/// process rather than per schema. Call this at startup, before the first
/// query; when nothing is installed the scalar falls back to the default
/// parameter set.
pub fn install_codec(codec: Arc<HashidCodec>) -> Result<(), CodecAlreadyInstalled> {
    CODEC.set(codec).map_err(CodecAlreadyInstalled)
}

fn codec() -> &'static Arc<HashidCodec> {
    CODEC.get_or_init(|| Arc::new(HashidCodec::default()))
}

fn scalar() -> HashidScalar {
    HashidScalar::new(codec().clone())
}

/// Hashed numeric identifier.
///
/// Serialized as an obfuscated string token and resolved back to the wrapped
/// integer on input, from both inline literals and bound variables.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, GraphQLScalar)]
#[graphql(
    name = "Hashid",
    description = "Hashed numeric identifier",
    to_output_with = Self::to_output,
    from_input_with = Self::from_input,
    parse_token_with = Self::parse_token
)]
pub struct Hashid(u64);

impl Hashid {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }

    fn to_output<S: ScalarValue>(v: &Hashid) -> Value<S> {
        Value::scalar(codec().encode(v.0))
    }

    fn from_input<S: ScalarValue>(v: &InputValue<S>) -> Result<Hashid, String> {
        scalar()
            .parse_literal(&literal_value(v))
            .map(Hashid)
            .map_err(|err| err.to_string())
    }

    fn parse_token<S: ScalarValue>(value: ScalarToken<'_>) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

impl From<u64> for Hashid {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<Hashid> for u64 {
    fn from(hashid: Hashid) -> Self {
        hashid.0
    }
}

fn literal_value<S: ScalarValue>(v: &InputValue<S>) -> LiteralValue {
    match v {
        // unresolved variables never reach a scalar, treat them as null
        InputValue::Null | InputValue::Variable(_) => LiteralValue::Null,
        InputValue::Scalar(s) => scalar_literal(s),
        InputValue::Enum(name) => LiteralValue::Enum(name.clone()),
        InputValue::List(items) => {
            LiteralValue::List(items.iter().map(|item| literal_value(&item.item)).collect())
        }
        InputValue::Object(fields) => LiteralValue::Object(
            fields
                .iter()
                .map(|(key, value)| (key.item.clone(), literal_value(&value.item)))
                .collect(),
        ),
    }
}

fn scalar_literal<S: ScalarValue>(s: &S) -> LiteralValue {
    if let Some(token) = s.as_str() {
        LiteralValue::String(token.to_owned())
    } else if let Some(id) = s.as_int() {
        LiteralValue::Int(i64::from(id))
    } else if let Some(value) = s.as_float() {
        LiteralValue::Float(value)
    } else if let Some(value) = s.as_bool() {
        LiteralValue::Boolean(value)
    } else {
        LiteralValue::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juniper::DefaultScalarValue;

    #[test]
    fn maps_input_values_to_literals() {
        let v: InputValue = InputValue::Scalar(DefaultScalarValue::String("jR".into()));
        assert_eq!(literal_value(&v), LiteralValue::String("jR".into()));

        let v: InputValue = InputValue::Scalar(DefaultScalarValue::Int(1));
        assert_eq!(literal_value(&v), LiteralValue::Int(1));

        let v: InputValue = InputValue::Scalar(DefaultScalarValue::Boolean(true));
        assert_eq!(literal_value(&v), LiteralValue::Boolean(true));

        let v: InputValue = InputValue::Enum("ACTIVE".into());
        assert_eq!(literal_value(&v), LiteralValue::Enum("ACTIVE".into()));

        let v: InputValue = InputValue::Null;
        assert_eq!(literal_value(&v), LiteralValue::Null);
    }

    #[test]
    fn from_input_decodes_default_tokens() {
        let v: InputValue = InputValue::Scalar(DefaultScalarValue::String("jR".into()));
        assert_eq!(Hashid::from_input(&v).unwrap(), Hashid::new(1));
    }

    #[test]
    fn from_input_reports_the_literal_kind() {
        let v: InputValue = InputValue::Scalar(DefaultScalarValue::Int(5));
        let err = Hashid::from_input(&v).unwrap_err();
        assert_eq!(err, "Expected String, got Int (5)");
    }
}
