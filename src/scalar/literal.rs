use std::fmt;

/// Inline value syntax of a query document, independent of any engine's AST
/// types. A binding layer maps the engine's literal nodes into this form.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<LiteralValue>),
    Object(Vec<(String, LiteralValue)>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    Null,
    Int,
    Float,
    String,
    Boolean,
    Enum,
    List,
    Object,
}

impl LiteralValue {
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::Null => LiteralKind::Null,
            LiteralValue::Int(_) => LiteralKind::Int,
            LiteralValue::Float(_) => LiteralKind::Float,
            LiteralValue::String(_) => LiteralKind::String,
            LiteralValue::Boolean(_) => LiteralKind::Boolean,
            LiteralValue::Enum(_) => LiteralKind::Enum,
            LiteralValue::List(_) => LiteralKind::List,
            LiteralValue::Object(_) => LiteralKind::Object,
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Null => "Null",
            LiteralKind::Int => "Int",
            LiteralKind::Float => "Float",
            LiteralKind::String => "String",
            LiteralKind::Boolean => "Boolean",
            LiteralKind::Enum => "Enum",
            LiteralKind::List => "List",
            LiteralKind::Object => "Object",
        })
    }
}

/// Raw payload rendering used in error messages.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Int(value) => write!(f, "{value}"),
            LiteralValue::Float(value) => write!(f, "{value}"),
            LiteralValue::String(value) => f.write_str(value),
            LiteralValue::Boolean(value) => write!(f, "{value}"),
            LiteralValue::Enum(name) => f.write_str(name),
            LiteralValue::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            LiteralValue::Object(fields) => {
                f.write_str("{")?;
                for (index, (key, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_value_shape() {
        assert_eq!(LiteralValue::String("jR".into()).kind(), LiteralKind::String);
        assert_eq!(LiteralValue::Int(1).kind(), LiteralKind::Int);
        assert_eq!(LiteralValue::Null.kind(), LiteralKind::Null);
        assert_eq!(LiteralValue::List(vec![]).kind(), LiteralKind::List);
    }

    #[test]
    fn renders_raw_payloads() {
        assert_eq!(LiteralValue::Int(1).to_string(), "1");
        assert_eq!(LiteralValue::String("jR".into()).to_string(), "jR");
        assert_eq!(
            LiteralValue::List(vec![LiteralValue::Int(1), LiteralValue::Boolean(false)]).to_string(),
            "[1, false]"
        );
        assert_eq!(
            LiteralValue::Object(vec![("id".into(), LiteralValue::Null)]).to_string(),
            "{id: null}"
        );
    }
}
