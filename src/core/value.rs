//! Candidate values as handed over by a validation framework.

use std::fmt;

/// A field value submitted for validation.
///
/// Only [`Str`](Self::Str) and [`Stringable`](Self::Stringable) values are
/// checked; [`Null`](Self::Null) always passes and [`Other`](Self::Other)
/// is a caller error.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// No value.
    Null,
    /// A string value.
    Str(&'a str),
    /// A value with a canonical string representation.
    Stringable(&'a dyn fmt::Display),
    /// Any other shape, identified by its type name (e.g. "array").
    Other(&'static str),
}

impl FieldValue<'_> {
    /// Type name used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Str(_) => "string",
            FieldValue::Stringable(_) => "stringable",
            FieldValue::Other(name) => *name,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            FieldValue::Stringable(v) => f.debug_tuple("Stringable").field(&v.to_string()).finish(),
            FieldValue::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Str)
    }
}

#[cfg(feature = "json")]
impl<'a> From<&'a serde_json::Value> for FieldValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::String(s) => FieldValue::Str(s),
            Value::Bool(_) => FieldValue::Other("bool"),
            Value::Number(_) => FieldValue::Other("number"),
            Value::Array(_) => FieldValue::Other("array"),
            Value::Object(_) => FieldValue::Other("object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        assert!(matches!(FieldValue::from(None::<&str>), FieldValue::Null));
        assert!(matches!(FieldValue::from(Some("x")), FieldValue::Str("x")));
    }

    #[test]
    fn type_names() {
        let n = 42;
        assert_eq!(FieldValue::Null.type_name(), "null");
        assert_eq!(FieldValue::from("x").type_name(), "string");
        assert_eq!(FieldValue::Stringable(&n).type_name(), "stringable");
        assert_eq!(FieldValue::Other("array").type_name(), "array");
    }

    #[test]
    fn debug_renders_stringable() {
        let n = 42;
        assert_eq!(format!("{:?}", FieldValue::Stringable(&n)), "Stringable(\"42\")");
    }

    #[cfg(feature = "json")]
    #[test]
    fn from_json() {
        use serde_json::json;

        assert!(matches!(FieldValue::from(&json!(null)), FieldValue::Null));
        assert!(matches!(FieldValue::from(&json!("abc")), FieldValue::Str("abc")));
        assert_eq!(FieldValue::from(&json!(["array"])).type_name(), "array");
        assert_eq!(FieldValue::from(&json!({"a": 1})).type_name(), "object");
        assert_eq!(FieldValue::from(&json!(12)).type_name(), "number");
        assert_eq!(FieldValue::from(&json!(true)).type_name(), "bool");
    }
}
