//! Generated value representation.
//!
//! `GeneratedValue` is the JSON-compatible tree produced by the body
//! generator. Objects keep their fields in schema declaration order, and
//! serialization preserves that order.

use indexmap::IndexMap;
use serde::Serialize;

/// A synthesized JSON-compatible value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<GeneratedValue>),

    /// Object with fields in declaration order
    Object(IndexMap<String, GeneratedValue>),
}

impl GeneratedValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<GeneratedValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, GeneratedValue>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a field of an object value.
    pub fn get(&self, key: &str) -> Option<&GeneratedValue> {
        self.as_object()?.get(key)
    }

    /// Render as compact JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Render as indented JSON.
    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object<const N: usize>(fields: [(&str, GeneratedValue); N]) -> GeneratedValue {
        GeneratedValue::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_generated_value_accessors() {
        assert!(GeneratedValue::Null.is_null());
        assert_eq!(GeneratedValue::Bool(true).as_bool(), Some(true));
        assert_eq!(GeneratedValue::Int64(7).as_i64(), Some(7));
        assert_eq!(GeneratedValue::Float64(1.5).as_f64(), Some(1.5));
        assert_eq!(GeneratedValue::String("x".into()).as_str(), Some("x"));
        assert_eq!(GeneratedValue::Int64(7).as_str(), None);
    }

    #[test]
    fn test_object_get() {
        let value = object([
            ("name", GeneratedValue::String("rex".into())),
            ("age", GeneratedValue::Int64(3)),
        ]);

        assert_eq!(value.get("age"), Some(&GeneratedValue::Int64(3)));
        assert_eq!(value.get("missing"), None);
        assert_eq!(GeneratedValue::Null.get("age"), None);
    }

    #[test]
    fn test_serialization_preserves_field_order() {
        let value = object([
            ("zeta", GeneratedValue::Int64(1)),
            ("alpha", GeneratedValue::Bool(false)),
            (
                "tags",
                GeneratedValue::Array(vec![GeneratedValue::Null, GeneratedValue::Float64(2.5)]),
            ),
        ]);

        assert_eq!(
            value.to_json_string().unwrap(),
            r#"{"zeta":1,"alpha":false,"tags":[null,2.5]}"#
        );
    }

    #[test]
    fn test_pretty_serialization() {
        let value = object([("name", GeneratedValue::String("a".into()))]);

        assert_eq!(
            value.to_json_string_pretty().unwrap(),
            "{\n  \"name\": \"a\"\n}"
        );
    }
}
