//! Schema definitions for request body generation.
//!
//! ## Type Hierarchy
//!
//! - `SchemaNode` - Closed set of shapes a piece of data can take
//! - `SchemaRegistry` - Named component schemas, referenced via `$ref`
//! - `RawSchema` - Schema object as deserialized from the document
//!
//! Nodes are built once from an OpenAPI document (see [`crate::document`])
//! and are read-only for the rest of the run.

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema and document operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading the document file
    #[error("Failed to read document: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML or JSON
    #[error("Failed to parse document: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Document parsed but does not have the expected structure
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Named component schema not found
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    /// Path not declared in the document
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// HTTP method not recognised
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// Path exists but has no operation for the method
    #[error("Operation '{method}' not found for path '{path}'")]
    OperationNotFound { path: String, method: String },

    /// Operation has no request body
    #[error("Operation '{method} {path}' has no request body")]
    NoRequestBody { path: String, method: String },

    /// Request body has no application/json schema
    #[error("Operation '{method} {path}' has no application/json request body schema")]
    NoJsonContent { path: String, method: String },
}

// ============================================================================
// Schema Nodes
// ============================================================================

/// Shape of one piece of data within an interface document.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Object with named fields, in declaration order
    Object { properties: IndexMap<String, SchemaNode> },

    /// Array with an optional element schema
    Array { items: Option<Box<SchemaNode>> },

    /// String with an optional maximum length
    String { max_length: Option<usize> },

    /// Integer
    Integer,

    /// Floating point number
    Number,

    /// Boolean
    Boolean,

    /// Date-time string (`type: string, format: date-time`)
    DateTime,

    /// Pointer to a named schema (e.g. `#/components/schemas/Pet`)
    Reference { reference: String },

    /// Any shape the generator does not understand
    Unsupported { description: String },
}

impl SchemaNode {
    /// Create an object node from `(name, schema)` pairs.
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        Self::Object {
            properties: properties
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// Create an array node with the given element schema.
    pub fn array(items: SchemaNode) -> Self {
        Self::Array {
            items: Some(Box::new(items)),
        }
    }

    /// Create a string node with an optional maximum length.
    pub fn string(max_length: Option<usize>) -> Self {
        Self::String { max_length }
    }

    /// Create a reference node.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self::Reference {
            reference: reference.into(),
        }
    }

    /// Check if this node is a reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Short name of the node kind, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::String { .. } => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::DateTime => "date-time",
            Self::Reference { .. } => "reference",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

// ============================================================================
// Raw Schema (document form)
// ============================================================================

/// `type` as written in the document.
///
/// OpenAPI 3.1 allows a list such as `[string, "null"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawType {
    Name(String),
    List(Vec<serde_yaml::Value>),
}

impl RawType {
    /// The first non-null type name.
    fn primary(&self) -> Option<&str> {
        match self {
            RawType::Name(name) => Some(name),
            RawType::List(names) => names
                .iter()
                .filter_map(serde_yaml::Value::as_str)
                .find(|name| *name != "null"),
        }
    }
}

/// Schema object as it appears in an OpenAPI document.
///
/// Only the keywords that influence generation are kept; everything
/// else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSchema {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    #[serde(rename = "type")]
    pub schema_type: Option<RawType>,

    pub format: Option<String>,

    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,

    pub properties: Option<IndexMap<String, RawSchema>>,

    pub items: Option<Box<RawSchema>>,

    #[serde(rename = "allOf")]
    pub all_of: Option<IgnoredAny>,

    #[serde(rename = "anyOf")]
    pub any_of: Option<IgnoredAny>,

    #[serde(rename = "oneOf")]
    pub one_of: Option<IgnoredAny>,

    pub not: Option<IgnoredAny>,
}

impl RawSchema {
    fn describe_untyped(&self) -> String {
        let keywords = [
            ("allOf", self.all_of.is_some()),
            ("anyOf", self.any_of.is_some()),
            ("oneOf", self.one_of.is_some()),
            ("not", self.not.is_some()),
        ];
        match keywords.iter().find(|(_, present)| *present) {
            Some((keyword, _)) => format!("composition keyword '{keyword}'"),
            None => "schema without type".to_string(),
        }
    }
}

impl From<RawSchema> for SchemaNode {
    fn from(raw: RawSchema) -> Self {
        if let Some(reference) = raw.reference {
            return Self::Reference { reference };
        }

        let object = |properties: Option<IndexMap<String, RawSchema>>| Self::Object {
            properties: properties
                .unwrap_or_default()
                .into_iter()
                .map(|(name, schema)| (name, Self::from(schema)))
                .collect(),
        };

        match raw.schema_type.as_ref().and_then(RawType::primary) {
            Some("object") => object(raw.properties),
            Some("array") => Self::Array {
                items: raw.items.map(|items| Box::new(Self::from(*items))),
            },
            Some("string") => match raw.format.as_deref() {
                Some("date-time") => Self::DateTime,
                _ => Self::String {
                    max_length: raw
                        .max_length
                        .map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
                },
            },
            Some("integer") => Self::Integer,
            Some("number") => Self::Number,
            Some("boolean") => Self::Boolean,
            Some(other) => Self::Unsupported {
                description: format!("type '{other}'"),
            },
            None if raw.properties.is_some() => object(raw.properties),
            None => Self::Unsupported {
                description: raw.describe_untyped(),
            },
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Named component schemas, keyed by the last segment of their reference.
///
/// Iteration follows document order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, SchemaNode>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema. A later insert under the same name replaces the earlier one
    /// and keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, schema: SchemaNode) {
        self.schemas.insert(name.into(), schema);
    }

    /// Get a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Get a schema by name, failing if it is absent.
    pub fn require(&self, name: &str) -> Result<&SchemaNode, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::SchemaNotFound(name.to_string()))
    }

    /// All schema names in document order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, SchemaNode)> for SchemaRegistry {
    fn from_iter<T: IntoIterator<Item = (S, SchemaNode)>>(iter: T) -> Self {
        Self {
            schemas: iter
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
        }
    }
}

impl From<IndexMap<String, RawSchema>> for SchemaRegistry {
    fn from(raw: IndexMap<String, RawSchema>) -> Self {
        raw.into_iter()
            .map(|(name, schema)| (name, SchemaNode::from(schema)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
