//! OpenAPI 3 document loading and operation lookup.
//!
//! Only the parts needed for request body generation are kept: the
//! `paths` section with each operation's request body, and the
//! `components.schemas` registry.

use crate::schema::{RawSchema, SchemaError, SchemaNode, SchemaRegistry};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const REQUEST_BODY_REF_PREFIX: &str = "#/components/requestBodies/";

/// Request body `$ref` chains longer than this are rejected.
const MAX_REQUEST_BODY_HOPS: usize = 8;

/// HTTP methods an OpenAPI path item can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// All methods, in the order OpenAPI lists them on a path item.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lowercase key used in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl FromStr for HttpMethod {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| SchemaError::UnknownMethod(s.to_string()))
    }
}

// ============================================================================
// Raw Document (deserialized form)
// ============================================================================

/// Version fields are often written unquoted (`version: 1.0`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Text(String),
    Number(serde_yaml::Number),
}

impl fmt::Display for RawVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawVersion::Text(text) => f.write_str(text),
            RawVersion::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    openapi: Option<RawVersion>,
    info: Option<RawInfo>,
    paths: Option<IndexMap<String, Option<RawPathItem>>>,
    components: Option<RawComponents>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInfo {
    title: Option<String>,
    version: Option<RawVersion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawComponents {
    schemas: Option<IndexMap<String, RawSchema>>,

    #[serde(rename = "requestBodies")]
    request_bodies: Option<IndexMap<String, RawRequestBody>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPathItem {
    get: Option<RawOperation>,
    put: Option<RawOperation>,
    post: Option<RawOperation>,
    delete: Option<RawOperation>,
    options: Option<RawOperation>,
    head: Option<RawOperation>,
    patch: Option<RawOperation>,
    trace: Option<RawOperation>,
}

impl RawPathItem {
    fn take(&mut self, method: HttpMethod) -> Option<RawOperation> {
        match method {
            HttpMethod::Get => self.get.take(),
            HttpMethod::Put => self.put.take(),
            HttpMethod::Post => self.post.take(),
            HttpMethod::Delete => self.delete.take(),
            HttpMethod::Options => self.options.take(),
            HttpMethod::Head => self.head.take(),
            HttpMethod::Patch => self.patch.take(),
            HttpMethod::Trace => self.trace.take(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOperation {
    summary: Option<String>,

    #[serde(rename = "operationId")]
    operation_id: Option<String>,

    #[serde(rename = "requestBody")]
    request_body: Option<RawRequestBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawRequestBody {
    #[serde(rename = "$ref")]
    reference: Option<String>,

    content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawMediaType {
    schema: Option<RawSchema>,
}

// ============================================================================
// Document Model
// ============================================================================

/// Request body of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBodyDefinition {
    /// Declared media types, in document order
    pub media_types: Vec<String>,

    /// Schema of the JSON media type, if any
    pub json_schema: Option<SchemaNode>,
}

/// One operation (method) on a path.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
    pub request_body: Option<RequestBodyDefinition>,
}

/// A path and its operations.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDefinition {
    pub path: String,
    pub operations: Vec<OperationDefinition>,
}

impl PathDefinition {
    /// Get the operation for a method.
    pub fn operation(&self, method: HttpMethod) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| op.method == method)
    }
}

/// Row of the endpoint listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSummary {
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub has_json_body: bool,
}

/// A loaded OpenAPI document.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    /// `info.title`
    pub title: Option<String>,

    /// `info.version`
    pub version: Option<String>,

    /// Paths in document order
    pub paths: Vec<PathDefinition>,

    /// `components.schemas`
    pub schemas: SchemaRegistry,
}

impl ApiDocument {
    /// Load a document from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a document from YAML or JSON text.
    pub fn from_yaml(text: &str) -> Result<Self, SchemaError> {
        let raw: RawDocument = serde_yaml::from_str(text)?;

        match &raw.openapi {
            Some(version) if version.to_string().starts_with('3') => {}
            Some(version) => {
                return Err(SchemaError::InvalidDocument(format!(
                    "unsupported OpenAPI version '{version}'"
                )))
            }
            None => {
                return Err(SchemaError::InvalidDocument(
                    "missing 'openapi' version field".to_string(),
                ))
            }
        }

        let info = raw.info.unwrap_or_default();
        let components = raw.components.unwrap_or_default();
        let request_bodies = components.request_bodies.unwrap_or_default();

        let paths = raw
            .paths
            .unwrap_or_default()
            .into_iter()
            .map(|(path, item)| build_path(path, item.unwrap_or_default(), &request_bodies))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: info.title,
            version: info.version.map(|v| v.to_string()),
            paths,
            schemas: components.schemas.map(SchemaRegistry::from).unwrap_or_default(),
        })
    }

    /// Get a path definition.
    pub fn path(&self, path: &str) -> Option<&PathDefinition> {
        self.paths.iter().find(|p| p.path == path)
    }

    /// Get the operation for a path and method.
    pub fn operation(
        &self,
        path: &str,
        method: HttpMethod,
    ) -> Result<&OperationDefinition, SchemaError> {
        let path_def = self
            .path(path)
            .ok_or_else(|| SchemaError::PathNotFound(path.to_string()))?;

        path_def
            .operation(method)
            .ok_or_else(|| SchemaError::OperationNotFound {
                path: path.to_string(),
                method: method.to_string(),
            })
    }

    /// Get the JSON request body schema of an operation.
    pub fn request_body_schema(
        &self,
        path: &str,
        method: HttpMethod,
    ) -> Result<&SchemaNode, SchemaError> {
        let operation = self.operation(path, method)?;

        let body = operation
            .request_body
            .as_ref()
            .ok_or_else(|| SchemaError::NoRequestBody {
                path: path.to_string(),
                method: method.to_string(),
            })?;

        body.json_schema
            .as_ref()
            .ok_or_else(|| SchemaError::NoJsonContent {
                path: path.to_string(),
                method: method.to_string(),
            })
    }

    /// Get a named component schema.
    pub fn schema(&self, name: &str) -> Result<&SchemaNode, SchemaError> {
        self.schemas.require(name)
    }

    /// All operations, in document order.
    pub fn endpoints(&self) -> Vec<EndpointSummary> {
        self.paths
            .iter()
            .flat_map(|path| {
                path.operations.iter().map(move |op| EndpointSummary {
                    path: path.path.clone(),
                    method: op.method,
                    summary: op.summary.clone(),
                    has_json_body: op
                        .request_body
                        .as_ref()
                        .is_some_and(|b| b.json_schema.is_some()),
                })
            })
            .collect()
    }

    /// Component schema names, in document order.
    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.names()
    }
}

fn build_path(
    path: String,
    mut item: RawPathItem,
    request_bodies: &IndexMap<String, RawRequestBody>,
) -> Result<PathDefinition, SchemaError> {
    let mut operations = Vec::new();
    for method in HttpMethod::ALL {
        let Some(op) = item.take(method) else {
            continue;
        };
        let request_body = op
            .request_body
            .map(|body| build_request_body(&path, method, body, request_bodies))
            .transpose()?;
        operations.push(OperationDefinition {
            method,
            summary: op.summary,
            operation_id: op.operation_id,
            request_body,
        });
    }

    Ok(PathDefinition { path, operations })
}

fn build_request_body(
    path: &str,
    method: HttpMethod,
    mut body: RawRequestBody,
    request_bodies: &IndexMap<String, RawRequestBody>,
) -> Result<RequestBodyDefinition, SchemaError> {
    let mut hops = 0;
    while let Some(reference) = body.reference.take() {
        hops += 1;
        if hops > MAX_REQUEST_BODY_HOPS {
            return Err(SchemaError::InvalidDocument(format!(
                "request body of '{method} {path}' has a $ref chain longer than {MAX_REQUEST_BODY_HOPS}"
            )));
        }
        let name = reference.strip_prefix(REQUEST_BODY_REF_PREFIX).ok_or_else(|| {
            SchemaError::InvalidDocument(format!(
                "request body of '{method} {path}' has unsupported $ref '{reference}'"
            ))
        })?;
        body = request_bodies.get(name).cloned().ok_or_else(|| {
            SchemaError::InvalidDocument(format!(
                "request body of '{method} {path}' references missing '{reference}'"
            ))
        })?;
    }

    let media_types: Vec<String> = body.content.keys().cloned().collect();

    let json_media_type = media_types
        .iter()
        .position(|mt| mt == "application/json")
        .or_else(|| media_types.iter().position(|mt| is_json_media_type(mt)));

    let json_schema = json_media_type
        .and_then(|index| body.content.swap_remove_index(index))
        .and_then(|(_, media)| media.schema)
        .map(SchemaNode::from);

    Ok(RequestBodyDefinition {
        media_types,
        json_schema,
    })
}

/// `application/json`, with parameters, or a structured `+json` suffix.
fn is_json_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PETSTORE: &str = r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pet:
    post:
      summary: Add a new pet
      operationId: addPet
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
          application/xml:
            schema:
              $ref: '#/components/schemas/Pet'
    put:
      summary: Update a pet
      requestBody:
        $ref: '#/components/requestBodies/PetBody'
    get:
      summary: List pets
  /pet/upload:
    post:
      requestBody:
        content:
          application/octet-stream:
            schema:
              type: string
  /orders:
    post:
      requestBody:
        content:
          application/vnd.shop+json; charset=utf-8:
            schema:
              type: object
              properties:
                quantity:
                  type: integer
components:
  requestBodies:
    PetBody:
      content:
        application/json:
          schema:
            $ref: '#/components/schemas/Pet'
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
          maxLength: 10
        photoUrls:
          type: array
          items:
            type: string
    Tag:
      type: object
"#;

    #[test]
    fn test_parse_document_metadata() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();

        assert_eq!(doc.title.as_deref(), Some("Petstore"));
        assert_eq!(doc.version.as_deref(), Some("1.0.0"));
        assert_eq!(doc.paths.len(), 3);
        assert_eq!(doc.schema_names(), vec!["Pet", "Tag"]);
    }

    #[test]
    fn test_request_body_schema() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();

        let schema = doc.request_body_schema("/pet", HttpMethod::Post).unwrap();
        assert_eq!(schema, &SchemaNode::reference("#/components/schemas/Pet"));

        let op = doc.operation("/pet", HttpMethod::Post).unwrap();
        let body = op.request_body.as_ref().unwrap();
        assert_eq!(body.media_types, vec!["application/json", "application/xml"]);
        assert_eq!(op.operation_id.as_deref(), Some("addPet"));
    }

    #[test]
    fn test_request_body_ref_is_followed() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();

        let schema = doc.request_body_schema("/pet", HttpMethod::Put).unwrap();
        assert_eq!(schema, &SchemaNode::reference("#/components/schemas/Pet"));
    }

    #[test]
    fn test_structured_json_media_type() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();

        let schema = doc.request_body_schema("/orders", HttpMethod::Post).unwrap();
        assert_eq!(schema, &SchemaNode::object([("quantity", SchemaNode::Integer)]));
    }

    #[test]
    fn test_lookup_errors() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();

        assert!(matches!(
            doc.request_body_schema("/missing", HttpMethod::Post),
            Err(SchemaError::PathNotFound(p)) if p == "/missing"
        ));
        assert!(matches!(
            doc.request_body_schema("/pet", HttpMethod::Delete),
            Err(SchemaError::OperationNotFound { .. })
        ));
        assert!(matches!(
            doc.request_body_schema("/pet", HttpMethod::Get),
            Err(SchemaError::NoRequestBody { .. })
        ));
        assert!(matches!(
            doc.request_body_schema("/pet/upload", HttpMethod::Post),
            Err(SchemaError::NoJsonContent { .. })
        ));
        assert!(matches!(doc.schema("Nope"), Err(SchemaError::SchemaNotFound(_))));
    }

    #[test]
    fn test_endpoints_listing() {
        let doc = ApiDocument::from_yaml(PETSTORE).unwrap();
        let endpoints = doc.endpoints();

        let rows: Vec<(String, HttpMethod, bool)> = endpoints
            .iter()
            .map(|e| (e.path.clone(), e.method, e.has_json_body))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("/pet".to_string(), HttpMethod::Get, false),
                ("/pet".to_string(), HttpMethod::Put, true),
                ("/pet".to_string(), HttpMethod::Post, true),
                ("/pet/upload".to_string(), HttpMethod::Post, false),
                ("/orders".to_string(), HttpMethod::Post, true),
            ]
        );
        assert_eq!(endpoints[0].summary.as_deref(), Some("List pets"));
    }

    #[test]
    fn test_http_method_parsing() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert!(matches!(
            "fetch".parse::<HttpMethod>(),
            Err(SchemaError::UnknownMethod(m)) if m == "fetch"
        ));
    }

    #[test]
    fn test_json_document() {
        let json = r#"{
            "openapi": "3.1.0",
            "paths": {},
            "components": {"schemas": {"Id": {"type": "integer"}}}
        }"#;
        let doc = ApiDocument::from_yaml(json).unwrap();
        assert_eq!(doc.schema("Id").unwrap(), &SchemaNode::Integer);
        assert!(doc.endpoints().is_empty());
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            ApiDocument::from_yaml("openapi: [unclosed"),
            Err(SchemaError::YamlError(_))
        ));
        assert!(matches!(
            ApiDocument::from_yaml("- just\n- a list\n"),
            Err(SchemaError::YamlError(_))
        ));
        assert!(matches!(
            ApiDocument::from_yaml("swagger: '2.0'\npaths: {}\n"),
            Err(SchemaError::InvalidDocument(_))
        ));
        assert!(matches!(
            ApiDocument::from_yaml("openapi: 2.0\n"),
            Err(SchemaError::InvalidDocument(_))
        ));
        assert!(matches!(
            ApiDocument::from_yaml("openapi: 3.0.0\npaths: 5\n"),
            Err(SchemaError::YamlError(_))
        ));
        assert!(matches!(
            ApiDocument::from_yaml("openapi: 3.0.0\ncomponents:\n  schemas: [1, 2]\n"),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_unquoted_versions_and_empty_path_items() {
        let yaml = r#"
openapi: 3.0
info:
  title: Minimal
  version: 2.5
paths:
  /health:
  /status:
    get:
"#;
        let doc = ApiDocument::from_yaml(yaml).unwrap();

        assert_eq!(doc.version.as_deref(), Some("2.5"));
        assert_eq!(doc.paths.len(), 2);
        assert!(doc.endpoints().is_empty());
        assert!(doc.schemas.is_empty());
    }

    #[test]
    fn test_missing_request_body_ref() {
        let yaml = r#"
openapi: 3.0.0
paths:
  /x:
    post:
      requestBody:
        $ref: '#/components/requestBodies/Nope'
"#;
        assert!(matches!(
            ApiDocument::from_yaml(yaml),
            Err(SchemaError::InvalidDocument(msg)) if msg.contains("Nope")
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PETSTORE.as_bytes()).unwrap();

        let doc = ApiDocument::from_file(file.path()).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Petstore"));

        assert!(matches!(
            ApiDocument::from_file("/definitely/not/here.yaml"),
            Err(SchemaError::IoError(_))
        ));
    }
}
