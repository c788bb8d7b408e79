//! Core types for openapi-body-gen.
//!
//! This crate provides the types shared by the generator and the CLI:
//!
//! - [`SchemaNode`] - Closed set of data shapes found in an OpenAPI document
//! - [`SchemaRegistry`] - Named component schemas, targets of `$ref`
//! - [`GeneratedValue`] - JSON-compatible value tree produced by the generator
//! - [`ApiDocument`] - A loaded OpenAPI 3 document with operation lookup
//!
//! # Architecture
//!
//! ```text
//! api-schema (this crate)
//!    │
//!    └─── body-generator  (resolves references, synthesizes values)
//!            │
//!            └─── openapi-body-gen  (CLI: load, generate, print)
//! ```
//!
//! # Example
//!
//! ```rust
//! use api_schema::{ApiDocument, HttpMethod, SchemaNode};
//!
//! let doc = ApiDocument::from_yaml(r#"
//! openapi: 3.0.0
//! paths:
//!   /pet:
//!     post:
//!       requestBody:
//!         content:
//!           application/json:
//!             schema:
//!               $ref: '#/components/schemas/Pet'
//! components:
//!   schemas:
//!     Pet:
//!       type: object
//!       properties:
//!         name:
//!           type: string
//! "#).unwrap();
//!
//! let body = doc.request_body_schema("/pet", HttpMethod::Post).unwrap();
//! assert!(body.is_reference());
//! assert!(matches!(doc.schema("Pet").unwrap(), SchemaNode::Object { .. }));
//! ```

pub mod document;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use document::{
    ApiDocument, EndpointSummary, HttpMethod, OperationDefinition, PathDefinition,
    RequestBodyDefinition,
};
pub use schema::{SchemaError, SchemaNode, SchemaRegistry};
pub use values::GeneratedValue;
