//! Request body generator for openapi-body-gen.
//!
//! This crate turns a schema tree from an OpenAPI document into a
//! synthetic JSON value. References are resolved against the document's
//! component registry and every unconstrained choice is drawn from an
//! explicit RNG, so a seeded [`BodyGenerator`] is reproducible.
//!
//! # Architecture
//!
//! ```text
//! ApiDocument (YAML/JSON)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  BodyGenerator   │
//! │                  │
//! │  - policy        │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌────────────────┐
//! │ ValueSynthesizer │────▶│ SchemaResolver │
//! └────────┬─────────┘     └────────────────┘
//!          │
//!          ▼
//!    GeneratedValue (object / array / scalar / null)
//! ```
//!
//! # Example
//!
//! ```rust
//! use api_schema::{ApiDocument, HttpMethod};
//! use body_generator::{BodyGenerator, GeneratorPolicy};
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
//!           maxLength: 5
//!         age:
//!           type: integer
//! "#).unwrap();
//!
//! let mut generator = BodyGenerator::new(GeneratorPolicy::default(), 42).unwrap();
//! let body = generator.generate_for_operation(&doc, "/pet", HttpMethod::Post).unwrap();
//! assert_eq!(body.get("name").unwrap().as_str().unwrap().len(), 5);
//! ```
//!
//! # Value policy
//!
//! - `string` - `maxLength` characters from `[A-Za-z0-9]` (default 20,
//!   capped at 4096)
//! - `integer` - uniform in `[0, 1000)`
//! - `number` - uniform in `[0.0, 1000.0)`
//! - `boolean` - fair coin
//! - `date-time` - `YYYY-MM-DDTHH:MM:SSZ` with year in `[2000, 2020)`
//! - `array` - 1 to 5 independently generated elements
//! - `object` - every declared field, in declaration order
//!
//! Bounds are tunable through [`GeneratorPolicy`].

pub mod generator;
pub mod generators;
pub mod policy;
pub mod resolver;
pub mod synthesizer;

// Re-exports for convenience
pub use generator::{BodyGenerator, GeneratorError};
pub use policy::GeneratorPolicy;
pub use resolver::{reference_name, resolve, SchemaResolver};
pub use synthesizer::ValueSynthesizer;
