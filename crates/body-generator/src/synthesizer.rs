//! Recursive schema-to-value synthesis.
//!
//! The synthesizer walks a schema tree, resolving references through
//! [`SchemaResolver`] and drawing scalar values from the leaf generators.
//! Randomness comes only from the RNG passed in by the caller.

use crate::generator::GeneratorError;
use crate::generators::{array, numeric, text, timestamp};
use crate::policy::GeneratorPolicy;
use crate::resolver::SchemaResolver;
use api_schema::{GeneratedValue, SchemaNode, SchemaRegistry};
use indexmap::IndexMap;
use rand::Rng;
use tracing::debug;

/// Synthesizes values for schema nodes against one registry.
#[derive(Debug, Clone, Copy)]
pub struct ValueSynthesizer<'a> {
    resolver: SchemaResolver<'a>,
    policy: &'a GeneratorPolicy,
}

impl<'a> ValueSynthesizer<'a> {
    /// Create a synthesizer borrowing the registry and policy.
    pub fn new(registry: &'a SchemaRegistry, policy: &'a GeneratorPolicy) -> Self {
        Self {
            resolver: SchemaResolver::new(registry, policy.max_reference_hops),
            policy,
        }
    }

    /// Synthesize one value for `node`.
    ///
    /// A root reference is always resolved, even when the policy disables
    /// reference resolution for nested fields. Fails only when a reference
    /// cannot be resolved. Unsupported kinds and arrays without an element
    /// schema produce null.
    pub fn synthesize<R: Rng>(
        &self,
        node: &SchemaNode,
        rng: &mut R,
    ) -> Result<GeneratedValue, GeneratorError> {
        self.synthesize_at(node, rng, 0)
    }

    /// Synthesize the fields of an object schema.
    ///
    /// `node` may be a reference to an object. Any other kind is an error.
    pub fn synthesize_object<R: Rng>(
        &self,
        node: &SchemaNode,
        rng: &mut R,
    ) -> Result<IndexMap<String, GeneratedValue>, GeneratorError> {
        match self.resolver.resolve(node)? {
            SchemaNode::Object { properties } => self.synthesize_fields(properties, rng, 0),
            other => Err(GeneratorError::NotAnObject { kind: other.kind() }),
        }
    }

    fn synthesize_at<R: Rng>(
        &self,
        node: &SchemaNode,
        rng: &mut R,
        depth: usize,
    ) -> Result<GeneratedValue, GeneratorError> {
        if depth > self.policy.max_depth {
            debug!(depth, kind = node.kind(), "Truncating value beyond max depth");
            return Ok(GeneratedValue::Null);
        }

        let node = match node {
            SchemaNode::Reference { reference }
                if depth > 0 && !self.policy.resolve_references =>
            {
                debug!(%reference, "Reference resolution disabled, emitting null");
                return Ok(GeneratedValue::Null);
            }
            SchemaNode::Reference { .. } => self.resolver.resolve(node)?,
            _ => node,
        };

        let value = match node {
            SchemaNode::Object { properties } => {
                GeneratedValue::Object(self.synthesize_fields(properties, rng, depth)?)
            }
            SchemaNode::Array { items: Some(items) } => {
                let length = array::choose_length(
                    rng,
                    self.policy.array_min_length,
                    self.policy.array_max_length,
                );
                let elements = (0..length)
                    .map(|_| self.synthesize_at(items, rng, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                GeneratedValue::Array(elements)
            }
            SchemaNode::Array { items: None } => {
                debug!("Array schema has no items, emitting null");
                GeneratedValue::Null
            }
            SchemaNode::String { max_length } => {
                let length = max_length.unwrap_or(self.policy.default_string_length);
                if length > self.policy.max_string_length {
                    debug!(length, cap = self.policy.max_string_length, "Capping string length");
                }
                text::generate_alphanumeric(rng, length.min(self.policy.max_string_length))
            }
            SchemaNode::Integer => numeric::generate_integer(rng, self.policy.integer_bound),
            SchemaNode::Number => numeric::generate_number(rng, self.policy.number_scale),
            SchemaNode::Boolean => numeric::generate_bool(rng),
            SchemaNode::DateTime => timestamp::generate_date_time(rng),
            SchemaNode::Unsupported { description } => {
                debug!(%description, "Unsupported schema, emitting null");
                GeneratedValue::Null
            }
            // The resolver never returns a reference
            SchemaNode::Reference { .. } => GeneratedValue::Null,
        };

        Ok(value)
    }

    fn synthesize_fields<R: Rng>(
        &self,
        properties: &IndexMap<String, SchemaNode>,
        rng: &mut R,
        depth: usize,
    ) -> Result<IndexMap<String, GeneratedValue>, GeneratorError> {
        properties
            .iter()
            .map(|(name, field)| {
                let value = self.synthesize_at(field, rng, depth + 1)?;
                Ok((name.clone(), value))
            })
            .collect()
    }
}
