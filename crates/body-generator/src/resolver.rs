//! Reference resolution against the schema registry.

use crate::generator::GeneratorError;
use api_schema::{SchemaNode, SchemaRegistry};

/// Default limit on chained `$ref` lookups.
pub const DEFAULT_MAX_REFERENCE_HOPS: usize = 32;

/// Name a reference points to: the segment after the last `/`.
///
/// `#/components/schemas/Pet` resolves to `Pet`; a bare `Pet` is its own name.
pub fn reference_name(reference: &str) -> &str {
    match reference.rfind('/') {
        Some(idx) => &reference[idx + 1..],
        None => reference,
    }
}

/// Follow references until a concrete node is reached.
///
/// Non-reference nodes are returned unchanged. At most `max_hops` registry
/// lookups are made, so self-referencing aliases fail instead of looping.
pub fn resolve<'a>(
    node: &'a SchemaNode,
    registry: &'a SchemaRegistry,
    max_hops: usize,
) -> Result<&'a SchemaNode, GeneratorError> {
    let start = match node {
        SchemaNode::Reference { reference } => reference,
        _ => return Ok(node),
    };

    let mut current = node;
    let mut hops = 0;
    while let SchemaNode::Reference { reference } = current {
        if hops == max_hops {
            return Err(GeneratorError::ReferenceChainTooLong {
                reference: start.clone(),
                max_hops,
            });
        }
        let name = reference_name(reference);
        current = registry
            .get(name)
            .ok_or_else(|| GeneratorError::UnresolvableReference {
                reference: reference.clone(),
                name: name.to_string(),
            })?;
        hops += 1;
    }

    Ok(current)
}

/// Resolver bound to one registry for the duration of a generation call.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    registry: &'a SchemaRegistry,
    max_hops: usize,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(registry: &'a SchemaRegistry, max_hops: usize) -> Self {
        Self { registry, max_hops }
    }

    /// Resolve a node to its concrete schema.
    pub fn resolve<'n>(&self, node: &'n SchemaNode) -> Result<&'n SchemaNode, GeneratorError>
    where
        'a: 'n,
    {
        resolve(node, self.registry, self.max_hops)
    }
}
