//! Main body generator for producing request payloads.

use crate::policy::GeneratorPolicy;
use crate::synthesizer::ValueSynthesizer;
use api_schema::{ApiDocument, GeneratedValue, HttpMethod, SchemaNode, SchemaRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Reference names a schema that is not in the registry
    #[error("Unresolvable reference '{reference}': no schema named '{name}'")]
    UnresolvableReference { reference: String, name: String },

    /// Reference chain did not reach a concrete schema
    #[error("Reference '{reference}' did not resolve within {max_hops} hops")]
    ReferenceChainTooLong { reference: String, max_hops: usize },

    /// Object synthesis requested for a non-object schema
    #[error("Expected an object schema, found {kind}")]
    NotAnObject { kind: &'static str },

    /// Policy bounds are unusable
    #[error("Invalid generator policy: {0}")]
    InvalidPolicy(String),

    /// Schema or document lookup error
    #[error("Schema error: {0}")]
    SchemaError(#[from] api_schema::SchemaError),
}

/// Body generator that owns the policy and random source.
///
/// With [`BodyGenerator::new`] the RNG is seeded, so the same seed, policy
/// and document always produce the same bodies.
pub struct BodyGenerator {
    /// Bounds used by the synthesizer
    policy: GeneratorPolicy,
    /// Random number generator
    rng: StdRng,
    /// Number of bodies generated so far
    generated: u64,
}

impl BodyGenerator {
    /// Create a generator with a seeded RNG.
    pub fn new(policy: GeneratorPolicy, seed: u64) -> Result<Self, GeneratorError> {
        Self::with_rng(policy, StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating system entropy.
    pub fn from_entropy(policy: GeneratorPolicy) -> Result<Self, GeneratorError> {
        Self::with_rng(policy, StdRng::from_entropy())
    }

    fn with_rng(policy: GeneratorPolicy, rng: StdRng) -> Result<Self, GeneratorError> {
        policy.validate()?;
        Ok(Self {
            policy,
            rng,
            generated: 0,
        })
    }

    /// Number of bodies generated so far.
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Generate a value for an arbitrary root schema.
    pub fn generate(
        &mut self,
        root: &SchemaNode,
        registry: &SchemaRegistry,
    ) -> Result<GeneratedValue, GeneratorError> {
        debug!(kind = root.kind(), "Generating body");
        let value = ValueSynthesizer::new(registry, &self.policy).synthesize(root, &mut self.rng)?;
        self.generated += 1;
        Ok(value)
    }

    /// Generate a value for a named component schema.
    pub fn generate_for_schema(
        &mut self,
        document: &ApiDocument,
        name: &str,
    ) -> Result<GeneratedValue, GeneratorError> {
        let root = document.schema(name)?;
        self.generate(root, &document.schemas)
    }

    /// Generate the JSON request body of an operation.
    pub fn generate_for_operation(
        &mut self,
        document: &ApiDocument,
        path: &str,
        method: HttpMethod,
    ) -> Result<GeneratedValue, GeneratorError> {
        let root = document.request_body_schema(path, method)?;
        self.generate(root, &document.schemas)
    }
}
