//! openapi-body-gen library
//!
//! Generates sample JSON request bodies from OpenAPI 3 documents, for manual
//! testing and exploratory API calls.
//!
//! # Features
//!
//! - Operation mode: the `application/json` request body of a path + method
//! - Schema mode: any named component schema
//! - `$ref` resolution through `components.schemas`, including chained aliases
//! - Seedable output and tunable bounds via a YAML policy file
//!
//! # CLI Usage
//!
//! ```bash
//! # Body for POST /pet
//! openapi-body-gen operation --document openapi.yaml --path /pet --method post
//!
//! # Sample of a component schema, written to a file
//! openapi-body-gen schema --document openapi.yaml --name Pet --output pet.json
//!
//! # What can be generated
//! openapi-body-gen endpoints --document openapi.yaml
//! openapi-body-gen schemas --document openapi.yaml
//! ```

use anyhow::Context;
use api_schema::{ApiDocument, GeneratedValue, HttpMethod};
use body_generator::BodyGenerator;
use clap::Args;
use std::path::{Path, PathBuf};

pub mod config;
pub mod output;

#[derive(Args, Clone, Debug)]
pub struct DocumentOpts {
    /// Path to the OpenAPI document (YAML or JSON)
    #[arg(long, short = 'd', value_name = "PATH", env = "BODYGEN_DOCUMENT")]
    pub document: PathBuf,
}

#[derive(Args, Clone, Debug)]
pub struct GenerateOpts {
    /// Random seed for deterministic generation (same seed = same body)
    #[arg(long, env = "BODYGEN_SEED")]
    pub seed: Option<u64>,

    /// Generation policy YAML file
    #[arg(long, value_name = "PATH", env = "BODYGEN_POLICY")]
    pub policy: Option<PathBuf>,

    /// Length of strings without a maxLength
    #[arg(long)]
    pub string_length: Option<usize>,

    /// Upper limit on any generated string, including declared maxLength
    #[arg(long)]
    pub max_string_length: Option<usize>,

    /// Minimum number of array elements
    #[arg(long)]
    pub array_min_length: Option<usize>,

    /// Maximum number of array elements
    #[arg(long)]
    pub array_max_length: Option<usize>,

    /// Numbers are drawn from [0, scale)
    #[arg(long)]
    pub number_scale: Option<f64>,

    /// Values nested deeper than this are emitted as null
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Emit null for $ref fields instead of following them
    #[arg(long)]
    pub no_references: bool,

    /// Number of bodies to generate (more than one prints a JSON array)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,
}

#[derive(Args, Clone, Debug, Default)]
pub struct OutputOpts {
    /// Write the result to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

/// What to generate a body for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// JSON request body of an operation
    Operation { path: String, method: HttpMethod },

    /// Named component schema
    Schema { name: String },
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Operation { path, method } => write!(f, "{method} {path}"),
            Target::Schema { name } => write!(f, "schema {name}"),
        }
    }
}

/// Load an OpenAPI document from disk.
pub fn load_document(path: &Path) -> anyhow::Result<ApiDocument> {
    let document = ApiDocument::from_file(path)
        .with_context(|| format!("Failed to load OpenAPI document from {path:?}"))?;

    tracing::info!(
        "Loaded {:?} ({} paths, {} schemas)",
        document.title.as_deref().unwrap_or("untitled document"),
        document.paths.len(),
        document.schemas.len()
    );
    Ok(document)
}

/// Generate `opts.count` bodies for a target.
pub fn generate(
    document: &ApiDocument,
    target: &Target,
    opts: &GenerateOpts,
) -> anyhow::Result<Vec<GeneratedValue>> {
    let policy = config::resolve_policy(opts)?;
    let mut generator = match opts.seed {
        Some(seed) => BodyGenerator::new(policy, seed)?,
        None => BodyGenerator::from_entropy(policy)?,
    };

    tracing::info!("Generating {} body(ies) for {}", opts.count, target);

    let bodies = (0..opts.count)
        .map(|_| {
            let body = match target {
                Target::Operation { path, method } => {
                    generator.generate_for_operation(document, path, *method)
                }
                Target::Schema { name } => generator.generate_for_schema(document, name),
            };
            body.with_context(|| format!("Failed to generate body for {target}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::debug!("Generated {} body(ies)", generator.generated_count());
    Ok(bodies)
}
