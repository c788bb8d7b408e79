//! Generator policy loading.
//!
//! The policy starts from the defaults, is replaced by the YAML file given
//! with `--policy` if any, and individual CLI flags override single fields.

use crate::GenerateOpts;
use anyhow::Context;
use body_generator::GeneratorPolicy;
use std::path::Path;

/// Load a policy from a YAML file. Fields missing from the file keep their defaults.
pub fn load_policy_file(path: &Path) -> anyhow::Result<GeneratorPolicy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file: {path:?}"))?;
    let policy: GeneratorPolicy = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse policy YAML: {path:?}"))?;
    Ok(policy)
}

/// Build the effective policy for a run.
pub fn resolve_policy(opts: &GenerateOpts) -> anyhow::Result<GeneratorPolicy> {
    let mut policy = match &opts.policy {
        Some(path) => load_policy_file(path)?,
        None => GeneratorPolicy::default(),
    };

    if let Some(length) = opts.string_length {
        policy.default_string_length = length;
    }
    if let Some(cap) = opts.max_string_length {
        policy.max_string_length = cap;
    }
    if let Some(min) = opts.array_min_length {
        policy.array_min_length = min;
    }
    if let Some(max) = opts.array_max_length {
        policy.array_max_length = max;
    }
    if let Some(scale) = opts.number_scale {
        policy.number_scale = scale;
    }
    if let Some(depth) = opts.max_depth {
        policy.max_depth = depth;
    }
    if opts.no_references {
        policy.resolve_references = false;
    }

    policy.validate().context("Invalid generation policy")?;
    tracing::debug!(?policy, "Resolved generation policy");
    Ok(policy)
}
