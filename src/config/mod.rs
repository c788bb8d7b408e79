//! Configuration loading.

pub mod policy;

pub use policy::{load_policy_file, resolve_policy};
