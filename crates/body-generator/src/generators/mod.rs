//! Leaf value generators for scalar schema kinds.
//!
//! Each generator draws from the caller's RNG only, so a seeded RNG
//! reproduces the same values. Containers (objects and arrays) recurse
//! through [`crate::synthesizer::ValueSynthesizer`] instead.

pub mod array;
pub mod numeric;
pub mod text;
pub mod timestamp;
