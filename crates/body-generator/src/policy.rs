//! Tunable bounds used by the value synthesizer.

use crate::generator::GeneratorError;
use crate::generators::array::{DEFAULT_ARRAY_MAX_LENGTH, DEFAULT_ARRAY_MIN_LENGTH};
use crate::generators::numeric::{DEFAULT_INTEGER_BOUND, DEFAULT_NUMBER_SCALE};
use crate::generators::text::{DEFAULT_MAX_STRING_LENGTH, DEFAULT_STRING_LENGTH};
use crate::resolver::DEFAULT_MAX_REFERENCE_HOPS;
use serde::{Deserialize, Serialize};

/// Default depth past which nested values are truncated to null.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Generation policy.
///
/// Every field has a default, so a policy file only needs the values it
/// changes:
///
/// ```yaml
/// array_max_length: 3
/// number_scale: 100.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorPolicy {
    /// String length when the schema has no `maxLength`
    pub default_string_length: usize,

    /// Upper limit on generated string length, applied to `maxLength` too
    pub max_string_length: usize,

    /// Integers are drawn from `[0, integer_bound)`
    pub integer_bound: i64,

    /// Numbers are drawn from `[0, number_scale)`
    pub number_scale: f64,

    /// Minimum array length (inclusive)
    pub array_min_length: usize,

    /// Maximum array length (inclusive)
    pub array_max_length: usize,

    /// Values nested deeper than this become null
    pub max_depth: usize,

    /// Longest `$ref` chain followed before giving up
    pub max_reference_hops: usize,

    /// When false, nested references produce null instead of being followed.
    /// The root schema is always resolved.
    pub resolve_references: bool,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            default_string_length: DEFAULT_STRING_LENGTH,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            integer_bound: DEFAULT_INTEGER_BOUND,
            number_scale: DEFAULT_NUMBER_SCALE,
            array_min_length: DEFAULT_ARRAY_MIN_LENGTH,
            array_max_length: DEFAULT_ARRAY_MAX_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            max_reference_hops: DEFAULT_MAX_REFERENCE_HOPS,
            resolve_references: true,
        }
    }
}

impl GeneratorPolicy {
    /// Check that every bound describes a non-empty range.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.default_string_length > self.max_string_length {
            return Err(GeneratorError::InvalidPolicy(format!(
                "default_string_length ({}) exceeds max_string_length ({})",
                self.default_string_length, self.max_string_length
            )));
        }
        if self.integer_bound <= 0 {
            return Err(GeneratorError::InvalidPolicy(format!(
                "integer_bound must be positive, got {}",
                self.integer_bound
            )));
        }
        if !self.number_scale.is_finite() || self.number_scale <= 0.0 {
            return Err(GeneratorError::InvalidPolicy(format!(
                "number_scale must be a positive finite number, got {}",
                self.number_scale
            )));
        }
        if self.array_max_length == 0 {
            return Err(GeneratorError::InvalidPolicy(
                "array_max_length must be at least 1".to_string(),
            ));
        }
        if self.array_min_length > self.array_max_length {
            return Err(GeneratorError::InvalidPolicy(format!(
                "array_min_length ({}) exceeds array_max_length ({})",
                self.array_min_length, self.array_max_length
            )));
        }
        if self.max_reference_hops == 0 {
            return Err(GeneratorError::InvalidPolicy(
                "max_reference_hops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
