//! Numeric and boolean value generators.

use api_schema::GeneratedValue;
use rand::Rng;

/// Exclusive upper bound for generated integers.
pub const DEFAULT_INTEGER_BOUND: i64 = 1000;

/// Exclusive upper bound for generated numbers.
pub const DEFAULT_NUMBER_SCALE: f64 = 1000.0;

/// Generate a random integer in `[0, bound)`.
pub fn generate_integer<R: Rng>(rng: &mut R, bound: i64) -> GeneratedValue {
    GeneratedValue::Int64(rng.gen_range(0..bound))
}

/// Generate a random float in `[0, scale)`.
pub fn generate_number<R: Rng>(rng: &mut R, scale: f64) -> GeneratedValue {
    GeneratedValue::Float64(rng.gen_range(0.0..scale))
}

/// Generate `true` or `false` with equal probability.
pub fn generate_bool<R: Rng>(rng: &mut R) -> GeneratedValue {
    GeneratedValue::Bool(rng.gen_bool(0.5))
}
