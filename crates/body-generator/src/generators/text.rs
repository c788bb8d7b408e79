//! Random alphanumeric strings.

use api_schema::GeneratedValue;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length used when a string schema declares no `maxLength`.
pub const DEFAULT_STRING_LENGTH: usize = 20;

/// Cap on generated string length. Documents often declare
/// `maxLength: 2147483647` to mean "unbounded".
pub const DEFAULT_MAX_STRING_LENGTH: usize = 4096;

/// Generate a string of exactly `length` characters from `[A-Za-z0-9]`.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, length: usize) -> GeneratedValue {
    let value: String = (0..length)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect();
    GeneratedValue::String(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);

        for length in [0, 1, 5, 20, 64] {
            let value = generate_alphanumeric(&mut rng, length);
            let s = value.as_str().expect("Expected String value");
            assert_eq!(s.chars().count(), length);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_alphabet_is_covered() {
        let mut rng = StdRng::seed_from_u64(7);
        let value = generate_alphanumeric(&mut rng, 5000);
        let s = value.as_str().unwrap();

        assert!(s.chars().any(|c| c.is_ascii_uppercase()));
        assert!(s.chars().any(|c| c.is_ascii_lowercase()));
        assert!(s.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_alphanumeric(&mut rng1, DEFAULT_STRING_LENGTH),
            generate_alphanumeric(&mut rng2, DEFAULT_STRING_LENGTH)
        );
    }
}
