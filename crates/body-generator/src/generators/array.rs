//! Array length selection.

use rand::Rng;

/// Default minimum number of array elements.
pub const DEFAULT_ARRAY_MIN_LENGTH: usize = 1;

/// Default maximum number of array elements.
pub const DEFAULT_ARRAY_MAX_LENGTH: usize = 5;

/// Choose an element count uniformly from `[min_length, max_length]`.
///
/// A `min_length` above `max_length` is clamped down to `max_length`.
pub fn choose_length<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> usize {
    let min_length = min_length.min(max_length);
    rng.gen_range(min_length..=max_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_length_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        let lengths: Vec<usize> = (0..500)
            .map(|_| choose_length(&mut rng, DEFAULT_ARRAY_MIN_LENGTH, DEFAULT_ARRAY_MAX_LENGTH))
            .collect();

        assert!(lengths.iter().all(|l| (1..=5).contains(l)));
        // Every length in the range shows up over enough draws
        for expected in 1..=5 {
            assert!(lengths.contains(&expected));
        }
    }

    #[test]
    fn test_choose_length_fixed() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(choose_length(&mut rng, 3, 3), 3);
        assert_eq!(choose_length(&mut rng, 0, 0), 0);
    }

    #[test]
    fn test_choose_length_clamps_min() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(choose_length(&mut rng, 9, 2), 2);
    }
}
