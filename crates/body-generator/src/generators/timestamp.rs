//! Date-time string generator.
//!
//! Components are drawn independently, so combinations such as February 29
//! in a non-leap year can appear. Day stops at 28 to stay inside every month.

use api_schema::GeneratedValue;
use rand::Rng;

/// Generate a `YYYY-MM-DDTHH:MM:SSZ` timestamp with year in `[2000, 2020)`.
pub fn generate_date_time<R: Rng>(rng: &mut R) -> GeneratedValue {
    let year = rng.gen_range(2000..2020);
    let month = rng.gen_range(1..13);
    let day = rng.gen_range(1..29);
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);
    let second = rng.gen_range(0..60);

    GeneratedValue::String(format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn components(s: &str) -> [u32; 6] {
        assert_eq!(s.len(), 20, "unexpected layout: {s}");
        let bytes = s.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b'T');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert_eq!(bytes[19], b'Z');

        let num = |range: std::ops::Range<usize>| s[range].parse::<u32>().unwrap();
        [
            num(0..4),
            num(5..7),
            num(8..10),
            num(11..13),
            num(14..16),
            num(17..19),
        ]
    }

    #[test]
    fn test_generate_date_time_layout_and_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let value = generate_date_time(&mut rng);
            let s = value.as_str().expect("Expected String value");
            let [year, month, day, hour, minute, second] = components(s);

            assert!((2000..2020).contains(&year));
            assert!((1..13).contains(&month));
            assert!((1..29).contains(&day));
            assert!(hour < 24);
            assert!(minute < 60);
            assert!(second < 60);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_date_time(&mut rng1), generate_date_time(&mut rng2));
    }
}
