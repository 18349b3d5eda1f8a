//! Two-digit stream extracted from the fractional expansion of a real number.
//!
//! The integer part of the seed value is discarded. Every step multiplies
//! the remaining fraction by 100, emits the integer part (the next two
//! decimal digits) and keeps only the new fraction.
//!
//! Extraction runs on `f64`. Only the first six or seven pairs are digits
//! of the exact mathematical value; the tail is determined by the binary
//! representation of the seed. Once the fraction reaches exactly zero
//! every following pair is `0`.

/// Multiplier that shifts two decimal digits above the radix point.
const PAIR_SCALE: f64 = 100.0;

/// Infinite, deterministic stream of values in [0, 99].
///
/// # Examples
///
/// ```
/// use dialcipher::random::digit_stream::DigitStream;
///
/// let pairs: Vec<u8> = DigitStream::new(1.25).take(3).collect();
/// assert_eq!(pairs, vec![25, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitStream {
    remainder: f64,
}

impl DigitStream {
    /// Starts a stream from the fractional part of `value`.
    pub fn new(value: f64) -> Self {
        DigitStream {
            remainder: value % 1.0,
        }
    }

    /// Returns the fraction the next pair will be read from.
    pub fn remainder(&self) -> f64 {
        self.remainder
    }

    /// Extracts the next two digits and advances the stream.
    pub fn next_pair(&mut self) -> u8 {
        let scaled = self.remainder * PAIR_SCALE;
        self.remainder = scaled % 1.0;
        // NaN (non-finite seed) saturates to 0
        scaled.floor() as u8
    }

    /// Fills `out` with the next `out.len()` pairs.
    pub fn fill(&mut self, out: &mut [u8]) {
        for slot in out.iter_mut() {
            *slot = self.next_pair();
        }
    }
}

impl Iterator for DigitStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Returns exactly `count` two-digit values read from `value`.
///
/// # Examples
///
/// ```
/// use dialcipher::random::digit_stream::generate;
///
/// assert_eq!(generate(7.123456, 3), vec![12, 34, 56]);
/// assert!(generate(2.0, 4).iter().all(|&p| p == 0));
/// ```
pub fn generate(value: f64, count: usize) -> Vec<u8> {
    let mut out = vec![0u8; count];
    DigitStream::new(value).fill(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length() {
        for count in [0, 1, 10, 13, 26, 100] {
            assert_eq!(generate(std::f64::consts::PI, count).len(), count);
        }
    }

    #[test]
    fn test_leading_pairs_of_pi() {
        assert_eq!(generate(std::f64::consts::PI, 5), vec![14, 15, 92, 65, 35]);
    }

    #[test]
    fn test_integer_part_is_ignored() {
        assert_eq!(generate(1.5, 3), generate(1001.5, 3));
    }

    #[test]
    fn test_exact_fraction_degenerates_to_zero() {
        assert_eq!(generate(1.5, 5), vec![50, 0, 0, 0, 0]);
        assert_eq!(generate(4.0, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_fraction_eventually_exhausts() {
        // every step clears at least two low-order bits of the fraction
        let mut stream = DigitStream::new(std::f64::consts::E);
        for _ in 0..40 {
            stream.next_pair();
        }
        assert_eq!(stream.remainder(), 0.0);
        assert_eq!(stream.next_pair(), 0);
    }

    #[test]
    fn test_values_in_range() {
        for seed in [1.0, 1.999_999_999_999, 3.414_213_562_373_095, 37_934.81] {
            assert!(generate(seed, 50).iter().all(|&p| p <= 99), "seed {}", seed);
        }
    }

    #[test]
    fn test_iterator_matches_generate() {
        let from_iter: Vec<u8> = DigitStream::new(13.359_075_877_266_633).take(13).collect();
        assert_eq!(from_iter, generate(13.359_075_877_266_633, 13));
    }

    #[test]
    fn test_fill_continues_stream() {
        let mut stream = DigitStream::new(std::f64::consts::PI);
        let mut head = [0u8; 2];
        let mut tail = [0u8; 3];
        stream.fill(&mut head);
        stream.fill(&mut tail);
        assert_eq!([&head[..], &tail[..]].concat(), generate(std::f64::consts::PI, 5));
    }

    #[test]
    fn test_non_finite_seed_yields_zeros() {
        assert_eq!(generate(f64::INFINITY, 3), vec![0, 0, 0]);
        assert_eq!(generate(f64::NAN, 3), vec![0, 0, 0]);
    }
}
