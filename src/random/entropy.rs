//! Entropy values derived from the dial triple.
//!
//! Each dial is used as an integer exponent of an irrational base:
//! `pi^a + e^b + sqrt(2)^c`. For any triple other than `(0, 0, 0)` the
//! fractional part of that sum carries the digits consumed by the
//! [`DigitStream`](super::digit_stream::DigitStream).

use std::f64::consts::{E, PI, SQRT_2};

use crate::dials::Dials;

/// IEEE-754 bit patterns of `pi^k` for `k` in 0..=9, as rounded by the
/// fdlibm `pow` that keys were historically generated with.
#[rustfmt::skip]
const PI_POWERS: [u64; 10] = [
    0x3FF0000000000000, 0x400921FB54442D18, 0x4023BD3CC9BE45DE, 0x403F019B59389D7B,
    0x40585A2E8C290824, 0x40732050A0FE5033, 0x408E0B1D11856DF6, 0x40A7989621F37F32,
    0x40C28843F855A860, 0x40DD1C465B7AABB5,
];

/// Bit patterns of `e^k` for `k` in 0..=9.
///
/// `e^9` is one ulp above the value most system `pow` implementations
/// return (`8103.083927575381` rather than `8103.08392757538`).
#[rustfmt::skip]
const E_POWERS: [u64; 10] = [
    0x3FF0000000000000, 0x4005BF0A8B145769, 0x401D8E64B8D4DDAD, 0x403415E5BF6FB105,
    0x404B4C902E273A57, 0x40628D389970338E, 0x407936DC5690C08D, 0x409122885AAEDDA9,
    0x40A749EA7D470C6B, 0x40BFA7157C470F7E,
];

/// Bit patterns of `sqrt(2)^k` for `k` in 0..=9. Even powers land just
/// above the exact powers of two.
#[rustfmt::skip]
const SQRT_2_POWERS: [u64; 10] = [
    0x3FF0000000000000, 0x3FF6A09E667F3BCD, 0x4000000000000001, 0x4006A09E667F3BCE,
    0x4010000000000001, 0x4016A09E667F3BCF, 0x4020000000000002, 0x4026A09E667F3BD0,
    0x4030000000000002, 0x4036A09E667F3BD0,
];

/// Returns `base^exponent` from `table`, falling back to `powf` past the
/// dial range.
fn power(table: &[u64; 10], base: f64, exponent: u8) -> f64 {
    match table.get(usize::from(exponent)) {
        Some(&bits) => f64::from_bits(bits),
        None => base.powf(f64::from(exponent)),
    }
}

/// Computes `pi^a + e^b + sqrt(2)^c` in IEEE-754 double precision.
///
/// For dials in [0, 9] the powers are bit-exact table values, so every
/// platform derives the same digit streams. Terms are summed left to
/// right; changing the order changes the low bits of the result and with
/// them the tail of every derived digit stream.
pub fn dial_a_num(a: u8, b: u8, c: u8) -> f64 {
    power(&PI_POWERS, PI, a) + power(&E_POWERS, E, b) + power(&SQRT_2_POWERS, SQRT_2, c)
}

/// The two entropy values computed for one cipher generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entropy {
    /// `pi^a + e^b + sqrt(2)^c`
    pub forward: f64,
    /// `pi^c + e^b + sqrt(2)^a`
    pub reversed: f64,
}

impl Entropy {
    /// Evaluates both formulas for the given dials.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialcipher::random::entropy::Entropy;
    /// use dialcipher::Dials;
    ///
    /// let entropy = Entropy::from_dials(Dials::new(0, 0, 2).unwrap());
    /// assert_eq!(entropy.forward, 4.0);
    /// ```
    pub fn from_dials(dials: Dials) -> Self {
        let [a, b, c] = dials.to_array();
        Entropy {
            forward: dial_a_num(a, b, c),
            reversed: dial_a_num(c, b, a),
        }
    }
}
