//! Deterministic entropy subsystem for dialcipher.
//!
//! Replaces a conventional PRNG: the dials select irrational-exponent
//! sums whose fractional digits feed the pairing builder.

pub mod digit_stream;
pub mod entropy;
