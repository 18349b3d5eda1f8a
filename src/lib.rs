//! Reversible letter/digit substitution cipher keyed by three dials.
//!
//! Three integers in [0, 9] select two real numbers of the form
//! `pi^a + e^b + sqrt(2)^c`. Two-digit values read from their fractional
//! expansions drive a pairing builder that splits the alphabet (and,
//! separately, the ten digits) into disjoint swaps. Every swap is its own
//! inverse, so running the cipher twice with the same dials restores the
//! message.
//!
//! This is a toy substitution cipher. It offers no resistance to analysis.
//!
//! # Architecture
//!
//! ```text
//! Dials (a, b, c)
//!     -> Entropy      (forward: pi^a + e^b + sqrt2^c, reversed: pi^c + e^b + sqrt2^a)
//!     -> DigitStream  (13 + 13 pairs for letters, 10 pairs for digits)
//!     -> PairingPermutation<26> / PairingPermutation<10>
//!     -> DialCipher::apply
//! ```
//!
//! # Examples
//!
//! ```
//! use dialcipher::{DialCipher, Dials};
//!
//! let cipher = DialCipher::new(Dials::new(1, 2, 3).unwrap());
//!
//! let encoded = cipher.apply("Attack at dawn, gate 7");
//! assert_ne!(encoded, "attack at dawn, gate 7");
//!
//! let decoded = cipher.apply(&encoded);
//! assert_eq!(decoded, "attack at dawn, gate 7");
//! ```
//!
//! Dials typed into a form are accepted leniently; anything outside
//! [0, 9] becomes 0:
//!
//! ```
//! use dialcipher::Dials;
//!
//! assert_eq!(Dials::from_inputs("3", "", "11"), Dials::new(3, 0, 0).unwrap());
//! ```

#![deny(clippy::all)]

pub mod dials;
pub mod error;
pub mod pairing;
pub mod random;

mod cipher;

pub use cipher::{apply_cipher, DialCipher};
pub use dials::Dials;
pub use error::DialCipherError;
pub use pairing::{DigitPermutation, LetterPermutation, PairingPermutation};
