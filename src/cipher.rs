//! DialCipher: involutive letter/digit substitution keyed by three dials.
//!
//! Orchestrates the entropy formulas, the digit streams and the pairing
//! builder. The letter permutation consumes 13 pairs from each of the two
//! entropy values; the digit permutation consumes 10 pairs from the forward
//! value alone. Both permutations are their own inverse, so the same
//! cipher both encodes and decodes.

use tracing::debug;

use crate::dials::Dials;
use crate::pairing::{DigitPermutation, LetterPermutation, DIGITS, LETTERS};
use crate::random::digit_stream::DigitStream;
use crate::random::entropy::Entropy;

/// Pairs read from each entropy value for the letter pool.
const LETTER_PAIRS_PER_STREAM: usize = 13;

/// Substitution cipher derived from a [`Dials`] triple.
///
/// Letters are matched case-insensitively and always emitted in lowercase.
/// Digits are substituted through their own permutation. Every other
/// character passes through unchanged.
///
/// # Examples
///
/// ```
/// use dialcipher::{DialCipher, Dials};
///
/// let cipher = DialCipher::new(Dials::new(4, 1, 7).unwrap());
/// let secret = cipher.apply("Meet at 10, gate B!");
/// assert_eq!(cipher.apply(&secret), "meet at 10, gate b!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCipher {
    dials: Dials,
    letters: LetterPermutation,
    digits: DigitPermutation,
}

impl Default for DialCipher {
    fn default() -> Self {
        Self::new(Dials::ZERO)
    }
}

impl From<Dials> for DialCipher {
    fn from(dials: Dials) -> Self {
        Self::new(dials)
    }
}

impl DialCipher {
    /// Derives the letter and digit permutations for `dials`.
    ///
    /// The all-zero triple short-circuits to the identity cipher without
    /// evaluating the entropy formulas.
    pub fn new(dials: Dials) -> Self {
        if dials.is_zero() {
            debug!(%dials, "zero dials, using identity cipher");
            return DialCipher {
                dials,
                letters: LetterPermutation::identity(LETTERS),
                digits: DigitPermutation::identity(DIGITS),
            };
        }

        let entropy = Entropy::from_dials(dials);

        let mut letter_pool = [0u8; 2 * LETTER_PAIRS_PER_STREAM];
        let (head, tail) = letter_pool.split_at_mut(LETTER_PAIRS_PER_STREAM);
        DigitStream::new(entropy.forward).fill(head);
        DigitStream::new(entropy.reversed).fill(tail);

        let mut digit_pool = [0u8; 10];
        DigitStream::new(entropy.forward).fill(&mut digit_pool);

        debug!(
            %dials,
            forward = entropy.forward,
            reversed = entropy.reversed,
            ?letter_pool,
            ?digit_pool,
            "derived digit pools"
        );

        let letters = LetterPermutation::from_pool(LETTERS, letter_pool);
        let digits = DigitPermutation::from_pool(DIGITS, digit_pool);
        debug!(%letters, %digits, "built substitution tables");

        DialCipher {
            dials,
            letters,
            digits,
        }
    }

    /// The dial triple this cipher was derived from.
    pub fn dials(&self) -> Dials {
        self.dials
    }

    /// The permutation applied to letters.
    pub fn letters(&self) -> &LetterPermutation {
        &self.letters
    }

    /// The permutation applied to digits.
    pub fn digits(&self) -> &DigitPermutation {
        &self.digits
    }

    /// True when the cipher leaves every letter and digit unchanged.
    pub fn is_identity(&self) -> bool {
        self.letters.is_identity() && self.digits.is_identity()
    }

    /// Substitutes a single character.
    ///
    /// Letters are looked up by their Unicode lowercase form when that form
    /// is a single character, so U+212A KELVIN SIGN is substituted as `k`.
    pub fn substitute(&self, ch: char) -> char {
        self.letters
            .get(fold_case(ch))
            .or_else(|| self.digits.get(ch))
            .unwrap_or(ch)
    }

    /// Substitutes every character of `message`.
    ///
    /// The output has exactly as many characters as the input.
    pub fn apply(&self, message: &str) -> String {
        message.chars().map(|ch| self.substitute(ch)).collect()
    }
}

/// Unicode lowercase of `ch`, or `ch` itself when lowercasing expands it.
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Derives the cipher for `dials` and applies it to `message`.
///
/// # Examples
///
/// ```
/// use dialcipher::{apply_cipher, Dials};
///
/// assert_eq!(
///     apply_cipher(Dials::ZERO, "Hello, World! 123"),
///     "hello, world! 123"
/// );
/// ```
pub fn apply_cipher(dials: Dials, message: &str) -> String {
    DialCipher::new(dials).apply(message)
}
