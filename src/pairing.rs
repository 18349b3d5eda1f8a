//! Pairing-permutation builder.
//!
//! Turns a pool of two-digit values into a substitution over a fixed
//! alphabet that consists only of disjoint swaps. The builder keeps a
//! working copy of the alphabet; each pool value selects (modulo the
//! current working length) and removes one symbol, and every two removed
//! symbols are recorded as a swap. Because each symbol is removed exactly
//! once the result is always a permutation and always its own inverse.
//!
//! ```text
//! pool   [35, 90, 75, 87, ...]
//! pick   35 % 26 = 9  -> 'j'   (25 left)
//!        90 % 25 = 15 -> 'q'   (24 left)   => j <-> q
//!        75 % 24 = 3  -> 'd'   (23 left)
//!        ...
//! ```

use std::fmt;

use tracing::trace;

use crate::error::DialCipherError;

/// The lowercase Latin alphabet in canonical order.
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The decimal digits in canonical order.
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Substitution over an alphabet of `N` symbols made of swaps and fixed points.
///
/// Entries are stored as symbol indices in a fixed-size array, so every
/// alphabet symbol has exactly one image.
///
/// # Examples
///
/// ```
/// use dialcipher::pairing::{LetterPermutation, LETTERS};
///
/// let pool = [0u8; 26];
/// let perm = LetterPermutation::build(LETTERS, &pool).unwrap();
/// assert_eq!(perm.get('a'), Some('b'));
/// assert_eq!(perm.get('b'), Some('a'));
/// assert!(perm.is_involution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairingPermutation<const N: usize> {
    symbols: [char; N],
    image: [usize; N],
}

/// Permutation over `a`..=`z`.
pub type LetterPermutation = PairingPermutation<26>;

/// Permutation over `0`..=`9`.
pub type DigitPermutation = PairingPermutation<10>;

impl<const N: usize> PairingPermutation<N> {
    /// Every symbol maps to itself.
    pub fn identity(symbols: [char; N]) -> Self {
        PairingPermutation {
            symbols,
            image: std::array::from_fn(|i| i),
        }
    }

    /// Builds the permutation from a caller-supplied digit pool.
    ///
    /// # Parameters
    /// - `symbols`: The alphabet, in canonical order. Symbols must be distinct.
    /// - `digit_pool`: One value per symbol; values are reduced modulo the
    ///   shrinking working alphabet, so any `u8` is accepted.
    ///
    /// # Errors
    /// - [`DialCipherError::PoolLengthMismatch`] if `digit_pool.len() != N`.
    /// - [`DialCipherError::DuplicateSymbol`] if a symbol repeats.
    pub fn build(symbols: [char; N], digit_pool: &[u8]) -> Result<Self, DialCipherError> {
        let pool: [u8; N] = digit_pool.try_into().map_err(|_| {
            DialCipherError::PoolLengthMismatch {
                expected: N,
                actual: digit_pool.len(),
            }
        })?;

        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(DialCipherError::DuplicateSymbol(*symbol));
            }
        }

        Ok(Self::from_pool(symbols, pool))
    }

    /// Builds the permutation from a pool whose length matches the alphabet.
    ///
    /// The alphabet length must be even; that is checked at compile time.
    pub(crate) fn from_pool(symbols: [char; N], digit_pool: [u8; N]) -> Self {
        const { assert!(N % 2 == 0, "alphabet length must be even") };

        let mut working: Vec<usize> = (0..N).collect();
        let mut image = [0usize; N];

        for draw in digit_pool.chunks_exact(2) {
            let first = working.remove(usize::from(draw[0]) % working.len());
            let second = working.remove(usize::from(draw[1]) % working.len());
            trace!(
                pool = ?draw,
                first = %symbols[first],
                second = %symbols[second],
                "paired symbols"
            );
            image[first] = second;
            image[second] = first;
        }
        debug_assert!(working.is_empty());

        PairingPermutation { symbols, image }
    }

    /// Returns the alphabet in canonical order.
    pub fn symbols(&self) -> &[char; N] {
        &self.symbols
    }

    fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Returns the image of `symbol`, or `None` if it is not in the alphabet.
    pub fn get(&self, symbol: char) -> Option<char> {
        self.index_of(symbol).map(|i| self.symbols[self.image[i]])
    }

    /// Iterates over `(symbol, image)` in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.symbols
            .iter()
            .zip(self.image.iter())
            .map(|(&symbol, &target)| (symbol, self.symbols[target]))
    }

    /// Returns each 2-cycle once, ordered by the earlier symbol in the alphabet.
    pub fn swaps(&self) -> Vec<(char, char)> {
        self.image
            .iter()
            .enumerate()
            .filter(|&(i, &target)| i < target)
            .map(|(i, &target)| (self.symbols[i], self.symbols[target]))
            .collect()
    }

    /// Iterates over the symbols that map to themselves.
    pub fn fixed_points(&self) -> impl Iterator<Item = char> + '_ {
        self.image
            .iter()
            .enumerate()
            .filter(|&(i, &target)| i == target)
            .map(|(i, _)| self.symbols[i])
    }

    /// True when every symbol maps to itself.
    pub fn is_identity(&self) -> bool {
        self.image.iter().enumerate().all(|(i, &target)| i == target)
    }

    /// Checks the structural invariant: every symbol appears exactly once as
    /// an image and applying the permutation twice returns every symbol.
    pub fn is_involution(&self) -> bool {
        let mut seen = [false; N];
        for &target in &self.image {
            if target >= N || seen[target] {
                return false;
            }
            seen[target] = true;
        }
        self.image
            .iter()
            .enumerate()
            .all(|(i, &target)| self.image[target] == i)
    }
}

impl<const N: usize> fmt::Display for PairingPermutation<N> {
    /// Renders the substitution row: the image of each symbol in alphabet order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, target) in self.iter() {
            write!(f, "{}", target)?;
        }
        Ok(())
    }
}
