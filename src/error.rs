//! Error types for the dialcipher library.

use std::fmt;

/// Errors produced by the dialcipher library.
///
/// The cipher pipeline itself never fails for a valid [`Dials`](crate::Dials)
/// value; these errors only surface from the strict constructors and from
/// the slice-based permutation builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialCipherError {
    /// A dial value is outside the valid range [0, 9].
    DialOutOfRange(u8),
    /// A dial triple string could not be parsed as three single digits.
    MalformedDials,
    /// The digit pool length does not match the alphabet length.
    PoolLengthMismatch {
        /// Alphabet length.
        expected: usize,
        /// Digit pool length supplied by the caller.
        actual: usize,
    },
    /// The same symbol appears more than once in an alphabet.
    DuplicateSymbol(char),
}

impl fmt::Display for DialCipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialCipherError::DialOutOfRange(value) => {
                write!(f, "Dial value {} is outside the valid range [0, 9]", value)
            }
            DialCipherError::MalformedDials => {
                write!(f, "Dial triple must be three single digits")
            }
            DialCipherError::PoolLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Digit pool holds {} values but the alphabet has {} symbols",
                    actual, expected
                )
            }
            DialCipherError::DuplicateSymbol(symbol) => {
                write!(f, "Symbol {:?} appears more than once in the alphabet", symbol)
            }
        }
    }
}

impl std::error::Error for DialCipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dial_out_of_range() {
        let err = DialCipherError::DialOutOfRange(12);
        assert_eq!(
            format!("{}", err),
            "Dial value 12 is outside the valid range [0, 9]"
        );
    }

    #[test]
    fn test_display_malformed_dials() {
        let err = DialCipherError::MalformedDials;
        assert_eq!(format!("{}", err), "Dial triple must be three single digits");
    }

    #[test]
    fn test_display_pool_length_mismatch() {
        let err = DialCipherError::PoolLengthMismatch {
            expected: 26,
            actual: 24,
        };
        assert_eq!(
            format!("{}", err),
            "Digit pool holds 24 values but the alphabet has 26 symbols"
        );
    }

    #[test]
    fn test_display_duplicate_symbol() {
        let err = DialCipherError::DuplicateSymbol('q');
        assert_eq!(
            format!("{}", err),
            "Symbol 'q' appears more than once in the alphabet"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DialCipherError::MalformedDials,
            DialCipherError::MalformedDials
        );
        assert_ne!(
            DialCipherError::DialOutOfRange(10),
            DialCipherError::DialOutOfRange(11)
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DialCipherError::MalformedDials);
        assert!(err.source().is_none());
    }
}
