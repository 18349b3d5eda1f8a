//! The dial triple that keys the cipher.
//!
//! Three integers in [0, 9] are the entire key. The strict constructors
//! reject anything else; [`Dials::from_inputs`] mirrors the lenient form
//! validation where every unusable input silently becomes 0.

use std::fmt;
use std::str::FromStr;

use crate::error::DialCipherError;

/// Largest value a single dial can hold.
pub const DIAL_MAX: u8 = 9;

/// Three dial values, each in [0, 9].
///
/// # Examples
///
/// ```
/// use dialcipher::Dials;
///
/// let dials: Dials = "1-2-3".parse().unwrap();
/// assert_eq!(dials, Dials::new(1, 2, 3).unwrap());
/// assert_eq!(dials.to_string(), "1-2-3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dials {
    a: u8,
    b: u8,
    c: u8,
}

impl Dials {
    /// The all-zero triple, which keys the identity cipher.
    pub const ZERO: Dials = Dials { a: 0, b: 0, c: 0 };

    /// Creates a dial triple, rejecting values above [`DIAL_MAX`].
    ///
    /// # Errors
    /// Returns [`DialCipherError::DialOutOfRange`] for the first dial
    /// outside [0, 9].
    ///
    /// # Examples
    ///
    /// ```
    /// use dialcipher::Dials;
    ///
    /// assert!(Dials::new(9, 0, 4).is_ok());
    /// assert!(Dials::new(1, 10, 4).is_err());
    /// ```
    pub fn new(a: u8, b: u8, c: u8) -> Result<Self, DialCipherError> {
        for value in [a, b, c] {
            if value > DIAL_MAX {
                return Err(DialCipherError::DialOutOfRange(value));
            }
        }
        Ok(Dials { a, b, c })
    }

    /// Builds a dial triple from raw text inputs, substituting 0 for any
    /// input [`parse_dial`] rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialcipher::Dials;
    ///
    /// let dials = Dials::from_inputs("7", "banana", "42");
    /// assert_eq!(dials, Dials::new(7, 0, 0).unwrap());
    /// ```
    pub fn from_inputs(a: &str, b: &str, c: &str) -> Self {
        Dials {
            a: parse_dial(a).unwrap_or(0),
            b: parse_dial(b).unwrap_or(0),
            c: parse_dial(c).unwrap_or(0),
        }
    }

    /// First dial (exponent of pi in the forward entropy formula).
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Second dial (exponent of e in both entropy formulas).
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Third dial (exponent of the square root of two in the forward formula).
    pub fn c(&self) -> u8 {
        self.c
    }

    /// Returns the dials as `[a, b, c]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the triple with the outer dials swapped: `(c, b, a)`.
    pub fn reversed(self) -> Self {
        Dials {
            a: self.c,
            b: self.b,
            c: self.a,
        }
    }

    /// True when every dial is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Dials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.a, self.b, self.c)
    }
}

impl FromStr for Dials {
    type Err = DialCipherError;

    /// Parses `"a-b-c"`, `"a b c"`, `"a,b,c"` or `"abc"` where each dial
    /// is a single decimal digit. Every `-` or `,` must sit between two
    /// dials, so `"-1-2-3"` and `"1--2-3"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let separators: &[char] = &['-', ','];
        let digits: Vec<&str> = if s.contains(separators) {
            s.split(separators).map(str::trim).collect()
        } else if s.contains(char::is_whitespace) {
            s.split_whitespace().collect()
        } else {
            s.char_indices()
                .map(|(i, ch)| &s[i..i + ch.len_utf8()])
                .collect()
        };

        if digits.len() != 3 {
            return Err(DialCipherError::MalformedDials);
        }

        let mut values = [0u8; 3];
        for (slot, token) in values.iter_mut().zip(digits) {
            let mut chars = token.chars();
            *slot = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(DialCipherError::MalformedDials)?,
                _ => return Err(DialCipherError::MalformedDials),
            };
        }
        Dials::new(values[0], values[1], values[2])
    }
}

impl TryFrom<[u8; 3]> for Dials {
    type Error = DialCipherError;

    fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
        Dials::new(value[0], value[1], value[2])
    }
}

/// Reads a single dial from form-style text input.
///
/// Skips leading whitespace, accepts an optional sign and then reads
/// decimal digits up to the first non-digit character. Returns `Some`
/// only when that integer prefix lies in [0, 9].
///
/// # Examples
///
/// ```
/// use dialcipher::dials::parse_dial;
///
/// assert_eq!(parse_dial("7"), Some(7));
/// assert_eq!(parse_dial("  3.9"), Some(3));
/// assert_eq!(parse_dial("5 apples"), Some(5));
/// assert_eq!(parse_dial("12"), None);
/// assert_eq!(parse_dial("-1"), None);
/// assert_eq!(parse_dial("dial"), None);
/// ```
pub fn parse_dial(input: &str) -> Option<u8> {
    let s = input.trim_start();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let prefix = &unsigned[..end];
    if prefix.is_empty() {
        return None;
    }

    // "-0" and "000" are both zero
    match prefix.trim_start_matches('0').as_bytes() {
        [] => Some(0),
        [digit] if !negative => Some(digit - b'0'),
        _ => None,
    }
}
