//! Error type for color parsing

use std::num::ParseIntError;
use std::str::Utf8Error;

use thiserror::Error;

/// Error returned when a hex color string or token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Input after stripping `#` is neither 3 nor 6 bytes long
    #[error("bad color string: {0}")]
    BadLength(String),

    /// Character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?} in color string")]
    InvalidDigit(char),

    /// Digits rejected by the integer conversion
    #[error("invalid hex color: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// Deserialization token shorter than 2 bytes
    #[error("bad color string: {0}")]
    Truncated(String),

    /// Deserialization token is not valid UTF-8
    #[error("color string is not UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_length_message() {
        let error = ParseColorError::BadLength("abcd".to_string());
        assert_eq!(error.to_string(), "bad color string: abcd");
    }

    #[test]
    fn test_invalid_digit_message() {
        let error = ParseColorError::InvalidDigit('x');
        assert_eq!(error.to_string(), "invalid hex digit 'x' in color string");
    }

    #[test]
    fn test_invalid_hex_from() {
        let parse = u32::from_str_radix("zz", 16).unwrap_err();
        let error: ParseColorError = parse.into();
        assert!(matches!(error, ParseColorError::InvalidHex(_)));
        assert_eq!(error.to_string(), "invalid hex color: invalid digit found in string");
    }

    #[test]
    fn test_truncated_message() {
        let error = ParseColorError::Truncated("a".to_string());
        assert_eq!(error.to_string(), "bad color string: a");
    }

    #[test]
    fn test_not_utf8_from() {
        let bytes = [0xffu8, 0xfe];
        let utf8 = std::str::from_utf8(&bytes).unwrap_err();
        let error: ParseColorError = utf8.into();
        assert!(matches!(error, ParseColorError::NotUtf8(_)));
    }
}
