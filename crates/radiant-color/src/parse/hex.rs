use std::str::FromStr;

use super::error::ParseColorError;
use crate::Color;

/// Parse a CSS-style hex color into a [`Color`] with channels in `0.0..=1.0`.
///
/// Supports the following formats:
/// - `#RRGGBB` / `RRGGBB` - full form
/// - `#RGB` / `RGB` - shorthand, each digit is doubled (`abc` -> `aabbcc`)
///
/// Digits are case-insensitive. Whitespace is not trimmed.
///
/// # Errors
/// - [`ParseColorError::BadLength`] with the input (minus `#`) if it is not
///   3 or 6 bytes long
/// - [`ParseColorError::InvalidDigit`] for the first non-hex character
///
/// # Examples
/// ```
/// use radiant_color::{parse_hex_color, Color};
///
/// assert_eq!(parse_hex_color("#fff").unwrap(), Color::WHITE);
///
/// let pink = parse_hex_color("ff0080").unwrap();
/// assert_eq!(pink.b, 128.0 / 255.0);
/// ```
pub fn parse_hex_color(s: &str) -> Result<Color, ParseColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    let digits = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_owned(),
        _ => return Err(ParseColorError::BadLength(hex.to_owned())),
    };

    // from_str_radix would accept a leading '+'
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(c));
    }

    let rgb = u32::from_str_radix(&digits, 16)?;

    Ok(Color::new(
        f64::from(rgb >> 16) / 255.0,
        f64::from((rgb >> 8) & 0xff) / 255.0,
        f64::from(rgb & 0xff) / 255.0,
    ))
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}
