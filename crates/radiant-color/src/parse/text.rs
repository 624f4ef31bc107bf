//! Deserialization of colors from loaders
//!
//! Structured formats hand colors over as strings: `"#ff0080"` in JSON,
//! `'#fff'` or a bare `abc123` in YAML.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use super::error::ParseColorError;
use super::hex::parse_hex_color;
use crate::Color;

impl Color {
    /// Parse a raw text token into `self`.
    ///
    /// The token may still carry its JSON quotes. One leading `"` and one
    /// trailing `"` are stripped independently of each other, so `"abc` and
    /// `abc"` are both accepted as `abc`. The rest goes through
    /// [`parse_hex_color`]. On error `self` is left unchanged.
    ///
    /// # Errors
    /// - [`ParseColorError::Truncated`] if `bytes` is shorter than 2 bytes
    /// - [`ParseColorError::NotUtf8`] if the unquoted token is not UTF-8
    /// - any error of [`parse_hex_color`]
    ///
    /// # Example
    /// ```
    /// use radiant_color::{parse_hex_color, Color};
    ///
    /// let mut color = Color::BLACK;
    /// color.unmarshal_text(br##""#abc""##).unwrap();
    /// assert_eq!(color, parse_hex_color("#abc").unwrap());
    /// ```
    pub fn unmarshal_text(&mut self, bytes: &[u8]) -> Result<(), ParseColorError> {
        if bytes.len() < 2 {
            return Err(ParseColorError::Truncated(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }

        let mut token = bytes;
        if let Some(rest) = token.strip_prefix(b"\"") {
            token = rest;
        }
        if let Some(rest) = token.strip_suffix(b"\"") {
            token = rest;
        }

        *self = parse_hex_color(std::str::from_utf8(token)?)?;
        Ok(())
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a hex color string such as \"#ff0080\" or \"#fff\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
        parse_hex_color(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Color, E> {
        let mut color = Color::default();
        color.unmarshal_text(v).map_err(E::custom)?;
        Ok(color)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ColorVisitor)
    }
}
