//! Hex color parsing and deserialization
//!
//! - [`parse_hex_color`]: CSS-style `#rgb` / `#rrggbb` strings
//! - [`Color::unmarshal_text`](crate::Color::unmarshal_text): raw, possibly
//!   quoted byte tokens from a structured loader
//! - `serde::Deserialize` for [`Color`](crate::Color)

mod error;
mod hex;
mod text;

pub use error::ParseColorError;
pub use hex::parse_hex_color;
