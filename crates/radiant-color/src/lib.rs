//! radiant-color: unbounded floating-point colors
//!
//! A [`Color`] carries three `f64` channels with no upper or lower bound.
//! Values outside `0.0..=1.0` are legitimate intermediate states, for example
//! when light contributions are accumulated before tone mapping.
//!
//! # Quick Start
//!
//! ```
//! use radiant_color::Color;
//!
//! let light: Color = "#fff".parse().unwrap();
//! let surface: Color = "#ff0080".parse().unwrap();
//!
//! let lit = surface * light * 1.5;
//! assert_eq!(lit.r, 1.5);
//!
//! // Display conversion clamps, it does not tone map.
//! let rgba = lit.to_display();
//! assert_eq!(rgba.r, 255);
//! ```
//!
//! # Parsing
//!
//! [`parse_hex_color`] accepts CSS-style hex colors (`#abc`, `aabbcc`).
//! Structured loaders go through the [`serde::Deserialize`] impl, which
//! expects the color as a string. [`Color::unmarshal_text`] is the raw-bytes
//! hook for callers that hold a still-quoted token.

pub mod color;
pub mod parse;

pub use color::{Color, DisplayRgba, OPAQUE_ALPHA};
pub use parse::{parse_hex_color, ParseColorError};
