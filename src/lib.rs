//! Radiant - unbounded color arithmetic for rendering pipelines
//!
//! Loads scene lighting descriptions whose colors are written as hex
//! strings and shades surfaces with [`radiant_color::Color`] arithmetic.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod error;
pub mod models;
pub mod report;

pub use radiant_color::{parse_hex_color, Color, DisplayRgba, ParseColorError};
