//! Color value type and display conversion
//!
//! - [`Color`]: unbounded RGB intensities with component-wise arithmetic
//! - [`DisplayRgba`]: the clamped, integer-scaled result handed to pixel sinks

mod display;
mod rgb;

pub use display::{DisplayRgba, OPAQUE_ALPHA};
pub use rgb::Color;
