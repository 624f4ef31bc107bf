//! Conversion to display-ready channel values

use std::fmt;

use super::rgb::Color;

/// Alpha reported by [`Color::to_display`].
///
/// NOTE: this is 1, not 255. It does not share the 0..=255 scale of the
/// color channels. Pixel sinks that read alpha on that scale will treat
/// the result as nearly transparent. Change it together with the consumer.
pub const OPAQUE_ALPHA: u32 = 1;

/// Clamped, integer-scaled channels ready for an image or pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayRgba {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl DisplayRgba {
    /// Channels as an `[r, g, b, a]` array.
    #[inline]
    pub fn to_array(self) -> [u32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[inline]
fn scale_channel(v: f64) -> u32 {
    // `as` truncates toward zero; NaN lands on 0
    (v.clamp(0.0, 1.0) * 255.0) as u32
}

impl Color {
    /// Convert to display channel values.
    ///
    /// Each channel is clamped to `0.0..=1.0`, multiplied by 255 and
    /// truncated. Out-of-range input is clamped silently: callers are
    /// expected to tone map the image first. Alpha is always
    /// [`OPAQUE_ALPHA`].
    ///
    /// # Example
    /// ```
    /// use radiant_color::Color;
    ///
    /// let rgba = Color::new(-1.0, 0.5, 2.0).to_display();
    /// assert_eq!(rgba.to_array(), [0, 127, 255, 1]);
    /// ```
    pub fn to_display(&self) -> DisplayRgba {
        DisplayRgba {
            r: scale_channel(self.r),
            g: scale_channel(self.g),
            b: scale_channel(self.b),
            a: OPAQUE_ALPHA,
        }
    }
}

/// Writes the clamped display value as `rrggbb`.
impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DisplayRgba { r, g, b, .. } = self.to_display();
        write!(f, "{:02x}{:02x}{:02x}", r, g, b)
    }
}
