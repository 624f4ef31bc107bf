//! Unbounded RGB color type
//!
//! Channels are plain intensities. Addition accumulates light, multiplication
//! filters it, and scaling adjusts exposure. Nothing here clamps.

use std::iter::Sum;
use std::ops;

/// A color with unbounded intensity in each channel.
///
/// Unlike 8-bit display colors, a `Color` has no fixed range per channel:
/// negative values and values above 1.0 are valid while light is being
/// accumulated. The whole image should be scaled together before it is
/// converted with [`Color::to_display`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel intensity
    pub r: f64,
    /// Green channel intensity
    pub g: f64,
    /// Blue channel intensity
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const PINK: Color = Color::new(1.0, 0.0, 0.5);
    pub const YELLOW: Color = Color::new(0.5, 0.5, 0.0);

    /// Create a color from raw channel intensities. No range check is done.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl ops::Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl ops::AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Component-wise product.
impl ops::Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl ops::Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, f: f64) -> Color {
        Color::new(self.r * f, self.g * f, self.b * f)
    }
}

impl ops::Mul<Color> for f64 {
    type Output = Color;

    #[inline]
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Color> for Color {
    fn sum<I: Iterator<Item = &'a Color>>(iter: I) -> Color {
        iter.copied().sum()
    }
}
