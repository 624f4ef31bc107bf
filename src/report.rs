//! Printable color reports for the CLI

use radiant_color::Color;
use serde::Serialize;
use std::fmt;

/// A color as printed by the CLI, in float and display form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// Input string or surface name
    pub label: String,
    /// Unbounded float channels `[r, g, b]`
    pub channels: [f64; 3],
    /// Clamped display channels `[r, g, b, a]`
    pub rgba: [u32; 4],
    /// Clamped value as `#rrggbb`
    pub hex: String,
}

impl ColorReport {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            channels: [color.r, color.g, color.b],
            rgba: color.to_display().to_array(),
            hex: format!("#{:x}", color),
        }
    }

    /// Single-line JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels;
        let [dr, dg, db, da] = self.rgba;
        write!(
            f,
            "{}: ({:.4}, {:.4}, {:.4}) -> rgba({}, {}, {}, {}) {}",
            self.label, r, g, b, dr, dg, db, da, self.hex
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_fields() {
        let report = ColorReport::new("#ff0080", Color::new(1.0, 0.0, 128.0 / 255.0));

        assert_eq!(report.label, "#ff0080");
        assert_eq!(report.rgba, [255, 0, 128, 1]);
        assert_eq!(report.hex, "#ff0080");
    }

    #[test]
    fn test_report_display() {
        let report = ColorReport::new("hot", Color::new(2.0, -0.5, 0.25));

        assert_eq!(
            report.to_string(),
            "hot: (2.0000, -0.5000, 0.2500) -> rgba(255, 0, 63, 1) #ff003f"
        );
    }

    #[test]
    fn test_report_json() {
        let report = ColorReport::new("white", Color::WHITE);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["label"], "white");
        assert_eq!(json["channels"], serde_json::json!([1.0, 1.0, 1.0]));
        assert_eq!(json["rgba"], serde_json::json!([255, 255, 255, 1]));
        assert_eq!(json["hex"], "#ffffff");
    }
}
