//! Report building behind the CLI subcommands

use anyhow::Context;
use radiant_color::{parse_hex_color, Color};
use std::path::Path;

use crate::models::SceneConfig;
use crate::report::ColorReport;

/// Parse each input as a hex color. The first bad input fails the whole
/// batch, with its text in the error context.
pub fn parse_reports(inputs: &[String]) -> anyhow::Result<Vec<ColorReport>> {
    let mut reports = Vec::with_capacity(inputs.len());
    for input in inputs {
        let color = parse_hex_color(input).with_context(|| format!("Failed to parse {input:?}"))?;
        tracing::debug!(input = %input, r = color.r, g = color.g, b = color.b, "Parsed color");
        reports.push(ColorReport::new(input.as_str(), color));
    }
    Ok(reports)
}

/// Load a scene and report its background followed by one or all shaded
/// surfaces.
pub fn shade_reports(path: &Path, surface: Option<&str>) -> anyhow::Result<Vec<ColorReport>> {
    let scene = SceneConfig::load(path)
        .with_context(|| format!("Failed to load scene {}", path.display()))?;

    if scene.lights.is_empty() {
        tracing::warn!("Scene has no lights, every surface shades to black");
    }

    let shaded: Vec<(String, Color)> = match surface {
        Some(name) => vec![(name.to_string(), scene.shade(name)?)],
        None => scene.shade_all(),
    };

    let mut reports = vec![ColorReport::new("background", scene.background)];
    reports.extend(
        shaded
            .into_iter()
            .map(|(name, color)| ColorReport::new(name, color)),
    );
    Ok(reports)
}
