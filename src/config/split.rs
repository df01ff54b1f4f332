use crate::grid::CellLayout;
use crate::splitter::SplitParams;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// What the tool prints to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How the sheet is cut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SplitMode {
    /// Detect sprites from pixel content.
    #[default]
    Auto,
    /// Fixed cell size with optional padding.
    Fixed(CellLayout),
    /// Equal cells from a row and column count.
    Grid { rows: usize, columns: usize },
}

#[derive(Clone, Debug, Deserialize)]
pub struct SplitToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub mode: SplitMode,
    #[serde(default)]
    pub params: SplitParams,
}

pub fn parse_config(contents: &str) -> Result<SplitToolConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

pub fn load_config(path: &Path) -> Result<SplitToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Load the config named by the first command-line argument.
pub fn parse_cli(program: &str) -> Result<SplitToolConfig, String> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    load_config(Path::new(&path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::Background;
    use crate::scan::DistanceMetric;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "sheet.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("sheet.png"));
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.mode, SplitMode::Auto);
        assert_eq!(cfg.params, SplitParams::default());
        assert_eq!(cfg.params.background, Background::TRANSPARENT);
    }

    #[test]
    fn full_config_round_trips_into_params() {
        let cfg = parse_config(
            r#"{
                "input": "sheet.png",
                "output": { "format": "both" },
                "params": {
                    "background": { "solid": 4294967295 },
                    "scan": {
                        "particleSize": 16,
                        "particleDistance": 8,
                        "distanceMetric": "edge",
                        "connectivity": "eight"
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(cfg.output.format.includes_text() && cfg.output.format.includes_json());
        assert_eq!(cfg.params.background, Background::WHITE);
        assert_eq!(cfg.params.scan.particle_size, 16);
        assert_eq!(cfg.params.scan.particle_distance, 8);
        assert_eq!(cfg.params.scan.distance_metric, DistanceMetric::Edge);
    }

    #[test]
    fn grid_modes_parse() {
        let cfg = parse_config(
            r#"{ "input": "a.png", "mode": { "kind": "grid", "rows": 2, "columns": 3 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.mode, SplitMode::Grid { rows: 2, columns: 3 });

        let cfg = parse_config(
            r#"{ "input": "a.png",
                 "mode": { "kind": "fixed", "cellWidth": 16, "cellHeight": 8, "hPadding": 1 } }"#,
        )
        .unwrap();
        assert_eq!(
            cfg.mode,
            SplitMode::Fixed(CellLayout::new(16, 8).with_padding(1, 0))
        );
    }
}
