//! Slide configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slide_core::{Axis, Point};
use slide_widgets::{RestingSide, SwitchConfig};
use std::fs;
use std::path::Path;

/// Top-level Slide configuration (slide.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SlideConfig {
    #[serde(default)]
    pub switch: SwitchSection,
    #[serde(default)]
    pub simulation: SimulationSection,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisName {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SideName {
    #[default]
    Start,
    End,
}

/// Switch geometry
#[derive(Debug, Deserialize, Serialize)]
pub struct SwitchSection {
    #[serde(default)]
    pub axis: AxisName,
    #[serde(default)]
    pub lower: f32,
    #[serde(default = "default_upper")]
    pub upper: f32,
    #[serde(default)]
    pub resting: SideName,
    /// Initial anchored position as `[x, y]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 2]>,
}

fn default_upper() -> f32 {
    200.0
}

impl Default for SwitchSection {
    fn default() -> Self {
        Self {
            axis: AxisName::default(),
            lower: 0.0,
            upper: default_upper(),
            resting: SideName::default(),
            position: None,
        }
    }
}

/// Headless simulation settings
#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationSection {
    /// Frame budget for a single settle
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
    /// Frames per second reported to tasks
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_max_frames() -> u64 {
    600
}

fn default_fps() -> u32 {
    60
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            max_frames: default_max_frames(),
            fps: default_fps(),
        }
    }
}

impl SlideConfig {
    /// Load configuration from a file, or from `slide.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("slide.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `slide init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Widget configuration for the `[switch]` section
    pub fn switch_config(&self) -> SwitchConfig {
        let section = &self.switch;
        let axis = match section.axis {
            AxisName::Horizontal => Axis::Horizontal,
            AxisName::Vertical => Axis::Vertical,
        };
        let resting = match section.resting {
            SideName::Start => RestingSide::Start,
            SideName::End => RestingSide::End,
        };

        let mut config = SwitchConfig::new(axis, section.lower, section.upper).resting(resting);
        if let Some([x, y]) = section.position {
            config = config.position(Point::new(x, y));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = SlideConfig::parse(
            r#"
            [switch]
            axis = "vertical"
            lower = -10.0
            upper = 90.0
            resting = "end"
            position = [4.0, 12.0]

            [simulation]
            max_frames = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.max_frames, 42);
        assert_eq!(config.simulation.fps, 60);

        let switch = config.switch_config();
        assert_eq!(switch.axis, Axis::Vertical);
        assert_eq!((switch.lower, switch.upper), (-10.0, 90.0));
        assert_eq!(switch.resting, RestingSide::End);
        assert_eq!(switch.position, Some(Point::new(4.0, 12.0)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SlideConfig::parse("").unwrap();
        let switch = config.switch_config();
        assert_eq!(switch.axis, Axis::Horizontal);
        assert_eq!((switch.lower, switch.upper), (0.0, 200.0));
        assert_eq!(switch.position, None);
        assert_eq!(config.simulation.max_frames, 600);
    }

    #[test]
    fn test_rejects_unknown_axis() {
        assert!(SlideConfig::parse("[switch]\naxis = \"diagonal\"\n").is_err());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = SlideConfig::default().to_toml().unwrap();
        let parsed = SlideConfig::parse(&text).unwrap();
        assert_eq!(parsed.switch.upper, 200.0);
        assert_eq!(parsed.simulation.fps, 60);
    }
}
