// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are read from an optional YAML or JSON file whose path is given
//! in the `MEMEGEN_SETTINGS` environment variable. Every key is optional.

use crate::models::surface::SurfaceLayout;
use crate::models::volume::Volume;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "MEMEGEN_SETTINGS";

/// Canvas and narration defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub caption_font_size: f32,
    pub top_caption_y: f32,
    pub bottom_caption_margin: f32,
    /// Starting slider position, clamped to 0..=100
    pub initial_volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        let layout = SurfaceLayout::default();
        Self {
            canvas_width: layout.width,
            canvas_height: layout.height,
            caption_font_size: layout.caption_font_size,
            top_caption_y: layout.top_caption_y,
            bottom_caption_margin: layout.bottom_caption_margin,
            initial_volume: Volume::default().percent(),
        }
    }
}

impl Settings {
    /// Load settings from the file named by `MEMEGEN_SETTINGS`, or defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let settings = Self::load(Path::new(&path))?;
                log::info!("Loaded settings from {}", Path::new(&path).display());
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a settings file, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            _ => bail!("Unsupported settings file extension: {:?}", extension),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            bail!(
                "Canvas size must be positive, got {}x{}",
                self.canvas_width,
                self.canvas_height
            );
        }
        if !(self.caption_font_size > 0.0) {
            bail!("Caption font size must be positive, got {}", self.caption_font_size);
        }
        Ok(())
    }

    pub fn layout(&self) -> SurfaceLayout {
        SurfaceLayout {
            width: self.canvas_width,
            height: self.canvas_height,
            caption_font_size: self.caption_font_size,
            top_caption_y: self.top_caption_y,
            bottom_caption_margin: self.bottom_caption_margin,
        }
    }

    pub fn volume(&self) -> Volume {
        Volume::new(self.initial_volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_layout() {
        let settings = Settings::default();
        assert_eq!(settings.layout(), SurfaceLayout::default());
        assert_eq!(settings.volume(), Volume::new(100));
    }

    #[test]
    fn test_yaml_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "canvas_width: 640\ninitial_volume: 250\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.canvas_width, 640.0);
        assert_eq!(settings.canvas_height, 400.0);
        assert_eq!(settings.caption_font_size, 25.0);
        assert_eq!(settings.volume(), Volume::new(100));
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let original = Settings {
            canvas_height: 300.0,
            initial_volume: 40,
            ..Settings::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.layout().height, 300.0);
    }

    #[test]
    fn test_rejects_non_positive_canvas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "canvas_height: 0\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("Canvas size"));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "canvas_width = 10\n").unwrap();

        assert!(Settings::load(&path).is_err());
    }
}
