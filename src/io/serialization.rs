// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings serialization and deserialization.
//!
//! This module handles saving and loading capture settings in YAML
//! and JSON formats.

use crate::models::config::MapperConfig;
use anyhow::{bail, Result};
use std::path::Path;

/// Export settings to YAML format.
pub fn export_yaml(config: &MapperConfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export settings to JSON format.
pub fn export_json(config: &MapperConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import settings from YAML format.
pub fn import_yaml(path: &Path) -> Result<MapperConfig> {
    let yaml = std::fs::read_to_string(path)?;
    let config: MapperConfig = serde_yaml::from_str(&yaml)?;
    config.validate()?;
    Ok(config)
}

/// Import settings from JSON format.
pub fn import_json(path: &Path) -> Result<MapperConfig> {
    let json = std::fs::read_to_string(path)?;
    let config: MapperConfig = serde_json::from_str(&json)?;
    config.validate()?;
    Ok(config)
}

/// Save settings, choosing the format from the file extension.
pub fn save_config(config: &MapperConfig, path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => export_yaml(config, path),
        Some("json") => export_json(config, path),
        other => bail!("Unsupported settings file extension: {:?}", other),
    }
}

/// Load settings, choosing the format from the file extension.
pub fn load_config(path: &Path) -> Result<MapperConfig> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported settings file extension: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{CaptureMode, ScaleKind};

    fn sample() -> MapperConfig {
        MapperConfig {
            mode: CaptureMode::Segments,
            use_scale: true,
            scale: ScaleKind::Normalized,
            max_x: 12.5,
            max_y: 40.0,
            display_width: 800,
        }
    }

    #[test]
    fn test_yaml_roundtrip() {
        let path = std::env::temp_dir().join("prma-settings-test.yaml");
        save_config(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("mode: segments"));
        assert_eq!(load_config(&path).unwrap(), sample());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_roundtrip() {
        let path = std::env::temp_dir().join("prma-settings-test.json");
        save_config(&sample(), &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), sample());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let path = std::env::temp_dir().join("prma-settings-invalid.json");
        std::fs::write(&path, r#"{"max_x": -1.0}"#).unwrap();
        assert!(load_config(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = std::env::temp_dir().join("prma-settings.toml");
        assert!(save_config(&sample(), &path).is_err());
        assert!(load_config(&path).is_err());
    }
}
