//! Decoration configuration
//!
//! A [`DecorationConfig`] describes a map view, the paths to decorate and
//! the patterns to draw along them. Files are JSON or TOML, chosen by
//! extension.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use polydecor_core::LatLng;
use polydecor_decorator::{PathInput, PatternDefinition, PolylineDecorator, WebMercatorMap};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest zoom level accepted in a view
pub const MAX_ZOOM: f64 = 24.0;

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Map viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Map center as `[lat, lng]`
    pub center: LatLng,
    pub zoom: f64,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    pub tile_size: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2.0,
            width: 1024,
            height: 768,
            tile_size: WebMercatorMap::DEFAULT_TILE_SIZE,
        }
    }
}

/// Complete decoration configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecorationConfig {
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub paths: Vec<PathInput>,
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,
}

impl DecorationConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config text in the given format and validate it
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::parse(&content, format)?;
        tracing::debug!(
            "Loaded config from {} ({} paths, {} patterns)",
            path.display(),
            config.paths.len(),
            config.patterns.len()
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    ///
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let view = &self.view;
        if !view.zoom.is_finite() || !(0.0..=MAX_ZOOM).contains(&view.zoom) {
            return Err(out_of_range("view.zoom", view.zoom));
        }
        if view.width == 0 {
            return Err(out_of_range("view.width", view.width));
        }
        if view.height == 0 {
            return Err(out_of_range("view.height", view.height));
        }
        if view.tile_size == 0 {
            return Err(out_of_range("view.tile_size", view.tile_size));
        }
        view.center
            .validate()
            .map_err(|e| SettingsError::invalid_setting("view.center", e))?;

        for (i, path) in self.paths.iter().enumerate() {
            for coord in path.coords() {
                coord
                    .validate()
                    .map_err(|e| SettingsError::invalid_setting(format!("paths[{}]", i), e))?;
            }
        }

        for (i, pattern) in self.patterns.iter().enumerate() {
            pattern
                .spec
                .parse()
                .map_err(|e| SettingsError::invalid_setting(format!("patterns[{}]", i), e))?;
        }

        Ok(())
    }

    /// Map viewport described by the `view` section
    pub fn build_map(&self) -> SettingsResult<WebMercatorMap> {
        let view = &self.view;
        WebMercatorMap::with_tile_size(view.center, view.zoom, view.width, view.height, view.tile_size)
            .map_err(|e| SettingsError::invalid_setting("view.center", e))
    }

    /// Detached decorator for the configured paths and patterns
    pub fn build_decorator(&self) -> SettingsResult<PolylineDecorator> {
        PolylineDecorator::new(&self.paths, &self.patterns)
            .map_err(|e| SettingsError::invalid_setting("patterns", e))
    }
}

fn out_of_range(key: &str, value: impl ToString) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Directory holding polydecor configuration
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|p| p.join("polydecor"))
        .ok_or_else(|| SettingsError::ConfigDirectory("No config or home directory".to_string()))
}

/// Config file used when none is given explicitly
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join("decoration.toml"))
}
