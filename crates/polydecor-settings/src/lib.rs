//! polydecor Settings Crate
//!
//! Loads, validates and saves decoration configs, and turns them into a
//! map viewport plus a decorator.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, ConfigFormat, DecorationConfig, ViewSettings, MAX_ZOOM,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
