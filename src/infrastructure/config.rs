use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_PROFILE_NAME: &str = "Guest";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    /// Name greeted on the catalog header
    #[serde(default)]
    pub profile_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
            profile_name: DEFAULT_PROFILE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Embedded defaults only, without touching the filesystem
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layers any `config.*` file found in `config_dir` over the embedded defaults.
    /// Every file is optional.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.profile_name.trim().is_empty() {
            cfg.profile_name.clone_from(&default_config.profile_name);
        }

        Ok(cfg)
    }
}
