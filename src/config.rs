use crate::color::{BlendMode, ColorFormat, DEFAULT_BLEND_AMOUNT, DEFAULT_ROTATION};
use crate::log_debug;

use anyhow::{Context, Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User defaults for the swatchkit CLI.
///
/// Every field is optional so that a project file only overrides what it names.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Output format for converted and derived colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColorFormat>,
    /// Blend mode used when `--mode` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    /// Blend amount (0-100) used when `--amount` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_amount: Option<f64>,
    /// Hue rotation in degrees used when `--degrees` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Flag indicating if this config is from a project file
    #[serde(skip)]
    pub is_project_config: bool,
}

/// Project configuration filename
pub const PROJECT_CONFIG_FILENAME: &str = ".swatchkit.toml";

impl Config {
    /// Load the personal configuration, merged with the project file in the
    /// current directory if there is one.
    pub fn load() -> Result<Self> {
        let project_path = std::env::current_dir()
            .context("Unable to determine current directory")?
            .join(PROJECT_CONFIG_FILENAME);
        Self::load_from(&Self::get_config_path()?, &project_path)
    }

    /// Load the personal config at `personal` and merge the project config at
    /// `project` over it. Missing files are skipped.
    pub fn load_from(personal: &Path, project: &Path) -> Result<Self> {
        let mut config = if personal.exists() {
            Self::read(personal)?
        } else {
            Self::default()
        };

        if project.exists() {
            let mut project_config = Self::read(project).with_context(|| {
                format!(
                    "Invalid project configuration file. Please check your {PROJECT_CONFIG_FILENAME} file for syntax errors."
                )
            })?;
            project_config.is_project_config = true;
            config.merge_with_project_config(project_config);
        }

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load only the project config in `dir`, or defaults if there is none.
    pub fn load_project_config(dir: &Path) -> Result<Self> {
        let path = dir.join(PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::read(&path)?
        } else {
            Self::default()
        };
        config.is_project_config = true;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Merge this config with project-specific config, with project config taking precedence
    pub fn merge_with_project_config(&mut self, project_config: Self) {
        log_debug!("Merging with project configuration");

        if project_config.format.is_some() {
            self.format = project_config.format;
        }
        if project_config.blend_mode.is_some() {
            self.blend_mode = project_config.blend_mode;
        }
        if project_config.blend_amount.is_some() {
            self.blend_amount = project_config.blend_amount;
        }
        if project_config.rotation.is_some() {
            self.rotation = project_config.rotation;
        }
    }

    /// Save the configuration to the personal config file
    pub fn save(&self) -> Result<()> {
        // Don't save project configs to personal config file
        if self.is_project_config {
            return Ok(());
        }

        self.save_to(&Self::get_config_path()?)
    }

    /// Save the configuration as a project-specific configuration in `dir`
    pub fn save_as_project_config(&self, dir: &Path) -> Result<()> {
        self.save_to(&dir.join(PROJECT_CONFIG_FILENAME))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        log_debug!("Configuration saved to {}: {:?}", path.display(), self);
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("swatchkit");
        path.push("config.toml");
        Ok(path)
    }

    /// Update the configuration with new values
    pub fn update(
        &mut self,
        format: Option<ColorFormat>,
        blend_mode: Option<BlendMode>,
        blend_amount: Option<f64>,
        rotation: Option<f64>,
    ) -> Result<()> {
        if let Some(amount) = blend_amount {
            if !(0.0..=100.0).contains(&amount) {
                return Err(anyhow!("Blend amount must be between 0 and 100, got {amount}"));
            }
            self.blend_amount = Some(amount);
        }
        if format.is_some() {
            self.format = format;
        }
        if blend_mode.is_some() {
            self.blend_mode = blend_mode;
        }
        if rotation.is_some() {
            self.rotation = rotation;
        }

        log_debug!("Configuration updated: {:?}", self);
        Ok(())
    }

    /// Effective output format, if the user set one
    pub fn format(&self) -> Option<ColorFormat> {
        self.format
    }

    /// Effective blend mode
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode.unwrap_or_default()
    }

    /// Effective blend amount
    pub fn blend_amount(&self) -> f64 {
        self.blend_amount.unwrap_or(DEFAULT_BLEND_AMOUNT)
    }

    /// Effective hue rotation
    pub fn rotation(&self) -> f64 {
        self.rotation.unwrap_or(DEFAULT_ROTATION)
    }
}
