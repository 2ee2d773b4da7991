use crate::core::dirs::get_config_directory;
use crate::core::error::IgittError;
use crate::core::icons::IconType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// User settings read from `config.json` in the igitt config directory
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IgittConfig {
    /// Icon style for menus: unicode, emoji, nerdfont or ascii
    pub icon_type: IconType,
    /// Show operations regardless of whether we are inside a repository
    pub show_all_commands: bool,
}

impl IgittConfig {
    pub fn config_path() -> Result<PathBuf, IgittError> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the config file, writing the defaults first if it is missing or empty
    pub fn load_or_create() -> Result<Self, IgittError> {
        let config_file = Self::config_path()?;
        Self::load_or_create_at(&config_file)
    }

    pub fn load_or_create_at(config_file: &Path) -> Result<Self, IgittError> {
        let has_content = config_file.exists() && std::fs::metadata(config_file)?.len() > 0;

        if has_content {
            log::debug!("Reading config from {}", config_file.display());
            let content = std::fs::read_to_string(config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            log::info!(
                "Config file does not exist, creating one at {}",
                config_file.display()
            );
            let config = Self::default();
            config.save_to(config_file)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_file: &Path) -> Result<(), IgittError> {
        if let Some(config_dir) = config_file.parent() {
            std::fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)?;

        Ok(())
    }
}
