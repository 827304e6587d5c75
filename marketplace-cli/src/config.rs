use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[session]
# Where the signed-in user is kept between runs
# path = "/home/me/.config/freelance-marketplace/session.json"

[display]
currency_symbol = "₹"
featured_limit = 3
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CliConfig {
    pub session: Option<SessionConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_featured_limit() -> usize {
    3
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            featured_limit: default_featured_limit(),
        }
    }
}

impl CliConfig {
    /// Load from the default location, writing a commented default file
    /// on first run
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?
            .try_deserialize()
    }

    pub fn session_path(&self) -> PathBuf {
        self.session
            .as_ref()
            .and_then(|s| s.path.clone())
            .unwrap_or_else(|| config_dir().join("session.json"))
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }
}

fn config_dir() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("freelance-marketplace")
    } else {
        PathBuf::from(".")
    }
}

pub fn get_config_path() -> PathBuf {
    config_dir().join("marketplace.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_written_and_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("marketplace.toml");

        let config = CliConfig::load_from(&path).unwrap();
        assert!(path.exists());

        let display = config.display();
        assert_eq!(display.currency_symbol, "₹");
        assert_eq!(display.featured_limit, 3);
        assert!(config.session_path().ends_with("session.json"));
    }

    #[test]
    fn test_session_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marketplace.toml");
        std::fs::write(
            &path,
            "[session]\npath = \"/tmp/mp-session.json\"\n\n[display]\ncurrency_symbol = \"Rs.\"\n",
        )
        .unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        assert_eq!(config.session_path(), PathBuf::from("/tmp/mp-session.json"));
        assert_eq!(config.display().currency_symbol, "Rs.");
        assert_eq!(config.display().featured_limit, 3);
    }
}
