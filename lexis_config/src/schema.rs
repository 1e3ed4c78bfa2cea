use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Pretty-print JSON responses.
    #[serde(default = "OutputConfig::default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: Self::default_pretty(),
        }
    }
}

impl OutputConfig {
    const fn default_pretty() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Strings analyzed into the store when a shell starts.
    #[serde(default)]
    pub seed: Vec<String>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lexis"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/lexis/config.json`, or the defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Write the template to `path`, refusing to overwrite an existing file.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let config_template = r#"{
  "logging": {
    "level": "info"
  },
  "output": {
    "pretty": true
  },
  "store": {
    "seed": [
      "racecar",
      "A man a plan a canal Panama",
      "hello world"
    ]
  }
}"#;

        std::fs::write(path, config_template)?;
        Ok(())
    }
}
