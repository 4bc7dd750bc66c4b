use log::warn;
use serde::Deserialize;
use std::sync::OnceLock;

static CONFIG: OnceLock<ParserConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Capacity of the read buffer before any growth
    pub initial_buffer_size: usize,

    /// Upper bound for the read buffer, unbounded when absent
    pub max_buffer_size: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            initial_buffer_size: 32,
            max_buffer_size: None,
        }
    }
}

impl ParserConfig {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Fail to read {path}: {err}, fall back to default config");
                return ParserConfig::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(parser_config) => parser_config,
            Err(err) => {
                warn!("Fail to deserialize config file {path}: {err}, fall back to default config");
                ParserConfig::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ParserConfig>(content)
    }
}

/// Installs the process-wide config.
/// Gives the config back if one was already installed.
pub fn set_config(cfg: ParserConfig) -> Result<(), ParserConfig> {
    CONFIG.set(cfg)
}

/// Process-wide config, defaults if [`set_config`] was never called
pub fn config() -> &'static ParserConfig {
    CONFIG.get_or_init(ParserConfig::default)
}
