//! Driver configuration.
//!
//! Describes one insertion run for the `redwood` binary. Loaded from YAML
//! files and environment variables.

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "redwood.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "REDWOOD_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "REDWOOD";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "REDWOOD_LOG";

/// Which tree the run builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeKind {
    #[default]
    RedBlack,
    BinarySearch,
}

/// How the configured keys are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Lexicographic string order.
    #[default]
    Text,
    /// Keys parsed as signed integers.
    Integer,
}

/// Main driver configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree to build.
    pub tree: TreeKind,
    /// Key interpretation.
    pub key_type: KeyType,
    /// Keys, inserted in the order given.
    pub keys: Vec<String>,
    /// Run the invariant checker after inserting (red-black trees only).
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree: TreeKind::default(),
            key_type: KeyType::default(),
            keys: ["J", "F", "W", "A", "H", "Y", "G"]
                .into_iter()
                .map(String::from)
                .collect(),
            verify: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `redwood.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, e.g.
    ///    `REDWOOD__KEYS=85,54,97`
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("keys"),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        Ok(config)
    }

    /// Parse a YAML document directly, without touching files or the
    /// environment.
    pub fn from_yaml(yaml: &str) -> Result<Self, Box<dyn std::error::Error>> {
        use ::config::{Config as ConfigLib, File, FileFormat};

        let config = ConfigLib::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
