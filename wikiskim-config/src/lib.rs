//! Loader for wikiskim configuration with YAML + environment overlays.
//!
//! Precedence: `WIKISKIM_`-prefixed environment variables win over the
//! attached file, which wins over the serde defaults. Every field has a
//! default, so running with no file and no environment is always valid.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration for the wikiskim binary.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WikiskimConfig {
    pub api: ApiConfig,
    pub log: LogSettings,
}

/// Upstream endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the MediaWiki installation; the `w/api.php` path is
    /// appended by the client.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikipedia.org".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Logging settings handed to `wikiskim_common::observability`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Explicit log directory; `None` defers to `WIKISKIM_LOG_DIR` and the
    /// platform default.
    pub dir: Option<PathBuf>,
    /// Mirror log events to stderr.
    pub stderr: bool,
    /// Filter applied when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            dir: None,
            stderr: false,
            filter: "info".to_string(),
        }
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct WikiskimConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for WikiskimConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WikiskimConfigLoader {
    /// Start with an empty source stack; `WIKISKIM_` env overrides are
    /// merged last in [`load`](Self::load) so they always win.
    ///
    /// ```
    /// use wikiskim_config::WikiskimConfigLoader;
    ///
    /// let config = WikiskimConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.api.endpoint, "https://en.wikipedia.org");
    /// assert_eq!(config.api.timeout_secs, 15);
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use wikiskim_config::WikiskimConfigLoader;
    ///
    /// let cfg = WikiskimConfigLoader::new()
    ///     .with_yaml_str("api:\n  timeout_secs: 3\n")
    ///     .load()
    ///     .unwrap();
    /// assert_eq!(cfg.api.timeout_secs, 3);
    /// assert_eq!(cfg.api.endpoint, "https://en.wikipedia.org");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Environment variables use a single underscore after the prefix and a
    /// double underscore between nesting levels, e.g.
    /// `WIKISKIM_API__TIMEOUT_SECS` maps to `api.timeout_secs`.
    pub fn load(self) -> Result<WikiskimConfig, ConfigError> {
        self.builder
            .add_source(
                Environment::with_prefix("WIKISKIM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
