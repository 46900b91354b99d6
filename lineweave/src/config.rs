use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Presentation and output options for callers wrapping the library.
///
/// The core readers take no configuration; these options exist for the CLI
/// and similar front ends. They can be loaded from multiple locations in
/// order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.lineweave.yaml` in the current directory
/// 3. Global `$CONFIG_DIR/lineweave/config.yaml`
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Default output file for merge operations
/// output_path: "output.txt"
///
/// # Wrap status output in ANSI colors
/// color: true
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// CLI flags take precedence over config file values; the merging behavior
/// is defined in [`merge_with_cli`](Self::merge_with_cli).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Default output file for merge operations
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Whether status output is wrapped in ANSI colors
    #[serde(default = "default_color")]
    pub color: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl ReadOptions {
    /// Loads options from the default locations.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads options, additionally reading `config_path` when given.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("lineweave/config.yaml")),
            // Local config
            Some(PathBuf::from(".lineweave.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values. CLI values take
    /// precedence when present.
    pub fn merge_with_cli(
        mut self,
        output_path: Option<PathBuf>,
        color: Option<bool>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(output_path) = output_path {
            self.output_path = output_path;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}
