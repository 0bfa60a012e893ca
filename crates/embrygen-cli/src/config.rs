//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees a `GenerationSpec`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `EMBRYGEN__<SECTION>__<KEY>`, e.g.
//!    `EMBRYGEN__GENERATION__APP_NAME=svc`
//! 3. Config file: `--config FILE`, else the platform config path if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use embrygen_core::domain::{
    DEFAULT_APP_NAME, DEFAULT_BASE_DIR, DEFAULT_MODULE_ID, DEFAULT_ROOT_NAME,
    DEFAULT_VENV_DIR_NAME,
};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "EMBRYGEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Default generation parameters.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    pub root_name: String,
    pub base_dir: PathBuf,
    pub module_id: String,
    pub app_name: String,
    pub venv_dir_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateConfig {
    /// Template pack directory; the built-in pack when unset.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Also write logs (without colour) to this file.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                root_name: DEFAULT_ROOT_NAME.into(),
                base_dir: PathBuf::from(DEFAULT_BASE_DIR),
                module_id: DEFAULT_MODULE_ID.into(),
                app_name: DEFAULT_APP_NAME.into(),
                venv_dir_name: DEFAULT_VENV_DIR_NAME.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            templates: TemplateConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. The
    /// platform default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("config file not found: {}", path.display());
                }
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(true)
            }
            None => config::File::from(Self::config_path())
                .format(config::FileFormat::Toml)
                .required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.embrygen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "embrygo", "embrygen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".embrygen.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}
