//! Settings for the calculator and its command-line front end.
//!
//! Layered as: built-in defaults, then an optional file (`reckon.toml` in the
//! working directory unless a path is given), then `RECKON_*` environment
//! variables.

use std::path::Path;

use ::config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::Locale;

/// Prefix for environment overrides, e.g. `RECKON_LOCALE=en`
pub const ENV_PREFIX: &str = "RECKON";

/// Name of the optional configuration file looked up in the working directory
pub const DEFAULT_FILE: &str = "reckon.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language for phrases, explanations and errors (default: Hebrew)
    pub locale: Locale,
    /// Print results as JSON instead of text
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

impl Config {
    /// Loads the layered configuration. An explicit `path` must exist;
    /// `reckon.toml` in the working directory is optional.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if a source cannot be read or a value
    /// does not fit its field.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Path::new("."), Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`Config::load`], with the default file looked up in `dir` and
    /// overrides taken from `env`.
    fn load_from(path: Option<&Path>, dir: &Path, env: Environment) -> Result<Self, ConfigError> {
        // Exact name and format, an extensionless `reckon` beside it is not a candidate.
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(dir.join(DEFAULT_FILE))
                .format(FileFormat::Toml)
                .required(false),
        };
        let settings = ::config::Config::builder()
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
