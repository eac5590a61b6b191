//! Configuration file management.
//!
//! Reads the optional `.warren.toml` in the working directory:
//!
//! ```toml
//! [fetch]
//! prefix = "/myapp/${STAGE}/"
//! strategy = "path"        # or "enumerate"
//! strict = false
//! ```
//!
//! A missing file yields defaults; CLI flags override file values.
//! The prefix is threaded through as an explicit parameter from here on,
//! never held as process-global state.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::resolver::Strategy;
use crate::core::template;
use crate::error::{ConfigError, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = ".warren.toml";

/// Project configuration loaded from `.warren.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Parameter fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// The `[fetch]` table.
#[derive(Debug, Default, Deserialize)]
pub struct FetchConfig {
    /// Parameter path prefix, possibly templated (`/myapp/${STAGE}/`).
    pub prefix: Option<String>,
    /// Retrieval strategy.
    pub strategy: Option<Strategy>,
    /// Treat any remote failure as fatal instead of falling back.
    #[serde(default)]
    pub strict: bool,
}

/// Effective settings after file values, CLI overrides, and template
/// expansion.
#[derive(Debug)]
pub struct Settings {
    pub prefix: String,
    pub strategy: Strategy,
    pub strict: bool,
}

impl Config {
    /// Load `.warren.toml` from the current directory.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(config)
    }

    /// Combine file values with CLI overrides into effective settings.
    ///
    /// CLI values win; the prefix template is expanded from the process
    /// environment here, once, before any store call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPrefix` if neither the CLI nor the
    /// file supplies a prefix, or a template error if expansion fails.
    pub fn settings(
        &self,
        prefix: Option<&str>,
        strategy: Option<Strategy>,
        strict: bool,
    ) -> Result<Settings> {
        let raw = prefix
            .map(str::to_string)
            .or_else(|| self.fetch.prefix.clone())
            .ok_or(ConfigError::MissingPrefix)?;

        Ok(Settings {
            prefix: template::expand_from_env(&raw)?,
            strategy: strategy.or(self.fetch.strategy).unwrap_or_default(),
            strict: strict || self.fetch.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [fetch]
            prefix = "/myapp/prod/"
            strategy = "enumerate"
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(config.fetch.prefix.as_deref(), Some("/myapp/prod/"));
        assert_eq!(config.fetch.strategy, Some(Strategy::Enumerate));
        assert!(config.fetch.strict);
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.fetch.prefix.is_none());
        assert!(config.fetch.strategy.is_none());
        assert!(!config.fetch.strict);
    }

    #[test]
    fn cli_prefix_overrides_file() {
        let config: Config = toml::from_str(
            r#"
            [fetch]
            prefix = "/from-file/"
            "#,
        )
        .unwrap();

        let settings = config.settings(Some("/from-cli/"), None, false).unwrap();
        assert_eq!(settings.prefix, "/from-cli/");
    }

    #[test]
    fn missing_prefix_is_an_error() {
        let config = Config::default();
        let err = config.settings(None, None, false).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::MissingPrefix)
        ));
    }

    #[test]
    fn file_strict_survives_cli_default() {
        let config: Config = toml::from_str(
            r#"
            [fetch]
            prefix = "/p/"
            strict = true
            "#,
        )
        .unwrap();

        let settings = config.settings(None, None, false).unwrap();
        assert!(settings.strict);
    }
}
