//! Optional TOML configuration.
//!
//! ```toml
//! [logging]
//! level = "debug"               # any EnvFilter directive
//! file = "mortgage.log"         # append log records to this file
//!
//! [strings]
//! prompt_principal = "Loan amount (EUR)"
//! monthly_payment = "You will pay EUR "
//! ```
//!
//! Every section and key is optional. Keys under `[strings]` must be
//! [`MessageKey`](mortgage_core::MessageKey) identifiers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::strings::{StringTable, StringTableError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Strings(#[from] StringTableError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log filter, e.g. `"info"` or `"mortgage_core=debug"`.
    pub level: Option<String>,
    /// File that log records are appended to.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub strings: HashMap<String, String>,
}

impl AppConfig {
    /// Reads and parses the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// String table with this config's overrides applied.
    pub fn string_table(&self) -> Result<StringTable, ConfigError> {
        Ok(StringTable::from_overrides(&self.strings)?)
    }
}
