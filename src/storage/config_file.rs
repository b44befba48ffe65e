use crate::controllers::explorer::config::{ConfigValidationError, ExplorerConfig};
use log::debug;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    Invalid(ConfigValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read config {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "could not parse config: {}", err),
            Self::Invalid(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigValidationError> for ConfigError {
    fn from(err: ConfigValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// Parses and validates a TOML explorer config. Missing keys and sections
/// take their defaults.
pub fn parse_config(contents: &str) -> Result<ExplorerConfig, ConfigError> {
    let config: ExplorerConfig = toml::from_str(contents)?;
    config.validate()?;

    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ExplorerConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded config from {}", path.display());

    parse_config(&contents)
}
