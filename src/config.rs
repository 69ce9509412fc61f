use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "wheelbet.json";

/// Session settings. Bets default to one to five neighbors a side,
/// starting at two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub min_radius: usize,
    pub max_radius: usize,
    pub default_radius: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_radius: 1,
            max_radius: 5,
            default_radius: 2,
            seed: None,
        }
    }
}

impl Config {
    /// Read and validate `path`. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::read(path.as_ref(), true)
    }

    /// Like [`Config::load`], but a file that does not exist gives the
    /// defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::read(path.as_ref(), false)
    }

    fn read(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_radius > self.max_radius {
            return Err(ConfigError::Invalid(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if !self.allows(self.default_radius) {
            return Err(ConfigError::Invalid(format!(
                "default_radius {} is outside {}..={}",
                self.default_radius, self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }

    pub fn allows(&self, radius: usize) -> bool {
        (self.min_radius..=self.max_radius).contains(&radius)
    }
}
