use crate::error::AppError;
use crate::task_api::CompletionPolicy;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKY_CONFIG_PATH";

/// User settings read from `config.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_path: Option<PathBuf>,
    pub strict_complete: bool,
    /// ANSI colours in the task table.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            strict_complete: false,
            color: true,
        }
    }
}

impl Config {
    pub fn completion_policy(&self) -> CompletionPolicy {
        if self.strict_complete {
            CompletionPolicy::RejectCompleted
        } else {
            CompletionPolicy::Refresh
        }
    }

    /// Reads `path`. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(AppError::io(format!("{}: {}", path.display(), err))),
        };

        serde_json::from_str(&content).map_err(|err| {
            AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
        })
    }

    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            store_path: overrides
                .store_path
                .clone()
                .or_else(|| self.store_path.clone()),
            strict_complete: overrides.strict_complete.unwrap_or(self.strict_complete),
            color: overrides.color.unwrap_or(self.color),
        }
    }
}

/// The config in effect plus the reason the file was ignored, if it was.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

impl ConfigLoad {
    pub fn from_path(path: &Path) -> Self {
        match Config::load(path) {
            Ok(config) => Self {
                config,
                error: None,
            },
            Err(err) => Self {
                config: Config::default(),
                error: Some(err),
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
    pub strict_complete: Option<bool>,
    pub color: Option<bool>,
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("tasky").join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasky")
            .join(CONFIG_FILE_NAME))
    }
}

/// Loads the user's config file, falling back to defaults when it cannot be
/// used.
pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => ConfigLoad::from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}
