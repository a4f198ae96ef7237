//! Configuration management module.
//!
//! This module handles loading and initializing the configuration file and
//! layering the API base URL from the file, the environment and the command
//! line.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub dark_mode: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            dark_mode: false,
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file is created with
    /// the current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|source| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|source| {
                ConfigError::ReadFailed {
                    path: file_path.clone(),
                    source,
                }
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed {
                    path: file_path.clone(),
                    source,
                })?;
            self.api_url = data.api_url;
            self.dark_mode = data.dark_mode;
        } else {
            log::info!("Creating configuration file {}", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration and write it to the file path.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = match &self.file_path {
            Some(path) => path,
            None => return Err(ConfigError::FilePathNotSet.into()),
        };
        let data = FileSpec {
            api_url: self.api_url.clone(),
            dark_mode: self.dark_mode,
        };
        let content = serde_yaml::to_string(&data).map_err(ConfigError::Encode)?;
        fs::write(file_path, content).map_err(|source| ConfigError::WriteFailed {
            path: file_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Replace the API base URL with the given value unless it is missing
    /// or blank.
    ///
    pub fn override_api_url(&mut self, value: Option<String>) {
        if let Some(url) = value {
            let url = url.trim();
            if !url.is_empty() {
                self.api_url = url.to_owned();
            }
        }
    }

    /// Check that the API base URL is an absolute http(s) URL and strip any
    /// trailing slash.
    ///
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let parsed = reqwest::Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.api_url = self.api_url.trim_end_matches('/').to_owned();
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
