use crate::error::{RdbSumError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub files: FileConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    /// Extension (without dot) collected when a directory is searched.
    pub extension: String,
    pub exclude_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Base name for output files when -f is not given.
    pub base_name: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            exclude_dirs: vec![".git".to_string()],
            exclude_patterns: vec![],
            max_depth: 16,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_name: "output".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RdbSumError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| RdbSumError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| RdbSumError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["rdbsum.toml", ".rdbsum.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.files.extension.is_empty() {
            return Err(RdbSumError::Config {
                message: "files.extension must not be empty".to_string(),
            });
        }

        if self.files.extension.starts_with('.') {
            return Err(RdbSumError::Config {
                message: format!(
                    "files.extension must not include the dot: {}",
                    self.files.extension
                ),
            });
        }

        if self.files.max_depth == 0 {
            return Err(RdbSumError::Config {
                message: "files.max_depth must be at least 1".to_string(),
            });
        }

        if self.output.base_name.is_empty() {
            return Err(RdbSumError::Config {
                message: "output.base_name must not be empty".to_string(),
            });
        }

        for pattern in &self.files.exclude_patterns {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(RdbSumError::Config {
                    message: format!("Invalid exclude pattern '{}': {}", pattern, e),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        r#"# rdbsum configuration file
#
# Settings here apply when rdbsum searches a directory for relay
# configuration exports and when it writes output files.

[files]
# Extension (without the dot) collected during recursive directory search.
# Matching is case-insensitive, so "txt" also picks up .TXT exports.
extension = "txt"

# Directory names skipped during recursion.
exclude_dirs = [".git"]

# Regular expressions; any path matching one is skipped.
exclude_patterns = []

# Maximum directory depth for recursive search.
max_depth = 16

[output]
# Base name for output files when -f/--output-file is not given.
# Existing files are never overwritten; a " - N" suffix is added instead.
base_name = "output"
"#
        .to_string()
    }
}
