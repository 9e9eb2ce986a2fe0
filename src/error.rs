use thiserror::Error;

#[derive(Error, Debug)]
pub enum RdbSumError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid search pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No input files found for: {pattern}")]
    NoInputFiles { pattern: String },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet output failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for RdbSumError {
    fn user_message(&self) -> String {
        match self {
            RdbSumError::Io(err) => {
                format!("IO operation failed: {}", err)
            }
            RdbSumError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            RdbSumError::InvalidPattern { pattern, .. } => {
                format!("Invalid search pattern: {}", pattern)
            }
            RdbSumError::NoInputFiles { pattern } => {
                format!("Found nothing to do for path: {}", pattern)
            }
            RdbSumError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            RdbSumError::InvalidPattern { .. } => Some(
                "Glob patterns may use * and ? wildcards, e.g. -p 'RDBs/*.TXT'".to_string(),
            ),
            RdbSumError::NoInputFiles { .. } => Some(
                "Pass a file, a directory to search recursively, or a glob pattern with -p. \
                 Directories are searched for files with the configured text extension \
                 (default: .txt, case-insensitive)."
                    .to_string(),
            ),
            RdbSumError::Config { .. } => Some(
                "Check the TOML syntax of your configuration file, or regenerate one with \
                 --generate-config."
                    .to_string(),
            ),
            RdbSumError::Csv(_) | RdbSumError::Xlsx(_) => Some(
                "Ensure the output file is not open in another program and the directory is \
                 writable."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for RdbSumError {
    fn from(error: toml::de::Error) -> Self {
        RdbSumError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RdbSumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = RdbSumError::NoInputFiles {
            pattern: "missing/*.TXT".to_string(),
        };
        assert!(error.user_message().contains("missing/*.TXT"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let error = RdbSumError::from(parse_error);
        assert!(matches!(error, RdbSumError::Config { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = RdbSumError::from(io_error);
        assert!(error.user_message().contains("IO operation failed"));
    }
}
