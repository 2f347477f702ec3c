use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfitError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("Failed to load input tables: {}", sources.join(", "))]
    LoadFailed { sources: Vec<String> },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 每一種錯誤都會讓程式以非零狀態結束
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl ProfitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CsvError(_) | Self::IoError(_) | Self::LoadFailed { .. } => ErrorCategory::Input,
            Self::MissingColumn { .. } => ErrorCategory::Schema,
            Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SerializationError(_) => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::MissingColumn { .. }
            | Self::LoadFailed { .. }
            | Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::CsvError(_) => "Check that the input file uses the configured delimiter".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Re-run with --no-dump to skip the table dump".to_string(),
            Self::TomlError(_) => "Make sure the configuration file is valid TOML".to_string(),
            Self::MissingColumn { column, .. } => {
                format!("Add a '{}' column to the header row", column)
            }
            Self::LoadFailed { sources } => {
                format!("Verify the input paths: {}", sources.join(", "))
            }
            Self::ConfigValidationError { field, .. } | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read flight data: {}", self),
            ErrorCategory::Schema => format!("Input table has an unexpected layout: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not produce output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_schema_error() {
        let err = ProfitError::MissingColumn {
            source_name: "airports.csv".to_string(),
            column: "Code".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Schema);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Missing required column 'Code' in airports.csv");
        assert!(err.recovery_suggestion().contains("Code"));
    }

    #[test]
    fn test_load_failed_lists_sources() {
        let err = ProfitError::LoadFailed {
            sources: vec!["airports.csv".to_string(), "aeroplanes.csv".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Failed to load input tables: airports.csv, aeroplanes.csv"
        );
        assert!(err.user_friendly_message().starts_with("Could not read flight data"));
    }

    #[test]
    fn test_every_severity_exits_non_zero() {
        let errors = [
            ProfitError::SerializationError(serde_json::from_str::<u8>("x").unwrap_err()),
            ProfitError::LoadFailed { sources: vec![] },
            ProfitError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();

        assert_eq!(codes, vec![2, 1, 3]);
    }
}
