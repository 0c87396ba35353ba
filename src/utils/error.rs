use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Funcionário já cadastrado (código {code})")]
    DuplicateWorker { code: i32 },

    #[error("Funcionário Inexistente (código {code})")]
    UnknownWorker { code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Io,
    Config,
    Input,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HrError {
    pub fn input(message: impl Into<String>) -> Self {
        HrError::InputError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HrError::DuplicateWorker { .. } | HrError::UnknownWorker { .. } => {
                ErrorCategory::Domain
            }
            HrError::IoError(_) => ErrorCategory::Io,
            HrError::SerializationError(_) | HrError::CsvError(_) => ErrorCategory::Serialization,
            HrError::ConfigError { .. }
            | HrError::ConfigValidationError { .. }
            | HrError::InvalidConfigValueError { .. }
            | HrError::MissingConfigError { .. } => ErrorCategory::Config,
            HrError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the operator, without the debug detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            HrError::DuplicateWorker { .. } => "Funcionário já cadastrado".to_string(),
            HrError::UnknownWorker { .. } => "Funcionário Inexistente".to_string(),
            HrError::IoError(e) => format!("Erro ao salvar arquivo: {}", e),
            HrError::InputError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HrError::DuplicateWorker { .. } => "Use a code that is not registered yet",
            HrError::UnknownWorker { .. } => "Check the worker code with `list`",
            HrError::IoError(_) => "Check that the output location exists and is writable",
            HrError::SerializationError(_) | HrError::CsvError(_) => {
                "Check the report data for values that cannot be serialized"
            }
            HrError::ConfigError { .. }
            | HrError::ConfigValidationError { .. }
            | HrError::InvalidConfigValueError { .. }
            | HrError::MissingConfigError { .. } => "Fix the roster file and run again",
            HrError::InputError { .. } => "Type `help` to see the accepted commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, HrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_match_operator_wording() {
        let dup = HrError::DuplicateWorker { code: 7 };
        assert_eq!(dup.user_friendly_message(), "Funcionário já cadastrado");
        assert_eq!(dup.category(), ErrorCategory::Domain);

        let unknown = HrError::UnknownWorker { code: 7 };
        assert_eq!(unknown.user_friendly_message(), "Funcionário Inexistente");
        assert!(unknown.to_string().contains("7"));
    }

    #[test]
    fn test_severity_ordering() {
        let io = HrError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert!(HrError::input("x").severity() < io.severity());
    }
}
