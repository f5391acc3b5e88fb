use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Upstream unavailable at {url}: {reason}")]
    UpstreamUnavailable { url: String, reason: String },

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AggregatorError {
    pub fn upstream(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedResponse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => message.clone(),
            Self::UpstreamUnavailable { .. } => {
                "The catalog service could not be reached".to_string()
            }
            Self::MalformedResponse { .. } => {
                "The catalog service returned data in an unexpected format".to_string()
            }
            Self::IoError(e) => format!("File system error: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Pass a count between 1 and 100",
            Self::UpstreamUnavailable { .. } => {
                "Check network connectivity and the catalog base_url, then try again"
            }
            Self::MalformedResponse { .. } => {
                "Verify that base_url points at a compatible catalog API"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_is_shown_verbatim() {
        let err = AggregatorError::InvalidArgument {
            message: "Count must be between 1 and 100".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Count must be between 1 and 100");
        assert_eq!(err.recovery_suggestion(), "Pass a count between 1 and 100");
    }

    #[test]
    fn test_display_includes_url() {
        let err = AggregatorError::malformed("http://catalog/pokemon/2/", "missing field `species`");
        let text = err.to_string();
        assert!(text.contains("http://catalog/pokemon/2/"));
        assert!(text.contains("missing field `species`"));
    }
}
