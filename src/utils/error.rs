use thiserror::Error;

/// Why the generation provider did not produce a usable roast.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider disabled or no API key configured")]
    Unavailable,

    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned status {status}")]
    Status { status: u16 },

    #[error("Provider response malformed: {message}")]
    Malformed { message: String },

    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    #[error("Provider completion too long: {length} characters")]
    CompletionTooLong { length: usize },
}

impl ProviderError {
    /// `Unavailable` 是預期狀態，其餘都算呼叫失敗。
    pub fn is_call_failure(&self) -> bool {
        !matches!(self, ProviderError::Unavailable)
    }
}

#[derive(Error, Debug)]
pub enum RoastError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl RoastError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RoastError::IoError(_) => "Check that the config file exists and is readable",
            RoastError::HttpClientError(_) => "Check TLS support and proxy settings",
            RoastError::ConfigError { .. } => "Make sure the config file is valid TOML",
            RoastError::InvalidConfigValueError { .. } => {
                "Fix the listed field in the config file or command line"
            }
            RoastError::ServerError { .. } => "Check that the bind address is free and valid",
        }
    }
}

pub type Result<T> = std::result::Result<T, RoastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_not_a_call_failure() {
        assert!(!ProviderError::Unavailable.is_call_failure());
        assert!(ProviderError::Status { status: 429 }.is_call_failure());
        assert!(ProviderError::CompletionTooLong { length: 500 }.is_call_failure());
    }
}
