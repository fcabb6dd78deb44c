use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A named lookup (workspace, run, OAuth client, variable set) had no match
    NotFound(String),
    /// JSON parsing or serialization error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::NotFound(what) => write!(f, "{} not found", what),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl TfeError {
    /// Whether this error should end the process with usage text
    pub fn is_config(&self) -> bool {
        matches!(self, TfeError::Config(_))
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = TfeError::Api {
            status: 409,
            message: "Run is not confirmable".to_string(),
        };
        assert!(err.to_string().contains("409"));
        assert!(err.to_string().contains("not confirmable"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TfeError>();
    }

    #[test]
    fn test_not_found_display() {
        let err = TfeError::NotFound("variable set 'shared'".to_string());
        assert_eq!(err.to_string(), "variable set 'shared' not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = TfeError::Config("TFE_TOKEN is missing".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.is_config());
    }

    #[test]
    fn test_json_error_is_not_config() {
        let err = TfeError::Json("Invalid JSON".to_string());
        assert!(err.to_string().contains("JSON error"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TfeError = json_err.into();
        match err {
            TfeError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected TfeError::Json"),
        }
    }

    #[test]
    fn test_error_source_is_none_for_api() {
        use std::error::Error;
        let err = TfeError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
