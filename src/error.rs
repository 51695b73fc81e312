//! Error types for Toolrack
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Toolrack
#[derive(Debug, Error)]
pub enum ToolrackError {
    /// Tool configuration resource missing or unreadable
    #[error("Failed to load tool config: {0}")]
    ConfigLoad(String),

    /// Tool configuration resource failed to parse
    #[error("Failed to parse tool config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for Toolrack operations
pub type Result<T> = std::result::Result<T, ToolrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_error() {
        let err = ToolrackError::ConfigLoad("data/tools.json: No such file or directory".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to load tool config: data/tools.json: No such file or directory"
        );
    }

    #[test]
    fn test_config_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ToolrackError = json_err.into();
        assert!(matches!(err, ToolrackError::ConfigParse(_)));
        assert!(err.to_string().starts_with("Failed to parse tool config"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolrackError::ConfigLoad("missing".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
