//! Todo API-specific error types.

/// Errors that can occur during todo API operations.
///
/// Callers treat every variant as a failed remote operation; the variants
/// only exist to make the logged diagnostic precise.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_display() {
        let error = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
    }

    #[test]
    fn test_api_error_from_serde() {
        let serde_error = serde_json::from_str::<u64>("not json").unwrap_err();
        let error: ApiError = serde_error.into();
        assert!(matches!(error, ApiError::Deserialization(_)));
        assert!(error.to_string().contains("deserialize"));
    }
}
