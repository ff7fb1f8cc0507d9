use thiserror::Error;

/// Input problems caught before anything goes over the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid file type. Please upload TXT, PDF, DOC, or DOCX files.")]
    InvalidType { extension: Option<String> },
    #[error("File too large. Maximum size is 10MB.")]
    TooLarge { size: u64 },
    #[error("Text must be at least 50 characters long.")]
    TextTooShort { length: usize },
    #[error("Please select a file first.")]
    NoFileSelected,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectError {
    /// No response made it back. The reason is kept for logs only.
    #[error("Network error. Please check if the backend is running.")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl DetectError {
    pub fn network(reason: impl std::fmt::Display) -> Self {
        DetectError::Network(reason.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_hides_reason() {
        let err = DetectError::network("TypeError: Failed to fetch");
        assert_eq!(
            err.to_string(),
            "Network error. Please check if the backend is running."
        );
    }

    #[test]
    fn test_api_error_shows_server_message() {
        let err = DetectError::Api {
            status: 422,
            message: "Text is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Text is empty");
    }
}
