use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read upload: {0}")]
    UploadError(String),

    #[error("Failed to extract PDF text: {0}")]
    ExtractionError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Filesystem error: {0}")]
    IoError(String),
}

impl SimplifyError {
    /// True for failures of the text-generation service, which the API
    /// reports as "service unavailable".
    #[must_use]
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            SimplifyError::OpenAIError(_) | SimplifyError::HttpError(_)
        )
    }
}

impl From<reqwest::Error> for SimplifyError {
    fn from(error: reqwest::Error) -> Self {
        SimplifyError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for SimplifyError {
    fn from(error: std::io::Error) -> Self {
        SimplifyError::IoError(error.to_string())
    }
}
