use async_trait::async_trait;

use crate::errors::SimplifyError;

/// A black-box text-generation service: one prompt in, free text out.
///
/// Implementations are built once per process and shared across requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or produces no text.
    async fn generate(&self, prompt: &str) -> Result<String, SimplifyError>;
}
