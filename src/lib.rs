//! pdf-simplify - Turns an uploaded PDF into a reading-friendly summary.
//!
//! Every document becomes three short main ideas, each backed by three
//! supporting details, plus an optional topic label and keywords. The output
//! always has the same 3 x 3 shape, whatever the language model returns.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP API (`POST /api/simplify_pdf`)
//! - pdf-extract for text extraction from a request-scoped temp file
//! - a recursive character splitter to bound and overlap document chunks
//! - the `OpenAI` Responses API (via reqwest + openai-api-rs types) for generation
//! - regex-based normalization to repair the generated text into a fixed shape
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pdf_simplify::ai::LlmClient;
//! use pdf_simplify::core::config::AppConfig;
//! use pdf_simplify::summarize::SummaryGenerator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     pdf_simplify::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let llm = LlmClient::new(&config)?;
//!     let summarizer = SummaryGenerator::new(Arc::new(llm), config.extract_metadata);
//!
//!     let result = summarizer
//!         .summarize("Plants use sunlight to turn water and air into food.")
//!         .await?;
//!     for line in &result.high_level {
//!         println!("{line}");
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pdf;
pub mod prompt;
pub mod summarize;
pub mod utils;

pub use errors::SimplifyError;

/// Configure structured logging with JSON format.
///
/// Logs go to stderr so stdout stays free for command output. Log levels
/// follow `RUST_LOG` and default to `info`. Calling this more than once
/// keeps the first subscriber.
///
/// # Example
///
/// ```
/// // Initialize structured logging at process start
/// pdf_simplify::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
