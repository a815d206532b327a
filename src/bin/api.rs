use std::sync::Arc;

use anyhow::{Context, anyhow};
use pdf_simplify::ai::LlmClient;
use pdf_simplify::api::{AppState, router};
use pdf_simplify::core::config::AppConfig;
use pdf_simplify::pdf::PdfTextExtractor;
use pdf_simplify::summarize::SummaryGenerator;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pdf_simplify::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow!(e)
    })?;

    // One client per process, shared by every request
    let llm = LlmClient::new(&config).context("Failed to initialize OpenAI client")?;
    info!(model = %llm.model_name(), "OpenAI client ready");

    let summarizer = SummaryGenerator::new(Arc::new(llm), config.extract_metadata);
    let state = AppState::new(Arc::new(summarizer), Arc::new(PdfTextExtractor));
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!(bind_addr = %config.bind_addr, "Listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
