//! pdf-simplify CLI - summarizes a local PDF and prints the API response JSON
//!
//! Usage: pdf-simplify-cli <FILE>

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Parser;
use pdf_simplify::ai::LlmClient;
use pdf_simplify::core::config::AppConfig;
use pdf_simplify::core::models::SimplifyResponse;
use pdf_simplify::pdf::{PdfTextExtractor, TextExtractor, join_segments};
use pdf_simplify::summarize::SummaryGenerator;

#[derive(Parser, Debug)]
#[command(name = "pdf-simplify-cli")]
#[command(version, about = "Summarize a PDF into three points with details", long_about = None)]
struct Cli {
    /// PDF file to summarize
    path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pdf_simplify::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow!(e))?;
    let llm = LlmClient::new(&config).context("Failed to initialize OpenAI client")?;
    let summarizer = SummaryGenerator::new(Arc::new(llm), config.extract_metadata);

    let path = cli.path;
    let extract_path = path.clone();
    let segments = tokio::task::spawn_blocking(move || PdfTextExtractor.extract(&extract_path))
        .await
        .context("Extraction task failed")?
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let result = summarizer
        .summarize(&join_segments(&segments))
        .await
        .context("AI service unavailable")?;

    let response = SimplifyResponse::single(result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
