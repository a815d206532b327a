use std::sync::Arc;

use tracing::{info, warn};

use super::normalize::{
    normalize_expanded, normalize_high_level, parse_keywords, parse_topic, strip_number_prefix,
};
use crate::ai::TextGenerator;
use crate::core::models::SummaryResult;
use crate::errors::SimplifyError;
use crate::prompt::{
    EXPAND_TEMPLATE, HIGH_LEVEL_TEMPLATE, KEYWORD_TEMPLATE, TOPIC_TEMPLATE, render,
    sanitize_document_text,
};
use crate::utils::chunker::RecursiveSplitter;

/// Turns document text into a normalized [`SummaryResult`] through a fixed
/// sequence of generation calls.
pub struct SummaryGenerator {
    generator: Arc<dyn TextGenerator>,
    splitter: RecursiveSplitter,
    extract_metadata: bool,
}

impl SummaryGenerator {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, extract_metadata: bool) -> Self {
        Self {
            generator,
            splitter: RecursiveSplitter::default(),
            extract_metadata,
        }
    }

    #[must_use]
    pub fn with_splitter(mut self, splitter: RecursiveSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Runs the high-level and expansion steps, then the optional topic and
    /// keyword steps.
    ///
    /// # Errors
    ///
    /// Returns the generation error if either required step fails. Failures of
    /// the topic or keyword steps only drop that metadata.
    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, SimplifyError> {
        let document = sanitize_document_text(text);
        let stuffed = self.splitter.stuff(&document);
        info!(
            document_chars = document.chars().count(),
            stuffed_chars = stuffed.chars().count(),
            "Generating high-level summary"
        );

        let high_raw = self
            .generator
            .generate(&render(HIGH_LEVEL_TEMPLATE, &stuffed))
            .await?;
        let high_level = normalize_high_level(high_raw.trim());

        info!("Expanding high-level summary");
        let expand_raw = self
            .generator
            .generate(&render(EXPAND_TEMPLATE, &high_level.join("\n")))
            .await?;
        let expanded = normalize_expanded(expand_raw.trim());

        let (topic, keywords) = if self.extract_metadata {
            let seed = strip_number_prefix(&high_level[0]);
            (self.topic(&seed).await, self.keywords(&seed).await)
        } else {
            (None, Vec::new())
        };

        Ok(SummaryResult {
            high_level,
            expanded,
            topic,
            keywords,
        })
    }

    async fn topic(&self, seed: &str) -> Option<String> {
        match self.generator.generate(&render(TOPIC_TEMPLATE, seed)).await {
            Ok(raw) => parse_topic(&raw),
            Err(e) => {
                warn!("Topic extraction failed, continuing without topic: {}", e);
                None
            }
        }
    }

    async fn keywords(&self, seed: &str) -> Vec<String> {
        match self.generator.generate(&render(KEYWORD_TEMPLATE, seed)).await {
            Ok(raw) => parse_keywords(&raw),
            Err(e) => {
                warn!("Keyword extraction failed, continuing without keywords: {}", e);
                Vec::new()
            }
        }
    }
}
