use serde::{Deserialize, Serialize};

/// Number of high-level points in every summary.
pub const HIGH_LEVEL_POINTS: usize = 3;

/// Number of supporting details under each high-level point.
pub const DETAILS_PER_POINT: usize = 3;

/// Normalized output of the summary pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub high_level: [String; HIGH_LEVEL_POINTS],
    pub expanded: [[String; DETAILS_PER_POINT]; HIGH_LEVEL_POINTS],
    pub topic: Option<String>,
    pub keywords: Vec<String>,
}

/// One summary card as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: u32,
    pub title: String,
    pub topic: Option<String>,
    pub keywords: Vec<String>,
    pub lines: [String; HIGH_LEVEL_POINTS],
    pub expanded: [[String; DETAILS_PER_POINT]; HIGH_LEVEL_POINTS],
}

impl Summary {
    #[must_use]
    pub fn from_result(id: u32, result: SummaryResult) -> Self {
        Self {
            id,
            title: result.high_level[0].clone(),
            topic: result.topic,
            keywords: result.keywords,
            lines: result.high_level,
            expanded: result.expanded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyResponse {
    pub summaries: Vec<Summary>,
}

impl SimplifyResponse {
    /// Wraps a single document summary; uploads always yield exactly one card.
    #[must_use]
    pub fn single(result: SummaryResult) -> Self {
        Self {
            summaries: vec![Summary::from_result(1, result)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
