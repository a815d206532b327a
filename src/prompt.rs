//! Prompt templates for the summary pipeline.
//!
//! Each template carries a single `{text}` slot filled by [`render`].

/// Asks for three numbered main ideas in plain language.
pub const HIGH_LEVEL_TEMPLATE: &str = "
Summarize the following text into three simple and clear main ideas.
Use easy vocabulary and short sentences. Each point should help someone who struggles with focus or reading.

{text}

MAIN IDEAS:
1.
2.
3.
";

/// Asks for three numbered supporting points under each main idea.
pub const EXPAND_TEMPLATE: &str = "
For each main idea below, write three short and clear supporting points.
Use simple words. Each point should explain or give an example.
Write in a way that helps people with ADHD or reading difficulties.

MAIN IDEAS:
{text}

DETAILED EXPLANATIONS:
Point 1:
1.1
1.2
1.3

Point 2:
2.1
2.2
2.3

Point 3:
3.1
3.2
3.3
";

pub const TOPIC_TEMPLATE: &str = "
In one or two words, give a concise topic label for this summary sentence:

{text}

Topic:
";

pub const KEYWORD_TEMPLATE: &str = "
Extract up to five comma-separated keywords from the following summary sentence.
Only output the keywords, nothing else.

Summary:
{text}

Keywords:
";

const TEXT_SLOT: &str = "{text}";

/// Fills the `{text}` slot of a template.
#[must_use]
pub fn render(template: &str, text: &str) -> String {
    template.replacen(TEXT_SLOT, text, 1)
}

/// Removes control characters from extracted document text, keeping line
/// structure (newlines and tabs) intact.
#[must_use]
pub fn sanitize_document_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect()
}
