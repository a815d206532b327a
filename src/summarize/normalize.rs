//! Shape repair for generated summary text.
//!
//! Model output is free text. These functions pull out the numbered lines we
//! asked for and force them into the fixed 3 x 3 layout, padding with
//! placeholders and dropping extras. Only the shape is guaranteed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{DETAILS_PER_POINT, HIGH_LEVEL_POINTS};

static HIGH_LEVEL_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("static regex compile"));
static DETAIL_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+").expect("static regex compile"));
static NUMBER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("static regex compile"));

const GROUP_MARKER: &str = "point";

/// Keeps the first three lines that start with `N.`; pads with
/// `"{n}. Additional point."`.
#[must_use]
pub fn normalize_high_level(raw: &str) -> [String; HIGH_LEVEL_POINTS] {
    let mut lines = raw
        .lines()
        .map(str::trim)
        .filter(|line| HIGH_LEVEL_LINE_RE.is_match(line))
        .map(str::to_string);

    std::array::from_fn(|i| {
        lines
            .next()
            .unwrap_or_else(|| format!("{}. Additional point.", i + 1))
    })
}

/// Groups `N.M` lines under `Point` headers into exactly three groups of
/// exactly three details; gaps are filled with `"{group}.{index} Extra"`.
#[must_use]
pub fn normalize_expanded(raw: &str) -> [[String; DETAILS_PER_POINT]; HIGH_LEVEL_POINTS] {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in raw.lines().map(str::trim) {
        if DETAIL_LINE_RE.is_match(line) {
            current.push(line.to_string());
        } else if starts_group(line) && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut groups = groups.into_iter();
    std::array::from_fn(|g| {
        let mut details = groups.next().unwrap_or_default().into_iter();
        std::array::from_fn(|d| {
            details
                .next()
                .unwrap_or_else(|| format!("{}.{} Extra", g + 1, d + 1))
        })
    })
}

fn starts_group(line: &str) -> bool {
    line.get(..GROUP_MARKER.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(GROUP_MARKER))
}

/// Strips the `N.` numbering from a high-level line.
#[must_use]
pub fn strip_number_prefix(line: &str) -> String {
    NUMBER_PREFIX_RE.replace(line, "").into_owned()
}

#[must_use]
pub fn parse_topic(raw: &str) -> Option<String> {
    let topic = raw.trim();
    if topic.is_empty() {
        None
    } else {
        Some(topic.to_string())
    }
}

#[must_use]
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}
