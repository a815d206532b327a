//! Recursive character splitter.
//!
//! Splits document text on the coarsest separator present (paragraphs, then
//! lines, then sentence punctuation, then words, then characters) and merges
//! the pieces back into chunks of bounded size that overlap slightly so no
//! sentence is cut off from its context.

use std::collections::VecDeque;

use crate::errors::SimplifyError;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;
pub const DEFAULT_SEPARATORS: [&str; 8] = ["\n\n", "\n", ".", "!", "?", ",", " ", ""];

/// Separator placed between chunks when they are stuffed into one prompt.
pub const STUFF_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl Default for RecursiveSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl RecursiveSplitter {
    /// # Errors
    ///
    /// Returns a configuration error if the chunk size is zero or the overlap
    /// is not smaller than the chunk size.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, SimplifyError> {
        if chunk_size == 0 || chunk_overlap >= chunk_size {
            return Err(SimplifyError::ConfigError(format!(
                "chunk overlap ({chunk_overlap}) must be smaller than chunk size ({chunk_size})"
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_with(text, &self.separators)
    }

    /// Splits the text and joins the chunks back into a single prompt body.
    #[must_use]
    pub fn stuff(&self, text: &str) -> String {
        self.split_text(text).join(STUFF_SEPARATOR)
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();

        let (separator, remaining) = pick_separator(text, separators);
        let pieces = split_keeping_separator(text, separator);

        let mut small: Vec<String> = Vec::new();
        for piece in pieces {
            if char_len(&piece) < self.chunk_size {
                small.push(piece);
                continue;
            }
            if !small.is_empty() {
                chunks.extend(self.merge(&small));
                small.clear();
            }
            if remaining.is_empty() {
                chunks.push(piece);
            } else {
                chunks.extend(self.split_with(&piece, remaining));
            }
        }
        if !small.is_empty() {
            chunks.extend(self.merge(&small));
        }

        chunks
    }

    fn merge(&self, pieces: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            let len = char_len(piece);
            if total + len > self.chunk_size && !window.is_empty() {
                push_chunk(&mut chunks, &window);
                while total > self.chunk_overlap
                    || (total + len > self.chunk_size && total > 0)
                {
                    let Some(front) = window.pop_front() else {
                        break;
                    };
                    total -= char_len(front);
                }
            }
            window.push_back(piece);
            total += len;
        }
        push_chunk(&mut chunks, &window);

        chunks
    }
}

fn pick_separator<'a>(text: &str, separators: &'a [String]) -> (&'a str, &'a [String]) {
    for (i, sep) in separators.iter().enumerate() {
        if sep.is_empty() {
            return ("", &[]);
        }
        if text.contains(sep.as_str()) {
            return (sep.as_str(), &separators[i + 1..]);
        }
    }
    ("", &[])
}

fn split_keeping_separator(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split_inclusive(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_chunk(chunks: &mut Vec<String>, window: &VecDeque<&str>) {
    let joined: String = window.iter().copied().collect();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
