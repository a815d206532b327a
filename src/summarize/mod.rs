//! Summary generation and output normalization

pub mod normalize;
pub mod pipeline;

pub use pipeline::SummaryGenerator;
