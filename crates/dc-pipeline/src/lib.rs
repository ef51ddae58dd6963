//! Decompose pipeline — segmentation, classification, entity extraction,
//! and irreducibility detection combined into one deterministic call, plus
//! the post-hoc attention filter that narrows units for consumption.

pub mod filter;
pub mod pipeline;

pub use filter::{filter_for_llm, FilterCriteria, FilterMeta, FilteredResult};
pub use pipeline::{decompose, DecomposeOptions, DecomposeResult, MAX_INPUT_CHARS};
