//! Shared types for the decompose pipeline.
//!
//! Everything here is a value object: no shared mutable state, no I/O.
//! The vocabularies (authority, risk, content type, recommendation) are
//! closed enums; a `Unit` is always fully populated in memory and compact
//! output is a serialization-time filter, not conditional construction.

pub mod error;
pub mod types;

pub use error::{DecomposeError, Result};
pub use types::{
    Authority, Classification, ContentType, Entities, IrreducibilityResult, PipelineMeta,
    Recommendation, RiskCategory, TokenEstimate, Unit,
};

/// Rough token estimate: ~4 chars per token for English text.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / 4
}

/// Reduction percentage between two token estimates, floored at zero.
pub fn reduction_pct(input_tokens: usize, output_tokens: usize) -> u32 {
    if input_tokens == 0 {
        return 0;
    }
    let pct = (1.0 - output_tokens as f64 / input_tokens as f64) * 100.0;
    pct.round().max(0.0) as u32
}

/// Largest index `<= i` that lies on a char boundary of `s`.
pub fn floor_char_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests;
