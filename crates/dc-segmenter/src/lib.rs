//! Segmenter — splits raw text into bounded, overlap-aware spans.
//!
//! Two strategies: plain windowing that pulls each cut back to a sentence
//! boundary, and header-aware splitting for markdown-like input that tracks
//! the heading path per section. `auto_segment` picks between them.

pub mod markdown;
pub mod windows;

pub use markdown::segment_markdown;
pub use windows::segment_text;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

pub const DEFAULT_SPAN_SIZE: usize = 2000;
pub const DEFAULT_OVERLAP: usize = 200;

/// A contiguous span of the input text. Offsets are byte positions into
/// the normalized input; immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub index: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub word_count: usize,
    pub char_count: usize,
    pub heading: Option<String>,
    pub heading_level: usize,
    pub heading_path: Vec<String>,
}

impl Segment {
    pub(crate) fn plain(index: usize, text: &str, start: usize, end: usize) -> Self {
        Self {
            index,
            text: text.to_string(),
            start,
            end,
            word_count: text.split_whitespace().count(),
            char_count: text.len(),
            heading: None,
            heading_level: 0,
            heading_path: Vec::new(),
        }
    }
}

static HEADER_DETECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("valid regex"));

/// Auto-detect format and segment accordingly. Header markup anywhere in
/// the input selects the header-aware path.
pub fn auto_segment(text: &str, max_span: usize, overlap: usize) -> Vec<Segment> {
    if HEADER_DETECT_RE.is_match(text) {
        debug!(input_chars = text.len(), "segmenting as markdown");
        segment_markdown(text, max_span, overlap)
    } else {
        debug!(input_chars = text.len(), "segmenting as plain text");
        segment_text(text, max_span, overlap)
    }
}
