//! Windowed splitting with sentence-boundary pullback.

use crate::Segment;
use dc_core::floor_char_boundary;

/// How far back from a window edge to look for a sentence boundary.
const BOUNDARY_LOOKBACK: usize = 150;

const SENTENCE_SEPARATORS: [&str; 5] = [". ", ".\n", "! ", "? ", "\n\n"];

/// Split text into overlapping windows, breaking at sentence boundaries.
/// Empty or whitespace-only input yields no segments; input that fits in
/// one window yields exactly one segment spanning the whole trimmed text.
pub fn segment_text(text: &str, max_span: usize, overlap: usize) -> Vec<Segment> {
    let text = text.replace('\u{a0}', " ");
    if text.trim().is_empty() {
        return Vec::new();
    }

    if text.len() <= max_span {
        // Trimming shapes the text only; the counts span the whole input.
        let trimmed = text.trim();
        return vec![Segment {
            index: 1,
            text: trimmed.to_string(),
            start: 0,
            end: text.len(),
            word_count: trimmed.split_whitespace().count(),
            char_count: text.len(),
            heading: None,
            heading_level: 0,
            heading_path: Vec::new(),
        }];
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut index = 1usize;

    while start < text.len() {
        let mut end = floor_char_boundary(&text, (start + max_span).min(text.len()));

        // Pull the cut back to the nearest sentence boundary in the last
        // BOUNDARY_LOOKBACK bytes; a window with no boundary is cut hard.
        if end < text.len() {
            let wstart = floor_char_boundary(&text, end.saturating_sub(BOUNDARY_LOOKBACK).max(start));
            let window = &text[wstart..end];
            for sep in SENTENCE_SEPARATORS {
                if let Some(idx) = window.rfind(sep) {
                    end = wstart + idx + sep.len();
                    break;
                }
            }
        }

        let span = text[start..end].trim();
        if !span.is_empty() {
            segments.push(Segment::plain(index, span, start, end));
            index += 1;
        }

        if end >= text.len() {
            break;
        }
        // Overlap hedges against a classification signal split across a
        // cut point. Guard: always advance, even with degenerate overlap.
        let next = floor_char_boundary(&text, end.saturating_sub(overlap));
        start = if next > start { next } else { end };
    }

    segments
}
