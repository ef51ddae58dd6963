//! Header-aware splitting for markdown-like input.

use crate::{windows::segment_text, Segment};
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").expect("valid regex"));

struct Section {
    heading: Option<String>,
    level: usize,
    path: Vec<String>,
    start: usize,
    end: usize,
}

/// Parse into sections delimited by ATX headers. The heading path is built
/// with an explicit stack of (level, heading) pairs; a new header pops
/// every entry at its level or deeper.
fn parse_sections(text: &str) -> Vec<Section> {
    let headers: Vec<(usize, usize, String)> = HEADER_RE
        .captures_iter(text)
        .map(|cap| {
            let m = cap.get(0).expect("whole match");
            (m.start(), cap[1].len(), cap[2].trim().to_string())
        })
        .collect();

    if headers.is_empty() {
        return vec![Section {
            heading: None,
            level: 0,
            path: Vec::new(),
            start: 0,
            end: text.len(),
        }];
    }

    let mut sections = Vec::new();
    let mut stack: Vec<(usize, String)> = Vec::new();

    // Preamble before the first header
    if headers[0].0 > 0 && !text[..headers[0].0].trim().is_empty() {
        sections.push(Section {
            heading: None,
            level: 0,
            path: Vec::new(),
            start: 0,
            end: headers[0].0,
        });
    }

    for (i, (start, level, heading)) in headers.iter().enumerate() {
        let end = if i + 1 < headers.len() {
            headers[i + 1].0
        } else {
            text.len()
        };

        while stack.last().is_some_and(|(l, _)| *l >= *level) {
            stack.pop();
        }

        let mut path: Vec<String> = stack.iter().map(|(_, h)| h.clone()).collect();
        path.push(heading.clone());
        stack.push((*level, heading.clone()));

        sections.push(Section {
            heading: Some(heading.clone()),
            level: *level,
            path,
            start: *start,
            end,
        });
    }

    sections
}

/// Split markdown by header boundaries, sub-splitting oversized sections
/// with the windowing algorithm; sub-segments inherit the section's heading
/// metadata with offsets rebased to the section start.
pub fn segment_markdown(text: &str, max_span: usize, overlap: usize) -> Vec<Segment> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let sections = parse_sections(text);

    if sections.len() == 1 && sections[0].level == 0 {
        return segment_text(text, max_span, overlap);
    }

    let mut segments = Vec::new();
    let mut index = 1usize;

    for sec in &sections {
        let sec_text = text[sec.start..sec.end].trim();
        if sec_text.is_empty() {
            continue;
        }

        if sec_text.len() <= max_span {
            segments.push(Segment {
                index,
                text: sec_text.to_string(),
                start: sec.start,
                end: sec.end,
                word_count: sec_text.split_whitespace().count(),
                char_count: sec_text.len(),
                heading: sec.heading.clone(),
                heading_level: sec.level,
                heading_path: sec.path.clone(),
            });
            index += 1;
        } else {
            for mut sub in segment_text(sec_text, max_span, overlap) {
                sub.index = index;
                sub.start += sec.start;
                sub.end = sub.start + sub.char_count;
                sub.heading = sec.heading.clone();
                sub.heading_level = sec.level;
                sub.heading_path = sec.path.clone();
                segments.push(sub);
                index += 1;
            }
        }
    }

    segments
}
