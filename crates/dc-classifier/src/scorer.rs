//! Reusable scoring primitive over labeled, weighted pattern sets.

use dc_core::floor_char_boundary;
use regex::Regex;

/// Per-segment scan cap in bytes — a resource bound, not a correctness
/// requirement.
pub const SCAN_CAP: usize = 50_000;

/// One label's entry in a pattern table. Negation patterns subtract from
/// the positive match count (the regex crate has no look-around, so
/// "shall but not shall not" is expressed as a positive/negative pair).
pub struct LabeledPatterns<L> {
    pub label: L,
    pub weight: f64,
    pub patterns: Vec<Regex>,
    pub negations: Vec<Regex>,
}

impl<L> LabeledPatterns<L> {
    pub fn new(label: L, weight: f64, patterns: &[&str]) -> Self {
        Self::with_negations(label, weight, patterns, &[])
    }

    pub fn with_negations(label: L, weight: f64, patterns: &[&str], negations: &[&str]) -> Self {
        Self {
            label,
            weight,
            patterns: patterns.iter().map(|p| ci(p)).collect(),
            negations: negations.iter().map(|p| ci(p)).collect(),
        }
    }
}

fn ci(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("valid pattern")
}

/// Score text against a pattern table. Returns the highest-scoring label
/// and its score, or `default` with 0.0 when nothing matches. Ties break
/// toward the first-declared label.
pub fn score_patterns<L: Copy>(text: &str, table: &[LabeledPatterns<L>], default: L) -> (L, f64) {
    let text = &text[..floor_char_boundary(text, SCAN_CAP)];

    let mut best: Option<(L, f64)> = None;
    for entry in table {
        let positive: usize = entry.patterns.iter().map(|p| p.find_iter(text).count()).sum();
        let negative: usize = entry.negations.iter().map(|p| p.find_iter(text).count()).sum();
        let count = positive.saturating_sub(negative);
        if count == 0 {
            continue;
        }
        let score = count as f64 * entry.weight;
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((entry.label, score)),
        }
    }

    best.unwrap_or((default, 0.0))
}
