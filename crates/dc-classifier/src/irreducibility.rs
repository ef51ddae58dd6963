//! Irreducibility detection — content that loses meaning if paraphrased.

use dc_core::{IrreducibilityResult, Recommendation};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static IRREDUCIBLE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bshall\s+(?:not\s+)?(?:be|provide|install|submit|comply)\b", "legal_mandate"),
        (r"\b\d+(?:\.\d+)?\s*(?:psf|psi|ksi|kip|lb|kN|MPa|mm|in\.?|ft)\b", "engineering_value"),
        (r"\bNOT\s+(?:TO\s+)?(?:EXCEED|LESS\s+THAN)\b", "limit_specification"),
        (r"\b(?:minimum|maximum|exact|precisely|tolerance)\b[^.!?\n]*\b\d", "precision_requirement"),
        (r"\b(?:ARTICLE|SECTION|CLAUSE)\s+\d+(?:\.\d+)*\b", "legal_reference"),
        (r"\bformula\b[^.!?\n]*[=+\-*/]", "mathematical_formula"),
        (r"\b(?:specification|spec)\s+(?:no\.?|#|number)\s*\d", "specification_id"),
        (r"\b(?:warranty|guarantee|indemnif|liability)\b", "legal_obligation"),
        (r"\$\s*[\d,]+(?:\.\d{2})?\b", "financial_value"),
        (r"\b\d{1,2}/\d{1,2}/\d{2,4}\b", "date_reference"),
    ]
    .into_iter()
    .map(|(p, cat)| (Regex::new(&format!("(?i){p}")).expect("valid pattern"), cat))
    .collect()
});

/// Determine whether text contains values or obligations that must not be
/// paraphrased. Confidence is 0.2 per match, capped at 1.0; the category
/// set is the sorted distinct categories matched.
pub fn detect_irreducibility(text: &str) -> IrreducibilityResult {
    let mut count = 0usize;
    let mut categories: BTreeSet<&'static str> = BTreeSet::new();

    for (rx, category) in IRREDUCIBLE_PATTERNS.iter() {
        let matches = rx.find_iter(text).count();
        if matches > 0 {
            count += matches;
            categories.insert(category);
        }
    }

    let confidence = ((1.0f64).min(count as f64 * 0.2) * 1000.0).round() / 1000.0;

    let recommendation = if confidence >= 0.6 {
        Recommendation::PreserveVerbatim
    } else if confidence >= 0.3 {
        Recommendation::PreserveKeyValues
    } else {
        Recommendation::Summarizable
    };

    IrreducibilityResult {
        irreducible: count > 0,
        confidence,
        recommendation,
        categories: categories.into_iter().map(String::from).collect(),
        match_count: count,
    }
}
