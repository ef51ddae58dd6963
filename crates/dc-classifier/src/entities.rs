//! Entity extraction — standards citations, dates, financial amounts.

use dc_core::Entities;
use regex::Regex;
use std::sync::LazyLock;

// Standards prefixes are uppercase in real citations; these stay
// case-sensitive to avoid matching prose ("as", "en", "ul").
static STANDARD_US: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(ASTM|ASCE|ACI|AISC|ASHRAE|AWS|AASHTO|NFPA|IEEE|ANSI|UL|FM|ASME)\s*[/-]?\s*([A-Z]?\d{1,5}(?:[./]\d+)?)\s*(?:[-/]\s*(\d{2,4}))?\b",
    )
    .expect("valid pattern")
});
static STANDARD_INTL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(ISO|EN|BS|DIN|JIS|AS|NZS|CSA|CEN|IEC)\s*(\d{3,6}(?:[.-]\d+)?)\s*(?:[-:]\s*(\d{4}))?\b",
    )
    .expect("valid pattern")
});
static BUILDING_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(IBC|IRC|IPC|IMC|IFC|IECC|NEC|NBC|NBCC|Eurocode\s*\d?)\s*(\d{4})?\b")
        .expect("valid pattern")
});
static OSHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bOSHA\s*(?:29\s*CFR\s*)?(\d{4}\.\d+)\b").expect("valid pattern"));
static CFR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+)\s+C\.?F\.?R\.?\s*(?:(?:Part|§)\s*)?(\d+(?:\.\d+)?)\b").expect("valid pattern")
});

static DATE_MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b").expect("valid pattern"));
static DATE_WRITTEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .expect("valid pattern")
});

static DOLLAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*([\d,]+(?:\.\d{2})?)\b").expect("valid pattern"));
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("valid pattern"));

fn dedup_keep_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

/// Extract structured entities from text. Pattern families are independent:
/// a string may match more than one without conflict. Each output list is
/// de-duplicated preserving first-occurrence order.
pub fn extract_entities(text: &str) -> Entities {
    let mut standards = Vec::new();
    let mut dates = Vec::new();
    let mut financial = Vec::new();
    let mut references = Vec::new();

    for rx in [&*STANDARD_US, &*STANDARD_INTL, &*BUILDING_CODE, &*OSHA] {
        for m in rx.find_iter(text) {
            standards.push(m.as_str().trim().to_string());
        }
    }

    for m in CFR.find_iter(text) {
        references.push(m.as_str().trim().to_string());
    }

    for m in DATE_MDY.find_iter(text) {
        dates.push(m.as_str().to_string());
    }
    for m in DATE_WRITTEN.find_iter(text) {
        dates.push(m.as_str().to_string());
    }

    for cap in DOLLAR.captures_iter(text) {
        financial.push(format!("${}", &cap[1]));
    }
    for cap in PERCENT.captures_iter(text) {
        financial.push(format!("{}%", &cap[1]));
    }

    Entities {
        standards: dedup_keep_order(standards),
        dates: dedup_keep_order(dates),
        financial: dedup_keep_order(financial),
        references: dedup_keep_order(references),
    }
}
