//! The orchestrator — drives the segmenter, then the per-segment stages,
//! and assembles pipeline-wide metadata.

use dc_classifier::{classify, detect_irreducibility, extract_entities};
use dc_core::{estimate_tokens, reduction_pct, PipelineMeta, Result, TokenEstimate, Unit};
use dc_segmenter::auto_segment;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;
use tracing::debug;

/// Absolute input-size ceiling. Larger input is rejected outright rather
/// than partially processed.
pub const MAX_INPUT_CHARS: usize = 10_000_000;

const MIN_SPAN: usize = 100;
const MAX_SPAN: usize = 100_000;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scalar configuration for one decompose call.
#[derive(Debug, Clone)]
pub struct DecomposeOptions {
    /// Maximum characters per segment, clamped to [100, 100000].
    pub max_span_size: usize,
    /// Character overlap between consecutive segments, clamped to
    /// [0, max_span_size / 2].
    pub overlap_size: usize,
    /// Omit zero-value fields per unit when serializing.
    pub compact: bool,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            max_span_size: dc_segmenter::DEFAULT_SPAN_SIZE,
            overlap_size: dc_segmenter::DEFAULT_OVERLAP,
            compact: false,
        }
    }
}

/// Complete decompose output: the ordered units and aggregate metadata.
/// Serializes as `{"units": [...], "meta": {...}}`, honoring the compact
/// flag captured at decompose time.
#[derive(Debug, Clone)]
pub struct DecomposeResult {
    pub units: Vec<Unit>,
    pub meta: PipelineMeta,
    compact: bool,
}

impl DecomposeResult {
    fn rejected(error: &str) -> Self {
        Self {
            units: Vec::new(),
            meta: PipelineMeta::rejected(error, VERSION),
            compact: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(units: Vec<Unit>) -> Self {
        let total = units.len();
        Self {
            units,
            meta: PipelineMeta {
                total_units: total,
                input_chars: None,
                processing_ms: None,
                token_estimate: None,
                authority_profile: None,
                risk_profile: None,
                standards_found: None,
                dates_found: None,
                version: VERSION.into(),
                error: None,
            },
            compact: false,
        }
    }

    pub fn unit_values(&self) -> Vec<Value> {
        self.units.iter().map(|u| u.to_value(self.compact)).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for DecomposeResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("units", &self.unit_values())?;
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}

fn dedup_keep_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

/// Decompose text into classified semantic units. Never fails: malformed
/// or oversized input is signaled through `meta.error` with zero units.
pub fn decompose(text: &str, opts: &DecomposeOptions) -> DecomposeResult {
    let started = Instant::now();

    if text.trim().is_empty() {
        return DecomposeResult::rejected("empty_input");
    }
    if text.len() > MAX_INPUT_CHARS {
        return DecomposeResult::rejected("input_too_large");
    }

    let span = opts.max_span_size.clamp(MIN_SPAN, MAX_SPAN);
    let overlap = opts.overlap_size.min(span / 2);

    let segments = auto_segment(text, span, overlap);

    let mut units = Vec::with_capacity(segments.len());
    let mut all_standards = Vec::new();
    let mut all_dates = Vec::new();
    let mut authority_profile: BTreeMap<String, usize> = BTreeMap::new();
    let mut risk_profile: BTreeMap<String, usize> = BTreeMap::new();

    for segment in segments {
        let cls = classify(&segment.text);
        let ents = extract_entities(&segment.text);
        let irr = detect_irreducibility(&segment.text);

        all_standards.extend(ents.standards.iter().cloned());
        all_dates.extend(ents.dates.iter().cloned());
        *authority_profile.entry(cls.authority.as_str().into()).or_insert(0) += 1;
        *risk_profile.entry(cls.risk.as_str().into()).or_insert(0) += 1;

        let mut entities = ents.standards;
        entities.extend(ents.references);

        units.push(Unit {
            text: segment.text,
            authority: cls.authority,
            risk: cls.risk,
            content_type: cls.content_type,
            irreducible: irr.irreducible,
            attention: cls.attention,
            actionable: cls.actionable,
            entities,
            dates: ents.dates,
            financial: ents.financial,
            irreducibility: irr.recommendation,
            heading: segment.heading,
            heading_path: segment.heading_path,
        });
    }

    let input_tokens = estimate_tokens(text);
    let unit_values: Vec<Value> = units.iter().map(|u| u.to_value(opts.compact)).collect();
    let output_tokens = serde_json::to_string(&unit_values).map_or(0, |json| estimate_tokens(&json));

    let elapsed_ms = started.elapsed().as_millis() as u64;
    debug!(
        units = units.len(),
        input_chars = text.len(),
        elapsed_ms,
        "decomposed input"
    );

    DecomposeResult {
        meta: PipelineMeta {
            total_units: units.len(),
            input_chars: Some(text.len()),
            processing_ms: Some(elapsed_ms),
            token_estimate: Some(TokenEstimate {
                input: input_tokens,
                output: output_tokens,
                reduction_pct: reduction_pct(input_tokens, output_tokens),
            }),
            authority_profile: Some(authority_profile),
            risk_profile: Some(risk_profile),
            standards_found: Some(dedup_keep_order(all_standards)),
            dates_found: Some(dedup_keep_order(all_dates)),
            version: VERSION.into(),
            error: None,
        },
        units,
        compact: opts.compact,
    }
}
