//! Attention filter — a stateless second pass that narrows a decompose
//! result to the units worth a reader's (or a model's) attention.

use crate::DecomposeResult;
use dc_core::{estimate_tokens, floor_char_boundary, reduction_pct, Authority, ContentType, RiskCategory, Unit};
use serde::Serialize;
use tracing::debug;

/// Disjunctive selection criteria: a unit is retained if it matches any
/// of the authority, risk, or type lists, or clears `min_attention`.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub authorities: Vec<Authority>,
    pub risks: Vec<RiskCategory>,
    pub types: Vec<ContentType>,
    pub min_attention: f64,
    pub include_headings: bool,
    /// Hard cap on rendered output, in tokens; 0 disables capping.
    pub max_tokens: usize,
}

impl Default for FilterCriteria {
    /// Biased toward obligation-bearing, high-risk, and data-bearing
    /// content.
    fn default() -> Self {
        Self {
            authorities: vec![
                Authority::Mandatory,
                Authority::Prohibitive,
                Authority::Directive,
                Authority::Conditional,
            ],
            risks: vec![
                RiskCategory::SafetyCritical,
                RiskCategory::Compliance,
                RiskCategory::Financial,
                RiskCategory::Contractual,
            ],
            types: vec![
                ContentType::Requirement,
                ContentType::Constraint,
                ContentType::Data,
                ContentType::Definition,
            ],
            min_attention: 0.0,
            include_headings: true,
            max_tokens: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterMeta {
    pub input_units: usize,
    pub output_units: usize,
    pub reduction_pct: u32,
    pub token_estimate: usize,
}

/// Filtered subset of a decompose result, rendered back to flat text.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredResult {
    pub text: String,
    pub units: Vec<Unit>,
    pub meta: FilterMeta,
}

fn retain(unit: &Unit, criteria: &FilterCriteria) -> bool {
    criteria.authorities.contains(&unit.authority)
        || criteria.risks.contains(&unit.risk)
        || criteria.types.contains(&unit.content_type)
        || (criteria.min_attention > 0.0 && unit.attention >= criteria.min_attention)
}

fn render(units: &[Unit], include_headings: bool) -> String {
    units
        .iter()
        .map(|u| {
            if include_headings && !u.heading_path.is_empty() {
                format!("[{}]\n{}", u.heading_path.join(" > "), u.text)
            } else {
                u.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Reduce a decompose result to the units matching the criteria and render
/// them back into flat text, in original order.
pub fn filter_for_llm(result: &DecomposeResult, criteria: &FilterCriteria) -> FilteredResult {
    let input_units = result.units.len();
    let input_tokens: usize = result.units.iter().map(|u| estimate_tokens(&u.text)).sum();

    let units: Vec<Unit> = result
        .units
        .iter()
        .filter(|u| retain(u, criteria))
        .cloned()
        .collect();

    let mut text = render(&units, criteria.include_headings);
    if criteria.max_tokens > 0 {
        // Approximate cap, not content-aware: may cut mid-sentence.
        let cap = floor_char_boundary(&text, criteria.max_tokens * 4);
        text.truncate(cap);
    }

    let token_estimate = estimate_tokens(&text);
    debug!(input_units, output_units = units.len(), token_estimate, "filtered units");

    FilteredResult {
        meta: FilterMeta {
            input_units,
            output_units: units.len(),
            reduction_pct: reduction_pct(input_tokens, token_estimate),
            token_estimate,
        },
        text,
        units,
    }
}
