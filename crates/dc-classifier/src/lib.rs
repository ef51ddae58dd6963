//! Pattern-based classification — authority, risk, content type, entities,
//! irreducibility. Pure regex, no model, deterministic.

pub mod entities;
pub mod irreducibility;
pub mod patterns;
pub mod scorer;

pub use entities::extract_entities;
pub use irreducibility::detect_irreducibility;

use dc_core::{Authority, Classification, ContentType, RiskCategory};
use patterns::{AUTHORITY_TABLE, CONTENT_TYPE_TABLE, RISK_TABLE};
use scorer::score_patterns;

fn round_to(x: f64, decimals: u32) -> f64 {
    let f = 10f64.powi(decimals as i32);
    (x * f).round() / f
}

/// Classify a text passage. Pure function of the text; identical input
/// always yields an identical result.
pub fn classify(text: &str) -> Classification {
    let (authority, auth_score) = score_patterns(text, &AUTHORITY_TABLE, Authority::Informational);
    let (risk, risk_score) = score_patterns(text, &RISK_TABLE, RiskCategory::Informational);
    let (content_type, _) = score_patterns(text, &CONTENT_TYPE_TABLE, ContentType::Narrative);

    // Attention = risk multiplier * authority score capped at 5
    let attention = (round_to(auth_score.min(5.0) * risk.attention_weight(), 1)).min(10.0);

    let actionable = matches!(
        authority,
        Authority::Mandatory | Authority::Prohibitive | Authority::Directive
    ) || matches!(
        risk,
        RiskCategory::SafetyCritical | RiskCategory::Security | RiskCategory::Compliance
    );

    Classification {
        authority,
        authority_score: round_to(auth_score.min(10.0), 2),
        risk,
        risk_score: round_to(risk_score.min(10.0), 2),
        content_type,
        actionable,
        attention,
    }
}

#[cfg(test)]
mod tests;
