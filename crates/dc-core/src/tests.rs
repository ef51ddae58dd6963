use crate::*;

// ========== Token estimate ==========

#[test]
fn test_estimate_tokens() {
    assert_eq!(estimate_tokens(""), 0);
    assert_eq!(estimate_tokens("abcd"), 1);
    assert_eq!(estimate_tokens(&"x".repeat(400)), 100);
}

#[test]
fn test_reduction_pct_basic() {
    assert_eq!(reduction_pct(100, 25), 75);
    assert_eq!(reduction_pct(100, 100), 0);
}

#[test]
fn test_reduction_pct_floors_at_zero() {
    // Output larger than input must not go negative
    assert_eq!(reduction_pct(10, 50), 0);
    assert_eq!(reduction_pct(0, 50), 0);
}

#[test]
fn test_floor_char_boundary() {
    let s = "a\u{00e9}b"; // é is 2 bytes
    assert_eq!(floor_char_boundary(s, 2), 1);
    assert_eq!(floor_char_boundary(s, 3), 3);
    assert_eq!(floor_char_boundary(s, 100), s.len());
}

// ========== Vocabulary serialization ==========

#[test]
fn test_risk_serializes_snake_case() {
    let v = serde_json::to_value(RiskCategory::SafetyCritical).unwrap();
    assert_eq!(v, "safety_critical");
}

#[test]
fn test_recommendation_serializes_screaming() {
    let v = serde_json::to_value(Recommendation::PreserveVerbatim).unwrap();
    assert_eq!(v, "PRESERVE_VERBATIM");
}

#[test]
fn test_risk_attention_weights() {
    assert_eq!(RiskCategory::SafetyCritical.attention_weight(), 4.0);
    assert_eq!(RiskCategory::Security.attention_weight(), 3.0);
    assert_eq!(RiskCategory::Compliance.attention_weight(), 2.0);
    assert_eq!(RiskCategory::Financial.attention_weight(), 1.5);
    assert_eq!(RiskCategory::Contractual.attention_weight(), 1.5);
    assert_eq!(RiskCategory::Advisory.attention_weight(), 0.5);
    assert_eq!(RiskCategory::Informational.attention_weight(), 0.3);
}

// ========== Unit rendering ==========

fn sample_unit() -> Unit {
    Unit {
        text: "General background.".into(),
        authority: Authority::Informational,
        risk: RiskCategory::Informational,
        content_type: ContentType::Narrative,
        irreducible: false,
        attention: 0.0,
        actionable: false,
        entities: vec![],
        dates: vec![],
        financial: vec![],
        irreducibility: Recommendation::Summarizable,
        heading: None,
        heading_path: vec![],
    }
}

#[test]
fn test_unit_full_rendering_has_all_keys() {
    let v = sample_unit().to_value(false);
    let obj = v.as_object().unwrap();
    for key in ["text", "authority", "risk", "type", "irreducible", "attention",
                "actionable", "entities", "dates", "financial", "irreducibility"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("heading"));
}

#[test]
fn test_unit_compact_omits_defaults() {
    let v = sample_unit().to_value(true);
    let obj = v.as_object().unwrap();
    assert!(!obj.contains_key("actionable"));
    assert!(!obj.contains_key("entities"));
    assert!(!obj.contains_key("dates"));
    assert!(!obj.contains_key("financial"));
    assert!(!obj.contains_key("irreducibility"));
}

#[test]
fn test_unit_compact_keeps_nonempty_fields() {
    let mut u = sample_unit();
    u.actionable = true;
    u.entities = vec!["ASTM A615".into()];
    u.irreducibility = Recommendation::PreserveKeyValues;
    let v = u.to_value(true);
    let obj = v.as_object().unwrap();
    assert_eq!(obj["actionable"], true);
    assert_eq!(obj["entities"][0], "ASTM A615");
    assert_eq!(obj["irreducibility"], "PRESERVE_KEY_VALUES");
}

#[test]
fn test_unit_heading_path_only_in_full_mode() {
    let mut u = sample_unit();
    u.heading = Some("Scope".into());
    u.heading_path = vec!["General".into(), "Scope".into()];

    let full = u.to_value(false);
    assert_eq!(full["heading"], "Scope");
    assert_eq!(full["heading_path"][0], "General");

    let compact = u.to_value(true);
    assert_eq!(compact["heading"], "Scope");
    assert!(compact.get("heading_path").is_none());
}

#[test]
fn test_rejected_meta_shape() {
    let meta = PipelineMeta::rejected("empty_input", "0.1.0");
    let v = serde_json::to_value(&meta).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj["total_units"], 0);
    assert_eq!(obj["error"], "empty_input");
    assert_eq!(obj["_decompose"], "0.1.0");
    assert!(!obj.contains_key("token_estimate"));
    assert!(!obj.contains_key("input_chars"));
}
