use crate::scorer::{score_patterns, LabeledPatterns};
use crate::*;
use dc_core::{Authority, ContentType, Recommendation, RiskCategory};

// ========== Authority ==========

#[test]
fn test_shall_is_mandatory() {
    let c = classify("The contractor shall provide all materials.");
    assert_eq!(c.authority, Authority::Mandatory);
    assert!(c.authority_score > 0.0);
}

#[test]
fn test_must_is_mandatory() {
    let c = classify("All work must comply with specifications.");
    assert_eq!(c.authority, Authority::Mandatory);
}

#[test]
fn test_shall_not_is_prohibitive() {
    let c = classify("The contractor shall not modify the existing structure.");
    assert_eq!(c.authority, Authority::Prohibitive);
}

#[test]
fn test_should_is_directive() {
    let c = classify("The engineer should review all calculations.");
    assert_eq!(c.authority, Authority::Directive);
}

#[test]
fn test_may_is_permissive() {
    let c = classify("The owner may request additional inspections.");
    assert_eq!(c.authority, Authority::Permissive);
}

#[test]
fn test_informational_phrasing() {
    let c = classify("For information only: project background notes.");
    assert_eq!(c.authority, Authority::Informational);
}

#[test]
fn test_plain_text_defaults_informational() {
    let c = classify("The sky is blue today.");
    assert_eq!(c.authority, Authority::Informational);
    assert_eq!(c.attention, 0.0);
}

#[test]
fn test_conditional_detected() {
    let c = classify("Unless otherwise noted, dimensions are in inches.");
    assert_eq!(c.authority, Authority::Conditional);
}

// ========== Risk ==========

#[test]
fn test_safety_critical_detected() {
    let c = classify("Life safety systems shall be inspected. Seismic load analysis required.");
    assert_eq!(c.risk, RiskCategory::SafetyCritical);
}

#[test]
fn test_security_detected() {
    let c = classify("Building access control systems shall use encrypted credentials.");
    assert_eq!(c.risk, RiskCategory::Security);
    assert!(c.actionable);
}

#[test]
fn test_compliance_detected() {
    let c = classify("Shall comply with code requirements. Inspection shall be performed.");
    assert_eq!(c.risk, RiskCategory::Compliance);
}

#[test]
fn test_financial_detected() {
    let c = classify("Contract value of $1,500,000 with 10% retainage.");
    assert_eq!(c.risk, RiskCategory::Financial);
}

#[test]
fn test_contractual_detected() {
    let c = classify("Indemnification clause. Liability limitations. Warranty period of 2 years.");
    assert_eq!(c.risk, RiskCategory::Contractual);
}

// ========== Attention ==========

#[test]
fn test_safety_critical_gets_high_attention() {
    let c = classify("The contractor shall ensure life safety. Seismic design must comply.");
    assert!(c.attention > 5.0);
}

#[test]
fn test_attention_monotonic_in_risk_weight() {
    // Same authority signal, different risk: higher weight wins
    let safety = classify("The contractor shall protect life safety systems.");
    let advisory = classify("The contractor shall read this general guidance.");
    assert!(safety.attention >= advisory.attention);
}

#[test]
fn test_attention_capped_at_ten() {
    let text = "Life safety shall be preserved. ".repeat(20);
    let c = classify(&text);
    assert!(c.attention <= 10.0);
    assert!(c.authority_score <= 10.0);
}

#[test]
fn test_actionable_for_mandatory() {
    let c = classify("The contractor shall submit shop drawings.");
    assert!(c.actionable);
}

#[test]
fn test_not_actionable_for_narrative() {
    let c = classify("The project has a long history of community involvement.");
    assert!(!c.actionable);
}

// ========== Content type ==========

#[test]
fn test_requirement_content() {
    let c = classify("Anchor bolts shall be embedded as required.");
    assert_eq!(c.content_type, ContentType::Requirement);
}

#[test]
fn test_definition_content() {
    let c = classify("Substantial completion means the stage when the work is usable.");
    assert_eq!(c.content_type, ContentType::Definition);
}

#[test]
fn test_constraint_content() {
    let c = classify("Deflection not to exceed L/360. Maximum spacing: tolerance applies.");
    assert_eq!(c.content_type, ContentType::Constraint);
}

#[test]
fn test_default_content_is_narrative() {
    let c = classify("Something entirely unclassifiable here.");
    assert_eq!(c.content_type, ContentType::Narrative);
}

// ========== Scorer ==========

#[test]
fn test_scorer_tie_breaks_to_first_declared() {
    let table = vec![
        LabeledPatterns::new("alpha", 1.0, &[r"\btie\b"]),
        LabeledPatterns::new("beta", 1.0, &[r"\btie\b"]),
    ];
    let (label, score) = score_patterns("a tie it is", &table, "none");
    assert_eq!(label, "alpha");
    assert_eq!(score, 1.0);
}

#[test]
fn test_scorer_no_match_yields_default() {
    let table = vec![LabeledPatterns::new("alpha", 1.0, &[r"\bzzz\b"])];
    let (label, score) = score_patterns("nothing relevant", &table, "fallback");
    assert_eq!(label, "fallback");
    assert_eq!(score, 0.0);
}

#[test]
fn test_scorer_negations_subtract() {
    let table = vec![LabeledPatterns::with_negations(
        "pos",
        1.0,
        &[r"\bshall\b"],
        &[r"\bshall\s+not\b"],
    )];
    let (label, _) = score_patterns("it shall not happen", &table, "none");
    assert_eq!(label, "none");
}

#[test]
fn test_scorer_weight_applied() {
    let table = vec![
        LabeledPatterns::new("light", 0.25, &[r"\bword\b"]),
        LabeledPatterns::new("heavy", 2.0, &[r"\bother\b"]),
    ];
    let (label, score) = score_patterns("word word word other", &table, "none");
    assert_eq!(label, "heavy");
    assert_eq!(score, 2.0);
}

// ========== Entities ==========

#[test]
fn test_extract_us_standards() {
    let e = extract_entities("Per ASTM A615 and ACI 318-19, all rebar shall be Grade 60.");
    assert!(e.standards.iter().any(|s| s.contains("ASTM")));
    assert!(e.standards.iter().any(|s| s.contains("ACI")));
    assert!(e.standards.len() >= 2);
}

#[test]
fn test_extract_intl_standard() {
    let e = extract_entities("Quality management per ISO 9001:2015.");
    assert!(e.standards.iter().any(|s| s.contains("ISO 9001")));
}

#[test]
fn test_extract_building_code() {
    let e = extract_entities("Design per IBC 2021 and NEC 2020.");
    assert!(e.standards.iter().any(|s| s.contains("IBC 2021")));
    assert!(e.standards.iter().any(|s| s.contains("NEC 2020")));
}

#[test]
fn test_extract_osha_citation() {
    let e = extract_entities("Fall protection per OSHA 1926.501 requirements.");
    assert!(e.standards.iter().any(|s| s.contains("1926.501")));
}

#[test]
fn test_cfr_goes_to_references() {
    let e = extract_entities("As defined in 29 CFR 1910.132.");
    assert_eq!(e.references.len(), 1);
    assert!(e.references[0].contains("CFR"));
}

#[test]
fn test_extract_dates_both_formats() {
    let e = extract_entities("Due 12/31/2025, with review on January 15, 2026.");
    assert!(e.dates.contains(&"12/31/2025".to_string()));
    assert!(e.dates.contains(&"January 15, 2026".to_string()));
}

#[test]
fn test_financial_normalized() {
    let e = extract_entities("Contract sum of $ 2,500,000.00 with 10% retainage.");
    assert!(e.financial.contains(&"$2,500,000.00".to_string()));
    assert!(e.financial.contains(&"10%".to_string()));
}

#[test]
fn test_entities_deduplicated_in_order() {
    let e = extract_entities("ASTM C150 cement. More ASTM C150 cement. Then ACI 318.");
    assert_eq!(e.standards.len(), 2);
    assert!(e.standards[0].contains("ASTM"));
    assert!(e.standards[1].contains("ACI"));
}

#[test]
fn test_lowercase_prose_not_a_standard() {
    let e = extract_entities("as 1234 people said, en 5678 was not a standard here");
    assert!(e.standards.is_empty());
}

#[test]
fn test_empty_text_yields_empty_entities() {
    let e = extract_entities("");
    assert!(e.standards.is_empty());
    assert!(e.dates.is_empty());
    assert!(e.financial.is_empty());
    assert!(e.references.is_empty());
}

// ========== Irreducibility ==========

#[test]
fn test_narrative_is_summarizable() {
    let r = detect_irreducibility("The team met on site and discussed general progress.");
    assert!(!r.irreducible);
    assert_eq!(r.recommendation, Recommendation::Summarizable);
    assert_eq!(r.match_count, 0);
    assert!(r.categories.is_empty());
}

#[test]
fn test_three_categories_preserve_verbatim() {
    let r = detect_irreducibility(
        "Concrete shall be provided at 4000 psi per SECTION 03 30. Not to exceed $50,000.",
    );
    assert!(r.irreducible);
    assert!(r.categories.len() >= 3);
    assert_eq!(r.recommendation, Recommendation::PreserveVerbatim);
    assert!(r.confidence >= 0.6);
}

#[test]
fn test_few_matches_preserve_key_values() {
    let r = detect_irreducibility("Load capacity is 40 psf on this floor, per the warranty.");
    assert_eq!(r.match_count, 2);
    assert_eq!(r.recommendation, Recommendation::PreserveKeyValues);
}

#[test]
fn test_confidence_capped_at_one() {
    let text = "shall be installed. ".repeat(20);
    let r = detect_irreducibility(&text);
    assert_eq!(r.confidence, 1.0);
}

#[test]
fn test_categories_sorted_distinct() {
    let r = detect_irreducibility("Warranty terms: $100.00 due, warranty again, $200.00 more.");
    assert_eq!(r.categories, vec!["financial_value", "legal_obligation"]);
    assert!(r.match_count >= 4);
}

// ========== Determinism ==========

#[test]
fn test_classification_deterministic() {
    let text = "The contractor shall comply with seismic requirements per ASCE 7-22.";
    let a = serde_json::to_string(&classify(text)).unwrap();
    let b = serde_json::to_string(&classify(text)).unwrap();
    assert_eq!(a, b);
}
