use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Linguistic force of an obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authority {
    Mandatory,
    Prohibitive,
    Directive,
    Permissive,
    Informational,
    Conditional,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Prohibitive => "prohibitive",
            Self::Directive => "directive",
            Self::Permissive => "permissive",
            Self::Informational => "informational",
            Self::Conditional => "conditional",
        }
    }
}

/// Domain-risk class signaled by a unit's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    SafetyCritical,
    Security,
    Compliance,
    Financial,
    Contractual,
    Advisory,
    Informational,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SafetyCritical => "safety_critical",
            Self::Security => "security",
            Self::Compliance => "compliance",
            Self::Financial => "financial",
            Self::Contractual => "contractual",
            Self::Advisory => "advisory",
            Self::Informational => "informational",
        }
    }

    /// Fixed attention multiplier. Risk severity is front-loaded: modest
    /// authority language in a safety-critical passage outranks strongly
    /// mandatory language in an advisory one.
    pub fn attention_weight(&self) -> f64 {
        match self {
            Self::SafetyCritical => 4.0,
            Self::Security => 3.0,
            Self::Compliance => 2.0,
            Self::Financial | Self::Contractual => 1.5,
            Self::Advisory => 0.5,
            Self::Informational => 0.3,
        }
    }
}

/// Structural role of a unit's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Requirement,
    Definition,
    Reference,
    Constraint,
    Narrative,
    Data,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirement => "requirement",
            Self::Definition => "definition",
            Self::Reference => "reference",
            Self::Constraint => "constraint",
            Self::Narrative => "narrative",
            Self::Data => "data",
        }
    }
}

/// Handling recommendation for irreducible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    PreserveVerbatim,
    PreserveKeyValues,
    Summarizable,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreserveVerbatim => "PRESERVE_VERBATIM",
            Self::PreserveKeyValues => "PRESERVE_KEY_VALUES",
            Self::Summarizable => "SUMMARIZABLE",
        }
    }
}

/// Per-segment classification result.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub authority: Authority,
    pub authority_score: f64,
    pub risk: RiskCategory,
    pub risk_score: f64,
    pub content_type: ContentType,
    pub actionable: bool,
    pub attention: f64,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            authority: Authority::Informational,
            authority_score: 0.0,
            risk: RiskCategory::Informational,
            risk_score: 0.0,
            content_type: ContentType::Narrative,
            actionable: false,
            attention: 0.0,
        }
    }
}

/// Per-segment entity extraction. Each list is de-duplicated preserving
/// first-occurrence order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Entities {
    pub standards: Vec<String>,
    pub dates: Vec<String>,
    pub financial: Vec<String>,
    pub references: Vec<String>,
}

/// Per-segment irreducibility verdict.
#[derive(Debug, Clone, Serialize)]
pub struct IrreducibilityResult {
    pub irreducible: bool,
    pub confidence: f64,
    pub recommendation: Recommendation,
    pub categories: Vec<String>,
    pub match_count: usize,
}

/// A classified, entity-annotated span of input text — the atomic output
/// record. Created once per segment during orchestration, never mutated.
#[derive(Debug, Clone)]
pub struct Unit {
    pub text: String,
    pub authority: Authority,
    pub risk: RiskCategory,
    pub content_type: ContentType,
    pub irreducible: bool,
    pub attention: f64,
    pub actionable: bool,
    pub entities: Vec<String>,
    pub dates: Vec<String>,
    pub financial: Vec<String>,
    pub irreducibility: Recommendation,
    pub heading: Option<String>,
    pub heading_path: Vec<String>,
}

impl Unit {
    /// Render to a JSON object. Compact mode omits zero-value fields;
    /// full mode always emits the complete key set (heading fields only
    /// when a heading exists).
    pub fn to_value(&self, compact: bool) -> Value {
        let mut m = Map::new();
        m.insert("text".into(), json!(self.text));
        m.insert("authority".into(), json!(self.authority.as_str()));
        m.insert("risk".into(), json!(self.risk.as_str()));
        m.insert("type".into(), json!(self.content_type.as_str()));
        m.insert("irreducible".into(), json!(self.irreducible));
        m.insert("attention".into(), json!(self.attention));

        if !compact {
            m.insert("actionable".into(), json!(self.actionable));
            m.insert("entities".into(), json!(self.entities));
            m.insert("dates".into(), json!(self.dates));
            m.insert("financial".into(), json!(self.financial));
            m.insert("irreducibility".into(), json!(self.irreducibility.as_str()));
            if let Some(h) = &self.heading {
                m.insert("heading".into(), json!(h));
                m.insert("heading_path".into(), json!(self.heading_path));
            }
        } else {
            if self.actionable {
                m.insert("actionable".into(), json!(true));
            }
            if !self.entities.is_empty() {
                m.insert("entities".into(), json!(self.entities));
            }
            if !self.dates.is_empty() {
                m.insert("dates".into(), json!(self.dates));
            }
            if !self.financial.is_empty() {
                m.insert("financial".into(), json!(self.financial));
            }
            if self.irreducibility != Recommendation::Summarizable {
                m.insert("irreducibility".into(), json!(self.irreducibility.as_str()));
            }
            if let Some(h) = &self.heading {
                m.insert("heading".into(), json!(h));
            }
        }

        Value::Object(m)
    }
}

impl Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value(false).serialize(serializer)
    }
}

/// Input/output token estimates and the reduction between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub input: usize,
    pub output: usize,
    pub reduction_pct: u32,
}

/// Aggregate metadata for one decompose call. On error results only
/// `total_units`, the version tag, and `error` are present.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineMeta {
    pub total_units: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_estimate: Option<TokenEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority_profile: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standards_found: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates_found: Option<Vec<String>>,
    #[serde(rename = "_decompose")]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PipelineMeta {
    /// Meta for a rejected input (`empty_input`, `input_too_large`).
    pub fn rejected(error: &str, version: &str) -> Self {
        Self {
            total_units: 0,
            input_chars: None,
            processing_ms: None,
            token_estimate: None,
            authority_profile: None,
            risk_profile: None,
            standards_found: None,
            dates_found: None,
            version: version.into(),
            error: Some(error.into()),
        }
    }
}
