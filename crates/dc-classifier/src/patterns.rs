//! Static pattern tables for authority, risk, and content type.
//!
//! Authority patterns are language-level constructs: "shall" is mandatory
//! in every industry and every document type. Weights reflect linguistic
//! force. Risk and content-type tables are unweighted frequency counts.

use crate::scorer::LabeledPatterns;
use dc_core::{Authority, ContentType, RiskCategory};
use std::sync::LazyLock;

pub static AUTHORITY_TABLE: LazyLock<Vec<LabeledPatterns<Authority>>> = LazyLock::new(|| {
    vec![
        LabeledPatterns::with_negations(
            Authority::Mandatory,
            1.0,
            &[
                r"\bshall\b",
                r"\bmust\b",
                r"\bis\s+required\b",
                r"\bare\s+required\b",
                r"\bshall\s+comply\b",
                r"\bmandatory\b",
                r"\brequired\s+to\b",
            ],
            &[r"\bshall\s+not\b", r"\bmust\s+not\b"],
        ),
        LabeledPatterns::new(
            Authority::Prohibitive,
            1.0,
            &[
                r"\bshall\s+not\b",
                r"\bmust\s+not\b",
                r"\bprohibit(?:ed|s)?\b",
                r"\bnot\s+permitted\b",
            ],
        ),
        LabeledPatterns::with_negations(
            Authority::Directive,
            0.75,
            &[
                r"\bshould\b",
                r"\brecommend(?:ed|s)?\b",
                r"\bexpect(?:ed|s)?\b",
                r"\badvised\s+to\b",
            ],
            &[r"\bshould\s+not\b"],
        ),
        LabeledPatterns::new(
            Authority::Permissive,
            0.35,
            &[
                r"\bmay\b",
                r"\bpermit(?:ted|s)?\b",
                r"\bacceptable\b",
                r"\ballow(?:ed|s|able)?\b",
                r"\boption(?:al|ally)?\b",
            ],
        ),
        LabeledPatterns::new(
            Authority::Informational,
            0.25,
            &[
                r"\bfor\s+information\b",
                r"\bnote\s*(?::|that)\b",
                r"\binformational\s+only\b",
                r"\bnon-?binding\b",
            ],
        ),
        LabeledPatterns::new(
            Authority::Conditional,
            0.60,
            &[
                r"\bif\b.*\bthen\b",
                r"\bwhen\b.*\bshall\b",
                r"\bunless\b",
                r"\bprovided\s+that\b",
                r"\bsubject\s+to\b",
            ],
        ),
    ]
});

pub static RISK_TABLE: LazyLock<Vec<LabeledPatterns<RiskCategory>>> = LazyLock::new(|| {
    vec![
        LabeledPatterns::new(
            RiskCategory::SafetyCritical,
            1.0,
            &[
                r"\blife\s+safety\b",
                r"\bseismic\b",
                r"\bcollapse\b",
                r"\bfire\s+(?:rated?|resistance|protection|safety)\b",
                r"\bstructural\s+(?:integrity|failure|capacity)\b",
                r"\bemergency\b",
                r"\bhazard(?:ous)?\b",
            ],
        ),
        LabeledPatterns::new(
            RiskCategory::Security,
            1.0,
            &[
                r"\bcyber(?:security)?\b",
                r"\bencrypt(?:ion|ed)?\b",
                r"\baccess\s+control\b",
                r"\bauthenticat(?:ion|ed)\b",
                r"\bvulnerabilit(?:y|ies)\b",
                r"\bdata\s+breach\b",
                r"\bintrusion\b",
            ],
        ),
        LabeledPatterns::new(
            RiskCategory::Compliance,
            1.0,
            &[
                r"\bshall\s+comply\b",
                r"\bin\s+accordance\s+with\b",
                r"\bcode\s+(?:compliance|requirement)\b",
                r"\bregulat(?:ion|ory)\b",
                r"\binspection\b",
                r"\bpermit(?:ting)?\b",
            ],
        ),
        LabeledPatterns::new(
            RiskCategory::Financial,
            1.0,
            &[
                r"\$\s*[\d,]+",
                r"\bretainage\b",
                r"\bliquidated\s+damages\b",
                r"\bpayment\b",
                r"\bcontract\s+(?:value|amount|sum)\b",
                r"\bchange\s+order\b",
            ],
        ),
        LabeledPatterns::new(
            RiskCategory::Contractual,
            1.0,
            &[
                r"\bindemnif(?:y|ication)\b",
                r"\bliabilit(?:y|ies)\b",
                r"\bwarrant(?:y|ies)\b",
                r"\btermination\b",
                r"\bbreach\b",
                r"\bforce\s+majeure\b",
            ],
        ),
        LabeledPatterns::new(
            RiskCategory::Advisory,
            1.0,
            &[
                r"\bfor\s+(?:your\s+)?information\b",
                r"\bfyi\b",
                r"\bgeneral\s+(?:information|guidance)\b",
            ],
        ),
    ]
});

pub static CONTENT_TYPE_TABLE: LazyLock<Vec<LabeledPatterns<ContentType>>> = LazyLock::new(|| {
    vec![
        LabeledPatterns::new(
            ContentType::Requirement,
            1.0,
            &[r"\bshall\b", r"\bmust\b", r"\brequired\b"],
        ),
        LabeledPatterns::new(
            ContentType::Definition,
            1.0,
            &[r"\bmeans\b", r"\bis\s+defined\s+as\b", r"\brefers?\s+to\b"],
        ),
        LabeledPatterns::new(
            ContentType::Reference,
            1.0,
            &[
                r"\bin\s+accordance\s+with\b",
                r"\bper\s+(?:section|article)\b",
                r"\bsee\s+(?:section|appendix)\b",
            ],
        ),
        LabeledPatterns::new(
            ContentType::Constraint,
            1.0,
            &[
                r"\bnot\s+(?:to\s+)?exceed\b",
                r"\bmaximum\b",
                r"\bminimum\b",
                r"\btolerance\b",
            ],
        ),
        LabeledPatterns::new(
            ContentType::Narrative,
            1.0,
            &[r"\bbackground\b", r"\boverview\b", r"\bintroduction\b", r"\bsummary\b"],
        ),
        LabeledPatterns::new(
            ContentType::Data,
            1.0,
            &[r"\btable\b", r"\bfigure\b", r"\bschedule\b", r"\bappendix\b"],
        ),
    ]
});
