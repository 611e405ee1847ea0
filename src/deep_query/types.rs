use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A doctor's question about one patient.
///
/// Every field is optional at the wire level so a missing field surfaces
/// as `InvalidRequest` rather than a deserialization failure. Older clients
/// send `term` and `query`; those are used when the primary field is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepQueryRequest {
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// First value that is non-blank after trimming, else "".
fn first_non_blank<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    [primary, fallback]
        .into_iter()
        .filter_map(|v| v.as_deref().map(str::trim))
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

impl DeepQueryRequest {
    pub fn new(patient_id: &str, question: &str) -> Self {
        Self {
            patient_id: Some(patient_id.to_string()),
            question: Some(question.to_string()),
            ..Self::default()
        }
    }

    /// Trimmed patient id, falling back to `term`.
    pub fn resolved_patient_id(&self) -> &str {
        first_non_blank(&self.patient_id, &self.term)
    }

    /// Trimmed question, falling back to `query`.
    pub fn resolved_question(&self) -> &str {
        first_non_blank(&self.question, &self.query)
    }
}

/// Display-ready projection of one clinical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub department: String,
    pub date: String,
    pub title: String,
    pub result: String,
    pub doctor: String,
    /// `report_image` for imaging/lab records, `medicines` for treatments.
    pub extra: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepQueryResponse {
    pub patient_id: String,
    /// Category tags in declaration order; empty when the question matched nothing.
    pub matched_departments: Vec<String>,
    pub answer: String,
    pub evidence: Vec<EvidenceItem>,
}
