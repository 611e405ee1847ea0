use std::collections::BTreeMap;

use super::types::EvidenceItem;
use crate::models::{Category, ClinicalRecord};

/// Department label and fallback title per category.
const EVIDENCE_FORMATS: [(Category, &str, &str); 6] = [
    (Category::Mri, "MRI", "Test"),
    (Category::XRay, "X-RAY", "Test"),
    (Category::Ecg, "ECG", "Test"),
    (Category::Blood, "BLOOD", "Test"),
    (Category::Ct, "CT", "Test"),
    (Category::Treatment, "Treatment", "Treatment"),
];

fn format_for(category: Category) -> (&'static str, &'static str) {
    EVIDENCE_FORMATS
        .iter()
        .find(|(c, _, _)| *c == category)
        .map(|(_, label, title)| (*label, *title))
        .unwrap_or(("", ""))
}

/// Department label shown on an evidence card ("X-RAY", "Treatment", ...).
fn department_label(category: Category) -> &'static str {
    format_for(category).0
}

fn default_title(category: Category) -> &'static str {
    format_for(category).1
}

/// Project a record into an evidence card.
///
/// The card's `extra` map carries `report_image` for imaging/lab records
/// and `medicines` for treatments.
pub fn to_evidence_item(category: Category, record: &ClinicalRecord) -> EvidenceItem {
    let (extra_field, extra_value) = record.detail.field();

    let mut extra = BTreeMap::new();
    extra.insert(extra_field.to_string(), extra_value.map(str::to_string));

    EvidenceItem {
        department: department_label(category).to_string(),
        date: record.date.clone(),
        title: record
            .title
            .clone()
            .unwrap_or_else(|| default_title(category).to_string()),
        result: record.result.clone(),
        doctor: record.doctor.clone().unwrap_or_default(),
        extra,
    }
}
