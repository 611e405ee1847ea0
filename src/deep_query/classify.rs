use crate::models::Category;

/// Department keywords, in category declaration order.
///
/// Overlaps are intentional: "chest" routes to both X-Ray and CT, "spine"
/// and "abdomen" to both MRI and CT.
const DEPARTMENT_KEYWORDS: [(Category, &[&str]); 6] = [
    (
        Category::Mri,
        &["mri", "brain", "spine", "knee", "shoulder", "abdomen"],
    ),
    (
        Category::XRay,
        &["xray", "x-ray", "fracture", "chest", "pelvis", "dental"],
    ),
    (
        Category::Ecg,
        &["ecg", "ekg", "arrhythmia", "tachycardia", "holter", "sinus"],
    ),
    (
        Category::Blood,
        &[
            "blood",
            "cbc",
            "lipid",
            "thyroid",
            "liver",
            "kidney",
            "hemoglobin",
            "wbc",
            "platelet",
        ],
    ),
    (
        Category::Ct,
        &["ct", "ct scan", "head", "chest", "abdomen", "pelvic", "spine"],
    ),
    (
        Category::Treatment,
        &[
            "treatment",
            "medicine",
            "medicines",
            "medication",
            "prescription",
            "therapy",
            "surgery",
            "vaccination",
            "dialysis",
        ],
    ),
];

/// Words asking for "everything" rather than one department.
const GENERIC_INTENT_WORDS: [&str; 8] = [
    "report",
    "reports",
    "latest",
    "recent",
    "history",
    "records",
    "summary",
    "summarize",
];

/// Classify a question into the departments it mentions.
///
/// Matching is plain substring containment on the trimmed, lower-cased
/// question, so "ct" also fires inside words such as "doctor" or "fracture".
/// With no department hit, a generic-intent word selects all six; otherwise
/// the result is empty.
pub fn classify_departments(question: &str) -> Vec<Category> {
    let normalized = question.trim().to_lowercase();

    let matched: Vec<Category> = DEPARTMENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    if GENERIC_INTENT_WORDS.iter().any(|w| normalized.contains(w)) {
        return Category::ALL.to_vec();
    }

    Vec::new()
}
