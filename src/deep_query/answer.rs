use crate::models::Category;

/// Returned when the question mentions no department and no generic intent.
pub const UNMAPPED_ANSWER: &str = "I understood your question, but I couldn't map it to a department yet. \
Try words like blood/mri/xray/ecg/ct/treatment or 'latest reports'.";

const SUMMARIZER_TRAILER: &str =
    "Next step: add a real summarizer (AI) to interpret these results.";

/// Human label for a category tag: drop a `_records` suffix, turn `_`/`-`
/// into spaces and title-case each word ("blood_profile" → "Blood Profile").
pub fn display_name(tag: &str) -> String {
    tag.strip_suffix("_records")
        .unwrap_or(tag)
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Templated summary of what was fetched. Not a clinical interpretation.
pub fn compose_answer(
    patient_name: &str,
    patient_id: &str,
    matched: &[Category],
    evidence_count: usize,
) -> String {
    let departments = matched
        .iter()
        .map(|c| display_name(c.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Fetched {evidence_count} recent record(s) for patient {patient_name} ({patient_id}) \
         from: {departments}. {SUMMARIZER_TRAILER}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_tags() {
        assert_eq!(display_name("mri"), "Mri");
        assert_eq!(display_name("xray"), "Xray");
        assert_eq!(display_name("blood_profile_records"), "Blood Profile");
        assert_eq!(display_name("ct-scan"), "Ct Scan");
    }

    #[test]
    fn answer_states_count_patient_and_departments() {
        let answer = compose_answer("Ada Moss", "P1001", &[Category::Mri, Category::Ct], 4);
        assert_eq!(
            answer,
            "Fetched 4 recent record(s) for patient Ada Moss (P1001) from: Mri, Ct. \
             Next step: add a real summarizer (AI) to interpret these results."
        );
    }

    #[test]
    fn all_departments_listed_in_order() {
        let answer = compose_answer("Ada Moss", "P1001", &Category::ALL, 0);
        assert!(answer.contains("from: Mri, Xray, Ecg, Blood, Ct, Treatment."));
    }
}
