use crate::db::{DatabaseError, RecordStore};
use crate::models::{Category, ClinicalRecord};

/// Maximum records surfaced per department.
pub const MAX_EVIDENCE_PER_DEPARTMENT: usize = 3;

/// Sort newest-first by the category's date field and keep the top `limit`.
///
/// ISO dates compare lexically, and an empty date sorts last. The sort is
/// stable, so equal dates keep their store order.
pub fn select_most_recent(mut records: Vec<ClinicalRecord>, limit: usize) -> Vec<ClinicalRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(limit);
    records
}

/// Fetch one patient's records for `category` and keep the most recent few.
///
/// A patient with no records in the category yields an empty list.
pub fn rank_and_select(
    store: &dyn RecordStore,
    patient_id: &str,
    category: Category,
) -> Result<Vec<ClinicalRecord>, DatabaseError> {
    let records = store.find_records(category, patient_id)?;
    let total = records.len();
    let selected = select_most_recent(records, MAX_EVIDENCE_PER_DEPARTMENT);

    tracing::debug!(
        patient_id,
        category = category.as_str(),
        total,
        selected = selected.len(),
        "Ranked department records"
    );

    Ok(selected)
}
