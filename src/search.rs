//! Patient search and department listings.

use serde::Serialize;

use crate::db::{DatabaseError, RecordStore};
use crate::models::{Category, ClinicalRecord, Profile};

/// Everything known about the patient matching a search term.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub profile: Option<Profile>,
    pub mri_records: Vec<ClinicalRecord>,
    pub xray_records: Vec<ClinicalRecord>,
    pub ecg_records: Vec<ClinicalRecord>,
    pub treatment_records: Vec<ClinicalRecord>,
    pub blood_profile_records: Vec<ClinicalRecord>,
    pub ct_scan_records: Vec<ClinicalRecord>,
}

impl SearchResult {
    fn slot_mut(&mut self, category: Category) -> &mut Vec<ClinicalRecord> {
        match category {
            Category::Mri => &mut self.mri_records,
            Category::XRay => &mut self.xray_records,
            Category::Ecg => &mut self.ecg_records,
            Category::Blood => &mut self.blood_profile_records,
            Category::Ct => &mut self.ct_scan_records,
            Category::Treatment => &mut self.treatment_records,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRecords {
    pub department: String,
    pub records: Vec<ClinicalRecord>,
    pub total: usize,
}

/// Oldest first by the category date; stable for equal dates.
fn sort_chronologically(records: &mut [ClinicalRecord]) {
    records.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Look up a patient by id or name fragment, with all their records.
///
/// Records are matched independently of the profile (by id or denormalized
/// name), so a term matching several patients returns all their records.
pub fn search_patient(store: &dyn RecordStore, term: &str) -> Result<SearchResult, DatabaseError> {
    let mut result = SearchResult {
        profile: store.search_profile(term)?,
        ..SearchResult::default()
    };

    for category in Category::ALL {
        let mut records = store.search_records(category, term)?;
        sort_chronologically(&mut records);
        *result.slot_mut(category) = records;
    }

    Ok(result)
}

/// All records of one department, oldest first. `department` is the path
/// segment as requested, echoed back in the response.
pub fn department_records(
    store: &dyn RecordStore,
    department: &str,
    category: Category,
) -> Result<DepartmentRecords, DatabaseError> {
    let mut records = store.find_all_records(category)?;
    sort_chronologically(&mut records);

    Ok(DepartmentRecords {
        department: department.to_string(),
        total: records.len(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryRecordStore;

    fn store() -> MemoryRecordStore {
        MemoryRecordStore::default()
            .with_profile("P1001", "Ada Moss")
            .with_profile("P1002", "Ben Holt")
            .with_record(ClinicalRecord::new(Category::Mri, "P1001", "Ada Moss").with_date("2024-05-01"))
            .with_record(ClinicalRecord::new(Category::Mri, "P1001", "Ada Moss").with_date("2024-01-01"))
            .with_record(
                ClinicalRecord::new(Category::Treatment, "P1001", "Ada Moss").with_date("2024-02-01"),
            )
            .with_record(ClinicalRecord::new(Category::Mri, "P1002", "Ben Holt").with_date("2023-01-01"))
    }

    #[test]
    fn search_by_id_returns_profile_and_sorted_records() {
        let result = search_patient(&store(), "P1001").unwrap();
        assert_eq!(result.profile.unwrap().name, "Ada Moss");
        let dates: Vec<&str> = result.mri_records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-05-01"]);
        assert_eq!(result.treatment_records.len(), 1);
        assert!(result.ecg_records.is_empty());
    }

    #[test]
    fn search_by_partial_name() {
        let result = search_patient(&store(), "holt").unwrap();
        assert_eq!(result.profile.unwrap().patient_id, "P1002");
        assert_eq!(result.mri_records.len(), 1);
    }

    #[test]
    fn search_unknown_term_is_empty() {
        let result = search_patient(&store(), "NONEXISTENT999").unwrap();
        assert!(result.profile.is_none());
        assert!(result.mri_records.is_empty());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["profile"].is_null());
        assert_eq!(json["ct_scan_records"], serde_json::json!([]));
    }

    #[test]
    fn department_listing_spans_patients_oldest_first() {
        let listing = department_records(&store(), "mri", Category::Mri).unwrap();
        assert_eq!(listing.department, "mri");
        assert_eq!(listing.total, 3);
        assert_eq!(listing.records[0].date, "2023-01-01");
        assert_eq!(listing.records[2].date, "2024-05-01");
    }
}
