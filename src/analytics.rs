//! Patient analytics: visit timeline, department counts and a coarse health trend.
//!
//! Assembles every record of a patient across all six departments into a
//! unified visit timeline sorted by date, then derives counts from it.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::db::{DatabaseError, RecordStore};
use crate::models::{Category, ClinicalRecord, HealthTrend};

/// Number of trailing timeline entries reported as "recent".
const RECENT_RESULTS: usize = 5;

/// One entry on the visit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEntry {
    pub date: String,
    #[serde(rename = "type")]
    pub visit_type: String,
    pub test: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentSummary {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub scheduled: u32,
}

/// Record count per department, serialized as a map keyed by department
/// name in category declaration order (MRI, X-Ray, ..., Treatment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentCounts([u32; 6]);

impl DepartmentCounts {
    pub fn get(&self, category: Category) -> u32 {
        self.0[category as usize]
    }

    fn set(&mut self, category: Category, count: u32) {
        self.0[category as usize] = count;
    }
}

impl Serialize for DepartmentCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            map.serialize_entry(category.department_name(), &self.get(category))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientAnalytics {
    pub total_visits: u32,
    /// Imaging and lab records; treatments are not tests.
    pub total_tests: u32,
    pub departments_visited: DepartmentCounts,
    pub visit_timeline: Vec<VisitEntry>,
    pub treatment_summary: TreatmentSummary,
    pub health_trend: String,
    pub recent_results: Vec<VisitEntry>,
}

/// Compute analytics for one patient. An unknown patient yields zeros.
pub fn compute_patient_analytics(
    store: &dyn RecordStore,
    patient_id: &str,
) -> Result<PatientAnalytics, DatabaseError> {
    let mut departments_visited = DepartmentCounts::default();
    let mut visit_timeline = Vec::new();
    let mut total_tests = 0u32;
    let mut treatments: Vec<ClinicalRecord> = Vec::new();
    let mut tests: Vec<ClinicalRecord> = Vec::new();

    for category in Category::ALL {
        let records = store.find_records(category, patient_id)?;
        departments_visited.set(category, records.len() as u32);

        visit_timeline.extend(records.iter().map(|r| VisitEntry {
            date: r.date.clone(),
            visit_type: category.department_name().to_string(),
            test: r.title.clone().unwrap_or_default(),
        }));

        if category.is_treatment() {
            treatments.extend(records);
        } else {
            total_tests += records.len() as u32;
            tests.extend(records);
        }
    }

    // Stable: same-day visits keep department order.
    visit_timeline.sort_by(|a, b| a.date.cmp(&b.date));

    let recent_start = visit_timeline.len().saturating_sub(RECENT_RESULTS);
    let recent_results = visit_timeline[recent_start..].to_vec();

    tracing::debug!(patient_id, visits = visit_timeline.len(), "Computed patient analytics");

    Ok(PatientAnalytics {
        total_visits: visit_timeline.len() as u32,
        total_tests,
        departments_visited,
        treatment_summary: summarize_treatments(&treatments),
        health_trend: health_trend(&tests).as_str().to_string(),
        visit_timeline,
        recent_results,
    })
}

pub fn summarize_treatments(treatments: &[ClinicalRecord]) -> TreatmentSummary {
    let count = |needles: &[&str]| {
        treatments
            .iter()
            .filter(|t| needles.iter().any(|n| t.result.contains(n)))
            .count() as u32
    };

    TreatmentSummary {
        total: treatments.len() as u32,
        completed: count(&["Completed", "Successful"]),
        in_progress: count(&["Progress"]),
        scheduled: count(&["Scheduled"]),
    }
}

/// Classify test results as normal or not and grade the balance.
///
/// A result counts as normal when it mentions "normal", "clear" or
/// "within range"; "Abnormal - High" therefore also counts as normal.
pub fn health_trend(tests: &[ClinicalRecord]) -> HealthTrend {
    let normal = tests
        .iter()
        .filter(|r| {
            let result = r.result.to_lowercase();
            result.contains("normal") || result.contains("clear") || result.contains("within range")
        })
        .count();
    let abnormal = tests.len() - normal;

    if normal > abnormal * 2 {
        HealthTrend::Excellent
    } else if normal > abnormal {
        HealthTrend::Good
    } else if normal == abnormal {
        HealthTrend::Stable
    } else {
        HealthTrend::NeedsAttention
    }
}
