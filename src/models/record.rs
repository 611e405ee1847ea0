use serde::ser::{Serialize, SerializeMap, Serializer};

use super::enums::Category;

/// Category-specific payload of a clinical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDetail {
    /// Imaging and lab records carry a link to the scanned report.
    Report { report_image: Option<String> },
    /// Treatments carry a comma-joined medicines list.
    Treatment { medicines: Option<String> },
}

impl RecordDetail {
    /// Empty detail of the right shape for `category`.
    pub fn empty_for(category: Category) -> Self {
        if category.is_treatment() {
            RecordDetail::Treatment { medicines: None }
        } else {
            RecordDetail::Report { report_image: None }
        }
    }

    /// Field name and value of the payload (`report_image` or `medicines`).
    pub fn field(&self) -> (&'static str, Option<&str>) {
        match self {
            RecordDetail::Report { report_image } => ("report_image", report_image.as_deref()),
            RecordDetail::Treatment { medicines } => ("medicines", medicines.as_deref()),
        }
    }
}

/// A single departmental record (MRI, X-Ray, ECG, Blood, CT or Treatment).
///
/// The title and date live under different column names depending on the
/// category (`test_name`/`test_date` vs `treatment_name`/`treatment_date`);
/// this type normalizes them and serializes back to the per-category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalRecord {
    pub category: Category,
    pub patient_id: String,
    /// Denormalized copy of the patient's name.
    pub name: String,
    pub title: Option<String>,
    /// ISO date; empty when unknown.
    pub date: String,
    pub result: String,
    pub doctor: Option<String>,
    pub detail: RecordDetail,
}

impl ClinicalRecord {
    pub fn new(category: Category, patient_id: &str, name: &str) -> Self {
        Self {
            category,
            patient_id: patient_id.to_string(),
            name: name.to_string(),
            title: None,
            date: String::new(),
            result: String::new(),
            doctor: None,
            detail: RecordDetail::empty_for(category),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_result(mut self, result: &str) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn with_doctor(mut self, doctor: &str) -> Self {
        self.doctor = Some(doctor.to_string());
        self
    }

    /// Sets the report image or medicines list, whichever this category carries.
    pub fn with_detail(mut self, value: &str) -> Self {
        self.detail = match self.detail {
            RecordDetail::Report { .. } => RecordDetail::Report {
                report_image: Some(value.to_string()),
            },
            RecordDetail::Treatment { .. } => RecordDetail::Treatment {
                medicines: Some(value.to_string()),
            },
        };
        self
    }
}

impl Serialize for ClinicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (detail_field, detail_value) = self.detail.field();
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry("patient_id", &self.patient_id)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry(self.category.title_field(), &self.title)?;
        map.serialize_entry(self.category.date_field(), &self.date)?;
        map.serialize_entry("result", &self.result)?;
        map.serialize_entry("doctor", &self.doctor)?;
        map.serialize_entry(detail_field, &detail_value)?;
        map.end()
    }
}
