//! Sample data generator for demos and manual testing.
//!
//! Fills an empty store with 15 patients (P1001..P1015) and a random spread
//! of departmental records dated within the last year.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::repository::{count_profiles, insert_profile, insert_record};
use crate::db::DatabaseError;
use crate::models::{Category, ClinicalRecord, Profile};

pub const SAMPLE_PATIENT_COUNT: u32 = 15;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore", "Jackson", "Lee",
];

const STREETS: &[&str] = &["Oak St", "Maple Ave", "Cedar Ln", "Pine Rd", "Elm Dr", "Lake View Blvd"];
const CITIES: &[&str] = &["Springfield", "Riverside", "Fairview", "Madison", "Georgetown", "Franklin"];
const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

const MEDICINES: &[&str] = &[
    "Amoxicillin 500mg",
    "Ibuprofen 400mg",
    "Metformin 850mg",
    "Lisinopril 10mg",
    "Atorvastatin 20mg",
    "Omeprazole 20mg",
    "Aspirin 75mg",
    "Paracetamol 500mg",
    "Ciprofloxacin 500mg",
    "Levothyroxine 50mcg",
];

/// How one department's records are generated.
struct DepartmentPlan {
    category: Category,
    /// Probability that a patient has any records in this department.
    probability: f64,
    max_records: u32,
    titles: &'static [&'static str],
    results: &'static [&'static str],
    /// Report image URLs; empty for treatments.
    images: &'static [&'static str],
}

static PLANS: [DepartmentPlan; 6] = [
    DepartmentPlan {
        category: Category::Mri,
        probability: 0.7,
        max_records: 3,
        titles: &["Brain MRI", "Spine MRI", "Knee MRI", "Shoulder MRI", "Abdominal MRI"],
        results: &["Normal", "Abnormal - Minor", "Requires Follow-up", "Critical"],
        images: &["https://images.pexels.com/photos/7089020/pexels-photo-7089020.jpeg"],
    },
    DepartmentPlan {
        category: Category::XRay,
        probability: 0.8,
        max_records: 4,
        titles: &["Chest X-Ray", "Dental X-Ray", "Hand X-Ray", "Foot X-Ray", "Pelvis X-Ray"],
        results: &["Clear", "Fracture Detected", "Inflammation", "Normal"],
        images: &[
            "https://images.unsplash.com/photo-1564725075388-cc8338732289",
            "https://images.unsplash.com/photo-1648025487795-2f7bd6d620bf",
        ],
    },
    DepartmentPlan {
        category: Category::Ecg,
        probability: 0.6,
        max_records: 2,
        titles: &["Resting ECG", "Stress ECG", "Holter Monitor", "Event Monitor"],
        results: &["Normal Sinus Rhythm", "Arrhythmia Detected", "Tachycardia", "Normal"],
        images: &[
            "https://images.unsplash.com/photo-1682706841281-f723c5bfcd83",
            "https://images.unsplash.com/photo-1682706841289-9d7ddf5eb999",
        ],
    },
    DepartmentPlan {
        category: Category::Treatment,
        probability: 0.9,
        max_records: 5,
        titles: &[
            "Physical Therapy",
            "Medication - Antibiotics",
            "Surgery - Minor",
            "Chemotherapy",
            "Dialysis",
            "Vaccination",
        ],
        results: &["Completed", "In Progress", "Successful", "Scheduled"],
        images: &[],
    },
    DepartmentPlan {
        category: Category::Blood,
        probability: 0.8,
        max_records: 3,
        titles: &[
            "Complete Blood Count",
            "Lipid Profile",
            "Liver Function Test",
            "Kidney Function Test",
            "Thyroid Panel",
        ],
        results: &["Normal", "Abnormal - High", "Abnormal - Low", "Within Range"],
        images: &[
            "https://images.unsplash.com/photo-1639772823849-6efbd173043c",
            "https://images.unsplash.com/photo-1606206591513-adbfbdd7a177",
        ],
    },
    DepartmentPlan {
        category: Category::Ct,
        probability: 0.5,
        max_records: 2,
        titles: &[
            "Head CT Scan",
            "Chest CT Scan",
            "Abdominal CT Scan",
            "Pelvic CT Scan",
            "Spine CT Scan",
        ],
        results: &[
            "Normal",
            "Abnormality Detected",
            "Requires Further Investigation",
            "Clear",
        ],
        images: &["https://images.unsplash.com/photo-1631563019676-dade0dbdb8fc"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
    pub message: String,
    pub patients_created: u32,
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn random_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, max_days_back: i64) -> String {
    (today - Duration::days(rng.gen_range(0..=max_days_back))).to_string()
}

fn random_doctor<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Dr. {}", pick(rng, LAST_NAMES))
}

fn random_profile<R: Rng + ?Sized>(rng: &mut R, index: u32, today: NaiveDate) -> Profile {
    Profile {
        patient_id: format!("P{}", 1000 + index),
        name: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        age: rng.gen_range(18..=85),
        gender: pick(rng, &["Male", "Female"]).to_string(),
        blood_group: pick(rng, BLOOD_GROUPS).to_string(),
        address: format!(
            "{} {}, {}",
            rng.gen_range(10..=9999),
            pick(rng, STREETS),
            pick(rng, CITIES)
        ),
        phone: format!(
            "555-{:03}-{:04}",
            rng.gen_range(100..=999),
            rng.gen_range(0..=9999)
        ),
        registration_date: random_date(rng, today, 730),
    }
}

fn random_record<R: Rng + ?Sized>(
    rng: &mut R,
    plan: &DepartmentPlan,
    profile: &Profile,
    today: NaiveDate,
) -> ClinicalRecord {
    let detail = if plan.category.is_treatment() {
        let count = rng.gen_range(1..=3);
        MEDICINES
            .choose_multiple(rng, count)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        pick(rng, plan.images).to_string()
    };

    ClinicalRecord::new(plan.category, &profile.patient_id, &profile.name)
        .with_title(pick(rng, plan.titles))
        .with_date(&random_date(rng, today, 365))
        .with_result(pick(rng, plan.results))
        .with_doctor(&random_doctor(rng))
        .with_detail(&detail)
}

/// Populate an empty store with sample patients and records.
///
/// Leaves existing data untouched and reports the current patient count.
pub fn populate_sample_data<R: Rng + ?Sized>(
    conn: &Connection,
    rng: &mut R,
    today: NaiveDate,
) -> Result<SeedOutcome, DatabaseError> {
    let existing = count_profiles(conn)?;
    if existing > 0 {
        return Ok(SeedOutcome {
            message: "Data already exists".into(),
            patients_created: existing,
        });
    }

    let tx = conn.unchecked_transaction()?;

    let profiles: Vec<Profile> = (1..=SAMPLE_PATIENT_COUNT)
        .map(|i| random_profile(rng, i, today))
        .collect();
    for profile in &profiles {
        insert_profile(&tx, profile)?;
    }

    let mut records = 0usize;
    for plan in &PLANS {
        for profile in &profiles {
            if !rng.gen_bool(plan.probability) {
                continue;
            }
            for _ in 0..rng.gen_range(1..=plan.max_records) {
                insert_record(&tx, &random_record(rng, plan, profile, today))?;
                records += 1;
            }
        }
    }

    tx.commit()?;

    tracing::info!(patients = profiles.len(), records, "Sample data populated");

    Ok(SeedOutcome {
        message: "Sample data populated successfully".into(),
        patients_created: SAMPLE_PATIENT_COUNT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{get_profile, get_records_for_patient, list_patient_summaries};
    use crate::db::sqlite::open_memory_database;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn seeds_fifteen_patients() {
        let conn = open_memory_database().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = populate_sample_data(&conn, &mut rng, today()).unwrap();
        assert_eq!(outcome.message, "Sample data populated successfully");
        assert_eq!(outcome.patients_created, 15);

        let ids: Vec<String> = list_patient_summaries(&conn)
            .unwrap()
            .into_iter()
            .map(|p| p.patient_id)
            .collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids.first().map(String::as_str), Some("P1001"));
        assert_eq!(ids.last().map(String::as_str), Some("P1015"));

        let profile = get_profile(&conn, "P1007").unwrap().unwrap();
        assert!((18..=85).contains(&profile.age));
        assert!(BLOOD_GROUPS.contains(&profile.blood_group.as_str()));
    }

    #[test]
    fn records_are_dated_within_last_year_and_well_formed() {
        let conn = open_memory_database().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        populate_sample_data(&conn, &mut rng, today()).unwrap();

        let earliest = (today() - Duration::days(365)).to_string();
        let latest = today().to_string();

        let mut total = 0;
        for i in 1..=SAMPLE_PATIENT_COUNT {
            let pid = format!("P{}", 1000 + i);
            for plan in &PLANS {
                let records = get_records_for_patient(&conn, plan.category, &pid).unwrap();
                assert!(records.len() as u32 <= plan.max_records);
                for record in records {
                    total += 1;
                    assert!(record.date >= earliest && record.date <= latest);
                    assert!(plan.titles.contains(&record.title.as_deref().unwrap()));
                    assert!(plan.results.contains(&record.result.as_str()));
                    assert!(record.doctor.as_deref().unwrap().starts_with("Dr. "));

                    let (_, detail) = record.detail.field();
                    let detail = detail.unwrap();
                    if plan.category.is_treatment() {
                        let count = detail.split(", ").count();
                        assert!((1..=3).contains(&count));
                    } else {
                        assert!(plan.images.contains(&detail));
                    }
                }
            }
        }
        assert!(total > 0);
    }

    fn plan(category: Category) -> &'static DepartmentPlan {
        PLANS.iter().find(|p| p.category == category).unwrap()
    }

    #[test]
    fn result_vocabularies_per_department() {
        assert_eq!(
            plan(Category::Ecg).results,
            ["Normal Sinus Rhythm", "Arrhythmia Detected", "Tachycardia", "Normal"]
        );
        assert_eq!(
            plan(Category::Ct).results,
            ["Normal", "Abnormality Detected", "Requires Further Investigation", "Clear"]
        );
        assert_eq!(
            plan(Category::XRay).results,
            ["Clear", "Fracture Detected", "Inflammation", "Normal"]
        );
        assert!(plan(Category::Treatment).images.is_empty());
    }

    #[test]
    fn second_run_reports_existing_data() {
        let conn = open_memory_database().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        populate_sample_data(&conn, &mut rng, today()).unwrap();

        let outcome = populate_sample_data(&conn, &mut rng, today()).unwrap();
        assert_eq!(outcome.message, "Data already exists");
        assert_eq!(outcome.patients_created, 15);
    }
}
