//! Record store seam between the retrieval logic and SQLite.
//!
//! `RecordStore` is the read-only interface the deep-query engine, search
//! and analytics depend on. `SqliteRecordStore` opens a fresh connection per
//! call, so concurrent readers never share connection state.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::repository;
use super::sqlite::open_database;
use super::DatabaseError;
use crate::models::{Category, ClinicalRecord, PatientSummary, Profile};

/// Read access to profiles and per-category clinical records.
pub trait RecordStore: Send + Sync {
    fn find_profile(&self, patient_id: &str) -> Result<Option<Profile>, DatabaseError>;

    /// Records of one category for one patient. Order is unspecified.
    fn find_records(
        &self,
        category: Category,
        patient_id: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError>;

    fn find_all_records(&self, category: Category) -> Result<Vec<ClinicalRecord>, DatabaseError>;

    fn list_patients(&self) -> Result<Vec<PatientSummary>, DatabaseError>;

    /// Profile by exact id or case-insensitive name fragment.
    fn search_profile(&self, term: &str) -> Result<Option<Profile>, DatabaseError>;

    /// Records by exact patient id or case-insensitive name fragment.
    fn search_records(
        &self,
        category: Category,
        term: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError>;
}

/// SQLite-backed store rooted at a database file.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    db_path: PathBuf,
}

impl SqliteRecordStore {
    /// Open (creating and migrating if needed) the database at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        // Run migrations once up front.
        open_database(db_path)?;
        tracing::info!(path = %db_path.display(), "Record store ready");
        Ok(Self {
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// New connection for write paths (seeding, clearing).
    pub fn connection(&self) -> Result<Connection, DatabaseError> {
        open_database(&self.db_path)
    }
}

impl RecordStore for SqliteRecordStore {
    fn find_profile(&self, patient_id: &str) -> Result<Option<Profile>, DatabaseError> {
        repository::get_profile(&self.connection()?, patient_id)
    }

    fn find_records(
        &self,
        category: Category,
        patient_id: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        repository::get_records_for_patient(&self.connection()?, category, patient_id)
    }

    fn find_all_records(&self, category: Category) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        repository::get_all_records(&self.connection()?, category)
    }

    fn list_patients(&self) -> Result<Vec<PatientSummary>, DatabaseError> {
        repository::list_patient_summaries(&self.connection()?)
    }

    fn search_profile(&self, term: &str) -> Result<Option<Profile>, DatabaseError> {
        repository::find_profile_by_term(&self.connection()?, term)
    }

    fn search_records(
        &self,
        category: Category,
        term: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        repository::search_records(&self.connection()?, category, term)
    }
}

/// In-memory store for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryRecordStore {
    pub profiles: Vec<Profile>,
    pub records: Vec<ClinicalRecord>,
}

#[cfg(test)]
impl MemoryRecordStore {
    pub fn with_profile(mut self, patient_id: &str, name: &str) -> Self {
        self.profiles.push(Profile {
            patient_id: patient_id.into(),
            name: name.into(),
            age: 50,
            gender: "Female".into(),
            blood_group: "B+".into(),
            address: "9 Elm Street".into(),
            phone: "555-0142".into(),
            registration_date: "2023-06-01".into(),
        });
        self
    }

    pub fn with_record(mut self, record: ClinicalRecord) -> Self {
        self.records.push(record);
        self
    }
}

#[cfg(test)]
impl RecordStore for MemoryRecordStore {
    fn find_profile(&self, patient_id: &str) -> Result<Option<Profile>, DatabaseError> {
        Ok(self.profiles.iter().find(|p| p.patient_id == patient_id).cloned())
    }

    fn find_records(
        &self,
        category: Category,
        patient_id: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.category == category && r.patient_id == patient_id)
            .cloned()
            .collect())
    }

    fn find_all_records(&self, category: Category) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        Ok(self.records.iter().filter(|r| r.category == category).cloned().collect())
    }

    fn list_patients(&self) -> Result<Vec<PatientSummary>, DatabaseError> {
        Ok(self
            .profiles
            .iter()
            .map(|p| PatientSummary {
                patient_id: p.patient_id.clone(),
                name: p.name.clone(),
            })
            .collect())
    }

    fn search_profile(&self, term: &str) -> Result<Option<Profile>, DatabaseError> {
        let lower = term.to_lowercase();
        Ok(self
            .profiles
            .iter()
            .find(|p| p.patient_id == term || p.name.to_lowercase().contains(&lower))
            .cloned())
    }

    fn search_records(
        &self,
        category: Category,
        term: &str,
    ) -> Result<Vec<ClinicalRecord>, DatabaseError> {
        let lower = term.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.category == category)
            .filter(|r| r.patient_id == term || r.name.to_lowercase().contains(&lower))
            .cloned()
            .collect())
    }
}
