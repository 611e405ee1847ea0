pub mod sqlite;
pub mod repository;
pub mod store;

pub use sqlite::*;
pub use repository::*;
pub use store::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::models::Category;

    /// Exhaustive over the variants.
    fn kind(err: &DatabaseError) -> &'static str {
        match err {
            DatabaseError::Sqlite(_) => "sqlite",
            DatabaseError::InvalidEnum { .. } => "invalid_enum",
            DatabaseError::MigrationFailed { .. } => "migration",
            DatabaseError::ConstraintViolation(_) => "constraint",
            DatabaseError::Io(_) => "io",
        }
    }

    #[test]
    fn errors_map_to_their_variants() {
        let conn = open_memory_database().unwrap();

        let sqlite: DatabaseError = conn.execute("SELECT * FROM missing_table", []).unwrap_err().into();
        assert_eq!(kind(&sqlite), "sqlite");

        let invalid = Category::from_str("cardiology").unwrap_err();
        assert_eq!(kind(&invalid), "invalid_enum");
        assert_eq!(invalid.to_string(), "Invalid enum value for Category: cardiology");

        let profile = crate::models::Profile {
            patient_id: "P1001".into(),
            name: "Ada Moss".into(),
            age: 40,
            gender: "Female".into(),
            blood_group: "O+".into(),
            address: "1 Quay Street".into(),
            phone: "555-0100".into(),
            registration_date: "2024-01-01".into(),
        };
        insert_profile(&conn, &profile).unwrap();
        let duplicate = insert_profile(&conn, &profile).unwrap_err();
        assert_eq!(kind(&duplicate), "constraint");

        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let io = SqliteRecordStore::open(&blocker.join("nested").join("records.db")).unwrap_err();
        assert_eq!(kind(&io), "io");
    }
}
