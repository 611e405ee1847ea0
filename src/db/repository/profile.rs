use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::{PatientSummary, Profile};

const PROFILE_COLUMNS: &str =
    "patient_id, name, age, gender, blood_group, address, phone, registration_date";

pub fn insert_profile(conn: &Connection, profile: &Profile) -> Result<(), DatabaseError> {
    conn.execute(
        &format!("INSERT INTO profiles ({PROFILE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        params![
            profile.patient_id,
            profile.name,
            profile.age,
            profile.gender,
            profile.blood_group,
            profile.address,
            profile.phone,
            profile.registration_date,
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DatabaseError::ConstraintViolation(format!(
                "profile {} already exists",
                profile.patient_id
            ))
        }
        other => DatabaseError::Sqlite(other),
    })?;
    Ok(())
}

/// Exact lookup by patient identifier.
pub fn get_profile(conn: &Connection, patient_id: &str) -> Result<Option<Profile>, DatabaseError> {
    let profile = conn
        .query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE patient_id = ?1"),
            params![patient_id],
            profile_from_row,
        )
        .optional()?;
    Ok(profile)
}

/// First profile whose id equals `term` or whose name contains it (case-insensitive).
/// An exact id match wins over a name match.
pub fn find_profile_by_term(conn: &Connection, term: &str) -> Result<Option<Profile>, DatabaseError> {
    let profile = conn
        .query_row(
            &format!(
                "SELECT {PROFILE_COLUMNS} FROM profiles
                 WHERE patient_id = ?1 OR instr(LOWER(name), LOWER(?1)) > 0
                 ORDER BY (patient_id = ?1) DESC, patient_id
                 LIMIT 1"
            ),
            params![term],
            profile_from_row,
        )
        .optional()?;
    Ok(profile)
}

pub fn list_patient_summaries(conn: &Connection) -> Result<Vec<PatientSummary>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT patient_id, name FROM profiles ORDER BY patient_id")?;
    let rows = stmt.query_map([], |row| {
        Ok(PatientSummary {
            patient_id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn count_profiles(conn: &Connection) -> Result<u32, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))?;
    Ok(count)
}

fn profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        patient_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        blood_group: row.get(4)?,
        address: row.get(5)?,
        phone: row.get(6)?,
        registration_date: row.get(7)?,
    })
}
