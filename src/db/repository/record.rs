use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::{Category, ClinicalRecord, RecordDetail};

/// Column list in the order `record_from_row` reads it.
fn select_columns(category: Category) -> String {
    let (detail_field, _) = RecordDetail::empty_for(category).field();
    format!(
        "patient_id, name, {}, {}, result, doctor, {}",
        category.title_field(),
        category.date_field(),
        detail_field
    )
}

pub fn insert_record(conn: &Connection, record: &ClinicalRecord) -> Result<(), DatabaseError> {
    let category = record.category;
    let (_, detail_value) = record.detail.field();
    conn.execute(
        &format!(
            "INSERT INTO {} ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            category.table(),
            select_columns(category)
        ),
        params![
            record.patient_id,
            record.name,
            record.title,
            record.date,
            record.result,
            record.doctor,
            detail_value,
        ],
    )?;
    Ok(())
}

/// All records of `category` for one patient, in insertion order.
pub fn get_records_for_patient(
    conn: &Connection,
    category: Category,
    patient_id: &str,
) -> Result<Vec<ClinicalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} WHERE patient_id = ?1 ORDER BY id",
        select_columns(category),
        category.table()
    ))?;
    let rows = stmt.query_map(params![patient_id], |row| record_from_row(category, row))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Every record of `category`, in insertion order.
pub fn get_all_records(
    conn: &Connection,
    category: Category,
) -> Result<Vec<ClinicalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {} ORDER BY id",
        select_columns(category),
        category.table()
    ))?;
    let rows = stmt.query_map([], |row| record_from_row(category, row))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Records whose patient id equals `term` or whose patient name contains it
/// (case-insensitive).
pub fn search_records(
    conn: &Connection,
    category: Category,
    term: &str,
) -> Result<Vec<ClinicalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM {}
         WHERE patient_id = ?1 OR instr(LOWER(name), LOWER(?1)) > 0
         ORDER BY id",
        select_columns(category),
        category.table()
    ))?;
    let rows = stmt.query_map(params![term], |row| record_from_row(category, row))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn record_from_row(category: Category, row: &Row<'_>) -> rusqlite::Result<ClinicalRecord> {
    let detail_value: Option<String> = row.get(6)?;
    let detail = match RecordDetail::empty_for(category) {
        RecordDetail::Report { .. } => RecordDetail::Report {
            report_image: detail_value,
        },
        RecordDetail::Treatment { .. } => RecordDetail::Treatment {
            medicines: detail_value,
        },
    };

    Ok(ClinicalRecord {
        category,
        patient_id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        date: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        result: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        doctor: row.get(5)?,
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn records_round_trip_per_category() {
        let conn = open_memory_database().unwrap();
        for category in Category::ALL {
            let record = ClinicalRecord::new(category, "P1001", "Ada Moss")
                .with_title("Study")
                .with_date("2024-05-05")
                .with_result("Normal")
                .with_doctor("Dr. Kline")
                .with_detail("detail");
            insert_record(&conn, &record).unwrap();

            let stored = get_records_for_patient(&conn, category, "P1001").unwrap();
            assert_eq!(stored, vec![record]);
        }
    }

    #[test]
    fn patient_filter_excludes_other_patients() {
        let conn = open_memory_database().unwrap();
        insert_record(&conn, &ClinicalRecord::new(Category::Mri, "P1001", "Ada Moss")).unwrap();
        insert_record(&conn, &ClinicalRecord::new(Category::Mri, "P1002", "Ben Holt")).unwrap();
        insert_record(&conn, &ClinicalRecord::new(Category::Ct, "P1001", "Ada Moss")).unwrap();

        let mri = get_records_for_patient(&conn, Category::Mri, "P1001").unwrap();
        assert_eq!(mri.len(), 1);
        assert_eq!(mri[0].patient_id, "P1001");

        assert_eq!(get_all_records(&conn, Category::Mri).unwrap().len(), 2);
        assert!(get_records_for_patient(&conn, Category::Ecg, "P1001")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn missing_optional_columns_read_as_none() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO treatment_records (patient_id, name) VALUES ('P1001', 'Ada Moss')",
            [],
        )
        .unwrap();

        let records = get_records_for_patient(&conn, Category::Treatment, "P1001").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, None);
        assert_eq!(records[0].date, "");
        assert_eq!(records[0].detail, RecordDetail::Treatment { medicines: None });
    }

    #[test]
    fn search_matches_id_or_name_fragment() {
        let conn = open_memory_database().unwrap();
        insert_record(&conn, &ClinicalRecord::new(Category::Blood, "P1001", "Ada Moss")).unwrap();
        insert_record(&conn, &ClinicalRecord::new(Category::Blood, "P1002", "Ben Holt")).unwrap();

        assert_eq!(search_records(&conn, Category::Blood, "P1002").unwrap().len(), 1);
        assert_eq!(search_records(&conn, Category::Blood, "MOSS").unwrap().len(), 1);
        assert!(search_records(&conn, Category::Blood, "zzz").unwrap().is_empty());
    }
}
