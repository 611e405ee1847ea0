//! Repository layer: entity-scoped database operations.
//!
//! Profiles live in one table; clinical records live in one table per
//! `Category`, all sharing the same column layout apart from the
//! title/date/detail column names.

mod profile;
mod record;

use rusqlite::Connection;

use super::DatabaseError;
use crate::models::Category;

// Re-export all public items from sub-modules
pub use profile::*;
pub use record::*;

/// Delete every profile and record. Used by the clear-data endpoint and the seeder.
pub fn clear_all(conn: &Connection) -> Result<(), DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM profiles", [])?;
    for category in Category::ALL {
        tx.execute(&format!("DELETE FROM {}", category.table()), [])?;
    }
    tx.commit()?;
    Ok(())
}
