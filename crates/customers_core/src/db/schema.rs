//! Drop-and-recreate schema for the `customers` table.
//!
//! # Invariants
//! - `reset_customers_table` is safe whether or not the table exists.
//! - The drop always runs before the create.

use super::DbResult;
use log::info;
use rusqlite::Connection;

pub const CUSTOMERS_TABLE: &str = "customers";

const DROP_CUSTOMERS_SQL: &str = "DROP TABLE IF EXISTS customers;";

const CREATE_CUSTOMERS_SQL: &str = "CREATE TABLE customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL
);";

/// Removes the `customers` table if present and creates it empty.
///
/// # Errors
/// - Any SQLite failure is returned as-is; a failed reset leaves the caller
///   without a usable table.
pub fn reset_customers_table(conn: &Connection) -> DbResult<()> {
    info!("event=schema_reset module=db status=start table={CUSTOMERS_TABLE}");
    conn.execute(DROP_CUSTOMERS_SQL, [])?;
    conn.execute(CREATE_CUSTOMERS_SQL, [])?;
    info!("event=schema_reset module=db status=ok table={CUSTOMERS_TABLE}");
    Ok(())
}

/// Returns whether the `customers` table is present on this connection.
pub fn customers_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [CUSTOMERS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
