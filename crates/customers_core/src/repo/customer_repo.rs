//! Customer repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Write name tuples into `customers` in one batch.
//! - Read customers back, filtered by exact first name.
//!
//! # Invariants
//! - Batch inserts share one transaction and one prepared statement.
//! - Result order is the engine's natural order; no `ORDER BY` is applied.

use crate::db::{DbError, DbResult};
use crate::model::customer::{Customer, CustomerName};
use log::{debug, info};
use rusqlite::{params, Connection, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name
FROM customers";

const CUSTOMER_INSERT_SQL: &str = "INSERT INTO customers (
    first_name,
    last_name
) VALUES (?1, ?2);";

/// Repository interface for seeded customer data.
pub trait CustomerRepository {
    /// Inserts all tuples as one batch and returns the number of rows written.
    fn insert_batch(&self, names: &[CustomerName]) -> DbResult<usize>;
    /// Returns every customer whose `first_name` equals `first_name` exactly.
    fn find_by_first_name(&self, first_name: &str) -> DbResult<Vec<Customer>>;
    fn list_customers(&self) -> DbResult<Vec<Customer>>;
    fn count_customers(&self) -> DbResult<u64>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn insert_batch(&self, names: &[CustomerName]) -> DbResult<usize> {
        if names.is_empty() {
            return Ok(0);
        }

        // Dropping the transaction without commit rolls it back.
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(CUSTOMER_INSERT_SQL)?;
            for name in names {
                stmt.execute(params![name.first_name.as_str(), name.last_name.as_str()])?;
            }
        }
        tx.commit()?;

        info!(
            "event=customer_batch_insert module=repo status=ok rows={}",
            names.len()
        );
        Ok(names.len())
    }

    fn find_by_first_name(&self, first_name: &str) -> DbResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE first_name = ?1;"))?;
        let mut rows = stmt.query([first_name])?;
        let mut customers = Vec::new();

        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        debug!(
            "event=customer_query module=repo status=ok filter=first_name matches={}",
            customers.len()
        );
        Ok(customers)
    }

    fn list_customers(&self) -> DbResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(&format!("{CUSTOMER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();

        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn count_customers(&self) -> DbResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM customers;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| DbError::InvalidData(format!("negative row count `{count}`")))
    }
}

fn parse_customer_row(row: &Row<'_>) -> DbResult<Customer> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(DbError::InvalidData(format!(
            "non-positive id `{id}` in customers.id"
        )));
    }

    Ok(Customer {
        id,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}
