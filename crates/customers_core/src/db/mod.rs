//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for customers core.
//! - Recreate the `customers` table at the start of every run.
//!
//! # Invariants
//! - Every database failure surfaces as `DbError`; nothing is retried.
//! - Callers must reset the schema before reading or writing customers.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{customers_table_exists, reset_customers_table, CUSTOMERS_TABLE};

pub type DbResult<T> = Result<T, DbError>;

/// Failure of any database operation: open, schema setup, write or read.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A stored row violates an entity invariant and cannot be mapped.
    InvalidData(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted customer data: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
