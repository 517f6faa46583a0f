//! Seed-and-query use case.
//!
//! # Responsibility
//! - Reset the `customers` table, write the configured names in one batch,
//!   and emit every customer matching the configured first name.
//!
//! # Invariants
//! - Steps run once each, in order: reset, parse, write, read.
//! - The first failure aborts the sequence; nothing is retried.
//! - Names are parsed before the batch write, so a malformed name leaves the
//!   fresh table empty.

use crate::db::{reset_customers_table, DbError};
use crate::model::customer::{parse_full_names, Customer, NameParseError};
use crate::repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Names written by the reference scenario.
pub const DEFAULT_NAMES: [&str; 3] = ["Andrey Ivanov", "Andrey Smirnov", "Vasya Pupkin"];

/// First name queried by the reference scenario.
pub const DEFAULT_FIRST_NAME_FILTER: &str = "Andrey";

/// Outbound collaborator receiving each matched customer.
pub trait CustomerSink {
    fn emit(&mut self, customer: &Customer);
}

impl<F: FnMut(&Customer)> CustomerSink for F {
    fn emit(&mut self, customer: &Customer) {
        self(customer)
    }
}

/// Sink that writes one `info` log line per customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl CustomerSink for LogSink {
    fn emit(&mut self, customer: &Customer) {
        info!("{customer}");
    }
}

/// Input of one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    /// Literal `"first last"` strings, written in this order.
    pub full_names: Vec<String>,
    /// Exact `first_name` value to query after seeding.
    pub first_name_filter: String,
}

impl SeedPlan {
    pub fn new<S: AsRef<str>>(full_names: &[S], first_name_filter: impl Into<String>) -> Self {
        Self {
            full_names: full_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            first_name_filter: first_name_filter.into(),
        }
    }
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::new(&DEFAULT_NAMES, DEFAULT_FIRST_NAME_FILTER)
    }
}

/// Outcome of a successful seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub matched: Vec<Customer>,
}

#[derive(Debug)]
pub enum SeedError {
    InvalidName(NameParseError),
    Db(DbError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "invalid seed name: {err}"),
            Self::Db(err) => write!(f, "database operation failed: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidName(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<NameParseError> for SeedError {
    fn from(value: NameParseError) -> Self {
        Self::InvalidName(value)
    }
}

impl From<DbError> for SeedError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Runs the seed sequence on one explicitly passed connection.
pub struct DataSeeder<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DataSeeder<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Resets the table, writes `plan.full_names`, and emits every customer
    /// whose first name equals `plan.first_name_filter`.
    ///
    /// # Errors
    /// - `SeedError::InvalidName` when a name is not exactly `first last`.
    /// - `SeedError::Db` for any failure during reset, write, or read.
    pub fn run(
        &self,
        plan: &SeedPlan,
        sink: &mut impl CustomerSink,
    ) -> Result<SeedReport, SeedError> {
        info!("event=seed_run module=service status=start step=create_table");
        reset_customers_table(self.conn)?;

        let names = parse_full_names(plan.full_names.as_slice())?;
        for name in &names {
            info!("Insert record {} {}", name.first_name, name.last_name);
        }

        let repo = SqliteCustomerRepository::new(self.conn);
        let inserted = repo.insert_batch(&names)?;

        info!(
            "Querying records where first_name = {}:",
            plan.first_name_filter
        );
        let matched = repo.find_by_first_name(&plan.first_name_filter)?;
        for customer in &matched {
            sink.emit(customer);
        }

        info!(
            "event=seed_run module=service status=ok inserted={} matched={}",
            inserted,
            matched.len()
        );
        Ok(SeedReport { inserted, matched })
    }
}
