//! Core data access for the customers demo.
//! Owns the `customers` schema, the seed data path, and the filtered read.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::customer::{
    parse_full_name, parse_full_names, Customer, CustomerId, CustomerName, NameParseError,
};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use service::seed_service::{
    CustomerSink, DataSeeder, LogSink, SeedError, SeedPlan, SeedReport,
    DEFAULT_FIRST_NAME_FILTER, DEFAULT_NAMES,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
