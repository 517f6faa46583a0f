//! Domain model for seeded customers.
//!
//! # Responsibility
//! - Define the persisted `Customer` record and its pre-insert tuple.
//! - Parse literal full-name strings into tuples.
//!
//! # Invariants
//! - A persisted customer always carries a database-assigned positive id.

pub mod customer;
