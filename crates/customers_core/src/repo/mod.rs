//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every value reaches SQL as a bound parameter.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod customer_repo;
