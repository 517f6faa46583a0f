//! Use-case services orchestrating repositories.
//!
//! # Responsibility
//! - Run the seed-then-query sequence against one borrowed connection.
//! - Hand produced records to an outbound sink.

pub mod seed_service;
