//! Customer domain model and full-name parsing.
//!
//! # Responsibility
//! - Define the record read back from `customers`.
//! - Split `"first last"` strings into `CustomerName` tuples.
//!
//! # Invariants
//! - A full name splits into exactly two whitespace-separated tokens, or
//!   parsing fails. Extra tokens are never dropped silently.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Database-generated customer identifier.
pub type CustomerId = i64;

/// A customer row as stored in the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Assigned by the database on insert; never changes afterwards.
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer[id={}, firstName='{}', lastName='{}']",
            self.id, self.first_name, self.last_name
        )
    }
}

/// First/last name tuple that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerName {
    pub first_name: String,
    pub last_name: String,
}

impl CustomerName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Full-name input that does not split into exactly two tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParseError {
    pub input: String,
    pub token_count: usize,
}

impl Display for NameParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected `first last` name with exactly 2 tokens, got {} in `{}`",
            self.token_count, self.input
        )
    }
}

impl Error for NameParseError {}

/// Splits one `"first last"` string on whitespace.
///
/// # Errors
/// - Returns `NameParseError` when the input has zero, one, or more than two
///   tokens.
pub fn parse_full_name(full_name: &str) -> Result<CustomerName, NameParseError> {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [first, last] => Ok(CustomerName::new(*first, *last)),
        _ => Err(NameParseError {
            input: full_name.to_string(),
            token_count: tokens.len(),
        }),
    }
}

/// Parses every full name in order, stopping at the first malformed entry.
pub fn parse_full_names<S: AsRef<str>>(
    full_names: &[S],
) -> Result<Vec<CustomerName>, NameParseError> {
    full_names
        .iter()
        .map(|name| parse_full_name(name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_full_name, parse_full_names, Customer, CustomerName};

    #[test]
    fn parse_full_name_splits_first_and_last() {
        let name = parse_full_name("Andrey Ivanov").expect("two tokens should parse");
        assert_eq!(name, CustomerName::new("Andrey", "Ivanov"));
    }

    #[test]
    fn parse_full_name_collapses_surrounding_whitespace() {
        let name = parse_full_name("  Vasya \t Pupkin ").expect("whitespace runs should parse");
        assert_eq!(name, CustomerName::new("Vasya", "Pupkin"));
    }

    #[test]
    fn parse_full_name_rejects_wrong_token_counts() {
        for (input, expected_count) in [("", 0), ("Cher", 1), ("Jean Luc Picard", 3)] {
            let err = parse_full_name(input).expect_err("malformed name must fail");
            assert_eq!(err.token_count, expected_count);
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn parse_full_names_preserves_order_and_fails_fast() {
        let names = parse_full_names(&["Andrey Ivanov", "Andrey Smirnov", "Vasya Pupkin"])
            .expect("reference names should parse");
        let last_names: Vec<&str> = names.iter().map(|n| n.last_name.as_str()).collect();
        assert_eq!(last_names, ["Ivanov", "Smirnov", "Pupkin"]);

        let err = parse_full_names(&["Andrey Ivanov", "Cher", "Jean Luc Picard"])
            .expect_err("second entry is malformed");
        assert_eq!(err.input, "Cher");
    }

    #[test]
    fn customer_display_matches_log_format() {
        let customer = Customer::new(1, "Andrey", "Ivanov");
        assert_eq!(
            customer.to_string(),
            "Customer[id=1, firstName='Andrey', lastName='Ivanov']"
        );
    }
}
