use customers_core::db::{open_db_in_memory, reset_customers_table};
use customers_core::{parse_full_names, CustomerRepository, SqliteCustomerRepository};
use rusqlite::Connection;
use std::collections::HashSet;

const NAMES: [&str; 3] = ["Andrey Ivanov", "Andrey Smirnov", "Vasya Pupkin"];

fn seeded_connection() -> Connection {
    let conn = open_db_in_memory().unwrap();
    reset_customers_table(&conn).unwrap();
    let names = parse_full_names(&NAMES).unwrap();
    let written = SqliteCustomerRepository::new(&conn)
        .insert_batch(&names)
        .unwrap();
    assert_eq!(written, 3);
    conn
}

#[test]
fn batch_insert_writes_every_tuple() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    assert_eq!(repo.count_customers().unwrap(), 3);
}

#[test]
fn every_written_tuple_reads_back_with_positive_id() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    let stored = repo.list_customers().unwrap();
    let stored_names: HashSet<(String, String)> = stored
        .iter()
        .map(|c| (c.first_name.clone(), c.last_name.clone()))
        .collect();

    for name in parse_full_names(&NAMES).unwrap() {
        assert!(stored_names.contains(&(name.first_name.clone(), name.last_name.clone())));
        let by_first = repo.find_by_first_name(&name.first_name).unwrap();
        assert!(by_first.iter().any(|c| c.last_name == name.last_name));
    }

    assert!(stored.iter().all(|c| c.id > 0));
    let ids: HashSet<i64> = stored.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), stored.len());
}

#[test]
fn filter_returns_only_matching_first_name() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    let matched = repo.find_by_first_name("Andrey").unwrap();
    let last_names: HashSet<&str> = matched.iter().map(|c| c.last_name.as_str()).collect();

    assert_eq!(matched.len(), 2);
    assert_eq!(last_names, HashSet::from(["Ivanov", "Smirnov"]));
    assert!(matched.iter().all(|c| c.first_name == "Andrey"));
}

#[test]
fn filter_without_matches_returns_empty() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    assert!(repo.find_by_first_name("Zzz").unwrap().is_empty());
}

#[test]
fn filter_is_exact_and_case_sensitive() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    assert!(repo.find_by_first_name("andrey").unwrap().is_empty());
    assert!(repo.find_by_first_name("Andre").unwrap().is_empty());
}

#[test]
fn filter_value_is_bound_not_interpolated() {
    let conn = seeded_connection();
    let repo = SqliteCustomerRepository::new(&conn);

    assert!(repo
        .find_by_first_name("Andrey' OR '1'='1")
        .unwrap()
        .is_empty());
    assert!(repo
        .find_by_first_name("x'; DROP TABLE customers; --")
        .unwrap()
        .is_empty());
    assert_eq!(repo.count_customers().unwrap(), 3);
}

#[test]
fn names_with_quotes_are_stored_literally() {
    let conn = open_db_in_memory().unwrap();
    reset_customers_table(&conn).unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let names = parse_full_names(&["O'Brien D'Arcy"]).unwrap();
    repo.insert_batch(&names).unwrap();

    let matched = repo.find_by_first_name("O'Brien").unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].last_name, "D'Arcy");
}

#[test]
fn insert_without_table_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let names = parse_full_names(&NAMES).unwrap();
    assert!(repo.insert_batch(&names).is_err());
}
