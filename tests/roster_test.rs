//! Integration tests for roster loading

mod common;

use std::path::Path;

use common::{EmployeeBuilder, RosterBuilder};
use staffscope::{DeviceStatus, load_roster};

#[test]
fn test_load_roster_full_records() {
    let builder = RosterBuilder::new()
        .with_employee(
            &EmployeeBuilder::new("Lina Haddad")
                .email("lina@example.com")
                .unit("Engineering")
                .device("ThinkPad T14", Some("PF-123"), DeviceStatus::Attached),
        )
        .with_employee(&EmployeeBuilder::new("Omar Said").unit("Sales"));

    let roster = load_roster(&builder.write()).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Lina Haddad");
    assert_eq!(roster[0].devices.len(), 1);
    assert_eq!(roster[0].devices[0].status, DeviceStatus::Attached);
    assert_eq!(roster[1].unit.as_deref(), Some("Sales"));
}

#[test]
fn test_load_roster_missing_file_is_empty() {
    let roster = load_roster(Path::new("/no/such/roster.jsonl")).unwrap();
    assert!(roster.is_empty());
}

#[test]
fn test_load_roster_skips_malformed_lines() {
    let builder = RosterBuilder::new()
        .with_employee(&EmployeeBuilder::new("Lina"))
        .with_raw_line("{ this is not json")
        .with_employee(&EmployeeBuilder::new("Omar"))
        .with_employee(&EmployeeBuilder::new("Aya"));

    let roster = load_roster(&builder.write()).unwrap();
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_load_roster_mostly_malformed_fails() {
    let builder = RosterBuilder::new()
        .with_employee(&EmployeeBuilder::new("Lina"))
        .with_raw_line("bad")
        .with_raw_line("worse")
        .with_raw_line("{}"); // missing required name field

    let result = load_roster(&builder.write());
    assert!(result.is_err());
}

#[test]
fn test_load_roster_blank_lines_ignored() {
    let builder = RosterBuilder::new()
        .with_raw_line("")
        .with_employee(&EmployeeBuilder::new("Lina"))
        .with_raw_line("")
        .with_raw_line("   ");

    let roster = load_roster(&builder.write()).unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_loaded_roster_feeds_the_filter() {
    let builder = RosterBuilder::new()
        .with_employee(&EmployeeBuilder::new("Engineering Lead").unit("Engineering"))
        .with_employee(&EmployeeBuilder::new("Sales Manager").unit("Sales"))
        .with_employee(&EmployeeBuilder::new("Senior Engineer").unit("Engineering"));

    let roster = load_roster(&builder.write()).unwrap();
    let flags =
        staffscope::compute_visibility("eng", roster.iter().map(|e| e.display_line()));

    assert_eq!(flags, vec![true, false, true]);
}
