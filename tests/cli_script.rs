mod common;

use common::ScriptHarness;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_exits_cleanly() {
    let harness = ScriptHarness::new();
    harness
        .command()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(contains("Budget Management System"))
        .stdout(contains("1. Add Tuition Expense"))
        .stdout(contains("Quitting program. Goodbye!"));
}

#[test]
fn closed_stdin_ends_session_successfully() {
    let harness = ScriptHarness::new();
    harness
        .command()
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Input closed. Goodbye!"));
}

#[test]
fn view_all_without_records() {
    let harness = ScriptHarness::new();
    let output = harness.run(&["4", "5"]);
    assert!(output.stdout.contains("No expenses recorded yet."));
}

#[test]
fn tuition_session_shows_adjusted_total() {
    let harness = ScriptHarness::new();
    let output = harness.run(&[
        "1",
        "5000",
        "2",
        "Need-Based",
        "1500",
        "1",
        "Library Fee",
        "200",
        "3",
        "4",
        "4",
        "5",
    ]);

    assert!(output.stdout.contains("Tuition Options"));
    assert!(output.stdout.contains("Tuition: $3700.00"));
    assert!(output.stdout.contains("Fee: Library Fee, Amount: $200.00"));
    assert!(output
        .stdout
        .contains("Scholarship: Need-Based, Amount: $1500.00"));
    assert!(output.stdout.contains("Expense Overview"));
    assert!(output.stdout.contains(&"-".repeat(30)));
}

#[test]
fn subscription_session_reports_status() {
    let harness = ScriptHarness::new();
    let output = harness.run(&["2", "15", "Netflix", "15.99", "3", "2", "3", "4", "5"]);

    let active = output.stdout.find("Status: Active").expect("active status");
    let canceled = output.stdout.find("Status: Canceled").expect("canceled status");
    assert!(active < canceled);
    assert!(output.stdout.contains("Billing Date: 15"));
}

#[test]
fn restaurant_split_is_displayed() {
    let harness = ScriptHarness::new();
    let output = harness.run(&["3", "2", "Restaurant", "30", "Yes", "2", "4", "5"]);

    assert!(output.stdout.contains("Food Type: Restaurant"));
    assert!(output.stdout.contains("Total Cost: $15.00"));
    assert!(output
        .stdout
        .contains("Split Among: 2 person(s) → Each pays: $15.00"));
    assert!(!output.stdout.contains("Expiration Date"));
}

#[test]
fn groceries_show_freshness() {
    let harness = ScriptHarness::new();
    let output = harness.run(&["3", "4", "Groceries", "18.40", "4", "5"]);

    let expiration = predicate::str::is_match(r"Expiration Date: \d{4}-\d{2}-\d{2} \(Fresh\)")
        .expect("valid regex");
    assert!(expiration.eval(&output.stdout));
    assert!(!output.stdout.contains("split the bill"));
}

#[test]
fn invalid_input_is_reprompted() {
    let harness = ScriptHarness::new();
    let output = harness.run(&[
        "7",
        "one",
        "3",
        "-2",
        "1",
        "pizza",
        "takout",
        "Takeout",
        "-10",
        "ten",
        "10",
        "maybe",
        "no",
        "5",
    ]);

    assert!(output.stdout.contains("Value must not exceed 5. Try again."));
    assert!(output
        .stdout
        .contains("Invalid input! Please enter a valid integer."));
    assert!(output.stdout.contains("Value must be at least 0. Try again."));
    assert!(output
        .stdout
        .contains("Invalid choice! Please enter one of: Groceries, Takeout, Restaurant."));
    assert!(output.stdout.contains("Did you mean `Takeout`?"));
    assert!(output.stdout.contains("Value cannot be negative. Try again."));
    assert!(output
        .stdout
        .contains("Invalid input! Please enter a valid number."));
    assert!(output
        .stdout
        .contains("Invalid choice! Please enter one of: Yes, No."));
    assert!(output.stdout.contains("Quitting program. Goodbye!"));
}

#[test]
fn empty_names_are_rejected() {
    let harness = ScriptHarness::new();
    let output = harness.run(&["2", "31", "0", "10", "", "Hulu", "7.99", "4", "5"]);

    assert!(output.stdout.contains("Value must not exceed 30. Try again."));
    assert!(output.stdout.contains("Value must be at least 1. Try again."));
    assert!(output
        .stdout
        .contains("Input cannot be empty. Please try again."));
}

#[test]
fn malformed_config_is_fatal() {
    let harness = ScriptHarness::new();
    std::fs::write(harness.home().join("config.json"), "{ broken").unwrap();

    harness
        .command()
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(contains("Error: Malformed configuration"));
}

#[test]
fn quiet_mode_hides_separators() {
    let harness = ScriptHarness::new();
    std::fs::write(
        harness.home().join("config.json"),
        r#"{ "quiet_mode": true, "screen_reader_mode": true }"#,
    )
    .unwrap();

    let output = harness.run(&["3", "1", "Takeout", "12", "No", "4", "5"]);
    assert!(output.success);
    assert!(output.stdout.contains("Food Type: Takeout"));
    assert!(!output.stdout.contains(&"-".repeat(30)));
}
