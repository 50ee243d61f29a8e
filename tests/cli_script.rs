mod common;

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn script_mode_records_income_and_reports_savings() {
    let (path, _guard) = common::ledger_path();

    let mut cmd = Command::cargo_bin("account_book").unwrap();
    cmd.env("ACCOUNT_BOOK_CLI_SCRIPT", "1")
        .env("ACCOUNT_BOOK_DB", &path)
        .write_stdin("0\n1500\n2\n1\n400\n3\n4\n6\n")
        .assert()
        .success()
        .stdout(contains("New income record added!"))
        .stdout(contains("Total savings: 1100.00"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "incomes": [{ "amount": 1500.0, "category": 2 }],
            "expenses": [{ "amount": 400.0, "category": 3 }]
        })
    );
}

#[test]
fn malformed_ledger_exits_with_error() {
    let (path, _guard) = common::ledger_path();
    fs::write(&path, "not json").unwrap();

    Command::cargo_bin("account_book")
        .unwrap()
        .env("ACCOUNT_BOOK_CLI_SCRIPT", "1")
        .env("ACCOUNT_BOOK_DB", &path)
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(contains("Storage unavailable"));
}
