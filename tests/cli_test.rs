mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{GUID_ABC123, MUID_ABC123, write_csv};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_cards_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("card")
        .arg("tests/fixtures/cards.csv")
        .args(["--device-id", "abc123", "--package", "com.example.app"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"card":{"cvc":"123","exp_month":12,"exp_year":2024,"number":"4242424242424242"},"guid":""#,
        ))
        .stdout(predicate::str::contains(r#""product_usage":["CardInputView"]"#))
        .stdout(predicate::str::contains(r#""address_zip":"94107""#))
        .stdout(predicate::str::contains(r#""product_usage":[]"#))
        .stdout(predicate::str::contains(GUID_ABC123))
        .stdout(predicate::str::contains(MUID_ABC123))
        .stdout(predicate::str::contains("abc123\"").not());

    Ok(())
}

#[test]
fn test_cli_bank_accounts_are_not_fingerprinted() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("bank-account")
        .arg("tests/fixtures/bank_accounts.csv")
        .args(["--device-id", "abc123"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"bank_account":{"account_holder_name":"Jenny Rosen","account_holder_type":"individual","account_number":"000123456789","country":"US","currency":"usd","routing_number":"110000000"}}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"bank_account":{"account_number":"00012345","country":"GB","currency":"gbp"}}"#,
        ))
        .stdout(predicate::str::contains("guid").not());

    Ok(())
}

#[test]
fn test_cli_device_id_from_env() {
    let csv = write_csv(
        &["number", "exp_month", "exp_year"],
        &[&["4242424242424242", "12", "2030"]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("card")
        .arg(csv.path())
        .env("PAYMENT_PARAMS_DEVICE_ID", "abc123")
        .env("PAYMENT_PARAMS_PACKAGE", "com.example.app");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(GUID_ABC123))
        .stdout(predicate::str::contains(MUID_ABC123));
}

#[test]
fn test_cli_blank_device_id_omits_fingerprint() {
    let csv = write_csv(
        &["number", "exp_month", "exp_year"],
        &[&["4242424242424242", "12", "2030"]],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("card").arg(csv.path()).args(["--device-id", " "]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""exp_year":2030"#))
        .stdout(predicate::str::contains("guid").not())
        .stdout(predicate::str::contains("muid").not());
}

#[test]
fn test_cli_skips_malformed_rows() {
    let csv = write_csv(
        &["number", "exp_month", "exp_year"],
        &[
            &["4242424242424242", "12", "2030"],
            &["4000056655665556", "twelve", "2030"],
            &["5555555555554444", "1", "2031"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("card").arg(csv.path()).args(["--device-id", "abc123"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading record"))
        .stdout(predicate::str::contains("4242424242424242"))
        .stdout(predicate::str::contains("5555555555554444"))
        .stdout(predicate::str::contains("4000056655665556").not());
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("payment-params"));
    cmd.arg("card").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
