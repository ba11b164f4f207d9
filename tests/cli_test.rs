//! Command line behaviour of the `merchant-samples` binary.

use std::process::{Command, Output};

fn merchant_samples(args: &[&str], timeout: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_merchant-samples"))
        .args(args)
        .env("MERCHANT_REQUEST_TIMEOUT_SECS", timeout)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn list_ignores_a_broken_configuration() {
    let output = merchant_samples(&["list", "accountservices"], "not-a-number");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accounts.accountservices.v1.delete_account_service"));
    assert!(!stdout.contains("products.v1.list_products"));
}

#[test]
fn help_ignores_a_broken_configuration() {
    let output = merchant_samples(&["--help"], "not-a-number");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("run"));
}

#[test]
fn run_reports_a_broken_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let output = merchant_samples(
        &[
            "run",
            "accounts.accounts.v1.get_account",
            "--config-dir",
            dir.path().to_str().unwrap(),
        ],
        "not-a-number",
    );
    assert!(!output.status.success());
}
