//! Integration tests for the CLI binary.
//!
//! Drives the `dreg` binary against a temporary state directory.
//!
//! This test is registered as a [[test]] in the delegate-registry-cli crate
//! so that CARGO_BIN_EXE_dreg is available.

use std::path::Path;
use std::process::{Command, Output};

const VAULT: &str = "0x1111111111111111111111111111111111111111";
const DELEGATE: &str = "0x2222222222222222222222222222222222222222";
const CONTRACT: &str = "0x3333333333333333333333333333333333333333";

/// Get a Command pointing to the `dreg` binary.
fn dreg_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dreg"))
}

/// Run `dreg --home HOME args...`.
fn dreg(home: &Path, args: &[&str]) -> Output {
    dreg_binary()
        .arg("--home")
        .arg(home)
        .args(args)
        .output()
        .expect("failed to execute dreg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "dreg should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_responds_to_help() {
    let output = dreg_binary()
        .arg("--help")
        .output()
        .expect("failed to execute dreg --help");

    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("dreg") || out.contains("DelegateRegistry") || out.contains("Usage"),
        "dreg --help output should contain usage information, got: {out}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = dreg_binary()
        .arg("--version")
        .output()
        .expect("failed to execute dreg --version");

    assert_success(&output);
    assert!(stdout(&output).contains("0.3"));
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = dreg_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute dreg");

    assert!(!output.status.success());
}

#[test]
fn cli_delegate_check_list_disable() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = dreg(
        home,
        &["delegate", "erc721", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT,
          "--token-id", "7", "--rights", "vote"],
    );
    assert_success(&output);
    assert!(stdout(&output).contains("Enabled erc721 delegation"));
    assert!(home.join("registry.json").exists());

    let check = |rights: &str| {
        let output = dreg(
            home,
            &["check", "erc721", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT,
              "--token-id", "7", "--rights", rights],
        );
        assert_success(&output);
        stdout(&output).trim().to_string()
    };
    assert_eq!(check("vote"), "true");
    assert_eq!(check("*"), "false");

    let output = dreg(home, &["list", "--vault", VAULT, "--json"]);
    assert_success(&output);
    let records: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["shape"], "erc721");

    let output = dreg(
        home,
        &["delegate", "erc721", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT,
          "--token-id", "7", "--rights", "vote", "--disable"],
    );
    assert_success(&output);
    assert_eq!(check("vote"), "false");

    let output = dreg(home, &["list", "--delegate", DELEGATE]);
    assert_success(&output);
    assert!(stdout(&output).contains("No live delegations"));
}

#[test]
fn cli_erc20_check_prints_amount() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    assert_success(&dreg(
        home,
        &["delegate", "erc20", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT,
          "--balance", "250"],
    ));
    let output = dreg(
        home,
        &["check", "erc20", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT],
    );
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "250");

    assert_success(&dreg(
        home,
        &["delegate", "contract", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT],
    ));
    let output = dreg(
        home,
        &["check", "erc20", "--vault", VAULT, "--delegate", DELEGATE, "--contract", CONTRACT],
    );
    assert_eq!(stdout(&output).trim(), "unlimited");
}

#[test]
fn cli_batch_file() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    let file = home.join("requests.json");
    std::fs::write(
        &file,
        format!(
            r#"[
                {{ "delegate": "{DELEGATE}", "scope": {{ "shape": "all" }}, "enable": true }},
                {{ "delegate": "{DELEGATE}", "scope": {{ "shape": "contract", "contract": "{CONTRACT}" }}, "enable": true }}
            ]"#
        ),
    )
    .unwrap();

    let output = dreg(home, &["batch", "--vault", VAULT, "--file", file.to_str().unwrap()]);
    assert_success(&output);
    assert!(stdout(&output).contains("Applied 2 delegation requests"));

    let output = dreg(home, &["check", "all", "--vault", VAULT, "--delegate", DELEGATE]);
    assert_eq!(stdout(&output).trim(), "true");
}

#[test]
fn cli_missing_contract_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dreg(
        dir.path(),
        &["delegate", "contract", "--vault", VAULT, "--delegate", DELEGATE],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
    assert!(!dir.path().join("registry.json").exists());
}

#[test]
fn cli_inspect_and_probe() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let output = dreg(home, &["delegate", "all", "--vault", VAULT, "--delegate", DELEGATE]);
    assert_success(&output);
    let out = stdout(&output);
    let fingerprint = out
        .lines()
        .find_map(|line| line.trim().strip_prefix("Fingerprint: "))
        .expect("fingerprint line")
        .trim()
        .to_string();

    let output = dreg(home, &["inspect", &fingerprint]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Shape:    all"));
    assert!(out.contains("Enabled:  true"));

    let output = dreg(home, &["probe", "0x01ffc9a7"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "true");

    let output = dreg(home, &["probe", "0xdeadbeef"]);
    assert_eq!(stdout(&output).trim(), "false");
}
