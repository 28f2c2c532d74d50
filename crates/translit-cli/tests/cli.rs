//! CLI integration tests for the `ro2ru` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn ro2ru() -> Command {
    Command::from(cargo_bin_cmd!("ro2ru"))
}

#[test]
fn help_flag() {
    ro2ru()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Russian Cyrillic"));
}

#[test]
fn words_from_arguments() {
    ro2ru()
        .args(["Bună", "ziua"])
        .assert()
        .success()
        .stdout("бунэ зьюа\n");
}

#[test]
fn text_from_stdin() {
    ro2ru()
        .write_stdin("Ceai la Chișinău\n")
        .assert()
        .success()
        .stdout("чаи ла кишинэу\n");
}

#[test]
fn stdin_and_arguments_agree_on_last_word() {
    for word in ["copii", "aici", "Maria"] {
        let from_args = ro2ru().arg(word).output().unwrap();
        let from_stdin = ro2ru().write_stdin(format!("{word}\n")).output().unwrap();
        assert!(from_args.status.success());
        assert_eq!(from_args.stdout, from_stdin.stdout, "{word}");
    }
    ro2ru()
        .write_stdin("copii\r\n")
        .assert()
        .success()
        .stdout("копи\n");
}

#[test]
fn empty_stdin_prints_empty_line() {
    ro2ru().write_stdin("").assert().success().stdout("\n");
}

#[test]
fn explain_flag() {
    ro2ru()
        .args(["--explain", "aici"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("aici -> айч"))
        .stdout(predicate::str::contains("i → й after vowel"));
}

#[test]
fn json_flag() {
    let output = ro2ru().args(["--json", "mama"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["output"], "мама");
}

#[test]
fn invalid_utf8_stdin_fails() {
    ro2ru()
        .write_stdin(vec![0x61, 0xFF])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: failed to read stdin"));
}
