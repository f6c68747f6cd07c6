//! Integration tests for the silaba CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn silaba() -> Command {
    Command::cargo_bin("silaba").unwrap()
}

#[test]
fn test_analyze_words_as_text() {
    silaba()
        .args(["analyze", "agua", "KAT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agua: valid"))
        .stdout(predicate::str::contains(
            "units:  Unit:V(a)@0 Unit:CV(gu)@1 Unit:V(a)@3",
        ))
        .stdout(predicate::str::contains("x = +97 -103 +117 +97"))
        .stdout(predicate::str::contains(
            "kat: Syntax error: string does not end in a vowel at position 2",
        ));
}

#[test]
fn test_analyze_input_file() {
    silaba()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("trato: valid"))
        .stdout(predicate::str::contains("x = (+97-108)*(-116+97)"))
        .stdout(predicate::str::contains(
            "ab3c: Lexical error: non-alphabetic character at position 2",
        ));
}

#[test]
fn test_json_output() {
    let output = silaba()
        .args(["analyze", "-f", "json", "-i"])
        .arg(fixture_path("words.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["word"], "agua");
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[3]["valid"], false);
    assert_eq!(results[4]["error"]["position"], 2);
}

#[test]
fn test_markdown_output() {
    silaba()
        .args(["analyze", "agua", "xyz", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| # | Word | Result | Units | Expression |"))
        .stdout(predicate::str::contains(
            "| 1 | agua | valid | a · gu · a | `x = +97 -103 +117 +97` |",
        ))
        .stdout(predicate::str::contains(
            "*Total words: 2 (valid: 1, rejected: 1)*",
        ));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("result.txt");

    silaba()
        .args(["analyze", "trato", "-o"])
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("trato: valid"));
    assert!(content.contains("Unit:CCV(tra)@0 Unit:CV(to)@3"));
}

#[test]
fn test_glob_pattern() {
    silaba()
        .arg("analyze")
        .arg("-i")
        .arg("tests/fixtures/*-words.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("casa: valid"))
        .stdout(predicate::str::contains("aeiou: Syntax error: more than 3 consecutive vowels"))
        .stdout(predicate::str::contains("stra: Syntax error: invalid consonant sequence"));
}

#[test]
fn test_strict_mode_fails_on_rejection() {
    silaba()
        .arg("analyze")
        .arg("--strict")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 of 5 words rejected"));
}

#[test]
fn test_no_input_error() {
    silaba()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input: pass words as arguments"));
}

#[test]
fn test_missing_file_error() {
    silaba()
        .args(["analyze", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching 'nonexistent.txt'"));
}

#[test]
fn test_config_sets_default_format() {
    let output = silaba()
        .arg("--config")
        .arg(fixture_path("config.toml"))
        .args(["analyze", "alta"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["analysis"]["units"][0]["shape"], "VCCV");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[output]\ndefault_format = \"yaml\"\n").unwrap();

    silaba()
        .arg("--config")
        .arg(&config)
        .args(["analyze", "agua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_list_patterns() {
    silaba()
        .args(["list", "patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VCCV  100000"))
        .stdout(predicate::str::contains("CCV    50000"));
}

#[test]
fn test_list_formats() {
    silaba()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help_output() {
    silaba()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_shell_is_the_default_command() {
    silaba()
        .write_stdin("agua\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORD ANALYSIS - HOW TO USE"))
        .stdout(predicate::str::contains("Valid\n"))
        .stdout(predicate::str::contains("x = +97 -103 +117 +97\n"));
}

#[test]
fn test_shell_session() {
    silaba()
        .args(["repl", "--no-intro", "--prompt", "$ "])
        .write_stdin("1\nab3c\nkat\nalta\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$ "))
        .stdout(predicate::str::contains("No word saved for semantic analysis"))
        .stdout(predicate::str::contains(
            "Lexical error: non-alphabetic character at position 2",
        ))
        .stdout(predicate::str::contains(
            "Syntax error: string does not end in a vowel at position 2",
        ))
        .stdout(predicate::str::contains("Unit:VCCV(alta)@0"))
        .stdout(predicate::str::contains("x = (+97-108)*(-116+97)"))
        .stdout(predicate::str::contains("WORD ANALYSIS").not());
}

#[test]
fn test_shell_uses_config() {
    silaba()
        .arg("--config")
        .arg(fixture_path("config.toml"))
        .arg("repl")
        .write_stdin("")
        .assert()
        .success()
        .stdout("silaba> ");
}
