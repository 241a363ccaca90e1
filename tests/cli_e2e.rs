//! End-to-end CLI tests for chatexport.
//!
//! These tests run the actual binary against transcripts in a temporary
//! directory and check both the console output and the written JSON.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "My Conversation
1448470901 bob Hello there!
1448470905 mike how are you?
1448470906 bob I like pie?
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    let broken = "Broken Chat
1448470901 bob Hello there!
yesterday mike how are you?
1448470906 bob I like pie?
";
    fs::write(dir.path().join("broken.txt"), broken).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("crlf.txt"), "Windows Chat\r\n1 bob hi\r\n2 mike yo\r\n").unwrap();

    dir
}

fn chatexport_cmd() -> Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatexport"));
    cmd.env_remove("RUST_LOG");
    Command::from_std(cmd)
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn read_json(path: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn contents(document: &Value) -> Vec<String> {
    document["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Modes
// ============================================================================

mod modes {
    use super::*;

    #[test]
    fn test_export_all() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Conversation exported from"))
            .stdout(predicate::str::contains("Exported:     3 messages"));

        let document = read_json(&output);
        assert_eq!(document["name"], "My Conversation");
        assert_eq!(document["messages"].as_array().unwrap().len(), 3);
        assert_eq!(document["messages"][0]["timestamp"], 1448470901);
        assert_eq!(document["messages"][0]["senderId"], "bob");
        assert!(document.get("activity").is_none());
    }

    #[test]
    fn test_filter_by_user() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "--user", "bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Showing messages with userId: bob"));

        let document = read_json(&output);
        assert_eq!(contents(&document), vec!["Hello there!", "I like pie?"]);
    }

    #[test]
    fn test_filter_by_unknown_user() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "-u", "nobody"])
            .assert()
            .success();

        let document = read_json(&output);
        assert_eq!(document["messages"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_filter_by_keyword() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "-k", "pie"])
            .assert()
            .success();

        assert_eq!(contents(&read_json(&output)), vec!["I like pie?"]);
    }

    #[test]
    fn test_blacklist() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "--blacklist", "pie,there"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Hiding messages with following word(s): pie, there",
            ));

        assert_eq!(
            contents(&read_json(&output)),
            vec!["Hello *redacted*!", "how are you?", "I like *redacted*?"]
        );
    }

    #[test]
    fn test_blacklist_repeated_flag() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "-b", "pie", "-b", "you"])
            .assert()
            .success();

        assert_eq!(
            contents(&read_json(&output)),
            vec!["Hello there!", "how are *redacted*?", "I like *redacted*?"]
        );
    }

    #[test]
    fn test_report() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "--report"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Activity:     2 senders"));

        let document = read_json(&output);
        assert_eq!(document["messages"].as_array().unwrap().len(), 3);
        assert_eq!(
            document["activity"],
            serde_json::json!([
                {"senderId": "bob", "count": 2},
                {"senderId": "mike", "count": 1}
            ])
        );
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_compact_output() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "--compact"])
            .assert()
            .success();

        let raw = fs::read_to_string(&output).unwrap();
        assert_eq!(raw.lines().count(), 1);
        assert!(raw.starts_with(r#"{"name":"My Conversation","messages":["#));
    }

    #[test]
    fn test_pretty_output_by_default() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(fs::read_to_string(&output).unwrap().lines().count() > 1);
    }

    #[test]
    fn test_skip_malformed() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "broken.txt")])
            .args(["-o", output.to_str().unwrap(), "--skip-malformed"])
            .assert()
            .success()
            .stderr(predicate::str::contains("skipping malformed line"));

        assert_eq!(
            contents(&read_json(&output)),
            vec!["Hello there!", "I like pie?"]
        );
    }

    #[test]
    fn test_crlf_input() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "crlf.txt")])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .success();

        let document = read_json(&output);
        assert_eq!(document["name"], "Windows Chat");
        assert_eq!(contents(&document), vec!["hi", "yo"]);
    }

    #[test]
    fn test_help() {
        chatexport_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--blacklist"))
            .stdout(predicate::str::contains("--report"));
    }

    #[test]
    fn test_version() {
        chatexport_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_conflicting_modes() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "-u", "bob", "-k", "pie"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("❌ Error:"))
            .stderr(predicate::str::contains("--user, --keyword"));

        assert!(!output.exists());
    }

    #[test]
    fn test_empty_blacklist_word() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap(), "-b", "pie,,no"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid selection"));
    }

    #[test]
    fn test_output_must_be_json() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.txt");

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "chat.txt")])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Incorrect file extension"));

        assert!(!output.exists());
    }

    #[test]
    fn test_empty_input() {
        let fixtures = setup_fixtures();

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "empty.txt")])
            .args(["-o", output_path(&fixtures, "out.json").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Transcript is empty"));
    }

    #[test]
    fn test_malformed_input() {
        let fixtures = setup_fixtures();

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "broken.txt")])
            .args(["-o", output_path(&fixtures, "out.json").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("line 3"));
    }

    #[test]
    fn test_missing_input() {
        let fixtures = setup_fixtures();

        chatexport_cmd()
            .args(["-i", &input_path(&fixtures, "missing.txt")])
            .args(["-o", output_path(&fixtures, "out.json").to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_missing_required_args() {
        chatexport_cmd()
            .args(["-o", "out.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--input"));
    }
}
