//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `lexi` as a compiled binary via
//! [`std::process::Command`]. It validates the contract of headless mode from
//! the outside, as a user or a script would observe it.
//!
//! - **Sources**: stdin (`-`), file paths, the `[source] default` fallback.
//! - **Output formats**: `text`, `json`, `jsonl`, and `--count`.
//! - **No matches**: `text` reports on stderr, `json` prints `[]`, `jsonl`
//!   prints nothing; all exit 0.
//! - **Exit codes**: clean run = 0; missing source = usage error (2);
//!   unsupported scheme, malformed URL or unreadable file = 0 with no
//!   entries and an error log on stderr.
//!
//! Every run passes `--config` with a temporary file so the user's real
//! `~/.config/lexi/config.toml` is never read or created.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (unit tests in lexi-tui draw into a `TestBackend`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    fn with_dictionary(text: &str) -> Self {
        let sandbox = Self::new("");
        std::fs::write(sandbox.dict_path(), text).unwrap();
        sandbox
    }

    fn dict_path(&self) -> String {
        self.dir.path().join("dict.sfm").display().to_string()
    }

    fn lexi(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexi"));
        cmd.arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.lexi().args(args).output().unwrap()
    }

    fn run_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .lexi()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

#[test]
fn stdin_scenario_prints_cat() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "fel*"], SCENARIO);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "cat\n  1. feline\n");
}

#[test]
fn file_source_by_path() {
    let sandbox = Sandbox::with_dictionary(SAMPLE_DICTIONARY);
    let out = sandbox.run(&[&sandbox.dict_path(), "--headless", "-q", "*", "--count"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), format!("{}\n", SAMPLE_LEXEMES.len()));
}

#[test]
fn config_default_source_is_used() {
    let sandbox = Sandbox::with_dictionary(SCENARIO);
    let config = format!("[source]\ndefault = {:?}\n", sandbox.dict_path());
    std::fs::write(sandbox.dir.path().join("config.toml"), config).unwrap();

    let out = sandbox.run(&["--headless", "-q", "dog", "--count"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn unreadable_file_gives_empty_dictionary_not_failure() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run(&[&sandbox.dict_path(), "--headless", "-q", "*", "--count"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0\n");
    assert!(stderr(&out).contains("could not read dictionary"));
}

// ---------------------------------------------------------------------------
// Output formats
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_an_array_of_entries() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "*", "--format", "json"], SAMPLE_DICTIONARY);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), SAMPLE_LEXEMES.len());
    assert_eq!(array[0]["lexeme"], "kuri");
    assert_eq!(array[0]["variants"][0], "kurii");
    assert_eq!(array[0]["senses"][1]["gloss"], "follow");
    // Absent optional fields are omitted, not null
    assert!(array[1].get("primary_dialect_label").is_none());
}

#[test]
fn jsonl_output_is_one_object_per_line() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "ka", "--format", "jsonl"], SAMPLE_DICTIONARY);
    assert!(out.status.success());

    let lexemes: Vec<String> = stdout(&out)
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["lexeme"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(lexemes, vec!["maka", "tamaka"]);
}

// ---------------------------------------------------------------------------
// No matches
// ---------------------------------------------------------------------------

#[test]
fn text_no_matches_reports_on_stderr() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "zebra"], SCENARIO);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("no matches"));
}

#[test]
fn json_no_matches_is_empty_array() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "zebra", "--format", "json"], SCENARIO);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "[]");
}

#[test]
fn jsonl_no_matches_prints_nothing() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "--format", "jsonl"], SCENARIO);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn invalid_pattern_is_no_matches_not_failure() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run_stdin(&["-", "--headless", "-q", "(cat", "--count"], SCENARIO);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0\n");
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn missing_source_is_a_usage_error() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run(&["--headless", "-q", "cat"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("SOURCE"));
}

#[test]
fn https_source_gives_empty_dictionary_not_failure() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run(&["https://example.org/dict.sfm", "--headless", "-q", "*", "--count"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "0\n");
    assert!(stderr(&out).contains("could not open dictionary source"));
    assert!(stderr(&out).contains("https"));
}

#[test]
fn malformed_url_gives_empty_dictionary_not_failure() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run(&["http://exa mple.org/", "--headless", "-q", "*", "--count"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "0\n");
    assert!(stderr(&out).contains("could not open dictionary source"));
}

#[test]
fn unknown_flag_exits_with_code_2() {
    let sandbox = Sandbox::new("");
    let out = sandbox.run(&["--unknown-flag"]);
    assert_eq!(out.status.code(), Some(2));
}
