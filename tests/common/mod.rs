#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper for running fieldcheck commands with less boilerplate
pub struct FieldcheckTest {
    cmd: Command,
}

pub fn fieldcheck_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fieldcheck"))
}

impl FieldcheckTest {
    pub fn new() -> Self {
        Self {
            cmd: fieldcheck_command(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Assert the command succeeds and contains all texts in stdout
    pub fn assert_success_contains_all(mut self, texts: &[&str]) -> assert_cmd::assert::Assert {
        let mut assertion = self.cmd.assert().success();
        for text in texts {
            assertion = assertion.stdout(predicate::str::contains(*text));
        }
        assertion
    }

    /// Assert the command fails with an error message on stderr
    pub fn assert_error_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(text))
    }

    pub fn stdout(mut self) -> String {
        let output = self.cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }
}

/// Quick helper for a single pair in a given format
pub fn pair_test(format: &str, lat: &str, lon: &str) -> FieldcheckTest {
    FieldcheckTest::new().args([format!("--format={}", format).as_str(), lat, lon])
}

/// Writes lines to a temp file and returns the `@path` argument alongside the dir guard
pub fn pair_file(lines: &[&str]) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("pairs.txt");
    let mut file = File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    (dir, format!("@{}", path.to_str().unwrap()))
}
