// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use assert_cmd::Command;
use predicates::str::contains;

/// The process surface's flag defaults are visible in `--help`:
/// `--port` 8080, `--csaddr` empty (local mode), `--file` packs.db.
#[test]
fn help_shows_the_exact_flag_defaults() {
    Command::cargo_bin("apprunnerd")
        .expect("binary should be built")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("8080"))
        .stdout(contains("packs.db"));
}
