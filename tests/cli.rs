use assert_cmd::Command;
use predicates::prelude::*;

fn transcript_fetch() -> Command {
    let mut cmd = Command::cargo_bin("transcript-fetch").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TRANSCRIPT_FETCH_CONFIG");
    cmd
}

#[test]
fn missing_argument_prints_usage_and_exits_1() {
    transcript_fetch()
        .assert()
        .code(1)
        .stdout(predicate::eq("Please provide a YouTube URL or video ID.\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_argument_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs_err::write(&config, "output: [not, a, map]\n").unwrap();

    transcript_fetch()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please provide a YouTube URL or video ID."));
}

#[test]
fn broken_config_fails_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs_err::write(&config, "provider:\n  unknown_key: 1\n").unwrap();

    transcript_fetch()
        .arg("--config")
        .arg(&config)
        .arg("dQw4w9WgXcQ")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn unknown_format_is_rejected() {
    transcript_fetch()
        .args(["--format", "csv", "dQw4w9WgXcQ"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_lists_options() {
    transcript_fetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL_OR_ID"))
        .stdout(predicate::str::contains("--format"));
}
