use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const ID: &str = "01234567-89ab-cdef-0123-456789abcdef";
const ID_SIMPLE: &str = "0123456789abcdef0123456789abcdef";

fn nutil(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("nutil").unwrap();
    cmd.env("NUTIL_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_id_from_urls() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .arg("id")
        .arg(format!("https://www.notion.so/acme/Roadmap-{}?pvs=4", ID_SIMPLE))
        .arg(ID_SIMPLE.to_uppercase())
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", ID, ID));
}

#[test]
fn test_id_invalid_fails_with_original_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .arg("id")
        .arg("https://example.com/not-a-page")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Invalid Notion identifier: https://example.com/not-a-page",
        ));
}

#[test]
fn test_get_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("record.json");
    fs::write(&doc, r#"{"items": [{"name": "first"}]}"#).unwrap();

    nutil(temp_dir.path())
        .args(["get", "items.0.name", "--raw"])
        .arg(&doc)
        .assert()
        .success()
        .stdout("first\n");
}

#[test]
fn test_get_from_stdin_with_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .args(["get", "items.99", "--default", "\"X\""])
        .write_stdin(r#"{"items": [10]}"#)
        .assert()
        .success()
        .stdout("\"X\"\n")
        .stderr(predicate::str::contains("No value at 'items.99'"));
}

#[test]
fn test_get_rejects_bad_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .args(["get", "a", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_sign_then_unsign() {
    let temp_dir = tempfile::tempdir().unwrap();
    let raw = "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/abc/photo.png?x=1";

    let output = nutil(temp_dir.path())
        .args(["sign", raw])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://www.notion.so/signed/https%3A%2F%2F"))
        .get_output()
        .stdout
        .clone();
    let signed = String::from_utf8(output).unwrap();

    nutil(temp_dir.path())
        .args(["unsign", signed.trim()])
        .assert()
        .success()
        .stdout(format!("{}\n", raw));
}

#[test]
fn test_config_set_changes_base_url() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .args(["config", "base-url", "https://acme.notion.site/"])
        .assert()
        .success()
        .stderr(predicate::str::contains("base-url set to https://acme.notion.site/"));

    assert!(temp_dir.path().join("config.json").exists());

    nutil(temp_dir.path())
        .args(["config", "base-url"])
        .assert()
        .success()
        .stdout("https://acme.notion.site/\n");

    nutil(temp_dir.path())
        .arg("id")
        .arg(format!("https://acme.notion.site/Wiki-{}", ID_SIMPLE))
        .assert()
        .success()
        .stdout(format!("{}\n", ID));
}

#[test]
fn test_config_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_config_show_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://www.notion.so/"))
        .stdout(predicate::str::contains("s3-url-prefix"));
}

#[test]
fn test_bad_log_level() {
    let temp_dir = tempfile::tempdir().unwrap();

    nutil(temp_dir.path())
        .args(["--log-level", "loud", "id", ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level: loud"));
}

#[test]
fn test_get_ignores_corrupt_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{bad").unwrap();

    nutil(temp_dir.path())
        .args(["get", "a"])
        .write_stdin(r#"{"a": 1}"#)
        .assert()
        .success()
        .stdout("1\n");

    nutil(temp_dir.path())
        .args(["id", ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
