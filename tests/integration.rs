use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apidefine")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_renders_definition() {
    let assert = cmd().write_stdin(fixture("user.json")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn stdin_mode_renders_list() {
    let assert = cmd().write_stdin(fixture("errors.json")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("errors.expected.txt"));
}

#[test]
fn stdin_mode_empty_definition() {
    cmd()
        .write_stdin(r#"{"name": "User"}"#)
        .assert()
        .success()
        .stdout("/**\n * @apiDefine User\n *\n */\n\n\n");
}

#[test]
fn stdin_mode_malformed_json_fails() {
    cmd()
        .write_stdin("{ nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse definitions from stdin"));
}

#[test]
fn stdin_mode_unsupported_example_kind_fails() {
    cmd()
        .write_stdin(r#"{"name": "X", "examples": [{"kind": "permission", "content": "x"}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to add example"))
        .stderr(predicate::str::contains("\"permission\""));
}

// -- file mode --

#[test]
fn file_mode_to_stdout() {
    let assert = cmd()
        .arg(fixture_path("user.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn file_mode_sorted_order() {
    // Arguments are sorted, so errors.json renders before user.json.
    let assert = cmd()
        .arg(fixture_path("user.json"))
        .arg(fixture_path("errors.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected = format!("{}{}", fixture("errors.expected.txt"), fixture("user.expected.txt"));
    assert_eq!(output, expected);
}

#[test]
fn file_mode_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("nested").join("apidoc.js");

    cmd()
        .args(["-o", out_path.to_str().unwrap()])
        .arg(fixture_path("user.json"))
        .assert()
        .success()
        .stdout("");

    let output = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn file_mode_glob_pattern() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(fixture_path("user.json"), dir.path().join("a.json")).unwrap();
    std::fs::copy(fixture_path("errors.json"), dir.path().join("b.json")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let pattern = format!("{}/*.json", dir.path().display());
    let assert = cmd().arg(&pattern).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let expected = format!("{}{}", fixture("user.expected.txt"), fixture("errors.expected.txt"));
    assert_eq!(output, expected);
}

#[test]
fn file_mode_directory_scan() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(fixture_path("errors.json"), dir.path().join("errors.json")).unwrap();
    std::fs::write(dir.path().join("README.md"), "# not a definition").unwrap();

    let assert = cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("errors.expected.txt"));
}

#[test]
fn file_mode_skips_malformed_files() {
    let assert = cmd()
        .arg(fixture_path("malformed.json"))
        .arg(fixture_path("user.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn file_mode_skips_unreadable_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.json"), [0xff, 0xfe, 0x00]).unwrap();
    std::fs::copy(fixture_path("user.json"), dir.path().join("b.json")).unwrap();

    let assert = cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"))
        .stderr(predicate::str::contains("a.json"));
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn file_mode_unsupported_fragment_kind_fails() {
    cmd()
        .arg(fixture_path("bad_kind.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid definition in"))
        .stderr(predicate::str::contains("\"cookie\""));
}

#[test]
fn file_mode_no_match_warns() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.json", dir.path().display());
    cmd()
        .arg(&pattern)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no files matched"));
}

// -- group filter --

#[test]
fn group_filter_keeps_matching() {
    let assert = cmd()
        .args(["--group", "Users"])
        .arg(fixture_path("user.json"))
        .arg(fixture_path("errors.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("user.expected.txt"));
}

#[test]
fn group_filter_without_match_renders_nothing() {
    cmd()
        .args(["-g", "Orders"])
        .arg(fixture_path("errors.json"))
        .assert()
        .success()
        .stdout("");
}
