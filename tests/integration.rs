use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_packer")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- stdin / stdout --

#[test]
fn stdin_to_stdout_matches_expected() {
    let input = std::fs::read_to_string(fixture_path("calc.json")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("calc.expected.xml")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    assert_eq!(stdout_of(&assert), expected);
}

#[test]
fn input_file_argument() {
    let expected = std::fs::read_to_string(fixture_path("calc.expected.xml")).unwrap();

    let assert = cmd().arg(fixture_path("calc.json")).assert().success();
    assert_eq!(stdout_of(&assert), expected);
}

#[test]
fn empty_list_writes_empty_root() {
    cmd()
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("<?xml version=\"1.0\" encoding=\"UTF-8\"?><methods></methods>");
}

// -- output file --

#[test]
fn output_file_is_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("methods.xml");

    cmd()
        .arg(fixture_path("calc.json"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    let expected = std::fs::read_to_string(fixture_path("calc.expected.xml")).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn output_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("methods.xml");
    std::fs::write(&out, "stale partial output <methods><method>").unwrap();

    cmd()
        .write_stdin("[]")
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(!written.contains("stale"));
    assert!(written.ends_with("<methods></methods>"));
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("no-such-dir").join("methods.xml");

    cmd()
        .write_stdin("[]")
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}

// -- pretty printing --

#[test]
fn indent_puts_elements_on_lines() {
    let assert = cmd()
        .arg(fixture_path("calc.json"))
        .args(["--indent", "2"])
        .assert()
        .success();
    let out = stdout_of(&assert);

    assert!(out.contains("\n<methods>\n  <method>\n    <description>\n      <name>add</name>\n"));
    assert!(out.contains("\n        <exitId>1</exitId>\n        <exits>\n          <exit>result == a + b</exit>\n"));
    assert!(out.ends_with("</methods>\n"));
}

// -- contracts --

#[test]
fn repeated_exit_ids_form_one_group() {
    let assert = cmd().arg(fixture_path("exits.json")).assert().success();
    let out = stdout_of(&assert);

    assert!(out.contains("<exits><exit>result &gt;= 0</exit></exits>"));
    assert!(out.contains(
        "<exitIds><exitId>4</exitId><exits><exit>result == x</exit><exit>x &gt;= 0</exit></exits>\
         <exitId>9</exitId><exits><exit>result == -x</exit></exits></exitIds>"
    ));
    assert_eq!(out.matches("<exitId>4</exitId>").count(), 1);
}

#[test]
fn javadoc_segments_keep_their_markers() {
    let assert = cmd().arg(fixture_path("calc.json")).assert().success();
    let out = stdout_of(&assert);

    assert!(out.contains("<param>@param a first </param>"));
    assert!(out.contains("<return>@return sum </return>"));
}

#[test]
fn control_character_fails_whole_run() {
    cmd()
        .write_stdin(
            r#"[{"dynamic": {"description": {"name": "f", "type": "int", "owner": "A"},
                "enter": ["a\u0001b"]}}]"#,
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("not allowed in XML text"));
}

// -- skipping and errors --

#[test]
fn unusable_javadoc_drops_only_that_method() {
    let assert = cmd().arg(fixture_path("calc.json")).assert().success();
    let out = stdout_of(&assert);

    assert!(!out.contains("<name>reset</name>"));
    assert_eq!(out.matches("<method>").count(), 3);
    assert_eq!(out.matches("</method>").count(), 3);
}

#[test]
fn verbose_reports_skipped_method() {
    cmd()
        .arg(fixture_path("calc.json"))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping method with unusable documentation"))
        .stderr(predicate::str::contains("reset"));
}

#[test]
fn entry_without_results_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("methods.xml");

    cmd()
        .arg(fixture_path("missing.json"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "method entry 1 has neither a static nor a dynamic result",
        ));

    assert!(!out.exists());
}

#[test]
fn malformed_input_fails() {
    cmd()
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read stdin"));
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .arg(fixture_path("does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
