use assert_cmd::Command;
use std::io::Write;

fn inlinemap() -> Command {
    Command::cargo_bin("inlinemap").unwrap()
}

#[test]
fn test_stdin_analysis_writes_one_json_line() {
    let assert = inlinemap()
        .write_stdin("package main\n\nfunc f() {}\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        stdout,
        "[{\"line\":3,\"astCount\":0,\"funcCallCount\":0,\"hasNoinline\":false,\"hasAnyCalls\":false}]\n"
    );
}

#[test]
fn test_empty_input_succeeds_with_empty_array() {
    inlinemap()
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_invalid_source_exits_two_with_no_output() {
    inlinemap()
        .write_stdin("func {")
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn test_missing_file_exits_one() {
    inlinemap()
        .arg("does-not-exist.go")
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn test_file_argument_is_analyzed() {
    let mut file = tempfile::NamedTempFile::with_suffix(".go").unwrap();
    write!(
        file,
        "package main\n\n//go:noinline\nfunc hot() {{\n\tprintln(1)\n}}\n"
    )
    .unwrap();

    let assert = inlinemap().arg(file.path()).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["line"], 4);
    assert_eq!(records[0]["hasNoinline"], true);
    assert_eq!(records[0]["hasAnyCalls"], true);
    assert_eq!(records[0]["funcCallCount"], 0);
}

#[test]
fn test_pretty_output_is_still_one_document() {
    let assert = inlinemap()
        .arg("--pretty")
        .write_stdin("package main\n\nfunc f() {}\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
}
