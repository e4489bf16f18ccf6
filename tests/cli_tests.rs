mod common;

use assert_cmd::Command;
use common::{svg_body, write_file};
use tempfile::TempDir;

#[test]
fn missing_vendor_dir_exits_nonzero_and_writes_nothing() {
    let root = TempDir::new().unwrap();
    let out = root.path().join("out");

    let assert = Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("octicons")
        .arg(root.path().join("no-such-checkout"))
        .arg("--out")
        .arg(&out)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("does not exist"), "stderr was: {stderr}");
    assert!(!out.join("metadata.json").exists());
}

#[test]
fn octicons_run_writes_metadata() {
    let root = TempDir::new().unwrap();
    let vendor = root.path().join("octicons");
    let out = root.path().join("out");
    write_file(&vendor.join("icons/alert-16.svg"), &svg_body(16, 16));
    write_file(&vendor.join("keywords.json"), r#"{"alert": ["warning"]}"#);

    Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("octicons")
        .arg(&vendor)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let metadata = std::fs::read_to_string(out.join("metadata.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&metadata).unwrap();
    assert_eq!(records[0]["name"], "alert");
    assert_eq!(records[0]["size"], "16");
    assert_eq!(records[0]["keywords"][0], "warning");
}

#[test]
fn svgl_run_writes_data_json() {
    let root = TempDir::new().unwrap();
    let vendor = root.path().join("svgl");
    let out = root.path().join("out");
    write_file(
        &vendor.join("static/library/alpha.svg"),
        &svg_body(48, 48),
    );
    write_file(
        &vendor.join("src/data/svgs.ts"),
        "export const svgs = [{ title: 'Alpha', route: '/library/alpha.svg' }];\n",
    );

    Command::cargo_bin("iconsmith")
        .unwrap()
        .arg("svgl")
        .arg(&vendor)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let data = std::fs::read_to_string(out.join("data.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed[0]["title"], "Alpha");
}
