use assert_cmd::Command;
use csv2vault::transcode;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn convert(data: &str) -> String {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());

    serde_json::to_string(&transcode(rdr).unwrap()).unwrap()
}

#[test]
fn chromium_export() {
    let json = convert(include_str!("./chromium.csv"));

    // The duplicated Example rows collapse to the later one
    assert_eq!(
        r#"{"Example":{"ty":"UsernamePassword","data":[["Username","alice"],["Password","secret9"]]},"Forge":{"ty":"UsernamePassword","data":[["Username","bob"],["Password","hunter2"]]}}"#,
        json,
    );
}

#[test]
fn firefox_export() {
    let json = convert(include_str!("./firefox.csv"));

    assert_eq!(
        r#"{"https://example.com":{"ty":"UsernamePassword","data":[["Username","carol"],["Password","se cret3"]]},"https://forge.example.org":{"ty":"UsernamePassword","data":[["Username","dave"],["Password","p@ss,word"]]}}"#,
        json,
    );
}

#[test]
fn output_round_trips() {
    let json = convert(include_str!("./firefox.csv"));
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entry = &parsed["https://example.com"];
    assert_eq!("UsernamePassword", entry["ty"]);
    assert_eq!(
        serde_json::json!([["Username", "carol"], ["Password", "se cret3"]]),
        entry["data"],
    );
}

#[test]
fn conversion_is_idempotent() {
    let data = include_str!("./chromium.csv");

    assert_eq!(convert(data), convert(data));
}

#[test]
fn cli_converts_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, "name,username,password\nExample,alice,secret1\n").unwrap();

    Command::cargo_bin("csv2vault")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(concat!(
            r#"{"Example":{"ty":"UsernamePassword","data":[["Username","alice"],["Password","secret1"]]}}"#,
            "\n",
        ));
}

#[test]
fn cli_missing_file_exits_nonzero() {
    Command::cargo_bin("csv2vault")
        .unwrap()
        .arg("no-such-export.csv")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_unkeyable_header_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, "site,username,password\nExample,alice,secret1\n").unwrap();

    Command::cargo_bin("csv2vault")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("name"));
}

#[test]
fn cli_requires_a_filename() {
    Command::cargo_bin("csv2vault")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
