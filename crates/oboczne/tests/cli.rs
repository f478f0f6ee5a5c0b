use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DICTIONARY: &str = "\
forma (rower, welocyped) jazdy
kot (kot, koty l. mn.)
(Cześć, czołem) powitanie
źdźbło (zwierzę) i (trawy, , )
";

fn oboczne(dir: &Path) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("oboczne").into();
    cmd.current_dir(dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Tempdir holding a dictionary and one DOCX document.
fn fixture(paragraphs: &[&str]) -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let dict = write_file(tmp.path(), "slownik.txt", DICTIONARY.as_bytes());
    let doc = write_file(tmp.path(), "tekst.docx", &docx(paragraphs));
    (tmp, dict, doc)
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    let mut cmd: Command = cargo_bin_cmd!("oboczne").into();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("oboczne"));
}

#[test]
fn analyze_requires_both_inputs() {
    let tmp = TempDir::new().unwrap();
    oboczne(tmp.path())
        .args(["analyze", "--dictionary", "slownik.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--document"));
}

// --- Analyze ---

#[test]
fn analyze_reports_co_occurring_forms() {
    let (tmp, dict, doc) = fixture(&["Stary rower stoi.", "Obok welocyped i czołem!"]);
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Znalezione formy oboczne:"))
        .stdout(predicate::str::contains(
            "Grupa ze słownika: (rower, welocyped)\nZnaleziono w tekście: rower, welocyped\n",
        ))
        .stdout(predicate::str::contains("Cześć").not());
}

#[test]
fn analyze_reports_nothing_for_inflected_forms() {
    let (tmp, dict, doc) = fixture(&["Jadę na rowerze i welocypedzie dziś"]);
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .assert()
        .success()
        .stdout("Nie znaleziono form obocznych, które znajdują się w słowniku.\n");
}

#[test]
fn analyze_plain_text_document() {
    let tmp = TempDir::new().unwrap();
    let dict = write_file(tmp.path(), "slownik.txt", DICTIONARY.as_bytes());
    let doc = write_file(tmp.path(), "tekst.txt", "Cześć!\nCzołem, panowie.\n".as_bytes());
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Znaleziono w tekście: Cześć, czołem"));
}

#[test]
fn analyze_json_output() {
    let (tmp, dict, doc) = fixture(&["rower i welocyped"]);
    let output = oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"groups_checked\": 2"));
    assert!(stdout.contains("\"welocyped\""));
}

#[test]
fn analyze_saves_report() {
    let (tmp, dict, doc) = fixture(&["rower i welocyped"]);
    let report = tmp.path().join("wyniki.txt");
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Wyniki zostały zapisane"));

    let saved = fs::read_to_string(&report).unwrap();
    assert!(saved.contains("Znaleziono w tekście: rower, welocyped"));
}

#[test]
fn analyze_higher_threshold() {
    let (tmp, dict, doc) = fixture(&["rower i welocyped"]);
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .args(["--min-found", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nie znaleziono"));
}

#[test]
fn analyze_rejects_threshold_below_two() {
    let (tmp, dict, doc) = fixture(&["rower i welocyped"]);
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&doc)
        .args(["--min-found", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid co-occurrence threshold"));
}

// --- Input errors ---

#[test]
fn analyze_missing_dictionary() {
    let (tmp, _dict, doc) = fixture(&["rower"]);
    oboczne(tmp.path())
        .args(["analyze", "-d", "brak.txt", "-i"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dictionary unavailable"));
}

#[test]
fn analyze_malformed_document() {
    let (tmp, dict, _doc) = fixture(&["rower"]);
    let broken = write_file(tmp.path(), "zepsuty.docx", b"not a zip");
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&broken)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Document unavailable"));
}

#[test]
fn analyze_unsupported_document_format() {
    let (tmp, dict, _doc) = fixture(&["rower"]);
    let pdf = write_file(tmp.path(), "tekst.pdf", b"%PDF-1.4");
    oboczne(tmp.path())
        .arg("analyze")
        .arg("-d")
        .arg(&dict)
        .arg("-i")
        .arg(&pdf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format: pdf"));
}

// --- Groups ---

#[test]
fn groups_lists_parsed_groups() {
    let (tmp, dict, _doc) = fixture(&[]);
    oboczne(tmp.path())
        .arg("groups")
        .arg("-d")
        .arg(&dict)
        .assert()
        .success()
        .stdout("(rower, welocyped)\n(Cześć, czołem)\n")
        .stderr(predicate::str::contains("2 variant groups"));
}

#[test]
fn groups_keep_empty_pieces() {
    let (tmp, dict, _doc) = fixture(&[]);
    oboczne(tmp.path())
        .arg("groups")
        .arg("-d")
        .arg(&dict)
        .arg("--keep-empty")
        .assert()
        .success()
        .stdout(predicate::str::contains("(trawy, , )"));
}
