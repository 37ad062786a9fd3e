//! End-to-end tests for the dnicr binary.

use assert_cmd::Command;
use predicates::prelude::*;

const FRONT_FACE: &str = "DNI12345678\nPRIMER APELLIDO\nGARCIA\nSEGUNDO APELLIDO\nLOPEZ\nPRE NOMBRES\nJUANCARLOS\nFECHA DE NACIMIENTO\n01012000\nSEXO\nM\n";

#[test]
fn process_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.txt");
    std::fs::write(&input, FRONT_FACE).unwrap();

    Command::cargo_bin("dnicr")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nationalId\": \"12345678\""))
        .stdout(predicate::str::contains("JUAN CARLOS GARCIA LOPEZ"));
}

#[test]
fn process_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.txt");
    std::fs::write(&input, FRONT_FACE).unwrap();

    Command::cargo_bin("dnicr")
        .unwrap()
        .args(["process", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("DNI: 12345678"))
        .stdout(predicate::str::contains("Sex: MASCULINO"));
}

#[test]
fn process_fails_without_national_id() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.txt");
    std::fs::write(&input, "PRIMER APELLIDO\nGARCIA\n").unwrap();

    Command::cargo_bin("dnicr")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("national ID could not be detected"));
}

#[test]
fn process_relays_empty_dump_as_boundary_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "   \n\n").unwrap();

    Command::cargo_bin("dnicr")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no text could be extracted"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.txt");
    std::fs::write(&input, FRONT_FACE).unwrap();
    let out_dir = dir.path().join("out");

    Command::cargo_bin("dnicr")
        .unwrap()
        .arg("batch")
        .arg(dir.path().join("*.txt").to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    let record = std::fs::read_to_string(out_dir.join("front.json")).unwrap();
    assert!(record.contains("\"nationalId\": \"12345678\""));

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("front.txt,success,12345678"));
}
