use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

const SAMPLE_DISASSEMBLY: &str = "\
sample.o:     file format elf64-x86-64\n\
\n\
Disassembly of section .text:\n\
\n\
0000000000001000 <main>:\n\
    1000:\t55\tpush   %rbp\n";

/// `--help` should list every subcommand.
#[test]
fn help_lists_subcommands() {
    cargo_bin_cmd!("objscope")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("disassemble"))
        .stdout(predicate::str::contains("outline"))
        .stdout(predicate::str::contains("check-tool"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn outline_prints_sections_and_functions() {
    let dir = tempdir().expect("tempdir");
    let text_path = dir.path().join("disasm.txt");
    fs::write(&text_path, SAMPLE_DISASSEMBLY).expect("write");

    cargo_bin_cmd!("objscope")
        .arg("outline")
        .arg("--file")
        .arg(&text_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("- section text (line 3)"))
        .stdout(predicate::str::contains("  - fn main (line 5)"));
}

#[test]
fn outline_json_is_machine_readable() {
    let dir = tempdir().expect("tempdir");
    let text_path = dir.path().join("disasm.txt");
    fs::write(&text_path, SAMPLE_DISASSEMBLY).expect("write");

    let output = cargo_bin_cmd!("objscope")
        .arg("outline")
        .arg("--file")
        .arg(&text_path)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tree: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(tree["roots"][0]["name"], "text");
    assert_eq!(tree["roots"][0]["kind"], "section");
    assert_eq!(tree["roots"][0]["children"][0]["name"], "main");
}

#[test]
fn outline_of_plain_text_reports_no_symbols() {
    let dir = tempdir().expect("tempdir");
    let text_path = dir.path().join("notes.txt");
    fs::write(&text_path, "nothing that looks like disassembly\n").expect("write");

    cargo_bin_cmd!("objscope")
        .arg("outline")
        .arg("--file")
        .arg(&text_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Symbols: (none)"));
}

#[test]
fn outline_fails_for_a_missing_file() {
    let dir = tempdir().expect("tempdir");

    cargo_bin_cmd!("objscope")
        .arg("outline")
        .arg("--file")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read disassembly text"));
}

#[test]
fn classify_recognizes_elf_magic() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("sample.o");
    fs::write(&target, [0x7f, 0x45, 0x4c, 0x46, 0x02]).expect("write");

    cargo_bin_cmd!("objscope")
        .arg("classify")
        .arg("--file")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Object-like: true"));
}

#[test]
fn classify_json_reports_a_negative_verdict() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("notes.txt");
    fs::write(&target, "just text").expect("write");

    let output = cargo_bin_cmd!("objscope")
        .arg("classify")
        .arg("--file")
        .arg(&target)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let verdict: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(verdict["is_object_like"], false);
}
