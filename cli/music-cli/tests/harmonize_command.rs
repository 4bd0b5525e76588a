use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

#[test]
fn harmonize_outputs_explanations_and_json() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("harmonize")
        .arg("--bass-line")
        .arg("48,53,55,48")
        .arg("--chord-types")
        .arg("major,major,major,major")
        .arg("--key")
        .arg("C");

    cmd.assert().success().stdout(
        contains("=== Measure 1 ===").and(contains("\"success\": true")).and(contains("\"voices\"")),
    );
}

#[test]
fn harmonize_rejects_empty_bass_line() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("harmonize");

    cmd.assert().failure().stdout(contains("\"success\": false"));
}

#[test]
fn harmonize_melody_keeps_given_soprano_line() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("harmonize-melody").arg("--melody").arg("72,74,76,77,79").arg("--key").arg("C");

    cmd.assert().success().stdout(contains("\"S\": 72"));
}

#[test]
fn counterpoint_species_one_solves() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("counterpoint").arg("--cantus-firmus").arg("60,62,64,65,67,65,64,62,60").arg("--species").arg("1");

    cmd.assert().success().stdout(contains("\"success\": true"));
}

#[test]
fn counterpoint_species_two_is_unimplemented() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("counterpoint").arg("--cantus-firmus").arg("60,62").arg("--species").arg("2");

    cmd.assert().failure().stdout(contains("unimplemented"));
}

#[test]
fn check_errors_reports_out_of_range_and_corrects() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("music-cli"));
    cmd.arg("check-errors").arg("--voices").arg("90:64:55:48");

    cmd.assert().success().stdout(contains("\"range\"").and(contains("\"S\": 84")));
}
