use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn fit_command_writes_svg() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("pts.csv");
    input
        .write_str("Time (hours),Temperature (°C)\n0,5\n2,0\n4,10\n")
        .unwrap();
    let output = dir.child("plot.svg");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "fit",
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    output.assert(predicate::path::exists());
    output.assert(predicate::str::contains("<svg"));
    output.assert(predicate::str::contains("Time (hours)"));
    dir.close().unwrap();
}

#[test]
fn fit_command_writes_samples_csv() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("pts.csv");
    input.write_str("x,y\n0,5\n2,0\n").unwrap();
    let output = dir.child("plot.svg");
    let samples = dir.child("samples.csv");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "fit",
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            "--samples-csv",
            samples.path().to_str().unwrap(),
            "--points-per-segment",
            "10",
        ])
        .assert()
        .success();

    // 10 samples for the single segment plus the closing point.
    let contents = std::fs::read_to_string(samples.path()).unwrap();
    assert_eq!(contents.lines().count(), 11);
    dir.close().unwrap();
}

#[test]
fn fit_coords_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("coords.svg");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "fit-coords",
            "(1, 2), (3, 4), (5, 1)",
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    output.assert(predicate::str::contains("<path"));
    dir.close().unwrap();
}

#[test]
fn samples_command_prints_curve_points() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("pts.csv");
    input.write_str("0,0\n1,1\n").unwrap();

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "samples",
            input.path().to_str().unwrap(),
            "--points-per-segment",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.000,0.000"))
        .stdout(predicate::str::contains("1.000,1.000"));
    dir.close().unwrap();
}

#[test]
fn duplicate_x_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("pts.csv");
    input.write_str("x,y\n1,2\n1,5\n").unwrap();
    let output = dir.child("plot.svg");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "fit",
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("share the x coordinate"));

    output.assert(predicate::path::missing());
    dir.close().unwrap();
}

#[test]
fn generate_command_writes_headered_csv() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("series.csv");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "generate",
            output.path().to_str().unwrap(),
            "--points",
            "10",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created with 10 data points"));

    output.assert(predicate::str::starts_with("Time (hours),Temperature (°C)"));
    dir.close().unwrap();
}

#[test]
fn generate_rejects_unknown_distribution() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("series.csv");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "generate",
            output.path().to_str().unwrap(),
            "--intervals",
            "fibonacci",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown interval distribution"));

    output.assert(predicate::path::missing());
    dir.close().unwrap();
}

#[test]
fn demo_command_regenerates_and_plots() {
    let dir = assert_fs::TempDir::new().unwrap();
    let data = dir.child("data_points.csv");
    let output = dir.child("demo.svg");

    Command::cargo_bin("curve_fitter_cli")
        .unwrap()
        .args([
            "demo",
            output.path().to_str().unwrap(),
            "--data-csv",
            data.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    data.assert(predicate::path::exists());
    output.assert(predicate::str::contains("<svg"));
    dir.close().unwrap();
}
