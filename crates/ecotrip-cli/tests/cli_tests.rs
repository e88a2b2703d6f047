//! End-to-end CLI tests covering catalog lookup, emission reports, mode
//! comparison, credit conversion, and configuration overrides.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ecotrip() -> Command {
    Command::cargo_bin("ecotrip").expect("binary exists")
}

#[test]
fn distance_resolves_known_route() {
    ecotrip()
        .args(["distance", "--from", "São Paulo, SP", "--to", "Rio de Janeiro, RJ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("430 km"));
}

#[test]
fn distance_is_direction_agnostic() {
    ecotrip()
        .args(["distance", "--from", "rio de janeiro, rj", "--to", " são paulo, sp "])
        .assert()
        .success()
        .stdout(predicate::str::contains("430 km"));
}

#[test]
fn unknown_location_fails_with_suggestion() {
    ecotrip()
        .args(["distance", "--from", "Sao Paolo, SP", "--to", "Rio de Janeiro, RJ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location"))
        .stderr(predicate::str::contains("São Paulo, SP"));
}

#[test]
fn locations_are_listed_once_and_collated() {
    let assert = ecotrip().arg("locations").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let count = stdout
        .lines()
        .filter(|line| *line == "São Paulo, SP")
        .count();
    assert_eq!(count, 1);

    let lines: Vec<&str> = stdout.lines().collect();
    let santos = lines.iter().position(|l| *l == "Santos, SP").unwrap();
    let sao_luis = lines.iter().position(|l| *l == "São Luís, MA").unwrap();
    assert!(santos < sao_luis, "collation should interleave accented names");
}

#[test]
fn emission_report_for_known_route() {
    ecotrip()
        .args([
            "emission",
            "--mode",
            "car",
            "--from",
            "São Paulo, SP",
            "--to",
            "Rio de Janeiro, RJ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("51.60 kg CO2"));
}

#[test]
fn emission_with_manual_distance() {
    ecotrip()
        .args(["emission", "--mode", "bus", "--distance", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.89 kg CO2"));
}

#[test]
fn compare_ranks_modes_ascending() {
    let assert = ecotrip()
        .args(["compare", "--distance", "100"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    let bicycle = stdout.find("- bicycle:").expect("bicycle listed");
    let bus = stdout.find("- bus:").expect("bus listed");
    let car = stdout.find("- car:").expect("car listed");
    let truck = stdout.find("- truck:").expect("truck listed");
    assert!(bicycle < bus && bus < car && car < truck);
}

#[test]
fn compare_json_output_is_parseable() {
    let assert = ecotrip()
        .args(["--json", "compare", "--distance", "100"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let modes = parsed.as_array().expect("array of modes");
    assert_eq!(modes.len(), 4);
    assert_eq!(modes[0]["mode"], "bicycle");
    assert_eq!(modes[3]["emissionKg"].as_f64(), Some(96.0));
}

#[test]
fn credits_conversion_matches_reference() {
    ecotrip()
        .args(["credits", "--emission-kg", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0120 carbon credits"))
        .stdout(predicate::str::contains("0.60 - 1.80 (avg 1.20)"));
}

#[test]
fn trip_requires_route_or_distance() {
    ecotrip()
        .args(["compare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from/--to or --distance"));
}

#[test]
fn factor_table_override_changes_results() {
    let dir = TempDir::new().expect("create temp dir");
    let factors = dir.path().join("factors.json");
    fs::write(&factors, r#"{"car": 0.2, "train": 0.04}"#).expect("write factors");

    ecotrip()
        .args([
            "--factors",
            factors.to_str().unwrap(),
            "emission",
            "--mode",
            "train",
            "--distance",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.00 kg CO2"));
}

#[test]
fn routes_override_supplies_custom_catalog() {
    let dir = TempDir::new().expect("create temp dir");
    let routes = dir.path().join("routes.json");
    fs::write(
        &routes,
        r#"[{"locationA": "Lisboa", "locationB": "Porto", "distanceKm": 313}]"#,
    )
    .expect("write routes");

    ecotrip()
        .args([
            "--routes",
            routes.to_str().unwrap(),
            "distance",
            "--from",
            "porto",
            "--to",
            "LISBOA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("313 km"));
}

#[test]
fn invalid_credit_config_file_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let credits = dir.path().join("credits.json");
    fs::write(
        &credits,
        r#"{"kgPerCredit": 0, "priceMinPerCredit": 50, "priceMaxPerCredit": 150}"#,
    )
    .expect("write credits");

    ecotrip()
        .args([
            "--credits-config",
            credits.to_str().unwrap(),
            "credits",
            "--emission-kg",
            "12",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credit configuration"));
}

#[test]
fn missing_override_file_reports_path() {
    let missing = PathBuf::from("/nonexistent/routes.json");
    ecotrip()
        .args(["--routes", missing.to_str().unwrap(), "locations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load route catalog"));
}
