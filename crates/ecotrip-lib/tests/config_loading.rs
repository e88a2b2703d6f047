//! Loading route catalogs, factor tables, and credit configuration from
//! JSON files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ecotrip_lib::{CreditConfig, Error, FactorTable, RouteCatalog};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_catalog_from_json_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(
        &dir,
        "routes.json",
        r#"[{"locationA": "Lisboa", "locationB": "Porto", "distanceKm": 313}]"#,
    );

    let catalog = RouteCatalog::from_path(&path).expect("catalog loads");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_distance("lisboa", "PORTO"), Some(313.0));
}

#[test]
fn catalog_with_negative_distance_is_rejected() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(
        &dir,
        "routes.json",
        r#"[{"locationA": "A", "locationB": "B", "distanceKm": -5}]"#,
    );

    let result = RouteCatalog::from_path(&path);
    assert!(matches!(result, Err(Error::InvalidCatalog { .. })));
}

#[test]
fn malformed_catalog_json_surfaces_as_json_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(&dir, "routes.json", "not json");

    let result = RouteCatalog::from_path(&path);
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn loads_factor_table_preserving_order() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(
        &dir,
        "factors.json",
        r#"{"tram": 0.03, "car": 0.12, "ferry": 0.19}"#,
    );

    let table = FactorTable::from_path(&path).expect("table loads");
    let modes: Vec<&str> = table.iter().map(|(mode, _)| mode).collect();
    assert_eq!(modes, vec!["tram", "car", "ferry"]);
}

#[test]
fn loads_credit_config_and_validates() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(
        &dir,
        "credits.json",
        r#"{"kgPerCredit": 1000, "priceMinPerCredit": 50, "priceMaxPerCredit": 150}"#,
    );

    let config = CreditConfig::from_path(&path).expect("config loads");
    assert_eq!(config, CreditConfig::default());
}

#[test]
fn credit_config_with_zero_divisor_is_rejected_at_load() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_file(
        &dir,
        "credits.json",
        r#"{"kgPerCredit": 0, "priceMinPerCredit": 50, "priceMaxPerCredit": 150}"#,
    );

    let result = CreditConfig::from_path(&path);
    assert!(matches!(result, Err(Error::InvalidCreditConfig { .. })));
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let result = RouteCatalog::from_path(&PathBuf::from("/nonexistent/routes.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
