//! Integration tests for output formatting
//!
//! These tests verify that JSON output is valid machine-readable JSON and
//! that snapshot-file browsing applies filters and sorting end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

fn nearbuy_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("nearbuy");
    path
}

fn snapshot_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "1", "name": "Basmati Rice", "vendor": "Sunrise Stores",
              "category": "groceries", "price": 120, "lat": 12.97, "lon": 77.59}},
            {{"id": "2", "name": "Raw Honey", "vendor": "Sunrise Stores",
              "category": "groceries", "price": 250}},
            {{"id": "3", "name": "Brown Bread", "vendor": "Daily Bakes",
              "category": "bakery", "price": 45}}
        ]"#
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_categories_json_output_is_valid() {
    let output = Command::new(nearbuy_bin())
        .args(["categories", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    let rows = parsed.get("data").and_then(|d| d.as_array()).expect("Should have data array");
    assert!(!rows.is_empty(), "Category table should not be empty");
    assert!(rows[0].get("name").is_some(), "Rows should have a name field");
}

#[test]
fn test_browse_snapshot_json_applies_sort() {
    let file = snapshot_file();

    let output = Command::new(nearbuy_bin())
        .args([
            "browse",
            "groceries",
            "--file",
            file.path().to_str().unwrap(),
            "--sort",
            "price-asc",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Command should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    let products = parsed["products"].as_array().expect("Should have products array");
    assert_eq!(products.len(), 2, "Only groceries survive the category scope");
    assert_eq!(products[0]["name"], "Basmati Rice");
    assert_eq!(products[1]["name"], "Raw Honey");

    // No origin was given, so every product carries the fallback distance
    for product in products {
        assert_eq!(product["distance_km"], 5.0);
        assert_eq!(product["distance_label"], "Within 5km");
    }
}

#[test]
fn test_browse_vendor_listing_with_search() {
    let file = snapshot_file();

    let output = Command::new(nearbuy_bin())
        .args([
            "browse",
            "--vendor",
            "Sunrise Stores",
            "--search",
            "honey",
            "--file",
            file.path().to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let products = parsed["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Raw Honey");
}

#[test]
fn test_unknown_category_fails_with_known_names() {
    let output = Command::new(nearbuy_bin())
        .args(["browse", "spaceships", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Unknown category should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category"), "stderr was: {}", stderr);
}
