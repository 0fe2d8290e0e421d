//! Integration tests for the inventory tracker CLI.
//!
//! These tests run the actual binary with a scripted stdin and check the
//! console transcript.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Run the binary with the given stdin script and optional catalog file.
fn run_tracker(script: &str, catalog: Option<&NamedTempFile>) -> String {
    let mut cmd = Command::cargo_bin("inventory-tracker").unwrap();
    if let Some(file) = catalog {
        cmd.arg(file.path());
    }
    let assert = cmd.write_stdin(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_exit_from_menu() {
    let mut cmd = Command::cargo_bin("inventory-tracker").unwrap();
    cmd.write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== MAIN MENU ==="))
        .stdout(predicate::str::contains(
            "Thank you for using the Inventory System!",
        ));
}

#[test]
fn test_sample_inventory_listing() {
    let output = run_tracker("2\n6\n", None);

    assert!(output.contains("1. Java Programming (Book) - $29.99 [Stock: 10]"));
    assert!(output.contains("2. Data Structures (Book) - $34.99 [Stock: 8]"));
    assert!(output.contains("4. Laptop (Electronics) - $599.99 [Stock: 5]"));
    assert!(output.contains("6. Keyboard (Electronics) - $49.99 [Stock: 12]"));
}

#[test]
fn test_bulk_sale_then_statistics() {
    let output = run_tracker("3\nmouse\n5\n2\n5\n6\n", None);

    assert!(output.contains("=== SALE COMPLETE ==="));
    assert!(output.contains("Product: Mouse"));
    assert!(output.contains("Bulk discount (15% off 5+ items): $14.99"));
    assert!(output.contains("Final Price: $84.96"));
    assert!(output.contains("Remaining Stock: 15"));
    assert!(output.contains("Total Inventory Value: $4854.35"));
}

#[test]
fn test_oversell_is_rejected() {
    let output = run_tracker("3\nLaptop\n50\n3\n2\n6\n", None);

    assert!(output.contains("Not enough stock for Laptop. Requested: 50, Available: 5"));
    assert!(output.contains("Laptop (Electronics) - $599.99 [Stock: 5]"));
    assert!(!output.contains("=== SALE COMPLETE ==="));
}

#[test]
fn test_add_product_then_restock() {
    let script = "1\n2\nUSB Cable\n3.00\n2\n4\nusb cable\n10\n2\n6\n";
    let output = run_tracker(script, None);

    assert!(output.contains("Product added successfully!"));
    assert!(output.contains("Added 10 items to usb cable. New stock: 12"));
    assert!(output.contains("7. USB Cable (Electronics) - $10.00 [Stock: 12]"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let mut cmd = Command::cargo_bin("inventory-tracker").unwrap();
    cmd.write_stdin("2\n").assert().success();
}

#[test]
fn test_catalog_file_replaces_samples() {
    let catalog = catalog_file(
        "category,name,price,quantity\n\
         Book,Rust Book,39.99,4\n\
         Electronics,Monitor,199.00,2\n",
    );
    let output = run_tracker("2\n5\n6\n", Some(&catalog));

    assert!(output.contains("1. Rust Book (Book) - $39.99 [Stock: 4]"));
    assert!(output.contains("2. Monitor (Electronics) - $199.00 [Stock: 2]"));
    assert!(!output.contains("Java Programming"));
    assert!(output.contains("Total Products: 2"));
    assert!(output.contains("Total Inventory Value: $557.96"));
    assert!(output.contains("Low Stock Items: 2"));
}

#[test]
fn test_catalog_skips_invalid_rows() {
    let catalog = catalog_file(
        "category,name,price,quantity\n\
         Food,Apple,1.00,3\n\
         Book,Cheap Read,1.00,30\n",
    );
    let output = run_tracker("2\n6\n", Some(&catalog));

    assert!(output.contains("1. Cheap Read (Book) - $5.00 [Stock: 30]"));
    assert!(!output.contains("Apple"));
}

#[test]
fn test_missing_catalog_error() {
    let mut cmd = Command::cargo_bin("inventory-tracker").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_huge_price_keeps_session_alive() {
    let script = "1\n2\nBig\n79228162514264337593543950335\n2\n5\n3\nBig\n2\n3\n6\n";
    let output = run_tracker(script, None);

    assert!(output.contains("Product added successfully!"));
    assert!(output.contains("Cannot compute statistics: Amount too large"));
    assert!(output.contains("Amount too large while computing order total for Big"));
    assert!(output.contains("Thank you for using the Inventory System!"));
}

#[test]
fn test_catalog_huge_price_row_loads_without_panic() {
    let catalog = catalog_file(
        "category,name,price,quantity\n\
         Electronics,Vault,79228162514264337593543950335,3\n",
    );
    let output = run_tracker("2\n5\n6\n", Some(&catalog));

    assert!(output.contains(
        "1. Vault (Electronics) - $79228162514264337593543950335.00 [Stock: 3]"
    ));
    assert!(output.contains("Cannot compute statistics"));
}
