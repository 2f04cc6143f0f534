//! Golden snapshot tests for generated units
//!
//! These tests generate the `ToStringFast` unit from `.rs` input files and compare
//! the output against stored snapshots. Arm order, impl order and formatting are
//! part of the contract, so they are checked as text rather than by behaviour.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;
use std::path::Path;

use fast_enum_string::build_support::generate_for_crate;
use fast_enum_string::syntax::SourceTree;

/// Generate the unit for a single source file at the crate root
fn generate_rust(source: &str) -> String {
    let tree = SourceTree::parse(source, &[]).expect("parse failed");
    fast_enum_string::generate([&tree]).into_string()
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.rs", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_test_enum_codegen() {
    let source = load_test_file("test_enum");
    let rust_code = generate_rust(&source);
    insta::assert_snapshot!("test_enum", rust_code);
}

#[test]
fn test_nested_modules_codegen() {
    let source = load_test_file("nested_modules");
    let rust_code = generate_rust(&source);
    insta::assert_snapshot!("nested_modules", rust_code);
}

#[test]
fn test_zero_members_codegen() {
    let source = load_test_file("zero_members");
    let rust_code = generate_rust(&source);
    insta::assert_snapshot!("zero_members", rust_code);
}

#[test]
fn test_no_enums_codegen() {
    let source = load_test_file("no_enums");
    let rust_code = generate_rust(&source);
    insta::assert_snapshot!("no_enums", rust_code);
}

#[test]
fn test_keywords_codegen() {
    let source = load_test_file("keywords");
    let rust_code = generate_rust(&source);
    insta::assert_snapshot!("keywords", rust_code);
}

// ============================================================================
// Whole-crate generation
// ============================================================================

#[test]
fn test_shapes_crate_codegen() {
    let generation = generate_for_crate(Path::new("tests/fixtures/shapes_crate/src/lib.rs")).expect("load failed");
    insta::assert_snapshot!("shapes_crate", generation.unit.as_str());
}
