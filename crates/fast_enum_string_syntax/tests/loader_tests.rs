//! Crate loading against on-disk fixture crates.

use std::path::{Path, PathBuf};

use fast_enum_string_syntax::{LoadError, NodeKind, SyntaxTree, load_crate, load_files};

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative)
}

/// (module path, enum name) for every enum, in load order.
fn enum_locations(files: &[fast_enum_string_syntax::LoadedFile]) -> Vec<(String, String)> {
    let mut found = Vec::new();
    for file in files {
        let tree = &file.tree;
        for node in tree.descendants() {
            if tree.kind(node) != NodeKind::Enum {
                continue;
            }
            let mut modules: Vec<&str> = tree
                .ancestors(node)
                .filter(|a| tree.kind(*a) == NodeKind::Module)
                .filter_map(|a| tree.identifier(a))
                .collect();
            modules.reverse();
            found.push((modules.join("::"), tree.identifier(node).unwrap_or_default().to_string()));
        }
    }
    found
}

#[test]
fn test_load_crate_follows_module_declarations() {
    let files = load_crate(&fixture("nested_crate/src/lib.rs")).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["lib.rs", "shapes.rs", "round.rs", "mod.rs", "helpers.rs", "deeper.rs", "renamed.rs"]
    );
}

#[test]
fn test_load_crate_assigns_module_paths() {
    let files = load_crate(&fixture("nested_crate/src/lib.rs")).unwrap();
    let locations = enum_locations(&files);
    let expected = [
        ("", "Root"),
        ("shapes", "Polygon"),
        ("shapes::round", "Curve"),
        ("util", "Level"),
        ("util::helpers", "Mode"),
        ("inline::deeper", "Depth"),
        ("custom", "Custom"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(m, e)| (m.to_string(), e.to_string()))
        .collect();
    assert_eq!(locations, expected);
}

#[test]
fn test_load_crate_is_deterministic() {
    let first = load_crate(&fixture("nested_crate/src/lib.rs")).unwrap();
    let second = load_crate(&fixture("nested_crate/src/lib.rs")).unwrap();
    assert_eq!(enum_locations(&first), enum_locations(&second));
}

#[test]
fn test_missing_module_file_is_an_error() {
    let err = load_crate(&fixture("broken_crate/src/lib.rs")).unwrap_err();
    assert!(matches!(err, LoadError::MissingModule { ref name, .. } if name == "missing"));
}

#[test]
fn test_unreadable_root_is_an_io_error() {
    let err = load_crate(&fixture("does_not_exist/lib.rs")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_load_files_does_not_follow_modules() {
    let files = load_files(&[fixture("broken_crate/src/lib.rs")]).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(enum_locations(&files), [(String::new(), "Fine".to_string())]);
}
