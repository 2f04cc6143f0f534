//! Build-script glue: generate the unit for a crate and write it where `include!` can find it.
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     fast_enum_string::build_support::generate_into_out_dir("src/lib.rs", "enum_strings.rs").unwrap();
//! }
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/enum_strings.rs"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use fast_enum_string_syntax::{LoadError, LoadedFile, load_crate};
use miette::Diagnostic;
use thiserror::Error;

use crate::GeneratedUnit;

/// Failure while generating or writing a unit.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write `{}`", .path.display())]
    #[diagnostic(code(fast_enum_string::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OUT_DIR is not set")]
    #[diagnostic(
        code(fast_enum_string::out_dir),
        help("`generate_into_out_dir` must be called from a build script; use `generate_to_path` elsewhere")
    )]
    OutDirMissing,
}

/// A generated unit and the files it was generated from.
#[derive(Debug, Clone)]
pub struct Generation {
    pub unit: GeneratedUnit,
    pub sources: Vec<PathBuf>,
}

/// Load the crate rooted at `root` and generate its unit.
///
/// ## Errors
/// Returns [`GenerateError::Load`] if any module file is missing, unreadable or unparsable.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn generate_for_crate(root: &Path) -> Result<Generation, GenerateError> {
    let files = load_crate(root)?;
    Ok(generation_from(&files))
}

/// Generate from already-loaded files.
pub fn generation_from(files: &[LoadedFile]) -> Generation {
    let unit = crate::generate(files.iter().map(|file| &file.tree));
    Generation {
        unit,
        sources: files.iter().map(|file| file.path.clone()).collect(),
    }
}

/// Generate the unit for the crate rooted at `root` and write it to `out`.
///
/// The file is left untouched when its content would not change.
///
/// ## Errors
/// Fails if the crate cannot be loaded or `out` cannot be written.
pub fn generate_to_path(root: impl AsRef<Path>, out: impl AsRef<Path>) -> Result<Generation, GenerateError> {
    let generation = generate_for_crate(root.as_ref())?;
    write_unit(&generation.unit, out.as_ref())?;
    Ok(generation)
}

/// Build-script entry point: write the unit to `$OUT_DIR/<file_name>` and register every source file with
/// `cargo:rerun-if-changed`.
///
/// ## Errors
/// Fails if `OUT_DIR` is not set, the crate cannot be loaded, or the output cannot be written.
pub fn generate_into_out_dir(root: impl AsRef<Path>, file_name: &str) -> Result<PathBuf, GenerateError> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or(GenerateError::OutDirMissing)?;
    let out = PathBuf::from(out_dir).join(file_name);

    let generation = generate_to_path(root, &out)?;
    for source in &generation.sources {
        println!("cargo:rerun-if-changed={}", source.display());
    }
    Ok(out)
}

/// Write `unit` to `path` unless the file already holds exactly that text.
pub fn write_unit(unit: &GeneratedUnit, path: &Path) -> Result<(), GenerateError> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == unit.as_str()) {
        tracing::debug!(path = %path.display(), "generated unit unchanged");
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, unit.as_str()).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shapes_crate/src/lib.rs")
    }

    #[test]
    fn test_generate_for_crate_lists_sources() {
        let generation = generate_for_crate(&fixture_root()).unwrap();
        assert!(generation.sources.len() >= 2);
        assert_eq!(generation.sources[0], fixture_root());
        assert!(generation.unit.enum_count() > 0);
    }

    #[test]
    fn test_write_unit_round_trip() {
        let dir = std::env::temp_dir().join(format!("fast_enum_string_write_{}", std::process::id()));
        let out = dir.join("nested/enum_strings.rs");
        let generation = generate_for_crate(&fixture_root()).unwrap();

        write_unit(&generation.unit, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), generation.unit.as_str());
        // Second write with identical content is a no-op.
        write_unit(&generation.unit, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), generation.unit.as_str());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_root_is_load_error() {
        let err = generate_for_crate(Path::new("/definitely/not/here/lib.rs")).unwrap_err();
        assert!(matches!(err, GenerateError::Load(LoadError::Io { .. })));
    }
}
