//! Load every source file of a crate by following its module declarations.
//!
//! Starting from a crate root (`lib.rs`/`main.rs`), each `mod name;` is resolved to `name.rs` or `name/mod.rs`
//! the way rustc does, and the resulting files are parsed into [`SourceTree`]s seeded with their module path.
//!
//! ## Notes
//! - Files are returned in depth-first declaration order: a file comes before the files of its submodules, and
//!   sibling submodules keep their declaration order. Identical input always yields the same order.
//! - A file loaded through `#[path]` or named `mod.rs` owns its directory; `name.rs` owns `name/`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::ParseError;
use crate::source_tree::{OutOfLineModule, SourceTree};

/// Failure while reading a crate's files.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(code(fast_enum_string::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("file not found for module `{name}` declared in `{}`", .declared_in.display())]
    #[diagnostic(code(fast_enum_string::missing_module))]
    MissingModule {
        name: String,
        declared_in: PathBuf,
        #[help]
        looked_for: String,
    },
}

/// A parsed file together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub tree: SourceTree,
}

/// Load a crate from its root file, following out-of-line modules.
///
/// ## Errors
/// Fails on the first unreadable file, unparsable file, or module declaration without a matching file.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn load_crate(root: &Path) -> Result<Vec<LoadedFile>, LoadError> {
    let mut files = Vec::new();
    load_module_file(root, &[], true, &mut files)?;
    tracing::debug!(file_count = files.len(), "loaded crate");
    Ok(files)
}

/// Parse standalone files, each at the crate root, without following module declarations.
///
/// ## Errors
/// Fails on the first unreadable or unparsable file.
#[tracing::instrument(skip_all, fields(file_count = paths.len()))]
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<LoadedFile>, LoadError> {
    paths.iter().map(|path| parse_file(path, &[])).collect()
}

fn load_module_file(
    path: &Path,
    module_path: &[String],
    owns_directory: bool,
    files: &mut Vec<LoadedFile>,
) -> Result<(), LoadError> {
    let loaded = parse_file(path, module_path)?;
    let children = loaded.tree.out_of_line_modules();
    files.push(loaded);

    let directory = module_directory(path, owns_directory);
    for child in children {
        let (child_path, child_owns) = resolve_module_file(path, &directory, &child)?;
        load_module_file(&child_path, &child.module_path, child_owns, files)?;
    }
    Ok(())
}

fn parse_file(path: &Path, module_path: &[String]) -> Result<LoadedFile, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), module = %module_path.join("::"), "parsing module file");
    let tree = SourceTree::parse_named(&path.display().to_string(), &source, module_path)?;
    Ok(LoadedFile {
        path: path.to_path_buf(),
        tree,
    })
}

/// Directory holding the files of a module's submodules.
fn module_directory(path: &Path, owns_directory: bool) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    if owns_directory {
        return parent.to_path_buf();
    }
    match path.file_stem() {
        Some(stem) => parent.join(stem),
        None => parent.to_path_buf(),
    }
}

/// Find the file for `module`, returning it with whether it owns its directory.
fn resolve_module_file(
    declared_in: &Path,
    directory: &Path,
    module: &OutOfLineModule,
) -> Result<(PathBuf, bool), LoadError> {
    let nested: PathBuf = module.inline_parents.iter().collect();

    let candidates: Vec<(PathBuf, bool)> = match &module.path_attr {
        Some(custom) => {
            let base = if module.inline_parents.is_empty() {
                declared_in.parent().unwrap_or_else(|| Path::new("")).to_path_buf()
            } else {
                directory.join(&nested)
            };
            vec![(base.join(custom), true)]
        }
        None => {
            let base = directory.join(&nested);
            vec![
                (base.join(format!("{}.rs", module.name)), false),
                (base.join(&module.name).join("mod.rs"), true),
            ]
        }
    };

    if let Some(found) = candidates.iter().find(|(candidate, _)| candidate.is_file()) {
        return Ok(found.clone());
    }

    let looked_for = candidates
        .iter()
        .map(|(candidate, _)| format!("`{}`", candidate.display()))
        .collect::<Vec<_>>()
        .join(" or ");
    Err(LoadError::MissingModule {
        name: module.name.clone(),
        declared_in: declared_in.to_path_buf(),
        looked_for: format!("looked for {looked_for}"),
    })
}
