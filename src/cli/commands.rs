//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::Write;
use std::path::Path;

use fast_enum_string_syntax::{LoadedFile, load_crate, load_files};

use crate::build_support::{generation_from, write_unit};
use crate::collect::{EnumDeclaration, collect};

use super::{CliError, CliResult, ExitCode, InputArgs};

/// Load the sources named by `input`.
fn load(input: &InputArgs) -> CliResult<Vec<LoadedFile>> {
    if input.files {
        return load_files(&input.paths).map_err(CliError::diagnostic);
    }

    let [root] = input.paths.as_slice() else {
        return Err(CliError::failure(
            "Error: expected a single crate root file (use --files to pass several standalone files)",
        ));
    };
    load_crate(root).map_err(CliError::diagnostic)
}

/// `generate`: print the generated unit, or write it to `output`.
pub fn generate(input: &InputArgs, output: Option<&Path>) -> CliResult<ExitCode> {
    let files = load(input)?;
    let generation = generation_from(&files);

    match output {
        Some(path) => {
            write_unit(&generation.unit, path).map_err(CliError::diagnostic)?;
            tracing::info!(path = %path.display(), enum_count = generation.unit.enum_count(), "wrote generated unit");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(generation.unit.as_str().as_bytes())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `list`: one line per enum, `path::Name: Member, Member`.
pub fn list(input: &InputArgs) -> CliResult<ExitCode> {
    let files = load(input)?;
    let declarations = collect(files.iter().map(|file| &file.tree));
    let mut stdout = std::io::stdout().lock();
    for declaration in &declarations {
        writeln!(stdout, "{}", describe(declaration))
            .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(declaration: &EnumDeclaration) -> String {
    if declaration.members.is_empty() {
        format!("{}: (no members)", declaration.qualified_name())
    } else {
        format!("{}: {}", declaration.qualified_name(), declaration.members.join(", "))
    }
}
