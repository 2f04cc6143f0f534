//! Emit the generated unit: one `ToStringFast` implementation per discovered enum.
//!
//! The unit is a single `pub mod generated { ... }` meant to be `include!`d at the crate root. It holds the
//! [`ERROR_TYPE`] panic payload, the [`TRAIT_NAME`] trait, and one impl per [`EnumDeclaration`] in input order.
//!
//! ## Notes
//! - Each lookup is a `match` with one arm per member, in declaration order, returning the member's identifier
//!   text, followed by a catch-all arm that panics with [`ERROR_TYPE`]. Nothing is reordered or merged.
//! - Arms use `Path::Member { .. }`, which matches unit, tuple and struct variants alike.
//! - Emission is deterministic: identical declarations give byte-identical text.
//!
//! ## See also
//! - [`rust_emitter`]: the indentation-aware string builder used here.

pub mod rust_emitter;

use std::fmt;

use crate::collect::EnumDeclaration;
use rust_emitter::{RustEmitter, rust_path, to_rust_ident};

/// Module wrapping everything in the generated unit.
pub const WRAPPER_MODULE: &str = "generated";
/// The generated extension trait.
pub const TRAIT_NAME: &str = "ToStringFast";
/// The lookup method on [`TRAIT_NAME`].
pub const METHOD_NAME: &str = "to_string_fast";
/// Panic payload raised by the catch-all arm.
pub const ERROR_TYPE: &str = "UnsupportedEnumValue";
/// Default file name for the generated unit.
pub const OUTPUT_FILE_NAME: &str = "enum_strings.rs";

const HEADER: &str = "@generated by fast-enum-string. Do not edit.";

/// The generated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    text: String,
    enum_count: usize,
}

impl GeneratedUnit {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of lookup implementations in the unit.
    pub fn enum_count(&self) -> usize {
        self.enum_count
    }
}

impl fmt::Display for GeneratedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for GeneratedUnit {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Emit the generated unit for `declarations`, in order.
#[tracing::instrument(skip_all, fields(decl_count = declarations.len()))]
pub fn emit(declarations: &[EnumDeclaration]) -> GeneratedUnit {
    let mut emitter = RustEmitter::new();
    emitter.comment(HEADER);
    emitter.blank_line();
    emitter.block(&format!("pub mod {}", WRAPPER_MODULE), |e| {
        emit_preamble(e);
        for declaration in declarations {
            e.blank_line();
            emit_lookup(e, declaration);
        }
    });

    GeneratedUnit {
        text: emitter.finish(),
        enum_count: declarations.len(),
    }
}

/// Path of the enum type as seen from anywhere in the crate: `crate::a::b::Name`.
pub fn type_path(declaration: &EnumDeclaration) -> String {
    rust_path(std::iter::once("crate").chain(declaration.segments()))
}

fn emit_preamble(e: &mut RustEmitter) {
    e.doc_comment("Raised when a value matches none of the members declared by its enum.");
    e.struct_def(
        &["Debug", "Clone", "Copy", "PartialEq", "Eq"],
        "pub",
        ERROR_TYPE,
        &[("type_name", "&'static str")],
    );
    e.blank_line();
    e.impl_block(Some("::core::fmt::Display"), ERROR_TYPE, |e| {
        e.function(
            "",
            "fmt",
            "&self, f: &mut ::core::fmt::Formatter<'_>",
            "::core::fmt::Result",
            |e| e.line(r#"write!(f, "Unknown enum member of `{}`", self.type_name)"#),
        );
    });
    e.blank_line();
    e.line(&format!("impl ::std::error::Error for {} {{}}", ERROR_TYPE));
    e.blank_line();
    e.doc_comment("Member name lookup resolved at build time.");
    e.trait_def("pub", TRAIT_NAME, |e| {
        e.line(&format!("fn {}(&self) -> &'static str;", METHOD_NAME));
    });
}

fn emit_lookup(e: &mut RustEmitter, declaration: &EnumDeclaration) {
    let type_path = type_path(declaration);
    let qualified_name = declaration.qualified_name();

    e.impl_block(Some(TRAIT_NAME), &type_path, |e| {
        // The catch-all arm is unreachable whenever the members are exhaustive.
        e.line("#[allow(unreachable_patterns)]");
        e.function("", METHOD_NAME, "&self", "&'static str", |e| {
            e.block("match self", |e| {
                for member in &declaration.members {
                    e.linef(format_args!(
                        "{}::{} {{ .. }} => {:?},",
                        type_path,
                        to_rust_ident(member),
                        member
                    ));
                }
                e.linef(format_args!(
                    "_ => ::std::panic::panic_any({} {{ type_name: {:?} }}),",
                    ERROR_TYPE, qualified_name
                ));
            });
        });
    });
}
