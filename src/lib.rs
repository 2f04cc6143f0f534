#![forbid(unsafe_code)]
//! Build-time enum name lookups.
//!
//! `fast_enum_string` scans a crate's source for every `enum` declaration and generates, for each one, an
//! implementation of a `ToStringFast` trait whose `to_string_fast()` returns the member name as a `&'static str`
//! through a plain `match`, with no `Debug` formatting or reflection at run time.
//!
//! The pipeline is two pure steps over already-parsed trees:
//! 1. [`collect`] finds enum declarations, their module paths and members.
//! 2. [`emit`] writes one generated unit containing all lookups.
//!
//! [`build_support`] wraps both for use from a `build.rs`, and [`cli`] exposes them as a command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Generated code**: the catch-all arm of each lookup panics with `UnsupportedEnumValue`. That panic lives in
//!   the emitted text, never in the generator.
//!
//! ## Examples
//! ```rust
//! use fast_enum_string::syntax::SourceTree;
//!
//! let tree = SourceTree::parse("mod a { pub enum E { X, Y } }", &[]).unwrap();
//! let unit = fast_enum_string::generate([&tree]);
//! assert!(unit.as_str().contains(r#"crate::a::E::Y { .. } => "Y","#));
//! ```

pub mod build_support;
pub mod cli;
pub mod collect;
pub mod emit;

pub use fast_enum_string_syntax as syntax;

pub use collect::{EnumDeclaration, collect};
pub use emit::{GeneratedUnit, emit};

use fast_enum_string_syntax::SyntaxTree;

/// Run the whole pipeline: collect every enum in `trees`, then emit the generated unit.
pub fn generate<'a, T>(trees: impl IntoIterator<Item = &'a T>) -> GeneratedUnit
where
    T: SyntaxTree + 'a,
{
    let declarations = collect(trees);
    let unit = emit(&declarations);
    tracing::info!(enum_count = unit.enum_count(), "generated enum lookups");
    unit
}
