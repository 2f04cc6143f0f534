//! Syntax frontend for `fast_enum_string`: parsed source trees and crate loading.
//!
//! Parsing is delegated to `syn`. This crate lowers each parsed file into a [`SourceTree`] that exposes the narrow
//! [`SyntaxTree`] interface enum discovery needs, and walks a crate's module declarations to find every file.
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution or type checking. A `mod` item is a module, an `enum` item is an
//!   enum, and paths are whatever the module nesting says they are.
//!
//! ## Examples
//! ```rust
//! use fast_enum_string_syntax::{NodeKind, SourceTree, SyntaxTree};
//!
//! let tree = SourceTree::parse("mod a { enum E { X, Y } }", &[]).unwrap();
//! let enums = tree.descendants().filter(|n| tree.kind(*n) == NodeKind::Enum).count();
//! assert_eq!(enums, 1);
//! ```

pub mod diagnostics;
pub mod loader;
pub mod source_tree;
pub mod tree;

pub use diagnostics::ParseError;
pub use loader::{LoadError, LoadedFile, load_crate, load_files};
pub use source_tree::{NodeId, OutOfLineModule, SourceTree};
pub use tree::{NodeKind, SyntaxTree};
