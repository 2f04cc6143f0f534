//! Rust code emitter - generates Rust source code strings
//!
//! This module provides utilities for building well-formatted Rust code.

use std::fmt::Write;

/// Reserved + strict keywords in Rust (2024 edition).
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/// A buffer for building Rust source code with proper indentation
#[derive(Debug)]
pub struct RustEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl RustEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "    ", // 4 spaces for Rust
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a line from format arguments, with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write an impl block
    pub fn impl_block<F>(&mut self, trait_name: Option<&str>, type_name: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let header = match trait_name {
            Some(t) => format!("impl {} for {}", t, type_name),
            None => format!("impl {}", type_name),
        };
        self.block(&header, f);
    }

    /// Write a function
    pub fn function<F>(&mut self, visibility: &str, name: &str, params: &str, return_type: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let vis_str = if visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", visibility)
        };
        let ret_str = if return_type.is_empty() {
            String::new()
        } else {
            format!(" -> {}", return_type)
        };
        self.block(&format!("{}fn {}({}){}", vis_str, name, params, ret_str), f);
    }

    /// Write a struct definition
    pub fn struct_def(&mut self, derives: &[&str], visibility: &str, name: &str, fields: &[(&str, &str)]) {
        // Derive attributes
        if !derives.is_empty() {
            self.line(&format!("#[derive({})]", derives.join(", ")));
        }

        let vis_str = if visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", visibility)
        };

        if fields.is_empty() {
            self.line(&format!("{}struct {};", vis_str, name));
        } else {
            self.line(&format!("{}struct {} {{", vis_str, name));
            self.indent();
            for (field_name, field_type) in fields {
                self.line(&format!("pub {}: {},", field_name, field_type));
            }
            self.dedent();
            self.line("}");
        }
    }

    /// Write a trait definition
    pub fn trait_def<F>(&mut self, visibility: &str, name: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let vis_str = if visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", visibility)
        };
        self.block(&format!("{}trait {}", vis_str, name), f);
    }

    /// Write a comment
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("// {}", text));
    }

    /// Write a doc comment
    pub fn doc_comment(&mut self, text: &str) {
        self.line(&format!("/// {}", text));
    }
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an identifier to a valid Rust identifier, escaping keywords as raw identifiers.
///
/// `self`, `Self`, `super` and `crate` cannot be raw identifiers and are returned unchanged.
pub fn to_rust_ident(name: &str) -> String {
    if matches!(name, "self" | "Self" | "super" | "crate") {
        return name.to_string();
    }
    if RUST_KEYWORDS.contains(&name) {
        return format!("r#{}", name);
    }
    name.to_string()
}

/// Join identifiers into a `::`-separated path, escaping each segment.
pub fn rust_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments.into_iter().map(to_rust_ident).collect::<Vec<_>>().join("::")
}
