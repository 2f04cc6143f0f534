//! Parse diagnostics with source context.
//!
//! `syn` reports a span with a line and column; [`ParseError`] turns that into a byte range so `miette` can render
//! the offending line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A source file that `syn` could not parse.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse `{name}`: {message}")]
#[diagnostic(code(fast_enum_string::parse), help("only syntactically valid Rust files can be scanned for enums"))]
pub struct ParseError {
    /// File name (or `<source>` for in-memory text).
    pub name: String,
    /// The parser's message.
    pub message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

impl ParseError {
    pub fn from_syn(name: &str, source: &str, err: &syn::Error) -> Self {
        let span = err.span();
        let start = byte_offset(source, span.start().line, span.start().column);
        let end = byte_offset(source, span.end().line, span.end().column).max(start);

        Self {
            name: name.to_string(),
            message: err.to_string(),
            source_code: NamedSource::new(name, source.to_string()),
            span: (start, end - start).into(),
        }
    }

    /// Byte offset of the reported location.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

/// Convert a 1-based line and 0-based character column into a byte offset, clamped to the source length.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = text.char_indices().nth(column).map_or(text.len(), |(i, _)| i);
            return offset + within;
        }
        offset += text.len();
    }
    source.len()
}
