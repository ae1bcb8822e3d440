//! Error types with rich diagnostics using miette
//!
//! Decode errors carry source spans into the record text so failures point
//! at the offending token.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::shape::ShapeTag;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full record text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Errors that occur while decoding a record stream.
///
/// Every variant aborts the whole `deserialize` call; no partial record is
/// ever returned and the stream is never silently resynchronized.
#[derive(Error, Diagnostic, Debug)]
pub enum DecodeError {
    #[error("unknown shape tag: {tag}")]
    #[diagnostic(
        code(shaperec::decode::unknown_tag),
        help("known tags are Square, Rectangle, Circle and Ellipse")
    )]
    UnknownTag {
        tag: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a shape tag")]
        span: SourceSpan,
    },

    #[error("truncated {tag} record: expected {expected} fields, found {found}")]
    #[diagnostic(code(shaperec::decode::truncated_record))]
    TruncatedRecord {
        tag: ShapeTag,
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("record starts here")]
        span: SourceSpan,
    },

    #[error("invalid integer field: {token}")]
    #[diagnostic(code(shaperec::decode::non_integer_field))]
    NonIntegerField {
        token: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a decimal integer")]
        span: SourceSpan,
    },

    #[error("malformed record stream: {message}")]
    #[diagnostic(code(shaperec::decode::tokenize))]
    Tokenize { message: String },
}

/// Errors from the file layer: an I/O failure, or a decode failure in the
/// file's contents (passed through with its diagnostics intact).
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("failed to {action} {}", path.display())]
    #[diagnostic(code(shaperec::store::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),
}
