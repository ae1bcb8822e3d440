//! Line-oriented text persistence for a closed set of geometric shapes.
//!
//! A shape is one of four variants (square, rectangle, circle, ellipse) with
//! integer fields. The codec writes one tagged record per shape —
//! `Rectangle 1 1 20 10` — and reads the stream back by looking up each tag
//! and consuming exactly that variant's field count, so the sequence comes
//! back in the order it was written.
//!
//! ```
//! use shaperec::{Shape, deserialize, serialize};
//!
//! let shapes = vec![
//!     Shape::Square { x: 0, y: 0, side: 10 },
//!     Shape::Circle { x: 5, y: 5, radius: 7 },
//! ];
//! let text = serialize(&shapes);
//! assert_eq!(text, "Square 0 0 10\nCircle 5 5 7\n");
//! assert_eq!(deserialize(&text).unwrap(), shapes);
//! ```
//!
//! Malformed input (unknown tag, truncated record, non-integer field) fails
//! the whole decode with a [`DecodeError`] carrying a span into the input;
//! nothing is silently skipped, since skipping an unknown record without
//! knowing its field count would desynchronize every record after it.

use pest_derive::Parser;

/// Tokenizer for the record stream. Structure lives in [`parse`], not in
/// the grammar.
#[derive(Parser)]
#[grammar = "shapes.pest"]
pub struct RecordParser;

pub mod errors;
pub mod log;
pub mod parse;
pub mod shape;
pub mod store;
pub mod write;

pub use errors::{DecodeError, SourceContext, StoreError};
pub use parse::{deserialize, deserialize_named};
pub use shape::{FieldCountError, Shape, ShapeTag};
pub use store::{load, save};
pub use write::serialize;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    fn words(input: &str) -> Vec<String> {
        let pairs = RecordParser::parse(Rule::stream, input).expect("tokenize");
        let mut out = Vec::new();
        for pair in pairs {
            if pair.as_rule() == Rule::stream {
                for inner in pair.into_inner() {
                    if inner.as_rule() == Rule::word {
                        out.push(inner.as_str().to_string());
                    }
                }
            }
        }
        out
    }

    #[test]
    fn tokenize_single_record() {
        assert_eq!(words("Square 0 0 10\n"), ["Square", "0", "0", "10"]);
    }

    #[test]
    fn tokenize_collapses_whitespace_runs() {
        assert_eq!(words("  Circle\t\t5\n\n5   7  "), ["Circle", "5", "5", "7"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert_eq!(words(""), Vec::<String>::new());
        assert_eq!(words(" \t\r\n"), Vec::<String>::new());
    }

    #[test]
    fn tokenize_keeps_malformed_tokens_intact() {
        // Classification is the reader's job; the tokenizer passes anything
        // non-whitespace through as one word.
        assert_eq!(words("Blob -1 2.5 0x10"), ["Blob", "-1", "2.5", "0x10"]);
    }
}
