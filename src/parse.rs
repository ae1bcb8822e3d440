//! Read path: turn record text back into an ordered shape sequence.
//!
//! The pest grammar only tokenizes (every maximal non-whitespace run is a
//! `word` with a byte span); all structure comes from type-directed
//! consumption here. Each tag determines exactly how many field tokens the
//! record owns, so the reader never has to guess at record boundaries.

use pest::Parser;

use crate::errors::{DecodeError, SourceContext};
use crate::log::debug;
use crate::shape::{Shape, ShapeTag};
use crate::{RecordParser, Rule};

/// Decode a record stream into shapes, in stream order.
///
/// End of input between records is normal termination. Any malformed record
/// fails the whole call; nothing decoded so far is returned. See
/// [`DecodeError`] for the failure classes.
pub fn deserialize(source: &str) -> Result<Vec<Shape>, DecodeError> {
    deserialize_named("<input>", source)
}

/// Like [`deserialize`], but diagnostics name the given source (a file path,
/// typically) instead of `<input>`.
pub fn deserialize_named(name: &str, source: &str) -> Result<Vec<Shape>, DecodeError> {
    let ctx = SourceContext::new(name, source);

    let pairs = RecordParser::parse(Rule::stream, source).map_err(|e| DecodeError::Tokenize {
        message: e.to_string(),
    })?;

    // (start, end, text) per token; spans feed the error labels.
    let mut words: Vec<(usize, usize, &str)> = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::stream {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::word {
                    let span = inner.as_span();
                    words.push((span.start(), span.end(), inner.as_str()));
                }
            }
        }
    }

    let mut shapes = Vec::new();
    let mut words = words.into_iter();
    while let Some((start, end, token)) = words.next() {
        let tag = ShapeTag::from_token(token).ok_or_else(|| DecodeError::UnknownTag {
            tag: token.to_string(),
            src: ctx.named_source(),
            span: (start..end).into(),
        })?;

        let mut fields = Vec::with_capacity(tag.field_count());
        for _ in 0..tag.field_count() {
            let Some((field_start, field_end, field)) = words.next() else {
                return Err(DecodeError::TruncatedRecord {
                    tag,
                    expected: tag.field_count(),
                    found: fields.len(),
                    src: ctx.named_source(),
                    span: (start..end).into(),
                });
            };
            let value: i64 = field.parse().map_err(|_| DecodeError::NonIntegerField {
                token: field.to_string(),
                src: ctx.named_source(),
                span: (field_start..field_end).into(),
            })?;
            fields.push(value);
        }

        let shape = Shape::from_fields(tag, &fields).map_err(|e| DecodeError::TruncatedRecord {
            tag,
            expected: e.expected,
            found: e.found,
            src: ctx.named_source(),
            span: (start..end).into(),
        })?;
        shapes.push(shape);
    }

    debug!(records = shapes.len(), "decoded record stream");
    Ok(shapes)
}
