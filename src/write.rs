//! Write path: one record line per shape.
//!
//! The layout is fixed: tag, then the fields in canonical order, single
//! spaces between tokens, `\n` after every record. Readers only need token
//! boundaries, but keeping one record per line keeps the files greppable.

use crate::log::debug;
use crate::shape::Shape;

/// Encode shapes in sequence order. An empty slice yields an empty string.
pub fn serialize(shapes: &[Shape]) -> String {
    let mut out = String::new();
    for shape in shapes {
        out.push_str(shape.tag().as_str());
        for field in shape.fields() {
            out.push(' ');
            out.push_str(&field.to_string());
        }
        out.push('\n');
    }
    debug!(records = shapes.len(), bytes = out.len(), "encoded record stream");
    out
}
