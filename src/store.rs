//! File layer: persist a shape sequence to a path and load it back.
//!
//! Whole-file reads and writes through `std::fs`, so the handle is flushed
//! and closed on every exit path. No locking; the format is single-writer
//! by design.

use std::fs;
use std::path::Path;

use crate::errors::StoreError;
use crate::parse::deserialize_named;
use crate::shape::Shape;
use crate::write::serialize;

/// Write the sequence to `path`, replacing any existing contents.
pub fn save(path: impl AsRef<Path>, shapes: &[Shape]) -> Result<(), StoreError> {
    let path = path.as_ref();
    fs::write(path, serialize(shapes)).map_err(|source| StoreError::Io {
        action: "write",
        path: path.to_owned(),
        source,
    })
}

/// Read the sequence back from `path`. Decode diagnostics name the path.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Shape>, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        action: "read",
        path: path.to_owned(),
        source,
    })?;
    Ok(deserialize_named(&path.display().to_string(), &text)?)
}
