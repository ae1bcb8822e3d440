//! The shape model: a closed set of geometric variants.
//!
//! Each variant knows its on-disk tag, its canonical field order, and how to
//! describe itself for display. The enum is deliberately exhaustive-matched
//! everywhere so adding a variant is a compile-checked change (and a breaking
//! format change, since the tag set on disk is closed).

use std::fmt;

use thiserror::Error;

/// The leading token of a record, identifying which variant follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Square,
    Rectangle,
    Circle,
    Ellipse,
}

impl ShapeTag {
    /// Every tag the format knows about, in declaration order.
    pub const ALL: [ShapeTag; 4] = [
        ShapeTag::Square,
        ShapeTag::Rectangle,
        ShapeTag::Circle,
        ShapeTag::Ellipse,
    ];

    /// The exact token written to (and expected from) the stream.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeTag::Square => "Square",
            ShapeTag::Rectangle => "Rectangle",
            ShapeTag::Circle => "Circle",
            ShapeTag::Ellipse => "Ellipse",
        }
    }

    /// How many integer fields follow this tag in a record.
    pub fn field_count(self) -> usize {
        match self {
            ShapeTag::Square => 3,
            ShapeTag::Rectangle => 4,
            ShapeTag::Circle => 3,
            ShapeTag::Ellipse => 4,
        }
    }

    /// Exact-match tag lookup. Tags are case-sensitive.
    pub fn from_token(token: &str) -> Option<ShapeTag> {
        ShapeTag::ALL.into_iter().find(|tag| tag.as_str() == token)
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `from_fields` was handed the wrong number of fields for the tag.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{tag} takes {expected} fields, got {found}")]
pub struct FieldCountError {
    pub tag: ShapeTag,
    pub expected: usize,
    pub found: usize,
}

/// One geometric shape, immutable after construction.
///
/// All fields are plain integers; zero and negative values are valid
/// everywhere (the format performs no geometric validation). Two shapes with
/// equal tag and fields are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Square { x: i64, y: i64, side: i64 },
    Rectangle { x: i64, y: i64, width: i64, height: i64 },
    Circle { x: i64, y: i64, radius: i64 },
    Ellipse { x: i64, y: i64, width: i64, height: i64 },
}

impl Shape {
    pub fn tag(&self) -> ShapeTag {
        match self {
            Shape::Square { .. } => ShapeTag::Square,
            Shape::Rectangle { .. } => ShapeTag::Rectangle,
            Shape::Circle { .. } => ShapeTag::Circle,
            Shape::Ellipse { .. } => ShapeTag::Ellipse,
        }
    }

    /// The variant's fields in canonical declared order.
    ///
    /// Both the writer and the reader go through this order, which is what
    /// keeps the on-disk layout stable.
    pub fn fields(&self) -> Vec<i64> {
        match *self {
            Shape::Square { x, y, side } => vec![x, y, side],
            Shape::Rectangle { x, y, width, height } => vec![x, y, width, height],
            Shape::Circle { x, y, radius } => vec![x, y, radius],
            Shape::Ellipse { x, y, width, height } => vec![x, y, width, height],
        }
    }

    /// Construct a variant from its tag and canonically-ordered fields.
    pub fn from_fields(tag: ShapeTag, fields: &[i64]) -> Result<Shape, FieldCountError> {
        let expected = tag.field_count();
        if fields.len() != expected {
            return Err(FieldCountError {
                tag,
                expected,
                found: fields.len(),
            });
        }
        Ok(match tag {
            ShapeTag::Square => Shape::Square {
                x: fields[0],
                y: fields[1],
                side: fields[2],
            },
            ShapeTag::Rectangle => Shape::Rectangle {
                x: fields[0],
                y: fields[1],
                width: fields[2],
                height: fields[3],
            },
            ShapeTag::Circle => Shape::Circle {
                x: fields[0],
                y: fields[1],
                radius: fields[2],
            },
            ShapeTag::Ellipse => Shape::Ellipse {
                x: fields[0],
                y: fields[1],
                width: fields[2],
                height: fields[3],
            },
        })
    }

    /// Human-readable one-line summary. Not parseable, not meant to be.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Shape::Square { x, y, side } => {
                write!(f, "Square: ({x}, {y}), side = {side}")
            }
            Shape::Rectangle { x, y, width, height } => {
                write!(f, "Rectangle: ({x}, {y}), width = {width}, height = {height}")
            }
            Shape::Circle { x, y, radius } => {
                write!(f, "Circle: center = ({x}, {y}), radius = {radius}")
            }
            Shape::Ellipse { x, y, width, height } => {
                write!(f, "Ellipse: top-left = ({x}, {y}), width = {width}, height = {height}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_tokens_round_trip() {
        for tag in ShapeTag::ALL {
            assert_eq!(ShapeTag::from_token(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn tag_lookup_is_case_sensitive() {
        assert_eq!(ShapeTag::from_token("square"), None);
        assert_eq!(ShapeTag::from_token("SQUARE"), None);
        assert_eq!(ShapeTag::from_token("Triangle"), None);
        assert_eq!(ShapeTag::from_token(""), None);
    }

    #[test]
    fn fields_follow_declared_order() {
        let rect = Shape::Rectangle {
            x: 1,
            y: 2,
            width: 20,
            height: 10,
        };
        assert_eq!(rect.fields(), vec![1, 2, 20, 10]);

        let circle = Shape::Circle { x: 5, y: 5, radius: 7 };
        assert_eq!(circle.fields(), vec![5, 5, 7]);
    }

    #[test]
    fn from_fields_rebuilds_every_variant() {
        let shapes = [
            Shape::Square { x: 0, y: 0, side: 10 },
            Shape::Rectangle { x: 1, y: 1, width: 20, height: 10 },
            Shape::Circle { x: 5, y: 5, radius: 7 },
            Shape::Ellipse { x: 2, y: 2, width: 10, height: 6 },
        ];
        for shape in shapes {
            let rebuilt = Shape::from_fields(shape.tag(), &shape.fields()).unwrap();
            assert_eq!(rebuilt, shape);
        }
    }

    #[test]
    fn from_fields_rejects_wrong_count() {
        let err = Shape::from_fields(ShapeTag::Circle, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            FieldCountError {
                tag: ShapeTag::Circle,
                expected: 3,
                found: 2
            }
        );

        let err = Shape::from_fields(ShapeTag::Square, &[1, 2, 3, 4]).unwrap_err();
        assert_eq!(err.expected, 3);
        assert_eq!(err.found, 4);
    }

    #[test]
    fn negative_and_zero_fields_are_valid() {
        let shape = Shape::from_fields(ShapeTag::Ellipse, &[-3, 0, -10, 0]).unwrap();
        assert_eq!(
            shape,
            Shape::Ellipse {
                x: -3,
                y: 0,
                width: -10,
                height: 0
            }
        );
    }

    #[test]
    fn describe_matches_display() {
        let circle = Shape::Circle { x: 5, y: 5, radius: 7 };
        assert_eq!(circle.describe(), "Circle: center = (5, 5), radius = 7");
        assert_eq!(circle.describe(), circle.to_string());

        let square = Shape::Square { x: 0, y: 0, side: 10 };
        assert_eq!(square.describe(), "Square: (0, 0), side = 10");
    }
}
