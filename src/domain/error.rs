//! Errors raised while building or parsing a world.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorldError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions {width}x{height} overflow the cell index")]
    TooLarge { width: u32, height: u32 },

    #[error("expected {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },

    #[error("density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("alive and dead glyphs must differ, both are {0:?}")]
    IndistinctGlyphs(char),

    #[error("cannot parse a world from empty text")]
    EmptyText,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}
