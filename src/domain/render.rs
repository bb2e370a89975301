//! Text rendering of a world, and parsing that text back.
//!
//! Formatting is a pure function of the grid and a glyph pair; it never
//! touches the step logic.

use std::fmt::{self, Write};

use super::error::{Result, WorldError};
use super::{Cell, World};

/// The pair of characters used for alive and dead cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    alive: char,
    dead: char,
}

impl Glyphs {
    /// Filled and hollow squares, the default
    pub const BOXES: Glyphs = Glyphs { alive: '◼', dead: '◻' };

    /// Plain ASCII for terminals without box glyphs
    pub const ASCII: Glyphs = Glyphs { alive: '#', dead: '-' };

    pub fn new(alive: char, dead: char) -> Result<Self> {
        if alive == dead {
            return Err(WorldError::IndistinctGlyphs(alive));
        }
        Ok(Self { alive, dead })
    }

    pub const fn alive(self) -> char {
        self.alive
    }

    pub const fn dead(self) -> char {
        self.dead
    }

    pub const fn glyph(self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }

    fn cell(self, glyph: char) -> Option<Cell> {
        match glyph {
            g if g == self.alive => Some(Cell::Alive),
            g if g == self.dead => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::BOXES
    }
}

/// Write `world` row by row, rows separated by `\n`, no trailing newline
pub fn write_grid<W: Write>(out: &mut W, world: &World, glyphs: Glyphs) -> fmt::Result {
    for (row, line) in world.cells().chunks(world.width() as usize).enumerate() {
        if row > 0 {
            out.write_char('\n')?;
        }
        for &cell in line {
            out.write_char(glyphs.glyph(cell))?;
        }
    }
    Ok(())
}

/// Render `world` to a string with the given glyphs
pub fn render(world: &World, glyphs: Glyphs) -> String {
    let rows = world.height() as usize;
    let row_bytes = world.width() as usize * glyphs.alive.len_utf8().max(glyphs.dead.len_utf8());
    let mut text = String::with_capacity(rows * (row_bytes + 1));
    // Writing into a String cannot fail
    let _ = write_grid(&mut text, world, glyphs);
    text
}

/// Parse text in the rendered format back into a world.
/// A single trailing newline is accepted.
pub fn parse(text: &str, glyphs: Glyphs) -> Result<World> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Err(WorldError::EmptyText);
    }

    let mut cells = Vec::new();
    let mut width = None;
    let mut height = 0usize;

    for (row, line) in text.split('\n').enumerate() {
        let start = cells.len();
        for (col, glyph) in line.chars().enumerate() {
            let cell = glyphs
                .cell(glyph)
                .ok_or(WorldError::UnknownGlyph { row, col, glyph })?;
            cells.push(cell);
        }

        let found = cells.len() - start;
        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(WorldError::RaggedRow { row, expected, found });
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => World::from_cells(w, h, cells),
        _ => Err(WorldError::TooLarge {
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }),
    }
}
