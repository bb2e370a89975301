use super::{Cell, World};

/// Glyph marking a live cell in a pattern picture; anything else is dead.
const PICTURE_ALIVE: char = 'O';

/// Represents a pattern that can be placed on a world
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u32, u32)>, // (row, col) of alive cells, relative to the top-left corner
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let height = cells.iter().map(|&(row, _)| row).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|&(_, col)| col).max().map_or(0, |c| c + 1);
        Self { name, description, width, height, cells }
    }

    /// Build a pattern from plaintext rows, `O` for alive and `.` for dead
    pub fn from_picture(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, glyph)| glyph == PICTURE_ALIVE)
                    .map(move |(col, _)| (row as u32, col as u32))
            })
            .collect();
        Self::new(name, description, cells)
    }

    /// Whether `query` names this pattern, ignoring case and treating
    /// spaces and hyphens alike
    pub fn matches(&self, query: &str) -> bool {
        let normalize = |s: &str| {
            s.chars()
                .map(|c| if c == ' ' || c == '_' { '-' } else { c.to_ascii_lowercase() })
                .collect::<String>()
        };
        normalize(self.name) == normalize(query)
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells past an edge wrap around to the opposite side.
    pub fn place_on(&self, world: &mut World, row: u32, col: u32) {
        let (width, height) = (u64::from(world.width()), u64::from(world.height()));
        for &(dr, dc) in &self.cells {
            let r = (u64::from(row) + u64::from(dr)) % height;
            let c = (u64::from(col) + u64::from(dc)) % width;
            world.set(r as u32, c as u32, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_picture("Glider", "Moves diagonally (period 4)", &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_picture("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_picture("Toad", "Oscillator (period 2)", &[
            ".OOO",
            "OOO.",
        ])
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_picture("Beacon", "Oscillator (period 2)", &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::from_picture("Pulsar", "Oscillator (period 3)", &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_picture("LWSS", "Lightweight Spaceship (period 4)", &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ])
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_picture("Gosper Glider Gun", "Produces gliders (period 30)", &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ])
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::from_picture("R-pentomino", "Methuselah - stabilizes at gen 1103", &[
            ".OO",
            "OO.",
            ".O.",
        ])
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_picture("Acorn", "Methuselah - stabilizes at gen 5206", &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_picture("Block", "Still life", &["OO", "OO"])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Look up a preset by name, e.g. `"glider"` or `"gosper-glider-gun"`
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|pattern| pattern.matches(name))
    }
}
