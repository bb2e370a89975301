use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::error::{Result, WorldError};
use super::render::{self, Glyphs};
use super::{Cell, Seed};

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

/// (row, col) offsets of the eight cells surrounding a cell
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// World owns a toroidal grid of cells and advances it one generation at a time.
///
/// Cells are stored row-major: the cell at (row, col) lives at
/// `row * width + col`. Edges wrap, so every cell has exactly eight neighbors.
#[derive(Clone, Debug)]
pub struct World {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    /// Back buffer for the next generation, swapped with `cells` on each step
    scratch: Vec<Cell>,
    generation: u64,
}

impl World {
    /// Create a new world with all cells dead
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let count = cell_count(width, height)?;
        let mut cells = allocate(count, width, height)?;
        cells.resize(count, Cell::Dead);
        let scratch = allocate(count, width, height)?;
        Ok(Self::from_parts(width, height, cells, scratch))
    }

    /// Create a world and fill it from `seed`
    pub fn seeded(width: u32, height: u32, seed: &Seed) -> Result<Self> {
        let mut world = Self::new(width, height)?;
        seed.apply(&mut world)?;
        debug!(width, height, ?seed, population = world.population(), "seeded world");
        Ok(world)
    }

    /// Create a world from row-major cells
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(WorldError::CellCount { expected, found: cells.len() });
        }
        let scratch = allocate(expected, width, height)?;
        Ok(Self::from_parts(width, height, cells, scratch))
    }

    fn from_parts(width: u32, height: u32, cells: Vec<Cell>, scratch: Vec<Cell>) -> Self {
        Self { width, height, cells, scratch, generation: 0 }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get world dimensions as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of steps taken since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Convert (row, col) to a cell index, `None` when out of range
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.height && col < self.width).then(|| self.offset(row, col))
    }

    const fn offset(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position; writes outside the grid are ignored
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position; positions outside the grid are ignored
    pub fn toggle(&mut self, row: u32, col: u32) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors using toroidal wrapping.
    /// Coordinates outside the grid are wrapped onto it first.
    pub fn live_neighbors(&self, row: u32, col: u32) -> u8 {
        let (row, col) = (row % self.height, col % self.width);

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| (wrap(row, dr, self.height), wrap(col, dc, self.width)))
            .filter(|&(r, c)| self.cells[self.offset(r, c)].is_alive())
            .count() as u8
    }

    /// Advance every cell by one generation.
    ///
    /// All neighbor counts read the current generation; results go to the
    /// back buffer, which then becomes the current generation.
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        next.extend(
            (0..self.height)
                .flat_map(|row| (0..self.width).map(move |col| (row, col)))
                .map(|(row, col)| {
                    let current = self.cells[self.offset(row, col)];
                    current.evolve(self.live_neighbors(row, col))
                }),
        );

        self.scratch = std::mem::replace(&mut self.cells, next);
        self.generation += 1;
        trace!(generation = self.generation, population = self.population(), "stepped world");
    }

    /// Render the grid as text: one line per row, `◼` alive and `◻` dead,
    /// lines separated by `\n` with no trailing newline
    pub fn render(&self) -> String {
        render::render(self, Glyphs::BOXES)
    }
}

/// Move `coord` by `delta` (-1, 0 or 1) around a ring of `extent` positions
const fn wrap(coord: u32, delta: i8, extent: u32) -> u32 {
    match delta {
        -1 if coord == 0 => extent - 1,
        -1 => coord - 1,
        1 if coord + 1 >= extent => 0,
        1 => coord + 1,
        _ => coord,
    }
}

/// Validate dimensions and return the number of cells they span
fn cell_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(WorldError::InvalidDimensions { width, height });
    }
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        // A Vec never holds more than isize::MAX bytes
        .filter(|&count| count <= isize::MAX as usize / size_of::<Cell>())
        .ok_or(WorldError::TooLarge { width, height })
}

/// Reserve room for `count` cells, reporting allocation failure as an error
fn allocate(count: usize, width: u32, height: u32) -> Result<Vec<Cell>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(count)
        .map_err(|_| WorldError::TooLarge { width, height })?;
    Ok(cells)
}

/// Classic seed: cell `index` is alive when it is even or a multiple of seven
pub(crate) const fn classic_cell(index: usize) -> Cell {
    Cell::from_alive(index % 2 == 0 || index % 7 == 0)
}

impl Default for World {
    /// A 64x64 world with the classic seed
    fn default() -> Self {
        let count = DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize;
        let cells = (0..count).map(classic_cell).collect();
        Self::from_parts(DEFAULT_WIDTH, DEFAULT_HEIGHT, cells, Vec::with_capacity(count))
    }
}

/// Two worlds are equal when their grids match, regardless of generation
impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.cells == other.cells
    }
}

impl Eq for World {}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_grid(f, self, Glyphs::BOXES)
    }
}

impl FromStr for World {
    type Err = WorldError;

    /// Parse text produced by [`World::render`]
    fn from_str(text: &str) -> Result<Self> {
        render::parse(text, Glyphs::BOXES)
    }
}
