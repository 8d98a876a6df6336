//! Board grid and enemy path generation for BULWARK.
//!
//! Rasterizes one of a fixed catalog of turn-point patterns into a cell grid
//! and a pixel-space waypoint path. Re-invocable: every generation starts
//! from an empty grid.

pub mod patterns;

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::constants::{CELL_SIZE, GRID_COLS, GRID_ROWS};
use bulwark_core::enums::Cell;

use crate::patterns::{TurnPoint, PATTERNS};

/// The board: a fixed-size grid of cells, row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an all-empty grid at the standard board dimensions.
    pub fn new() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            cell_size: CELL_SIZE,
            cells: vec![Cell::Empty; GRID_COLS * GRID_ROWS],
        }
    }

    /// Reset every cell to Empty.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Cell contents at grid coordinates, None outside the board.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[self.index(col, row)])
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            let idx = self.index(col, row);
            self.cells[idx] = cell;
        }
    }

    /// Grid coordinates of the cell containing a board pixel, None if the
    /// pixel lies outside the board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }

    /// Pixel-space center of a cell. Accepts off-board coordinates so path
    /// endpoints one cell outside the board still map to waypoints.
    pub fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_size + self.cell_size / 2.0,
            row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }

    /// Claim a cell for a tower. Succeeds only on an Empty cell; a Path or
    /// already-occupied cell is left untouched.
    pub fn place_tower(&mut self, col: usize, row: usize) -> bool {
        match self.get(col, row) {
            Some(Cell::Empty) => {
                self.set(col, row, Cell::Tower);
                true
            }
            _ => false,
        }
    }
}

/// A generated board: grid contents plus the enemy waypoint path.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    /// Pixel-space waypoints, spawn point first.
    pub waypoints: Vec<Vec2>,
}

/// Generate a layout from a pattern chosen uniformly at random.
pub fn generate(rng: &mut ChaCha8Rng) -> Layout {
    let pattern = PATTERNS[rng.gen_range(0..PATTERNS.len())];
    rasterize(pattern)
}

/// Rasterize one turn-point pattern into a fresh layout.
///
/// Marks every in-bounds cell along each axis-aligned segment as Path and
/// converts the turn points to cell-center waypoints.
pub fn rasterize(pattern: &[TurnPoint]) -> Layout {
    let mut grid = Grid::new();
    grid.reset();

    for pair in pattern.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        debug_assert!(
            start.x == end.x || start.y == end.y,
            "layout segments must be axis-aligned"
        );
        if start.x == end.x {
            for y in start.y.min(end.y)..=start.y.max(end.y) {
                if start.x >= 0 && y >= 0 {
                    grid.set(start.x as usize, y as usize, Cell::Path);
                }
            }
        } else {
            for x in start.x.min(end.x)..=start.x.max(end.x) {
                if x >= 0 && start.y >= 0 {
                    grid.set(x as usize, start.y as usize, Cell::Path);
                }
            }
        }
    }

    let waypoints = pattern
        .iter()
        .map(|point| grid.cell_center(point.x, point.y))
        .collect();

    Layout { grid, waypoints }
}
