//! Rectangular wall/dirt matrix. Off-grid coordinates are always walls.

use vc_core::Position;

/// A rectangular grid of cells: each is either a wall or carries a dirt
/// level `0..=9`.
///
/// Indexing is `(row, col)` with `row` in `0..rows`, `col` in `0..cols`.
/// Coordinates outside that range are never stored and are always treated
/// as walls by [`Grid::is_wall`].
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
    dirt: Vec<u32>,
}

impl Grid {
    /// Build a grid from row-major `walls`/`dirt` vectors, each of length
    /// `rows * cols`. Panics if the lengths disagree — this is a programming
    /// error in the caller (the environment parser), not a runtime fault.
    pub fn new(rows: usize, cols: usize, walls: Vec<bool>, dirt: Vec<u32>) -> Self {
        assert_eq!(walls.len(), rows * cols, "wall grid size mismatch");
        assert_eq!(dirt.len(), rows * cols, "dirt grid size mismatch");
        Self { rows, cols, walls, dirt }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.rows
            && (position.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.row as usize * self.cols + position.col as usize)
    }

    /// `true` if `position` is off-grid or a wall cell.
    pub fn is_wall(&self, position: Position) -> bool {
        match self.index(position) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Dirt level at `position`; `0` for off-grid or wall cells.
    pub fn dirt_level(&self, position: Position) -> u32 {
        match self.index(position) {
            Some(i) if !self.walls[i] => self.dirt[i],
            _ => 0,
        }
    }

    /// Subtract one unit of dirt at `position`, floored at zero. No-op for
    /// off-grid or wall cells.
    pub fn clean(&mut self, position: Position) {
        if let Some(i) = self.index(position) {
            if self.dirt[i] > 0 {
                self.dirt[i] -= 1;
            }
        }
    }

    /// Sum of dirt across every cell.
    pub fn total_dirt(&self) -> u32 {
        self.dirt.iter().sum()
    }
}
