use crate::grid::{Grid, Position};
use crate::tile::CellTag;
use std::fmt;

/// Spawn used when a level has no start tile
pub const FALLBACK_SPAWN: Position = Position { r: 1, c: 1 };

/// One playable maze: tile queries plus key-collection state.
///
/// The start tile is consumed at construction. Its position is remembered
/// and the cell becomes floor, so `classify` never reports `Start`.
#[derive(Debug, Clone)]
pub struct Level {
    grid: Grid,
    start: Option<Position>,
}

impl Level {
    /// Wrap a grid, extracting and normalizing the first start tile
    pub fn new(mut grid: Grid) -> Self {
        let start = grid.find(CellTag::Start);
        if let Some(pos) = start {
            grid.set(pos.r, pos.c, CellTag::Floor);
        }
        Level { grid, start }
    }

    /// Build from integer-coded rows (level file format)
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, String> {
        Grid::from_rows(rows).map(Level::new)
    }

    /// (rows, cols)
    pub fn bounds(&self) -> (i32, i32) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        self.grid.in_bounds(r, c)
    }

    /// Tag at (r, c).
    ///
    /// Caller must check `in_bounds` first; out-of-bounds access panics.
    /// Use `tile_at` for a checked lookup.
    pub fn classify(&self, r: i32, c: i32) -> CellTag {
        self.grid.tag(r, c)
    }

    pub fn tile_at(&self, r: i32, c: i32) -> Option<CellTag> {
        self.grid.get(r, c)
    }

    pub fn is_wall(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(CellTag::Wall)
    }

    pub fn is_goal(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(CellTag::Goal)
    }

    pub fn is_key(&self, r: i32, c: i32) -> bool {
        self.tile_at(r, c) == Some(CellTag::Key)
    }

    /// Remove the key at (r, c), turning it into floor.
    /// Returns true only if a key was actually there.
    pub fn collect_key(&mut self, r: i32, c: i32) -> bool {
        if self.is_key(r, c) {
            self.grid.set(r, c, CellTag::Floor);
            true
        } else {
            false
        }
    }

    /// Start tile found at construction, if any
    pub fn start_position(&self) -> Option<Position> {
        self.start
    }

    /// Start position, or (1,1) for levels authored without one
    pub fn spawn_position(&self) -> Position {
        self.start.unwrap_or(FALLBACK_SPAWN)
    }

    pub fn goal_position(&self) -> Option<Position> {
        self.grid.find(CellTag::Goal)
    }

    pub fn key_position(&self) -> Option<Position> {
        self.grid.find(CellTag::Key)
    }

    pub fn has_key_remaining(&self) -> bool {
        self.key_position().is_some()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
