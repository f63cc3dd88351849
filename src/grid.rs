use crate::tile::CellTag;
use std::fmt;

/// A (row, column) position on the grid, row increasing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: i32,
    pub c: i32,
}

impl Position {
    pub fn new(r: i32, c: i32) -> Self {
        Position { r, c }
    }

    /// Offset by a (row, column) delta
    pub fn offset(&self, dr: i32, dc: i32) -> Position {
        Position::new(self.r + dr, self.c + dc)
    }

    /// The four orthogonal neighbours: down, up, right, left.
    /// No bounds checking; callers filter with `Grid::in_bounds`.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

/// Rectangular grid of cell tags, stored row-major.
/// Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<CellTag>,
}

impl Grid {
    /// Create a new grid with every cell set to floor
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Grid {
            rows,
            cols,
            cells: vec![CellTag::Floor; (rows * cols) as usize],
        }
    }

    /// Build a grid from integer-coded rows (level file format).
    ///
    /// Empty input, ragged rows and unknown tile codes are rejected.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, String> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err("Grid must have at least one non-empty row".to_string()),
        };

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(format!(
                    "Row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                ));
            }
            for (c, &code) in row.iter().enumerate() {
                let tag = CellTag::from_code(code)
                    .ok_or_else(|| format!("Unknown tile code {} at ({},{})", code, r, c))?;
                cells.push(tag);
            }
        }

        Ok(Grid {
            rows: rows.len() as i32,
            cols: cols as i32,
            cells,
        })
    }

    /// Integer-coded rows, the inverse of `from_rows`
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().map(|tag| tag.code()).collect())
            .collect()
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && r < self.rows && c < self.cols
    }

    /// Convert (r, c) to an index into the row-major cell vector
    fn index(&self, r: i32, c: i32) -> usize {
        (c + r * self.cols) as usize
    }

    /// Tag at (r, c), or None when out of bounds
    pub fn get(&self, r: i32, c: i32) -> Option<CellTag> {
        if self.in_bounds(r, c) {
            Some(self.cells[self.index(r, c)])
        } else {
            None
        }
    }

    /// Tag at (r, c). Panics when out of bounds.
    pub fn tag(&self, r: i32, c: i32) -> CellTag {
        match self.get(r, c) {
            Some(tag) => tag,
            None => panic!(
                "cell ({},{}) is outside a {}x{} grid",
                r, c, self.rows, self.cols
            ),
        }
    }

    /// Set the tag at (r, c); out-of-bounds writes are ignored
    pub fn set(&mut self, r: i32, c: i32, tag: CellTag) {
        if self.in_bounds(r, c) {
            let id = self.index(r, c);
            self.cells[id] = tag;
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos.r, pos.c).map_or(false, CellTag::is_walkable)
    }

    /// First cell carrying `tag` in row-major order
    pub fn find(&self, tag: CellTag) -> Option<Position> {
        self.cells
            .iter()
            .position(|&t| t == tag)
            .map(|id| Position::new(id as i32 / self.cols, id as i32 % self.cols))
    }

    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&t| t == tag).count()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Position::new(r, c)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: String = (0..self.cols).map(|c| self.tag(r, c).glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
