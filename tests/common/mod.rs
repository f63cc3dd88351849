#![allow(dead_code)]

use keymaze::pathfinding::is_reachable;
use keymaze::{CellTag, Grid, Position};

/// Parse an ASCII maze.
/// Format:
/// - #: wall
/// - .: floor
/// - S: start
/// - K: key
/// - G: goal
/// Blank lines are skipped; surrounding whitespace is trimmed.
pub fn parse_ascii(text: &str) -> Result<Grid, String> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    '#' => Ok(CellTag::Wall.code()),
                    '.' => Ok(CellTag::Floor.code()),
                    'S' => Ok(CellTag::Start.code()),
                    'K' => Ok(CellTag::Key.code()),
                    'G' => Ok(CellTag::Goal.code()),
                    other => Err(format!("Invalid grid character '{}'", other)),
                })
                .collect::<Result<Vec<i32>, String>>()
        })
        .collect::<Result<Vec<_>, String>>()?;
    Grid::from_rows(&rows)
}

/// Every cell of the outer ring is a wall
pub fn has_wall_ring(grid: &Grid) -> bool {
    grid.positions()
        .filter(|p| p.r == 0 || p.c == 0 || p.r == grid.rows() - 1 || p.c == grid.cols() - 1)
        .all(|p| grid.tag(p.r, p.c) == CellTag::Wall)
}

/// Exactly one start, key and goal, with start -> key -> goal reachable.
/// Panics with a rendering of the grid on failure.
pub fn assert_solvable(grid: &Grid) {
    assert_eq!(grid.count(CellTag::Start), 1, "expected one start:\n{}", grid);
    assert_eq!(grid.count(CellTag::Key), 1, "expected one key:\n{}", grid);
    assert_eq!(grid.count(CellTag::Goal), 1, "expected one goal:\n{}", grid);

    let start = grid.find(CellTag::Start).unwrap();
    let key = grid.find(CellTag::Key).unwrap();
    let goal = grid.find(CellTag::Goal).unwrap();
    assert!(is_reachable(grid, start, key), "key unreachable:\n{}", grid);
    assert!(is_reachable(grid, key, goal), "goal unreachable:\n{}", grid);
}

pub fn pos(r: i32, c: i32) -> Position {
    Position::new(r, c)
}
