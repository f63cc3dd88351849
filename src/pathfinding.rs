use crate::grid::{Grid, Position};
use log::trace;
use std::collections::{HashMap, HashSet, VecDeque};

/// Check whether `to` can be reached from `from` moving only up, down,
/// left and right through non-wall cells.
///
/// Breadth-first search with a visited set, so it terminates on grids with
/// cycles in O(rows * cols). Endpoints that are walls or out of bounds are
/// never reachable.
pub fn is_reachable(grid: &Grid, from: Position, to: Position) -> bool {
    if !grid.is_walkable(from) || !grid.is_walkable(to) {
        return false;
    }

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            trace!("[is_reachable] {} -> {}: reached after {} visits", from, to, visited.len());
            return true;
        }
        for next in current.neighbors() {
            if grid.is_walkable(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    trace!("[is_reachable] {} -> {}: frontier exhausted ({} visited)", from, to, visited.len());
    false
}

/// Shortest 4-connected path from `from` to `to`, both endpoints included.
/// Returns None when the destination cannot be reached.
pub fn find_path(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    if !grid.is_walkable(from) || !grid.is_walkable(to) {
        return None;
    }

    let mut queue = VecDeque::new();
    // Maps each visited cell to the cell it was discovered from
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    queue.push_back(from);
    came_from.insert(from, from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut step = current;
            while step != from {
                step = came_from[&step];
                path.push(step);
            }
            path.reverse();
            trace!("[find_path] {} -> {}: {}", from, to, format_path(&path));
            return Some(path);
        }
        for next in current.neighbors() {
            if grid.is_walkable(next) && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
