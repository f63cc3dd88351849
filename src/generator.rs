use crate::grid::{Grid, Position};
use crate::pathfinding::is_reachable;
use crate::tile::CellTag;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Smallest side length the generator will produce
pub const MIN_SIDE: i32 = 5;

/// Fixed spawn cell of every generated level
pub const START: Position = Position { r: 1, c: 1 };

/// Hand-authored layout returned when every attempt is rejected.
/// Solvable: start (1,1) -> key (3,4) -> goal (5,8).
const FALLBACK: [[i32; 10]; 7] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 4, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 3, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// The fallback layout as a grid
pub fn fallback_grid() -> Grid {
    let rows: Vec<Vec<i32>> = FALLBACK.iter().map(|row| row.to_vec()).collect();
    match Grid::from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => unreachable!("fallback layout is well-formed: {}", e),
    }
}

/// Parameters for maze generation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub rows: i32,
    pub cols: i32,
    /// Probability that an interior cell becomes a wall
    pub wall_density: f64,
    pub max_attempts: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 10,
            wall_density: 0.28,
            max_attempts: 200,
        }
    }
}

impl GeneratorSettings {
    /// Denser preset used for the generated bonus level
    pub fn hard() -> Self {
        Self {
            rows: 7,
            cols: 10,
            wall_density: 0.42,
            max_attempts: 400,
        }
    }

    /// Raise dimensions to the minimum and clamp density into [0, 1]
    fn normalized(&self) -> Self {
        let wall_density = if self.wall_density.is_nan() {
            0.0
        } else {
            self.wall_density.clamp(0.0, 1.0)
        };
        Self {
            rows: self.rows.max(MIN_SIDE),
            cols: self.cols.max(MIN_SIDE),
            wall_density,
            max_attempts: self.max_attempts,
        }
    }
}

/// Why a single generation attempt was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than three interior floor cells
    TooFewFloorCells,
    /// Every floor cell was excluded when picking key or goal
    NoCandidate,
    KeyUnreachable,
    GoalUnreachable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::TooFewFloorCells => "too few floor cells",
            Rejection::NoCandidate => "no free cell left for placement",
            Rejection::KeyUnreachable => "key unreachable from start",
            Rejection::GoalUnreachable => "goal unreachable from key",
        };
        f.write_str(reason)
    }
}

/// Random maze generator producing levels solvable as start -> key -> goal
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    settings: GeneratorSettings,
}

impl MazeGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        MazeGenerator {
            settings: settings.normalized(),
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate a solvable grid, falling back to the fixed layout after
    /// `max_attempts` rejections. Never fails.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        for attempt in 1..=self.settings.max_attempts {
            match self.try_attempt(rng) {
                Ok(grid) => {
                    info!(
                        "Generated {}x{} maze on attempt {}",
                        self.settings.rows, self.settings.cols, attempt
                    );
                    return grid;
                }
                Err(reason) => debug!("Attempt {} rejected: {}", attempt, reason),
            }
        }

        warn!(
            "No solvable {}x{} maze after {} attempts (density {}), using fallback layout",
            self.settings.rows, self.settings.cols, self.settings.max_attempts, self.settings.wall_density
        );
        fallback_grid()
    }

    /// Deterministic generation from a seed
    pub fn generate_seeded(&self, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Generation from the thread-local RNG
    pub fn generate_random(&self) -> Grid {
        self.generate(&mut rand::thread_rng())
    }

    /// Run a single generation attempt
    pub fn try_attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, Rejection> {
        let rows = self.settings.rows;
        let cols = self.settings.cols;
        let mut grid = Grid::new(rows, cols);

        // Closed boundary ring
        for r in 0..rows {
            grid.set(r, 0, CellTag::Wall);
            grid.set(r, cols - 1, CellTag::Wall);
        }
        for c in 0..cols {
            grid.set(0, c, CellTag::Wall);
            grid.set(rows - 1, c, CellTag::Wall);
        }

        for r in 1..rows - 1 {
            for c in 1..cols - 1 {
                if Position::new(r, c) == START {
                    continue;
                }
                if rng.gen_bool(self.settings.wall_density) {
                    grid.set(r, c, CellTag::Wall);
                }
            }
        }

        let floor_cells: Vec<Position> = (1..rows - 1)
            .flat_map(|r| (1..cols - 1).map(move |c| Position::new(r, c)))
            .filter(|pos| grid.tag(pos.r, pos.c) == CellTag::Floor)
            .collect();
        if floor_cells.len() < 3 {
            return Err(Rejection::TooFewFloorCells);
        }

        let key = choose_excluding(&floor_cells, &[START], rng).ok_or(Rejection::NoCandidate)?;
        let goal =
            choose_excluding(&floor_cells, &[START, key], rng).ok_or(Rejection::NoCandidate)?;

        if !is_reachable(&grid, START, key) {
            return Err(Rejection::KeyUnreachable);
        }
        if !is_reachable(&grid, key, goal) {
            return Err(Rejection::GoalUnreachable);
        }

        grid.set(START.r, START.c, CellTag::Start);
        grid.set(key.r, key.c, CellTag::Key);
        grid.set(goal.r, goal.c, CellTag::Goal);
        Ok(grid)
    }
}

/// Uniformly pick a cell from `cells` that is not in `exclude`.
/// None when nothing is left after filtering.
fn choose_excluding<R: Rng + ?Sized>(
    cells: &[Position],
    exclude: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let candidates: Vec<Position> = cells
        .iter()
        .copied()
        .filter(|pos| !exclude.contains(pos))
        .collect();
    candidates.choose(rng).copied()
}
