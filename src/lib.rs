pub mod config;
pub mod generator;
pub mod grid;
pub mod level;
pub mod level_file;
pub mod pathfinding;
pub mod session;
pub mod tile;

pub use generator::{GeneratorSettings, MazeGenerator};
pub use grid::{Grid, Position};
pub use level::Level;
pub use level_file::{LevelFile, LevelSet};
pub use session::{Direction, MoveOutcome, Session};
pub use tile::CellTag;
