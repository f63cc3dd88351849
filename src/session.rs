use crate::grid::Position;
use crate::level::Level;
use crate::level_file::LevelSet;
use log::{debug, info};

/// Orthogonal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, column) step
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// WASD mapping, case-insensitive
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    pub has_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
}

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Destination is a wall or outside the grid
    Blocked,
    Moved,
    KeyCollected,
    /// Standing on the goal without the key
    NeedKey,
    /// Goal reached with the key; `next` is the level now loaded
    LevelComplete { next: usize },
    /// Last level finished
    Won,
}

/// Game progression state for one play-through
pub struct Session {
    levels: LevelSet,
    index: usize,
    level: Level,
    player: Player,
    state: SessionState,
}

impl Session {
    pub fn new(levels: LevelSet) -> Result<Self, String> {
        let level = levels
            .instantiate(0)
            .ok_or_else(|| "Cannot start a session without levels".to_string())?;
        let player = Player {
            pos: level.spawn_position(),
            has_key: false,
        };
        Ok(Session {
            levels,
            index: 0,
            level,
            player,
            state: SessionState::Playing,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Reload the current level from its authored layout
    pub fn restart_level(&mut self) {
        self.load_level(self.index);
    }

    fn load_level(&mut self, index: usize) {
        if let Some(level) = self.levels.instantiate(index) {
            if level.start_position().is_none() {
                debug!("Level {} has no start tile, spawning at {}", index, level.spawn_position());
            }
            self.index = index;
            self.player = Player {
                pos: level.spawn_position(),
                has_key: false,
            };
            self.level = level;
        }
    }

    /// Try to move the player one cell
    pub fn try_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.state == SessionState::Won {
            return MoveOutcome::Won;
        }

        let (dr, dc) = dir.delta();
        let dest = self.player.pos.offset(dr, dc);
        if !self.level.in_bounds(dest.r, dest.c) || self.level.is_wall(dest.r, dest.c) {
            return MoveOutcome::Blocked;
        }
        self.player.pos = dest;

        let mut outcome = MoveOutcome::Moved;
        if self.level.collect_key(dest.r, dest.c) {
            self.player.has_key = true;
            outcome = MoveOutcome::KeyCollected;
        }

        if self.level.is_goal(dest.r, dest.c) {
            if !self.player.has_key {
                return MoveOutcome::NeedKey;
            }
            self.player.has_key = false;
            let next = self.index + 1;
            if next >= self.levels.len() {
                info!("Final level {} cleared", self.index);
                self.state = SessionState::Won;
                return MoveOutcome::Won;
            }
            info!("Level {} cleared, loading level {}", self.index, next);
            self.load_level(next);
            return MoveOutcome::LevelComplete { next };
        }

        outcome
    }

    /// Text view of the current level with the player drawn as `@`
    pub fn render(&self) -> String {
        let (rows, cols) = self.level.bounds();
        let mut out = String::with_capacity(((cols + 1) * rows) as usize);
        for r in 0..rows {
            for c in 0..cols {
                if Position::new(r, c) == self.player.pos {
                    out.push('@');
                } else {
                    out.push(self.level.classify(r, c).glyph());
                }
            }
            out.push('\n');
        }
        out
    }
}
