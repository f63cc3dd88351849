use crate::generator::MazeGenerator;
use crate::grid::Grid;
use crate::level::Level;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk level collection: `{"levels": [[[0,1,...], ...], ...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    #[serde(default)]
    pub levels: Vec<Vec<Vec<i32>>>,
}

impl LevelFile {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level file: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize level file: {}", e))
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| {
            format!("Failed to read level file {}: {}", path.as_ref().display(), e)
        })?;
        Self::from_json(&json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json).map_err(|e| {
            format!("Failed to write level file {}: {}", path.as_ref().display(), e)
        })
    }
}

/// Ordered, validated level layouts.
///
/// Layouts are kept pristine; every `instantiate` hands out an independent
/// copy so a level can be replayed exactly as authored.
#[derive(Debug, Clone, Default)]
pub struct LevelSet {
    grids: Vec<Grid>,
}

impl LevelSet {
    pub fn new(grids: Vec<Grid>) -> Self {
        LevelSet { grids }
    }

    /// Validate every layout of a level file
    pub fn from_file(file: &LevelFile) -> Result<Self, String> {
        let grids = file
            .levels
            .iter()
            .enumerate()
            .map(|(i, rows)| Grid::from_rows(rows).map_err(|e| format!("Level {}: {}", i, e)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LevelSet { grids })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        Self::from_file(&LevelFile::load_from_file(path)?)
    }

    /// Two hand-authored layouts shipped with the game
    pub fn builtin() -> Self {
        let first = vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 2, 0, 0, 0, 0, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1, 1, 0, 1, 0, 1],
            vec![1, 0, 0, 4, 0, 1, 0, 1, 0, 1],
            vec![1, 0, 1, 1, 0, 0, 0, 1, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 0, 0, 3, 1],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        let second = vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 2, 0, 1, 0, 0, 0, 1, 3, 1],
            vec![1, 0, 0, 1, 0, 1, 0, 1, 0, 1],
            vec![1, 0, 1, 1, 0, 1, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 1, 1, 1, 0, 1],
            vec![1, 1, 1, 0, 1, 4, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        let file = LevelFile {
            levels: vec![first, second],
        };
        match Self::from_file(&file) {
            Ok(set) => set,
            Err(e) => unreachable!("builtin levels are well-formed: {}", e),
        }
    }

    /// Append generated layouts until at least `min` levels exist
    pub fn ensure_min_levels<R: Rng + ?Sized>(
        &mut self,
        min: usize,
        generator: &MazeGenerator,
        rng: &mut R,
    ) {
        while self.grids.len() < min {
            info!("Only {} levels available, generating one more", self.grids.len());
            self.grids.push(generator.generate(rng));
        }
    }

    pub fn push(&mut self, grid: Grid) {
        self.grids.push(grid);
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Authored layout at `index`
    pub fn layout(&self, index: usize) -> Option<&Grid> {
        self.grids.get(index)
    }

    /// Fresh, independent level built from a copy of the layout
    pub fn instantiate(&self, index: usize) -> Option<Level> {
        self.grids.get(index).cloned().map(Level::new)
    }

    pub fn to_file(&self) -> LevelFile {
        LevelFile {
            levels: self.grids.iter().map(Grid::to_rows).collect(),
        }
    }
}
