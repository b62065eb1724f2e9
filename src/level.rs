//! Level templates and the catalog
//!
//! Templates are immutable. Loading a level hands the engine its own copy of
//! the obstacles so moving walls never drift in the template; walls are
//! shared since nothing moves them.
//!
//! Geometry is taken as-is. An unreachable hole or overlapping walls are the
//! level author's problem, not the loader's.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::sim::{Level, Obstacle, Rect, Vec2};

/// Shipped levels
const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

/// One level as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub start: Vec2,
    pub hole: Vec2,
    pub walls: Arc<[Rect]>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl LevelData {
    /// Live copy for the engine
    pub fn instantiate(&self, index: usize) -> Level {
        Level {
            index,
            start: self.start,
            hole: self.hole,
            walls: Arc::clone(&self.walls),
            obstacles: self.obstacles.clone(),
        }
    }
}

/// Ordered, non-empty list of levels
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelData>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelData>) -> Result<Self> {
        if levels.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { levels })
    }

    /// The three levels that ship with the game
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let levels: Vec<LevelData> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!("Loaded {} levels from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index past the end wraps back to the first level
    pub fn wrap_index(&self, index: usize) -> usize {
        if index >= self.levels.len() { 0 } else { index }
    }

    pub fn get(&self, index: usize) -> &LevelData {
        &self.levels[self.wrap_index(index)]
    }
}
