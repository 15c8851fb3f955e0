use std::fmt;
use serde::{Deserialize, Serialize};

use crate::cmdline::Args;
use crate::snake_game::{Grid, GridPoint, RandomFood, SnakeGame, INITIAL_SNAKE_LENGTH};

/// Everything needed to start a game. The grid is derived from the window size in blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Side of one grid cell, in pixels
    pub block_size: u32,
    pub initial_snake_length: usize,
    /// Seconds between simulation ticks
    pub tick_interval: f64,
    /// Fixes food placement when set
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            block_size: 20,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            tick_interval: 0.1,
            seed: None,
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        Self {
            window_width: args.width,
            window_height: args.height,
            block_size: args.block_size,
            tick_interval: args.tick_interval,
            seed: args.seed,
            ..Default::default()
        }
    }
}

impl GameConfig {
    pub fn grid_width(&self) -> i16 {
        (self.window_width / self.block_size.max(1)) as i16
    }
    pub fn grid_height(&self) -> i16 {
        (self.window_height / self.block_size.max(1)) as i16
    }
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width(), self.grid_height())
    }
    pub fn grid_center(&self) -> GridPoint {
        self.grid().center()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        let cols = self.window_width / self.block_size;
        let rows = self.window_height / self.block_size;
        if cols > i16::MAX as u32 || rows > i16::MAX as u32 {
            return Err(ConfigError::GridTooLarge { cols, rows });
        }
        // The starting snake runs left from the centre column and must fit on the grid.
        if cols == 0 || rows == 0 || self.initial_snake_length == 0 || self.initial_snake_length as u32 > cols / 2 + 1 {
            return Err(ConfigError::GridTooSmall { cols, rows, snake_length: self.initial_snake_length });
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(ConfigError::BadTickInterval(self.tick_interval));
        }
        Ok(())
    }

    /// Game with random food, seeded when `seed` is set.
    pub fn new_game(&self) -> SnakeGame {
        let food = match self.seed {
            Some(seed) => RandomFood::from_seed(seed),
            None => RandomFood::from_entropy(),
        };
        SnakeGame::new(self.grid(), self.initial_snake_length, food)
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroBlockSize,
    GridTooLarge { cols: u32, rows: u32 },
    GridTooSmall { cols: u32, rows: u32, snake_length: usize },
    BadTickInterval(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBlockSize => write!(f, "block size must be at least one pixel"),
            ConfigError::GridTooLarge { cols, rows } => write!(f, "grid of {cols}x{rows} cells is too large"),
            ConfigError::GridTooSmall { cols, rows, snake_length } => {
                write!(f, "grid of {cols}x{rows} cells has no room for a snake of length {snake_length}")
            }
            ConfigError::BadTickInterval(secs) => write!(f, "tick interval must be a positive number of seconds, got {secs}"),
        }
    }
}

impl std::error::Error for ConfigError {}
