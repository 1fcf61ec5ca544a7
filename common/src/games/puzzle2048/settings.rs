use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MIN_FIELD_SIZE: u32 = 2;
pub const MAX_FIELD_SIZE: u32 = 10;
pub const DEFAULT_LOW_TILE_PROBABILITY: f64 = 0.9;

pub const LOW_TILE: u32 = 2;
pub const HIGH_TILE: u32 = 4;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Puzzle2048Settings {
    pub field_width: u32,
    pub field_height: u32,
    /// Chance that a spawned tile is `LOW_TILE` rather than `HIGH_TILE`.
    pub low_tile_probability: f64,
    pub seed: Option<u64>,
}

impl Validate for Puzzle2048Settings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < MIN_FIELD_SIZE || self.field_width > MAX_FIELD_SIZE {
            return Err(format!(
                "Field width must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, self.field_width
            ));
        }
        if self.field_height < MIN_FIELD_SIZE || self.field_height > MAX_FIELD_SIZE {
            return Err(format!(
                "Field height must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, self.field_height
            ));
        }
        if !(self.low_tile_probability > 0.0 && self.low_tile_probability < 1.0) {
            return Err(format!(
                "Low tile probability must be strictly between 0 and 1, got {}",
                self.low_tile_probability
            ));
        }
        Ok(())
    }
}

impl Default for Puzzle2048Settings {
    fn default() -> Self {
        Self {
            field_width: 4,
            field_height: 4,
            low_tile_probability: DEFAULT_LOW_TILE_PROBABILITY,
            seed: None,
        }
    }
}
