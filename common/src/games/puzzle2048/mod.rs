mod board;
mod error;
mod geometry;
mod input;
mod line;
mod settings;
mod spawner;
mod types;

pub use board::Board;
pub use error::Puzzle2048Error;
pub use geometry::LineLayout;
pub use input::KEY_BINDINGS;
pub use line::{CompactedLine, compact_line};
pub use settings::{
    DEFAULT_LOW_TILE_PROBABILITY, HIGH_TILE, LOW_TILE, MAX_FIELD_SIZE, MIN_FIELD_SIZE,
    Puzzle2048Settings,
};
pub use types::{Direction, SpawnedTile};
