//! Core of a 2048-style sliding-tile puzzle.
//!
//! The board lives in [`games::puzzle2048`]; [`config`] and [`logger`] carry
//! the settings file and diagnostics shared with front ends.

pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::puzzle2048::{Board, Direction, Puzzle2048Error, Puzzle2048Settings};
