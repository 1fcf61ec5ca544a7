use std::fmt;

use super::error::Puzzle2048Error;
use super::geometry::LineLayout;
use super::line::compact_line;
use super::settings::Puzzle2048Settings;
use super::spawner::Occupancy;
use super::types::Direction;
use crate::config::Validate;
use crate::games::session_rng::SessionRng;
use crate::log;

const INITIAL_DIRECTION: Direction = Direction::Down;

/// A sliding-tile board.
///
/// Cells are stored row by row starting from the bottom row, so `(0, 0)` is
/// the bottom-left corner and `(x, y)` lives at `y * width + x`. Zero marks an
/// empty cell.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) cells: Vec<u32>,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) low_tile_probability: f64,
    /// `None` unless the grid is exactly as the last shift left it.
    pub(super) occupancy: Option<Occupancy>,
    last_direction: Direction,
    moves_made: u32,
    points_merged: u64,
}

impl Board {
    pub fn new(settings: &Puzzle2048Settings, rng: &mut SessionRng) -> Result<Self, Puzzle2048Error> {
        settings
            .validate()
            .map_err(Puzzle2048Error::InvalidSettings)?;

        let width = settings.field_width as usize;
        let height = settings.field_height as usize;
        let mut board = Self {
            cells: vec![0; width * height],
            width,
            height,
            low_tile_probability: settings.low_tile_probability,
            occupancy: None,
            last_direction: INITIAL_DIRECTION,
            moves_made: 0,
            points_merged: 0,
        };
        board.restart(rng);
        Ok(board)
    }

    /// Builds a board from explicit cell values, bottom row first. No tile is
    /// spawned.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<u32>,
        low_tile_probability: f64,
    ) -> Result<Self, Puzzle2048Error> {
        let settings = Puzzle2048Settings {
            field_width: u32::try_from(width).unwrap_or(u32::MAX),
            field_height: u32::try_from(height).unwrap_or(u32::MAX),
            low_tile_probability,
            seed: None,
        };
        settings
            .validate()
            .map_err(Puzzle2048Error::InvalidSettings)?;
        if cells.len() != width * height {
            return Err(Puzzle2048Error::InvalidSettings(format!(
                "Expected {} cells for a {}x{} board, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }

        Ok(Self {
            cells,
            width,
            height,
            low_tile_probability,
            occupancy: None,
            last_direction: INITIAL_DIRECTION,
            moves_made: 0,
            points_merged: 0,
        })
    }

    /// Clears the grid and places the opening tile.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        self.cells.fill(0);
        self.last_direction = INITIAL_DIRECTION;
        self.occupancy = Some(Occupancy::cleared(
            INITIAL_DIRECTION,
            self.width,
            self.height,
        ));
        self.moves_made = 0;
        self.points_merged = 0;

        if let Err(err) = self.spawn_tile(rng) {
            log!("Failed to place opening tile: {}", err);
        }
    }

    /// Slides every line toward `direction` and spawns one tile if anything
    /// moved. Returns whether the grid changed.
    pub fn apply_move(&mut self, direction: Direction, rng: &mut SessionRng) -> bool {
        if !self.shift(direction) {
            return false;
        }

        self.moves_made += 1;
        if let Err(err) = self.spawn_tile(rng) {
            log!("Move {} changed the board but left no room: {}", direction, err);
        }
        true
    }

    /// Slides and merges without spawning. Returns whether the grid changed.
    ///
    /// The occupancy used by the spawner is rebuilt for `direction` even when
    /// nothing moves.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let layout = LineLayout::new(direction, self.width, self.height);
        let mut counts = Vec::with_capacity(layout.line_count);
        let mut changed = false;

        for line in 0..layout.line_count {
            let values: Vec<u32> = layout
                .cells(line)
                .map(|(x, y)| self.cells[y * self.width + x])
                .collect();
            let compacted = compact_line(&values);

            if compacted.changed {
                for ((x, y), value) in layout.cells(line).zip(compacted.values) {
                    self.cells[y * self.width + x] = value;
                }
                self.points_merged += u64::from(compacted.merged_points);
                changed = true;
            }
            counts.push(compacted.occupied);
        }

        self.last_direction = direction;
        self.occupancy = Some(Occupancy::new(direction, counts));
        changed
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    pub(super) fn set(&mut self, x: usize, y: usize, value: u32) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = value;
    }

    /// All cells, bottom row first.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Non-empty cells as `((x, y), value)`.
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0)
            .map(|(i, &value)| ((i % self.width, i / self.width), value))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.tile_count()
    }

    /// Sum of every tile on the grid.
    pub fn score(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Sum of all tiles produced by merges since the last restart.
    pub fn points_merged(&self) -> u64 {
        self.points_merged
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.highest_tile().max(2).to_string().len();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                match self.cells[y * self.width + x] {
                    0 => write!(f, "{:>cell_width$}", ".")?,
                    value => write!(f, "{:>cell_width$}", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
