use super::board::Board;
use super::error::Puzzle2048Error;
use super::geometry::LineLayout;
use super::settings::{HIGH_TILE, LOW_TILE};
use super::types::{Direction, SpawnedTile};
use crate::games::session_rng::SessionRng;

/// Per-line tile counts left by the latest shift.
///
/// Only meaningful for `direction`: line `i` of that direction holds its
/// tiles at positions `0..counts[i]` and nothing after them. Rebuilt on
/// every shift and dropped once a tile is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Occupancy {
    pub direction: Direction,
    pub counts: Vec<usize>,
}

impl Occupancy {
    pub fn new(direction: Direction, counts: Vec<usize>) -> Self {
        Self { direction, counts }
    }

    /// Occupancy of an empty grid.
    pub fn cleared(direction: Direction, width: usize, height: usize) -> Self {
        let layout = LineLayout::new(direction, width, height);
        Self::new(direction, vec![0; layout.line_count])
    }
}

impl Board {
    /// Places a 2 or 4 into an empty cell chosen uniformly at random.
    pub fn spawn_tile(&mut self, rng: &mut SessionRng) -> Result<SpawnedTile, Puzzle2048Error> {
        let (x, y) = match &self.occupancy {
            Some(occupancy) => pick_from_occupancy(occupancy, self.width, self.height, rng)?,
            None => self.pick_by_scan(rng)?,
        };
        debug_assert_eq!(self.get(x, y), Some(0));

        let value = if rng.random::<f64>() < self.low_tile_probability {
            LOW_TILE
        } else {
            HIGH_TILE
        };
        self.set(x, y, value);
        // the new tile is not packed against its line, so counts no longer hold
        self.occupancy = None;

        Ok(SpawnedTile { x, y, value })
    }

    fn pick_by_scan(&self, rng: &mut SessionRng) -> Result<(usize, usize), Puzzle2048Error> {
        let empty_indices: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(i, _)| i)
            .collect();

        if empty_indices.is_empty() {
            return Err(Puzzle2048Error::NoSpaceToSpawn);
        }

        let index = empty_indices[rng.random_range(0..empty_indices.len())];
        Ok((index % self.width, index / self.width))
    }
}

fn pick_from_occupancy(
    occupancy: &Occupancy,
    width: usize,
    height: usize,
    rng: &mut SessionRng,
) -> Result<(usize, usize), Puzzle2048Error> {
    let layout = LineLayout::new(occupancy.direction, width, height);
    debug_assert_eq!(occupancy.counts.len(), layout.line_count);

    let available = |line: usize| layout.line_length - occupancy.counts[line];
    let total: usize = (0..layout.line_count).map(available).sum();
    if total == 0 {
        return Err(Puzzle2048Error::NoSpaceToSpawn);
    }

    let mut offset = rng.random_range(0..total);
    let mut line = 0;
    while offset >= available(line) {
        offset -= available(line);
        line += 1;
    }

    Ok(layout.cell(line, occupancy.counts[line] + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: usize, height: usize, cells: Vec<u32>, p: f64) -> Board {
        Board::from_cells(width, height, cells, p).unwrap()
    }

    #[test]
    fn test_spawn_on_full_board_fails() {
        let mut rng = SessionRng::new(42);
        let mut b = board(2, 2, vec![2, 4, 8, 16], 0.9);
        assert_eq!(b.spawn_tile(&mut rng), Err(Puzzle2048Error::NoSpaceToSpawn));
        assert_eq!(b.cells(), &[2, 4, 8, 16]);
    }

    #[test]
    fn test_spawn_on_full_board_after_shift_fails() {
        let mut rng = SessionRng::new(42);
        let mut b = board(2, 2, vec![2, 4, 8, 16], 0.9);
        assert!(!b.shift(Direction::Left));
        assert_eq!(b.spawn_tile(&mut rng), Err(Puzzle2048Error::NoSpaceToSpawn));
    }

    #[test]
    fn test_spawn_fills_only_empty_cell() {
        let mut rng = SessionRng::new(7);
        // bottom row [2, 0], top row [4, 8]
        let mut b = board(2, 2, vec![2, 0, 4, 8], 0.9);
        let tile = b.spawn_tile(&mut rng).unwrap();
        assert_eq!((tile.x, tile.y), (1, 0));
        assert_eq!(b.get(1, 0), Some(tile.value));
    }

    #[test]
    fn test_spawn_uses_occupancy_after_shift() {
        let mut rng = SessionRng::new(3);
        for _ in 0..50 {
            // single row [2, 2, 0, 8]; Left packs it to [4, 8, 0, 0]
            #[rustfmt::skip]
            let mut b = board(4, 2, vec![
                2, 2, 0, 8,
                0, 0, 0, 0,
            ], 0.9);
            assert!(b.shift(Direction::Left));
            let before = b.cells().to_vec();
            let tile = b.spawn_tile(&mut rng).unwrap();
            assert_eq!(before[tile.y * 4 + tile.x], 0);
            assert_ne!((tile.x, tile.y), (0, 0));
            assert_ne!((tile.x, tile.y), (1, 0));
        }
    }

    #[test]
    fn test_spawn_covers_every_empty_cell() {
        let mut rng = SessionRng::new(11);
        let mut hits = [0u32; 6];
        for _ in 0..600 {
            // column 0 packed down to [2, 0, 0], other columns empty
            let mut b = board(2, 3, vec![2, 0, 0, 0, 0, 0], 0.9);
            assert!(!b.shift(Direction::Down));
            let tile = b.spawn_tile(&mut rng).unwrap();
            hits[tile.y * 2 + tile.x] += 1;
        }
        assert_eq!(hits[0], 0);
        assert!(hits[1..].iter().all(|&h| h > 50), "{hits:?}");
    }

    #[test]
    fn test_spawn_value_follows_probability() {
        let mut rng = SessionRng::new(5);
        let mut low = board(4, 4, vec![0; 16], 0.999_999);
        let mut high = board(4, 4, vec![0; 16], 0.000_001);
        for _ in 0..10 {
            assert_eq!(low.spawn_tile(&mut rng).unwrap().value, LOW_TILE);
            assert_eq!(high.spawn_tile(&mut rng).unwrap().value, HIGH_TILE);
        }
    }

    fn fill_until_full(b: &mut Board, rng: &mut SessionRng) {
        let mut before = b.cells().to_vec();
        loop {
            match b.spawn_tile(rng) {
                Ok(tile) => {
                    assert_eq!(before[tile.y * b.width() + tile.x], 0);
                    assert_eq!(b.tile_count(), before.iter().filter(|&&v| v != 0).count() + 1);
                    before = b.cells().to_vec();
                }
                Err(err) => {
                    assert_eq!(err, Puzzle2048Error::NoSpaceToSpawn);
                    assert_eq!(b.cells(), before.as_slice());
                    break;
                }
            }
        }
        assert_eq!(b.empty_count(), 0);
    }

    #[test]
    fn test_repeated_spawn_fills_distinct_empty_cells() {
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let mut b = board(2, 2, vec![2, 2, 0, 0], 0.9);
            assert!(b.shift(Direction::Left));
            fill_until_full(&mut b, &mut rng);
            assert_eq!(b.get(0, 0), Some(4));
        }
    }

    #[test]
    fn test_repeated_spawn_after_restart_fills_distinct_empty_cells() {
        for seed in 0..100 {
            let mut rng = SessionRng::new(seed);
            let mut b = board(3, 2, vec![0; 6], 0.9);
            b.restart(&mut rng);
            assert_eq!(b.tile_count(), 1);
            fill_until_full(&mut b, &mut rng);
        }
    }

    #[test]
    fn test_cleared_occupancy_matches_direction() {
        assert_eq!(Occupancy::cleared(Direction::Left, 3, 5).counts.len(), 5);
        assert_eq!(Occupancy::cleared(Direction::Down, 3, 5).counts.len(), 3);
    }
}
