use super::error::Puzzle2048Error;
use super::types::Direction;

/// X11 key codes understood by the board. Arrow keys and the WASD cluster
/// of a QWERTY layout both drive the same four directions.
pub const KEY_BINDINGS: [(u32, Direction); 8] = [
    (111, Direction::Up),
    (116, Direction::Down),
    (113, Direction::Left),
    (114, Direction::Right),
    (25, Direction::Up),
    (39, Direction::Down),
    (38, Direction::Left),
    (40, Direction::Right),
];

impl Direction {
    pub fn from_keycode(keycode: u32) -> Result<Self, Puzzle2048Error> {
        KEY_BINDINGS
            .iter()
            .find(|(code, _)| *code == keycode)
            .map(|&(_, direction)| direction)
            .ok_or(Puzzle2048Error::UnmappedKeyCode(keycode))
    }

    pub fn keycodes(self) -> impl Iterator<Item = u32> {
        KEY_BINDINGS
            .iter()
            .filter(move |(_, direction)| *direction == self)
            .map(|&(code, _)| code)
    }
}
