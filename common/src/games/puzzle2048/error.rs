#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Puzzle2048Error {
    InvalidDirection(String),
    UnmappedKeyCode(u32),
    NoSpaceToSpawn,
    InvalidSettings(String),
}

impl std::fmt::Display for Puzzle2048Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Puzzle2048Error::InvalidDirection(value) => {
                write!(f, "Invalid direction: {}", value)
            }
            Puzzle2048Error::UnmappedKeyCode(code) => {
                write!(f, "No direction bound to key code {}", code)
            }
            Puzzle2048Error::NoSpaceToSpawn => write!(f, "No empty cell to spawn a tile into"),
            Puzzle2048Error::InvalidSettings(reason) => write!(f, "Invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for Puzzle2048Error {}
