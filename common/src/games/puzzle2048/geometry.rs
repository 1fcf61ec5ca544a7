use super::types::Direction;

/// How a direction walks the grid: whether lines are columns, and whether a
/// line is read from its high-coordinate end.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Traversal {
    lines_are_columns: bool,
    reversed: bool,
}

// Indexed by `table_index`. Position 0 of every line is where tiles slide to.
const TRAVERSALS: [Traversal; 4] = [
    // Up
    Traversal { lines_are_columns: true, reversed: true },
    // Down
    Traversal { lines_are_columns: true, reversed: false },
    // Left
    Traversal { lines_are_columns: false, reversed: false },
    // Right
    Traversal { lines_are_columns: false, reversed: true },
];

fn table_index(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Line geometry of a `width` x `height` grid for one move direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineLayout {
    pub line_count: usize,
    pub line_length: usize,
    lines_are_columns: bool,
    reversed: bool,
}

impl LineLayout {
    pub fn new(direction: Direction, width: usize, height: usize) -> Self {
        let traversal = TRAVERSALS[table_index(direction)];
        let (line_count, line_length) = if traversal.lines_are_columns {
            (width, height)
        } else {
            (height, width)
        };
        Self {
            line_count,
            line_length,
            lines_are_columns: traversal.lines_are_columns,
            reversed: traversal.reversed,
        }
    }

    /// Grid coordinates `(x, y)` of `position` along line `line`.
    pub fn cell(&self, line: usize, position: usize) -> (usize, usize) {
        debug_assert!(line < self.line_count && position < self.line_length);
        let along = if self.reversed {
            self.line_length - position - 1
        } else {
            position
        };
        if self.lines_are_columns {
            (line, along)
        } else {
            (along, line)
        }
    }

    pub fn cells(&self, line: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.line_length).map(move |position| self.cell(line, position))
    }
}
