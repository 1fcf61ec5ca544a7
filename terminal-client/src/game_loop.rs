use std::io::{self, BufRead, Write};

use puzzle2048_common::{Board, SessionRng, log};

use crate::command::{Command, help_text, parse_command};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub moves_made: u32,
    pub rejected_inputs: u32,
    pub final_score: u64,
}

fn render<W: Write>(board: &Board, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", board)?;
    writeln!(output, "Score: {}  Empty cells: {}", board.score(), board.empty_count())
}

/// Reads commands line by line until `quit` or end of input. Every line may
/// hold several whitespace-separated commands.
pub fn run_session<R: BufRead, W: Write>(
    board: &mut Board,
    rng: &mut SessionRng,
    input: R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    render(board, output)?;

    'lines: for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match parse_command(token) {
                Ok(Command::Quit) => break 'lines,
                Ok(Command::Help) => writeln!(output, "{}", help_text())?,
                Ok(Command::Restart) => {
                    board.restart(rng);
                    log!("Board restarted");
                    render(board, output)?;
                }
                Ok(Command::Move(direction)) => {
                    if board.apply_move(direction, rng) {
                        summary.moves_made += 1;
                        render(board, output)?;
                    } else {
                        writeln!(output, "Nothing moves {}", direction)?;
                    }
                }
                Err(err) => {
                    summary.rejected_inputs += 1;
                    writeln!(output, "{} (type ? for help)", err)?;
                }
            }
        }
    }

    summary.final_score = board.score();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(board: &mut Board, script: &str) -> (SessionSummary, String) {
        let mut rng = SessionRng::new(42);
        let mut output = Vec::new();
        let summary = run_session(board, &mut rng, Cursor::new(script), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_moves_and_quit() {
        // bottom row [2, 2, 0, 0]
        let mut cells = vec![0; 16];
        cells[0] = 2;
        cells[1] = 2;
        let mut board = Board::from_cells(4, 4, cells, 0.9).unwrap();

        let (summary, output) = run(&mut board, "a\nq\nd\n");
        assert_eq!(summary.moves_made, 1);
        assert_eq!(summary.rejected_inputs, 0);
        assert_eq!(summary.final_score, board.score());
        assert_eq!(board.get(0, 0), Some(4));
        assert!(output.contains("Score: 4  Empty cells: 14"));
    }

    #[test]
    fn test_blocked_move_reported() {
        let mut cells = vec![0; 4];
        cells[0] = 2;
        let mut board = Board::from_cells(2, 2, cells, 0.9).unwrap();

        let (summary, output) = run(&mut board, "left 113\n");
        assert_eq!(summary.moves_made, 0);
        assert!(output.contains("Nothing moves left"));
        assert_eq!(board.cells(), &[2, 0, 0, 0]);
    }

    #[test]
    fn test_bad_input_counted() {
        let mut board = Board::from_cells(2, 2, vec![0; 4], 0.9).unwrap();
        let (summary, output) = run(&mut board, "jump 7\n?\n");
        assert_eq!(summary.rejected_inputs, 2);
        assert!(output.contains("No direction bound to key code 7"));
        assert!(output.contains("Moves:"));
    }

    #[test]
    fn test_restart_places_single_tile() {
        let mut board = Board::from_cells(2, 2, vec![2, 4, 8, 0], 0.9).unwrap();
        let (_, _) = run(&mut board, "r\n");
        assert_eq!(board.tile_count(), 1);
    }
}
