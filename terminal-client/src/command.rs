use puzzle2048_common::{Direction, Puzzle2048Error};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Restart,
    Help,
    Quit,
}

/// Parses one input token: a direction name or letter, a raw X11 key code,
/// or one of the control words.
pub fn parse_command(token: &str) -> Result<Command, Puzzle2048Error> {
    let token = token.trim();
    match token.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" | "new" => return Ok(Command::Restart),
        "?" | "h" | "help" => return Ok(Command::Help),
        _ => {}
    }

    if let Ok(keycode) = token.parse::<u32>() {
        return Direction::from_keycode(keycode).map(Command::Move);
    }

    token.parse::<Direction>().map(Command::Move)
}

pub fn help_text() -> String {
    let mut text = String::from("Moves: w/a/s/d, up/down/left/right, or an X11 key code:\n");
    for direction in Direction::ALL {
        let codes: Vec<String> = direction.keycodes().map(|code| code.to_string()).collect();
        text.push_str(&format!("  {:<5} {}\n", direction, codes.join(", ")));
    }
    text.push_str("Other: r = restart, q = quit, ? = help");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_words() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("Restart"), Ok(Command::Restart));
        assert_eq!(parse_command(" ? "), Ok(Command::Help));
    }

    #[test]
    fn test_direction_words() {
        assert_eq!(parse_command("a"), Ok(Command::Move(Direction::Left)));
        assert_eq!(parse_command("UP"), Ok(Command::Move(Direction::Up)));
    }

    #[test]
    fn test_keycodes() {
        assert_eq!(parse_command("114"), Ok(Command::Move(Direction::Right)));
        assert_eq!(parse_command("39"), Ok(Command::Move(Direction::Down)));
        assert_eq!(
            parse_command("1"),
            Err(Puzzle2048Error::UnmappedKeyCode(1))
        );
    }

    #[test]
    fn test_help_lists_both_layouts() {
        let help = help_text();
        assert!(help.contains("left  113, 38"));
        assert!(help.contains("up    111, 25"));
    }

    #[test]
    fn test_unknown_word() {
        assert!(matches!(
            parse_command("jump"),
            Err(Puzzle2048Error::InvalidDirection(_))
        ));
    }
}
