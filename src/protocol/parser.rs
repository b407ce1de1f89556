//! BGI command parser.
//!
//! Parses incoming BGI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Dice;

/// A parsed server-to-engine BGI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the BGI protocol handshake.
    Bgi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from its text notation (or `start`).
    Position { text: String },

    /// Set the pending dice, or roll them when no values are given.
    Roll { dice: Option<Dice> },

    /// Select the best move for the current position and dice.
    Go,

    /// Terminate the engine process.
    Quit,
}

/// Parses one input line into a command. Returns `None` for blank or
/// unrecognized lines, which the main loop silently ignores.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;

    match keyword {
        "bgi" => Some(Command::Bgi),
        "isready" => Some(Command::IsReady),
        "setoption" => parse_setoption(&mut tokens),
        "newgame" => Some(Command::NewGame),
        "position" => {
            let text = tokens.next()?.to_string();
            Some(Command::Position { text })
        }
        "roll" => parse_roll(&mut tokens),
        "go" => Some(Command::Go),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<Command> {
    if tokens.next()? != "name" {
        return None;
    }
    let name = tokens.next()?.to_string();
    let value = match tokens.next() {
        Some("value") => Some(tokens.next()?.to_string()),
        Some(_) => return None,
        None => None,
    };
    Some(Command::SetOption { name, value })
}

/// Parses `roll` with either zero or two die values.
fn parse_roll<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<Command> {
    let first = match tokens.next() {
        Some(t) => t,
        None => return Some(Command::Roll { dice: None }),
    };
    let second = tokens.next()?;
    let a: u8 = first.parse().ok()?;
    let b: u8 = second.parse().ok()?;
    let dice = Dice::new(a, b)?;
    Some(Command::Roll { dice: Some(dice) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_keywords() {
        assert_eq!(parse_command("bgi"), Some(Command::Bgi));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("go"), Some(Command::Go));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn ignores_blank_and_unknown_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate 1 2"), None);
    }

    #[test]
    fn parses_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name Seed value 42"),
            Some(Command::SetOption {
                name: "Seed".to_string(),
                value: Some("42".to_string()),
            })
        );
    }

    #[test]
    fn parses_setoption_without_value() {
        assert_eq!(
            parse_command("setoption name Seed"),
            Some(Command::SetOption {
                name: "Seed".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn rejects_malformed_setoption() {
        assert_eq!(parse_command("setoption Seed 42"), None);
        assert_eq!(parse_command("setoption name"), None);
    }

    #[test]
    fn parses_position_payload() {
        assert_eq!(
            parse_command("position start"),
            Some(Command::Position {
                text: "start".to_string()
            })
        );
    }

    #[test]
    fn parses_roll_with_values() {
        assert_eq!(
            parse_command("roll 1 6"),
            Some(Command::Roll {
                dice: Dice::new(1, 6)
            })
        );
    }

    #[test]
    fn parses_bare_roll() {
        assert_eq!(parse_command("roll"), Some(Command::Roll { dice: None }));
    }

    #[test]
    fn rejects_out_of_range_roll() {
        assert_eq!(parse_command("roll 0 7"), None);
        assert_eq!(parse_command("roll 1"), None);
    }
}
