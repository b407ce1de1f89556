//! Pipsqueak -- a backgammon engine implementing the BGI protocol.
//!
//! This binary reads commands from stdin and writes responses to
//! stdout, following the BGI (BackGammon Interface) convention.

use std::io::{self, BufRead};

use pipsqueak::engine::Engine;
use pipsqueak::protocol::parser::{parse_command, Command};

/// Runs the main BGI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Bgi => {
                engine.handle_bgi(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { text } => {
                if let Err(e) = engine.set_position(&text) {
                    eprintln!("{}", e);
                }
            }
            Command::Roll { dice } => {
                engine.handle_roll(dice, &mut out);
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
