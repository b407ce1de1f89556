//! Engine state management.
//!
//! Holds the current board position, the pending dice roll, and engine
//! options between commands, and answers `go` by running the search.
//! The board held here is a snapshot supplied by the caller; the engine
//! never applies its own answer to it -- the caller owns the
//! authoritative game state.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, Dice};
use crate::protocol::notation::{format_sequence, parse_position};
use crate::search::search_with_observer;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub dice: Option<Dice>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no position or dice.
    pub fn new() -> Self {
        Engine {
            position: None,
            dice: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
        self.dice = None;
    }

    /// Sets the current board position from its text notation.
    /// `start` selects the standard opening. Returns an error message
    /// on failure.
    pub fn set_position(&mut self, text: &str) -> Result<(), String> {
        if text == "start" {
            self.position = Some(Board::opening());
            return Ok(());
        }
        match parse_position(text) {
            Ok(board) => {
                self.position = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse position: {}", e)),
        }
    }

    /// Sets an engine option. The `Seed` option reseeds the dice RNG
    /// for reproducible rolls.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        if name == "Seed" {
            if let Some(seed) = value.as_deref().and_then(|v| v.parse::<u64>().ok()) {
                self.rng = SmallRng::seed_from_u64(seed);
            }
        }
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Handles the `roll` command: stores the given dice, or rolls a
    /// fresh pair and echoes it so the caller learns the values.
    pub fn handle_roll<W: Write>(&mut self, dice: Option<Dice>, out: &mut W) {
        let dice = match dice {
            Some(d) => d,
            None => {
                let rolled = Dice::roll(&mut self.rng);
                writeln!(out, "info roll {} {}", rolled.first(), rolled.second()).unwrap();
                out.flush().unwrap();
                rolled
            }
        };
        self.dice = Some(dice);
    }

    /// Handles the BGI handshake: writes id, options, protocol_version,
    /// and bgiok.
    pub fn handle_bgi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name pipsqueak").unwrap();
        writeln!(out, "id author pipsqueak").unwrap();
        writeln!(
            out,
            "option name Seed type spin default 0 min 0 max 1000000000"
        )
        .unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "bgiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: searches the current position with the
    /// pending dice and reports the best sequence. Emits an `info` line
    /// with the number of candidate sequences considered, and `info
    /// forced` when the result is a forced single-die move.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        let board = match &self.position {
            Some(b) => b,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        let dice = match self.dice {
            Some(d) => d,
            None => {
                eprintln!("go: no dice rolled");
                return;
            }
        };

        let mut candidates = 0usize;
        let result = search_with_observer(board, dice, &mut |_| candidates += 1);

        if result.score.is_finite() {
            writeln!(out, "info candidates {} score {:.5}", candidates, result.score)
                .unwrap();
        } else {
            writeln!(out, "info candidates {}", candidates).unwrap();
        }
        if result.best.is_solitude() {
            writeln!(out, "info forced").unwrap();
        }
        writeln!(out, "bestmove {}", format_sequence(&result.best)).unwrap();
        out.flush().unwrap();
    }
}
