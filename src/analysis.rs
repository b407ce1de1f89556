//! Whole-roll position analysis.
//!
//! Computes the engine's best move sequence for every one of the 21
//! distinct dice rolls of a position. Rolls are analyzed in parallel:
//! each search carries all of its state in the invocation, so the
//! fan-out needs no locking. Records are written as JSONL, one object
//! per roll.

use std::io::Write;

use rayon::prelude::*;
use serde::Serialize;

use crate::board::{Board, Dice};
use crate::protocol::notation::format_sequence;
use crate::search::search_with_observer;

/// The result of analyzing one roll of a position.
#[derive(Debug, Clone, Serialize)]
pub struct RollAnalysis {
    /// The two die values, smaller first.
    pub roll: [u8; 2],
    /// Best sequence in move notation (`none` when unplayable).
    pub best: String,
    /// Evaluation of the board the best sequence leaves behind.
    /// `None` when the roll has no legal move at all.
    pub score: Option<f32>,
    /// Whether the best sequence is a forced single-die move.
    pub forced: bool,
    /// Number of candidate sequences the search considered.
    pub candidates: usize,
}

/// The 21 distinct rolls of two dice.
fn all_rolls() -> Vec<Dice> {
    let mut rolls = Vec::with_capacity(21);
    for a in 1..=6 {
        for b in a..=6 {
            rolls.push(Dice::new(a, b).expect("die values are in range"));
        }
    }
    rolls
}

/// Analyzes every distinct roll of the position, in roll order.
pub fn analyze_position(board: &Board) -> Vec<RollAnalysis> {
    all_rolls()
        .into_par_iter()
        .map(|dice| {
            let mut candidates = 0usize;
            let result = search_with_observer(board, dice, &mut |_| candidates += 1);
            RollAnalysis {
                roll: [dice.first(), dice.second()],
                best: format_sequence(&result.best),
                score: result.score.is_finite().then_some(result.score),
                forced: result.best.is_solitude(),
                candidates,
            }
        })
        .collect()
}

/// Writes one JSON object per analyzed roll.
pub fn write_jsonl<W: Write>(records: &[RollAnalysis], out: &mut W) -> std::io::Result<()> {
    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}
