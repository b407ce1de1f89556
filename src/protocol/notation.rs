//! Position and move text notation.
//!
//! A position is the 28 signed slot counts joined by commas, in the
//! board's own slot order (mover bar, points 1-24, opponent bar, the
//! two bear-off slots). Moves are rendered as `from/to` pairs with
//! `bar` for the mover's bar and `off` for the bear-off slot, e.g.
//! `17/18 12/18` or `bar/20`.

use crate::board::{Board, MoveSequence, BAR, BEAR_OFF, SLOT_COUNT};

/// Errors that can occur while parsing a position string.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("expected {SLOT_COUNT} slot counts, got {0}")]
    WrongSlotCount(usize),

    #[error("invalid slot count: '{0}'")]
    InvalidCount(String),
}

/// Encodes a board as its comma-separated slot counts.
pub fn encode_position(board: &Board) -> String {
    board
        .slots()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a comma-separated position string.
///
/// Only the text form is checked; the backgammon structural invariants
/// are the caller's precondition, as everywhere else in the engine.
pub fn parse_position(text: &str) -> Result<Board, NotationError> {
    let entries: Vec<&str> = text.split(',').collect();
    if entries.len() != SLOT_COUNT {
        return Err(NotationError::WrongSlotCount(entries.len()));
    }

    let mut slots = [0i8; SLOT_COUNT];
    for (slot, entry) in slots.iter_mut().zip(entries.iter()) {
        *slot = entry
            .trim()
            .parse()
            .map_err(|_| NotationError::InvalidCount(entry.to_string()))?;
    }
    Ok(Board::from_slots(slots))
}

/// Renders one slot index for move output.
fn slot_name(index: usize) -> String {
    match index {
        BAR => "bar".to_string(),
        BEAR_OFF => "off".to_string(),
        _ => index.to_string(),
    }
}

/// Renders a move sequence for the `bestmove` reply. An empty sequence
/// becomes `none`.
pub fn format_sequence(sequence: &MoveSequence) -> String {
    if sequence.is_empty() {
        return "none".to_string();
    }
    sequence
        .iter()
        .map(|leg| format!("{}/{}", slot_name(leg.from), slot_name(leg.to)))
        .collect::<Vec<_>>()
        .join(" ")
}
