//! Submove legality.
//!
//! Pure predicates deciding where a single die can take a single
//! checker. Both functions serve the mover's side only: the engine
//! never generates or validates opponent moves, and calling the
//! validator with an opponent-held origin is a caller bug, not a
//! recoverable condition.

use crate::board::{Board, BAR, BEAR_OFF, OPPONENT_BAR};

/// Sentinel destination for a raw sum that lands outside the legal
/// range. Always rejected by `legal_submove`'s bounds rule.
pub const NO_DESTINATION: usize = 99;

/// Computes the destination slot for moving from `from` with `die`.
///
/// `rearmost` is the mover's rearmost occupied slot, as returned by
/// [`Board::rearmost_mover_point`]. When the pip distance from that
/// slot to bear-off is smaller than the die, every checker the die can
/// reach is borne off, so the destination is forced to the bear-off
/// slot (whether that is actually legal from `from` is the validator's
/// call). A raw sum of exactly 25 lands on the opponent-bar index one
/// short of the bear-off slot; it is remapped to bear-off, which is how
/// every exact bear-off (`from + die == 25`) resolves.
pub fn destination(from: usize, die: u8, rearmost: Option<usize>) -> usize {
    let mut to = from + die as usize;
    let pips_to_off = OPPONENT_BAR - rearmost.unwrap_or(OPPONENT_BAR);
    if pips_to_off < die as usize {
        to = BEAR_OFF;
    } else {
        if to >= BEAR_OFF {
            to = NO_DESTINATION;
        }
        if to == OPPONENT_BAR {
            to = BEAR_OFF;
        }
    }
    to
}

/// Decides whether moving a mover checker from `from` to `to` with
/// `die` is legal.
///
/// # Panics
///
/// Panics when `from` does not hold a mover checker. The rules below
/// are defined for one side only; feeding the opponent's checkers
/// through them is a programming error in the caller.
pub fn legal_submove(board: &Board, die: u8, from: usize, to: usize) -> bool {
    assert!(
        board.slot(from) > 0,
        "submove validation supports the mover only; slot {from} holds {}",
        board.slot(from)
    );

    // Past the bear-off slot, or onto the opponent's bar.
    if to > BEAR_OFF {
        return false;
    }
    if to == OPPONENT_BAR {
        return false;
    }

    // A checker on the bar must re-enter before anything else moves.
    if board.slot(BAR) != 0 && from != BAR {
        return false;
    }

    let rearmost = board.rearmost_mover_point();

    if to == BEAR_OFF {
        // The slot that bears off with exactly this die.
        let exact_point = OPPONENT_BAR - die as usize;
        let exact = from == exact_point;
        // An overshooting die may only bear off the rearmost checker.
        let overshoot =
            matches!(rearmost, Some(p) if exact_point < p && from == p);
        return board.all_home() && (exact || overshoot);
    }

    // Anywhere else the die must match the distance exactly.
    if from + die as usize != to {
        return false;
    }

    // Blocked by an opponent point (two or more checkers).
    if board.slot(to) < -1 {
        return false;
    }

    true
}
