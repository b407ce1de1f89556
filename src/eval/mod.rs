//! Linear position evaluation.
//!
//! Tesauro's pubeval: the board is encoded into a 122-element feature
//! vector and dotted against one of two constant weight tables, picked
//! by whether the position is still a contact position or a pure race.
//! Deliberately shallow -- it scores one resulting position, with no
//! lookahead -- but strong enough to rank the candidate sequences the
//! search enumerates.

pub mod weights;

use crate::board::{Board, BAR, BEAR_OFF};
use weights::{CONTACT_WEIGHTS, RACE_WEIGHTS};

/// Length of the feature vector.
pub const FEATURE_COUNT: usize = 122;

/// Score returned when the mover has borne off all fifteen checkers.
/// Dominates every reachable dot-product score.
pub const WIN_SCORE: f32 = 99_999_999.0;

/// Scores a board position for the mover. Higher is better.
pub fn evaluate(board: &Board) -> f32 {
    if board.borne_off() == 15 {
        return WIN_SCORE;
    }

    let x = features(board);
    let weights = if board.is_racing() {
        &RACE_WEIGHTS
    } else {
        &CONTACT_WEIGHTS
    };

    x.iter().zip(weights.iter()).map(|(xi, wi)| xi * wi).sum()
}

/// Builds the raw pubeval feature vector.
///
/// Points are visited from the mover's home outward (`pos[25 - j]`),
/// five features per point: lone opponent checker, lone mover checker,
/// made point, exactly three checkers, and a linear term for stacks of
/// four or more. Two scalar features follow: the slot-0 bar count
/// (negated, halved) and the borne-off count normalized by 15.
pub(crate) fn features(board: &Board) -> [f32; FEATURE_COUNT] {
    let mut x = [0.0f32; FEATURE_COUNT];

    for j in 1..=24 {
        let n = board.slot(25 - j) as i32;
        if n == 0 {
            continue;
        }
        let base = 5 * (j - 1);
        if n == -1 {
            x[base] = 1.0;
        }
        if n == 1 {
            x[base + 1] = 1.0;
        }
        if n >= 2 {
            x[base + 2] = 1.0;
        }
        if n == 3 {
            x[base + 3] = 1.0;
        }
        if n >= 4 {
            x[base + 4] = (n - 3) as f32 / 2.0;
        }
    }

    x[120] = -(board.slot(BAR) as f32) / 2.0;
    x[121] = board.slot(BEAR_OFF) as f32 / 15.0;

    x
}
