//! Best-move search.
//!
//! Enumerates every legal complete move sequence for the mover by
//! recursing over the die-usage array, scores the board each sequence
//! leaves behind, and folds the candidates into a running best. Each
//! recursion branch owns its own board and sequence copies, so sibling
//! branches never observe each other's mutations, and all search state
//! lives in the invocation -- the entry points are safe to call from
//! any number of threads at once.

use crate::board::{Board, Dice, MoveSequence};
use crate::eval::evaluate;
use crate::movegen::{destination, legal_submove};

/// Outcome of a search: the best sequence and the score of the board it
/// produces. The score stays at negative infinity when no sequence was
/// playable at all.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best: MoveSequence,
    pub score: f32,
}

/// Selects the best move sequence for the mover.
///
/// Total and deterministic: always returns a sequence, at worst a
/// zero-submove one when the roll cannot be played (for example a bar
/// checker facing a closed home board).
pub fn select_best_move(board: &Board, dice: Dice) -> MoveSequence {
    search_with_observer(board, dice, &mut |_| {}).best
}

/// Like [`select_best_move`], but invokes `observer` once per finalized
/// candidate sequence before it is scored. The observer receives a
/// read-only view and cannot influence the result.
pub fn search_with_observer(
    board: &Board,
    dice: Dice,
    observer: &mut dyn FnMut(&MoveSequence),
) -> SearchResult {
    let mut fold = Fold {
        best: MoveSequence::new(),
        max_score: f32::NEG_INFINITY,
        observer,
    };

    recurse(board, &dice.slots(), 0, &MoveSequence::new(), &mut fold);
    if !dice.is_double() {
        // A non-double must be tried in both die orders: using die A
        // first can reach sequences the opposite order cannot.
        recurse(
            board,
            &dice.swapped().slots(),
            0,
            &MoveSequence::new(),
            &mut fold,
        );
    }

    SearchResult {
        best: fold.best,
        score: fold.max_score,
    }
}

/// Running best-so-far, updated once per finalized candidate.
struct Fold<'a> {
    best: MoveSequence,
    max_score: f32,
    observer: &'a mut dyn FnMut(&MoveSequence),
}

impl Fold<'_> {
    /// Offers a finalized candidate: notify the observer, score the
    /// resulting board, and maybe adopt the candidate as best.
    ///
    /// When the incumbent and the candidate are both solitude moves,
    /// the score is overridden by the rule that the move using the
    /// larger die must be played.
    fn offer(&mut self, board: &Board, candidate: &MoveSequence) {
        (self.observer)(candidate);

        let score = evaluate(board);

        if self.best.is_solitude() && candidate.is_solitude() {
            let best_die = self.best.get(0).die_used();
            let candidate_die = candidate.get(0).die_used();
            if candidate_die > best_die {
                self.best = *candidate;
                self.max_score = score;
            }
        } else if score > self.max_score {
            self.best = *candidate;
            self.max_score = score;
        }
    }
}

/// Recursive enumeration over the die-usage array.
///
/// `depth` indexes into `dice`; a depth of 4 or a zero slot means the
/// usable dice are exhausted and the sequence is complete. Otherwise
/// every slot holding a mover checker (bar included) is tried with the
/// current die, and each legal submove branches into fresh board and
/// sequence copies one depth deeper.
fn recurse(
    board: &Board,
    dice: &[u8; 4],
    depth: usize,
    sequence: &MoveSequence,
    fold: &mut Fold<'_>,
) {
    if depth == 4 || dice[depth] == 0 {
        fold.offer(board, sequence);
        return;
    }

    let die = dice[depth];
    let rearmost = board.rearmost_mover_point();
    let mut tried = 0;

    for from in 0..=24 {
        if board.slot(from) <= 0 {
            continue;
        }
        let to = destination(from, die, rearmost);
        if legal_submove(board, die, from, to) {
            let mut next_board = *board;
            next_board.apply(from, to);

            let mut next_sequence = *sequence;
            next_sequence.push(from, to);

            recurse(&next_board, dice, depth + 1, &next_sequence, fold);
            tried += 1;
        }
    }

    // No continuation with this die. If the sequence already holds a
    // submove it is the forced single-die move the rules still require,
    // so finalize it marked solitude. An empty sequence means the whole
    // roll is unplayable from this branch and contributes nothing.
    if tried == 0 && !sequence.is_empty() {
        let mut forced = *sequence;
        forced.mark_solitude();
        fold.offer(board, &forced);
    }
}
