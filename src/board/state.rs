//! Checker-count board state.
//!
//! The board is a fixed array of 28 signed counts, oriented for the side
//! the engine plays ("the mover"). Positive counts are mover checkers,
//! negative counts are opponent checkers. Moving a checker increases its
//! slot index, so the mover's home board is slots 19-24 and bearing off
//! lands on slot 26.
//!
//! Uses a fixed-size array for O(1) lookup and to keep the state
//! trivially copyable: the search clones the board at every branch.

/// Number of slots in the board encoding.
pub const SLOT_COUNT: usize = 28;

/// The mover's bar. A checker here must re-enter before anything else moves.
pub const BAR: usize = 0;

/// The opponent's bar. Stored non-positive; never a legal mover destination.
pub const OPPONENT_BAR: usize = 25;

/// The mover's bear-off slot. Reaching a count of 15 here is a won game.
pub const BEAR_OFF: usize = 26;

/// The opponent's bear-off slot. Bookkeeping only; the evaluator ignores it.
pub const OPPONENT_BEAR_OFF: usize = 27;

/// First slot of the mover's home board. A side may only bear off once
/// its rearmost checker is past this boundary.
const HOME_BOUNDARY: usize = 18;

/// Complete board snapshot for one search branch.
///
/// The 15-checkers-per-side invariant is a caller precondition; the
/// engine never validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [i8; SLOT_COUNT],
}

impl Board {
    /// Creates a board with no checkers anywhere.
    pub const fn empty() -> Self {
        Board {
            slots: [0; SLOT_COUNT],
        }
    }

    /// Creates the standard backgammon opening position, oriented for
    /// the mover.
    pub fn opening() -> Self {
        let mut board = Board::empty();
        board.slots[1] = 2;
        board.slots[6] = -5;
        board.slots[8] = -3;
        board.slots[12] = 5;
        board.slots[13] = -5;
        board.slots[17] = 3;
        board.slots[19] = 5;
        board.slots[24] = -2;
        board
    }

    /// Creates a board from a raw 28-count array.
    pub const fn from_slots(slots: [i8; SLOT_COUNT]) -> Self {
        Board { slots }
    }

    /// Returns the signed checker count at a slot.
    #[inline]
    pub fn slot(&self, index: usize) -> i8 {
        self.slots[index]
    }

    /// Sets the signed checker count at a slot.
    pub fn set_slot(&mut self, index: usize, count: i8) {
        self.slots[index] = count;
    }

    /// Returns the raw slot array.
    pub fn slots(&self) -> &[i8; SLOT_COUNT] {
        &self.slots
    }

    /// Number of mover checkers already borne off.
    #[inline]
    pub fn borne_off(&self) -> i8 {
        self.slots[BEAR_OFF]
    }

    /// Plays a single submove on this board.
    ///
    /// Precondition: the submove has been validated. A lone opponent
    /// checker on the destination is hit and sent to the opponent's bar.
    pub fn apply(&mut self, from: usize, to: usize) {
        if self.slots[to] == -1 {
            self.slots[OPPONENT_BAR] -= 1;
            self.slots[to] = 0;
        }
        self.slots[from] -= 1;
        self.slots[to] += 1;
    }

    /// Index of the mover's rearmost occupied slot (bar included), or
    /// `None` when no mover checker remains on slots 0..=24.
    ///
    /// "Rearmost" is the slot farthest from bear-off, i.e. the lowest
    /// occupied index.
    #[inline]
    pub fn rearmost_mover_point(&self) -> Option<usize> {
        (0..=24).find(|&i| self.slots[i] > 0)
    }

    /// Index of the opponent's rearmost occupied slot (their bar
    /// included), or `None` when no opponent checker remains on slots
    /// 1..=25. For the opponent, rearmost means the highest index.
    #[inline]
    pub fn opponent_rearmost_point(&self) -> Option<usize> {
        (1..=25).rev().find(|&i| self.slots[i] < 0)
    }

    /// Returns true when the position is a pure race: the mover's
    /// rearmost checker is already past the opponent's rearmost checker,
    /// so no further contact is possible.
    pub fn is_racing(&self) -> bool {
        let mover = self.rearmost_mover_point().unwrap_or(OPPONENT_BAR);
        let opponent = self.opponent_rearmost_point().unwrap_or(0);
        mover > opponent
    }

    /// Returns true when every remaining mover checker is in the home
    /// board, the precondition for bearing off.
    #[inline]
    pub fn all_home(&self) -> bool {
        matches!(self.rearmost_mover_point(), Some(p) if p > HOME_BOUNDARY)
    }
}
