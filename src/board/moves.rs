//! Move sequences.
//!
//! A complete move for one turn is an ordered list of up to four
//! submoves, one per usable die. Sequences are plain values: the search
//! snapshots them at every branch, so extending one branch's sequence
//! can never leak into a sibling.

use super::state::BEAR_OFF;

/// A single checker movement from one slot to another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submove {
    pub from: usize,
    pub to: usize,
}

impl Submove {
    /// The die value this submove consumed.
    ///
    /// Bear-off destinations sit one index past the opponent's bar, so
    /// the raw distance overstates the die by one and is corrected here.
    pub fn die_used(self) -> u8 {
        let mut die = self.to - self.from;
        if self.to == BEAR_OFF {
            die -= 1;
        }
        die as u8
    }
}

/// An ordered sequence of 0-4 submoves forming one complete turn.
///
/// The `solitude` flag marks a sequence that was cut short because the
/// remaining dice had no legal submove from any slot; backgammon still
/// requires the usable die to be played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSequence {
    legs: [Submove; 4],
    len: usize,
    solitude: bool,
}

impl MoveSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        MoveSequence::default()
    }

    /// Appends a submove. Panics if the sequence already holds four.
    pub fn push(&mut self, from: usize, to: usize) {
        self.legs[self.len] = Submove { from, to };
        self.len += 1;
    }

    /// Number of submoves in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the sequence holds no submoves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the submove at `index`. Panics when out of bounds.
    pub fn get(&self, index: usize) -> Submove {
        assert!(index < self.len, "submove index {index} out of bounds");
        self.legs[index]
    }

    /// Iterates the submoves in playing order.
    pub fn iter(&self) -> impl Iterator<Item = Submove> + '_ {
        self.legs[..self.len].iter().copied()
    }

    /// Marks the sequence as a forced single-die move.
    pub fn mark_solitude(&mut self) {
        self.solitude = true;
    }

    /// Returns true when the sequence is a forced single-die move.
    pub fn is_solitude(&self) -> bool {
        self.solitude
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move:{}", if self.solitude { " solitude" } else { "" })?;
        for leg in self.iter() {
            write!(f, " ({}-{})", leg.from, leg.to)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut seq = MoveSequence::new();
        assert!(seq.is_empty());
        seq.push(17, 18);
        seq.push(12, 18);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0), Submove { from: 17, to: 18 });
        assert_eq!(seq.get(1), Submove { from: 12, to: 18 });
    }

    #[test]
    fn extending_a_clone_leaves_the_original_unchanged() {
        let mut seq = MoveSequence::new();
        seq.push(12, 13);

        let mut branch = seq;
        branch.push(13, 19);
        branch.mark_solitude();

        assert_eq!(seq.len(), 1);
        assert!(!seq.is_solitude());
        assert_eq!(seq.get(0), Submove { from: 12, to: 13 });
        assert_eq!(branch.len(), 2);
    }

    #[test]
    fn die_used_is_plain_distance() {
        assert_eq!(Submove { from: 12, to: 18 }.die_used(), 6);
        assert_eq!(Submove { from: 0, to: 3 }.die_used(), 3);
    }

    #[test]
    fn die_used_adjusts_for_bear_off() {
        // Slot 24 to bear-off is a one-pip move despite the raw
        // distance of two.
        assert_eq!(Submove { from: 24, to: BEAR_OFF }.die_used(), 1);
        assert_eq!(Submove { from: 19, to: BEAR_OFF }.die_used(), 6);
    }

    #[test]
    fn display_formats_legs_and_solitude() {
        let mut seq = MoveSequence::new();
        seq.push(20, 22);
        seq.mark_solitude();
        assert_eq!(seq.to_string(), "Move: solitude (20-22)");
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let seq = MoveSequence::new();
        seq.get(0);
    }
}
