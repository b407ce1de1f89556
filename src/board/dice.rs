//! Dice roll abstraction.
//!
//! A roll is two die values 1-6. A double grants four usable die
//! values; a non-double grants two, and the search must try both
//! orderings since playing die A before die B can reach sequences the
//! opposite order cannot.

use rand::Rng;

/// A validated two-die roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    first: u8,
    second: u8,
}

impl Dice {
    /// Creates a roll from two die values. Returns `None` if either
    /// value is outside 1..=6.
    pub fn new(first: u8, second: u8) -> Option<Dice> {
        if (1..=6).contains(&first) && (1..=6).contains(&second) {
            Some(Dice { first, second })
        } else {
            None
        }
    }

    /// Rolls two dice from the given RNG.
    pub fn roll(rng: &mut impl Rng) -> Dice {
        Dice {
            first: rng.gen_range(1..=6),
            second: rng.gen_range(1..=6),
        }
    }

    /// The first die value.
    pub fn first(self) -> u8 {
        self.first
    }

    /// The second die value.
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns true when both dice show the same value.
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    /// Expands the roll into the 4-slot die-usage array the search
    /// recursion consumes: a double fills all four slots, a non-double
    /// fills the first two and zeroes the rest.
    pub fn slots(self) -> [u8; 4] {
        if self.is_double() {
            [self.first; 4]
        } else {
            [self.first, self.second, 0, 0]
        }
    }

    /// The same roll with the die order swapped.
    pub fn swapped(self) -> Dice {
        Dice {
            first: self.second,
            second: self.first,
        }
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
