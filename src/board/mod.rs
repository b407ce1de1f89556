//! Board representation.
//!
//! Holds the checker layout for one half-move of backgammon, the dice
//! roll abstraction, and the move-sequence value type produced by the
//! search.

pub mod dice;
pub mod moves;
pub mod state;

pub use dice::Dice;
pub use moves::{MoveSequence, Submove};
pub use state::{Board, BAR, BEAR_OFF, OPPONENT_BAR, OPPONENT_BEAR_OFF, SLOT_COUNT};
