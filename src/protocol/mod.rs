//! BGI protocol support.
//!
//! Text command parsing and the position/move notation used on the
//! wire.

pub mod notation;
pub mod parser;
