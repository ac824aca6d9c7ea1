#![no_std]

//! Minesweeper game rules: grid topology, mine placement and the reveal and
//! flag state machine. Presentation lives outside this crate and talks to a
//! [`Game`] through [`Snapshot`]s.

extern crate alloc;

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use minefield::*;
pub use snapshot::*;
pub use tile::*;
pub use topology::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod game;
mod generator;
mod minefield;
mod snapshot;
mod tile;
mod topology;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Safe tiles opened, counting the cascade.
    Revealed(TileCount),
    HitMine,
    Won,
}
