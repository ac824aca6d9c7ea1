use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{TileCount, TileIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameError {
    #[error("Tile {index} is outside the board of {tile_count} tiles")]
    InvalidTileIndex {
        index: TileIndex,
        tile_count: TileCount,
    },
    #[error("Illegal operation: {reason}")]
    IllegalOperation { reason: IllegalOperation },
    #[error("Could not place {requested} distinct mines on {tile_count} tiles")]
    MineFieldGenerationFailure {
        requested: TileCount,
        tile_count: TileCount,
    },
    #[error("Mine field does not fit the difficulty profile")]
    MineFieldMismatch,
    #[error("Invalid difficulty profile")]
    InvalidProfile,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

/// Why a move was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalOperation {
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("tile is already revealed")]
    AlreadyRevealed,
    #[error("tile is flagged, unflag it first")]
    Flagged,
}

impl From<IllegalOperation> for GameError {
    fn from(reason: IllegalOperation) -> Self {
        Self::IllegalOperation { reason }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
