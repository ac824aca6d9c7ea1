//! Messages exchanged between the game host and a presentation collaborator,
//! one JSON document per line.

use mineswep_core::{Difficulty, GameError, Snapshot, TileIndex};
use serde::{Deserialize, Serialize};

/// Something the player asked for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Reveal { tile: TileIndex },
    #[serde(rename = "flag")]
    ToggleFlag { tile: TileIndex },
    #[serde(rename = "difficulty")]
    ChangeDifficulty { difficulty: Difficulty },
    Restart,
    #[serde(rename = "settings")]
    ShowSettings { open: bool },
}

/// Why a request line could not be applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Rejection {
    Game {
        error: GameError,
        message: String,
    },
    Malformed {
        message: String,
    },
}

impl From<GameError> for Rejection {
    fn from(error: GameError) -> Self {
        Self::Game {
            error,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for Rejection {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed {
            message: error.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    State {
        difficulty: Difficulty,
        settings_open: bool,
        snapshot: Box<Snapshot>,
    },
    Rejected {
        reason: Rejection,
    },
}

impl Intent {
    pub fn parse(line: &str) -> Result<Self, Rejection> {
        Ok(serde_json::from_str(line)?)
    }
}

impl Reply {
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
