use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    columns: Dim,
    rows: Dim,
    mines: TileCount,
}

impl DifficultyProfile {
    pub const EASY: Self = Self::new_unchecked(7, 10, 8);
    pub const HARD: Self = Self::new_unchecked(18, 27, 99);

    pub(crate) const fn new_unchecked(columns: Dim, rows: Dim, mines: TileCount) -> Self {
        Self {
            columns,
            rows,
            mines,
        }
    }

    /// Requires a non-empty board and `0 < mines < columns * rows`.
    pub fn new(columns: Dim, rows: Dim, mines: TileCount) -> Result<Self> {
        let profile = Self::new_unchecked(columns, rows, mines);
        if columns == 0 || rows == 0 || mines == 0 || mines >= profile.tile_count() {
            return Err(GameError::InvalidProfile);
        }
        Ok(profile)
    }

    pub const fn columns(&self) -> Dim {
        self.columns
    }

    pub const fn rows(&self) -> Dim {
        self.rows
    }

    pub const fn mine_count(&self) -> TileCount {
        self.mines
    }

    pub const fn tile_count(&self) -> TileCount {
        mult(self.columns, self.rows)
    }

    /// Reveals needed to win.
    pub const fn safe_tile_count(&self) -> TileCount {
        self.tile_count() - self.mines
    }

    pub const fn grid(&self) -> Grid {
        Grid::new(self.columns, self.rows)
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::default().profile()
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.profile()
    }
}

/// Named presets offered to the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile::EASY,
            Self::Hard => DifficultyProfile::HARD,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
