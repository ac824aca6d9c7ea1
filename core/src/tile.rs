use serde::{Deserialize, Serialize};

/// What the player may see of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe tile with its touching mine count.
    Revealed(u8),
    /// Revealed mine, only ever the one that ended the game.
    Mine,
}

impl TileView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine)
    }
}
