use alloc::vec::Vec;

use super::*;

/// Always produces the same mines; used for scripted boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMineFieldGenerator {
    mines: Vec<TileIndex>,
}

impl FixedMineFieldGenerator {
    pub fn new(mines: impl IntoIterator<Item = TileIndex>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineFieldGenerator for FixedMineFieldGenerator {
    fn generate(&mut self, profile: &DifficultyProfile) -> Result<MineField> {
        let field = MineField::from_indices(profile.tile_count(), self.mines.iter().copied())?;
        if field.len() != profile.mine_count() {
            return Err(GameError::MineFieldGenerationFailure {
                requested: profile.mine_count(),
                tile_count: profile.tile_count(),
            });
        }
        Ok(field)
    }
}
