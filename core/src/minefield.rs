use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed set of mined tiles for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineField {
    mine_mask: Vec<bool>,
    mine_count: TileCount,
}

impl MineField {
    /// Samples `mine_count` distinct tiles uniformly from `0..tile_count`.
    pub fn generate<R: Rng + ?Sized>(
        tile_count: TileCount,
        mine_count: TileCount,
        rng: &mut R,
    ) -> Result<Self> {
        let failure = GameError::MineFieldGenerationFailure {
            requested: mine_count,
            tile_count,
        };

        if mine_count == 0 || mine_count >= tile_count {
            log::warn!("Cannot place {mine_count} mines on {tile_count} tiles");
            return Err(failure);
        }

        let picks = rand::seq::index::sample(rng, tile_count.into(), mine_count.into());
        let mut mine_mask = vec![false; tile_count.into()];
        for index in picks.iter() {
            mine_mask[index] = true;
        }

        let field = Self::from_mine_mask(mine_mask);
        if field.mine_count != mine_count {
            log::warn!(
                "Generated mine field count mismatch, actual: {}, requested: {}",
                field.mine_count,
                mine_count
            );
            return Err(failure);
        }
        Ok(field)
    }

    /// Builds a field from explicit mine indices; repeated indices count once.
    pub fn from_indices(
        tile_count: TileCount,
        indices: impl IntoIterator<Item = TileIndex>,
    ) -> Result<Self> {
        let mut mine_mask = vec![false; tile_count.into()];
        for index in indices {
            let slot = mine_mask
                .get_mut(usize::from(index))
                .ok_or(GameError::InvalidTileIndex { index, tile_count })?;
            *slot = true;
        }
        Ok(Self::from_mine_mask(mine_mask))
    }

    fn from_mine_mask(mine_mask: Vec<bool>) -> Self {
        // mask length is a TileCount, so the count fits too
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as TileCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        self.mine_mask
            .get(usize::from(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn len(&self) -> TileCount {
        self.mine_count
    }

    pub fn is_empty(&self) -> bool {
        self.mine_count == 0
    }

    pub fn tile_count(&self) -> TileCount {
        self.mine_mask.len() as TileCount
    }

    /// Mined tiles in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.mine_mask
            .iter()
            .enumerate()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(index, _)| index as TileIndex)
    }
}
