use alloc::collections::BTreeSet;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of a game's state for the presentation layer.
///
/// Grids are shaped `(rows, columns)` and indexed `[row, column]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: DifficultyProfile,
    pub outcome: GameOutcome,
    pub revealed: BTreeSet<TileIndex>,
    pub flagged: BTreeSet<TileIndex>,
    pub touching_counts: Array2<u8>,
    pub tiles: Array2<TileView>,
    pub mines_left: i32,
    pub triggered_mine: Option<TileIndex>,
}

impl Snapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let profile = engine.profile();
        let grid = profile.grid();
        let shape = (usize::from(profile.rows()), usize::from(profile.columns()));
        let index_at = |(row, column): (usize, usize)| {
            // shape comes from the grid, so the position is always on it
            grid.index_of((row as Dim, column as Dim)).unwrap_or_default()
        };

        Self {
            profile,
            outcome: engine.outcome(),
            revealed: engine.revealed().clone(),
            flagged: engine.flagged().clone(),
            touching_counts: Array2::from_shape_fn(shape, |pos| {
                engine.touching_mine_count(index_at(pos))
            }),
            tiles: Array2::from_shape_fn(shape, |pos| engine.tile_view(index_at(pos))),
            mines_left: engine.mines_left(),
            triggered_mine: engine.triggered_mine(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.profile.grid()
    }

    fn position(&self, index: TileIndex) -> Option<[usize; 2]> {
        self.grid()
            .row_col(index)
            .map(|(row, column)| [usize::from(row), usize::from(column)])
    }

    pub fn tile(&self, index: TileIndex) -> Option<TileView> {
        self.position(index).map(|pos| self.tiles[pos])
    }

    pub fn touching_mine_count(&self, index: TileIndex) -> Option<u8> {
        self.position(index).map(|pos| self.touching_counts[pos])
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PlayEngine {
        let profile = DifficultyProfile::new(7, 10, 2).unwrap();
        let field = MineField::from_indices(70, [5, 12]).unwrap();
        PlayEngine::new(profile, field).unwrap()
    }

    #[test]
    fn from_engine_maps_views_and_counts() {
        let mut engine = engine();
        engine.toggle_flag(5).unwrap();
        engine.reveal(0).unwrap();

        let snapshot = Snapshot::from_engine(&engine);

        assert_eq!(snapshot.touching_counts.dim(), (10, 7));
        assert_eq!(snapshot.touching_counts[[0, 6]], 2);
        assert_eq!(snapshot.touching_mine_count(6), Some(2));
        assert_eq!(snapshot.tile(5), Some(TileView::Flagged));
        assert_eq!(snapshot.tile(6), Some(TileView::Hidden));
        assert_eq!(snapshot.tile(4), Some(TileView::Revealed(2)));
        assert_eq!(snapshot.tile(70), None);
        assert_eq!(snapshot.mines_left, 1);
        assert_eq!(snapshot.revealed.len(), 66);
        assert_eq!(
            snapshot.tiles.iter().filter(|tile| tile.is_revealed()).count(),
            snapshot.revealed.len()
        );
        assert_eq!(snapshot.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn serializes_to_json() {
        let mut engine = engine();
        engine.reveal(5).unwrap();
        let snapshot = Snapshot::from_engine(&engine);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["outcome"], "Lost");
        assert_eq!(json["triggered_mine"], 5);
        assert_eq!(json["revealed"], serde_json::json!([5]));

        let back: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
