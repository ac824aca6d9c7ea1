use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Neighbor indices of a single tile, at most eight.
pub type Neighbors = SmallVec<[TileIndex; 8]>;

/// Neighbors of `index` on a `columns` x `rows` grid, in ascending index order.
pub fn neighbors(index: TileIndex, columns: Dim, rows: Dim) -> Neighbors {
    Grid::new(columns, rows).neighbors(index)
}

/// One of the eight steps from a tile to an adjacent tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Every direction, ordered so that applying them yields ascending indices.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    pub const fn is_up(self) -> bool {
        matches!(self, Self::UpLeft | Self::Up | Self::UpRight)
    }

    pub const fn is_down(self) -> bool {
        matches!(self, Self::DownLeft | Self::Down | Self::DownRight)
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Self::UpLeft | Self::Left | Self::DownLeft)
    }

    pub const fn is_right(self) -> bool {
        matches!(self, Self::UpRight | Self::Right | Self::DownRight)
    }
}

/// Where a tile sits on the board, which decides its neighbor set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TilePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopEdge,
    LeftEdge,
    RightEdge,
    BottomEdge,
    Interior,
}

impl TilePosition {
    /// Classifies `index`, checking corners before edges. `None` when the
    /// index is off the board, which includes every index of an empty grid.
    ///
    /// Only meaningful for grids with at least two rows and two columns; on a
    /// single row or column several classes collapse into one and the first
    /// matching branch wins.
    pub fn classify(index: TileIndex, grid: Grid) -> Option<Self> {
        use TilePosition::*;

        if !grid.contains(index) {
            return None;
        }

        let columns = TileIndex::from(grid.columns);
        let last_row_start = columns * TileIndex::from(grid.rows).saturating_sub(1);

        Some(if index == 0 {
            TopLeft
        } else if index == columns.saturating_sub(1) {
            TopRight
        } else if index == last_row_start {
            BottomLeft
        } else if index == grid.tile_count().saturating_sub(1) {
            BottomRight
        } else if index < columns {
            TopEdge
        } else if index % columns == 0 {
            LeftEdge
        } else if index % columns == columns.saturating_sub(1) {
            RightEdge
        } else if index > last_row_start {
            BottomEdge
        } else {
            Interior
        })
    }

    /// Directions that stay on the board from a tile in this position.
    pub const fn directions(self) -> &'static [Direction] {
        use Direction::*;
        use TilePosition::*;

        match self {
            TopLeft => &[Right, Down, DownRight],
            TopRight => &[Left, DownLeft, Down],
            BottomLeft => &[Up, UpRight, Right],
            BottomRight => &[UpLeft, Up, Left],
            TopEdge => &[Left, Right, DownLeft, Down, DownRight],
            LeftEdge => &[Up, UpRight, Right, Down, DownRight],
            RightEdge => &[UpLeft, Up, Left, DownLeft, Down],
            BottomEdge => &[UpLeft, Up, UpRight, Left, Right],
            Interior => &Direction::ALL,
        }
    }

    pub const fn neighbor_count(self) -> usize {
        self.directions().len()
    }
}

/// Board shape: row-major tiles, `columns` wide and `rows` tall.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: Dim,
    pub rows: Dim,
}

impl Grid {
    pub const fn new(columns: Dim, rows: Dim) -> Self {
        Self { columns, rows }
    }

    pub const fn tile_count(self) -> TileCount {
        mult(self.columns, self.rows)
    }

    pub const fn contains(self, index: TileIndex) -> bool {
        index < self.tile_count()
    }

    pub fn validate(self, index: TileIndex) -> Result<TileIndex> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidTileIndex {
                index,
                tile_count: self.tile_count(),
            })
        }
    }

    /// `None` for an index off the board.
    pub fn row_col(self, index: TileIndex) -> Option<RowCol> {
        if !self.contains(index) {
            return None;
        }
        let columns = TileIndex::from(self.columns);
        // both fit in a Dim because index < columns * rows
        Some(((index / columns) as Dim, (index % columns) as Dim))
    }

    pub fn index_of(self, (row, column): RowCol) -> Option<TileIndex> {
        (row < self.rows && column < self.columns)
            .then(|| TileIndex::from(row) * TileIndex::from(self.columns) + TileIndex::from(column))
    }

    pub fn position(self, index: TileIndex) -> Option<TilePosition> {
        TilePosition::classify(index, self)
    }

    /// Index one step away in `direction`, if that step stays on the board.
    pub fn step(self, index: TileIndex, direction: Direction) -> Option<TileIndex> {
        let (row, column) = self.row_col(index)?;
        if (direction.is_up() && row == 0)
            || (direction.is_down() && row + 1 >= self.rows)
            || (direction.is_left() && column == 0)
            || (direction.is_right() && column + 1 >= self.columns)
        {
            return None;
        }

        let columns = TileIndex::from(self.columns);
        let mut next = index;
        if direction.is_up() {
            next -= columns;
        }
        if direction.is_down() {
            next += columns;
        }
        if direction.is_left() {
            next -= 1;
        }
        if direction.is_right() {
            next += 1;
        }
        Some(next)
    }

    /// All in-bounds tiles adjacent to `index` (rows and columns differ by at
    /// most one, not both zero), ascending. Empty for an out-of-range index.
    pub fn neighbors(self, index: TileIndex) -> Neighbors {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.step(index, direction))
            .collect()
    }

    /// Number of neighbors of `index` holding a mine.
    pub fn touching_mine_count(self, index: TileIndex, mine_field: &MineField) -> u8 {
        self.neighbors(index)
            .into_iter()
            .filter(|&neighbor| mine_field.contains(neighbor))
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn is_adjacent(grid: Grid, a: TileIndex, b: TileIndex) -> bool {
        let (ra, ca) = grid.row_col(a).unwrap();
        let (rb, cb) = grid.row_col(b).unwrap();
        ra.abs_diff(rb) <= 1 && ca.abs_diff(cb) <= 1 && a != b
    }

    #[test]
    fn corners_match_classification() {
        assert_eq!(neighbors(0, 7, 10).as_slice(), &[1, 7, 8]);
        assert_eq!(neighbors(6, 7, 10).as_slice(), &[5, 12, 13]);
        assert_eq!(neighbors(63, 7, 10).as_slice(), &[56, 57, 64]);
        assert_eq!(neighbors(69, 7, 10).as_slice(), &[61, 62, 68]);
    }

    #[test]
    fn edges_and_interior_match_classification() {
        assert_eq!(neighbors(3, 7, 10).as_slice(), &[2, 4, 9, 10, 11]);
        assert_eq!(neighbors(14, 7, 10).as_slice(), &[7, 8, 15, 21, 22]);
        assert_eq!(neighbors(20, 7, 10).as_slice(), &[12, 13, 19, 26, 27]);
        assert_eq!(neighbors(66, 7, 10).as_slice(), &[58, 59, 60, 65, 67]);
        assert_eq!(
            neighbors(8, 7, 10).as_slice(),
            &[0, 1, 2, 7, 9, 14, 15, 16]
        );
    }

    #[test]
    fn every_tile_has_three_five_or_eight_adjacent_neighbors() {
        for grid in [Grid::new(7, 10), Grid::new(18, 27), Grid::new(2, 2), Grid::new(3, 2)] {
            for index in 0..grid.tile_count() {
                let found = grid.neighbors(index);
                let position = grid.position(index).unwrap();

                assert_eq!(found.len(), position.neighbor_count(), "tile {index}");
                assert!(matches!(found.len(), 3 | 5 | 8));

                let expected: Vec<_> = position
                    .directions()
                    .iter()
                    .filter_map(|&direction| grid.step(index, direction))
                    .collect();
                assert_eq!(expected.len(), found.len(), "tile {index} {position:?}");

                for &neighbor in &found {
                    assert!(grid.contains(neighbor));
                    assert!(is_adjacent(grid, index, neighbor));
                }
                assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn classify_hard_board_positions() {
        let grid = Grid::new(18, 27);
        assert_eq!(grid.position(0), Some(TilePosition::TopLeft));
        assert_eq!(grid.position(17), Some(TilePosition::TopRight));
        assert_eq!(grid.position(468), Some(TilePosition::BottomLeft));
        assert_eq!(grid.position(485), Some(TilePosition::BottomRight));
        assert_eq!(grid.position(9), Some(TilePosition::TopEdge));
        assert_eq!(grid.position(36), Some(TilePosition::LeftEdge));
        assert_eq!(grid.position(53), Some(TilePosition::RightEdge));
        assert_eq!(grid.position(470), Some(TilePosition::BottomEdge));
        assert_eq!(grid.position(100), Some(TilePosition::Interior));
    }

    #[test]
    fn single_row_and_column_grids_stay_in_bounds() {
        let row = Grid::new(4, 1);
        assert_eq!(row.neighbors(0).as_slice(), &[1]);
        assert_eq!(row.neighbors(2).as_slice(), &[1, 3]);

        let column = Grid::new(1, 3);
        assert_eq!(column.neighbors(1).as_slice(), &[0, 2]);

        assert!(Grid::new(1, 1).neighbors(0).is_empty());
    }

    #[test]
    fn out_of_range_index_has_no_neighbors() {
        let grid = Grid::new(7, 10);
        assert!(grid.neighbors(70).is_empty());
        assert_eq!(
            grid.validate(70),
            Err(GameError::InvalidTileIndex {
                index: 70,
                tile_count: 70
            })
        );
    }

    #[test]
    fn touching_count_is_exact() {
        let grid = Grid::new(7, 10);
        let field = MineField::from_indices(70, [5, 12, 13, 7]).unwrap();

        assert_eq!(grid.touching_mine_count(6, &field), 3);
        assert_eq!(grid.touching_mine_count(0, &field), 1);
        assert_eq!(grid.touching_mine_count(40, &field), 0);

        for index in 0..grid.tile_count() {
            let expected = grid
                .neighbors(index)
                .iter()
                .filter(|&&n| field.contains(n))
                .count();
            assert_eq!(usize::from(grid.touching_mine_count(index, &field)), expected);
        }
    }

    #[test]
    fn empty_grid_has_no_positions() {
        let grid = Grid::new(0, 5);
        assert_eq!(grid.position(1), None);
        assert_eq!(grid.row_col(1), None);
        assert!(grid.neighbors(0).is_empty());
        assert_eq!(TilePosition::classify(0, Grid::new(5, 0)), None);
    }

    #[test]
    fn row_col_round_trips_through_index_of() {
        let grid = Grid::new(7, 10);
        assert_eq!(grid.row_col(23), Some((3, 2)));
        assert_eq!(grid.row_col(70), None);
        assert_eq!(grid.index_of((3, 2)), Some(23));
        assert_eq!(grid.index_of((10, 0)), None);
    }
}
