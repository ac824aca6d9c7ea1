/// Single grid axis, used for column and row counts and for row/column positions.
pub type Dim = u8;

/// Linear row-major tile address: `row * columns + column`.
pub type TileIndex = u16;

/// Count type used for mine counts and total-tile counts.
pub type TileCount = u16;

/// Row and column of a tile.
pub type RowCol = (Dim, Dim);

pub const fn mult(a: Dim, b: Dim) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}
