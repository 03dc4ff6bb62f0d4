//=========================================================================
// Tile Geometry
//=========================================================================
//
// Tile locations, directions and screen/tile unit conversions.
//
// Tile sizes are powers of two, so every conversion is a shift by the
// tilemap's scale (log2 of the tile size in pixels).
//
//=========================================================================

//=== Module Declarations =================================================

mod direction;

//=== Public API ==========================================================

pub use direction::Direction;

//=== Location ============================================================

/// A cell of a tilemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub column: i32,
    pub row: i32,
}

impl Location {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The neighbouring cell in the given direction.
    pub fn in_direction(self, direction: Direction) -> Self {
        Self {
            column: direction.column_in(self.column),
            row: direction.row_in(self.row),
        }
    }
}

//=== Conversions =========================================================

/// Largest supported tile scale (32768 px tiles). Conversions expect
/// scales in `0..=MAX_TILE_SCALE`.
pub const MAX_TILE_SCALE: u32 = 15;

/// Screen coordinate to tile coordinate.
pub fn screen_to_tile(value: i32, scale: u32) -> i32 {
    value >> scale
}

/// Tile coordinate to the screen coordinate of the tile's top/left edge.
pub fn tile_to_screen(value: i32, scale: u32) -> i32 {
    value << scale
}

/// Tile coordinate to the screen coordinate of the tile's center.
pub fn tile_to_screen_centered(value: i32, scale: u32) -> i32 {
    tile_to_screen(value, scale) + ((1 << scale) >> 1)
}

//=========================================================================
// Unit Tests
//=========================================================================
