//=========================================================================
// Direction
//=========================================================================
//
// The four cardinal directions, numbered the way the host numbers
// collision sides, and their unit steps on a tile grid.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::OverworldError;

//=== Direction ===========================================================

/// Cardinal direction on a tile grid. Rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Direction {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl Direction {
    /// All directions clockwise, starting at `Top`.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Neighbouring column in this direction.
    pub fn column_in(self, column: i32) -> i32 {
        match self {
            Direction::Right => column + 1,
            Direction::Left => column - 1,
            Direction::Top | Direction::Bottom => column,
        }
    }

    /// Neighbouring row in this direction.
    pub fn row_in(self, row: i32) -> i32 {
        match self {
            Direction::Top => row - 1,
            Direction::Bottom => row + 1,
            Direction::Left | Direction::Right => row,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = OverworldError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Top),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Bottom),
            other => Err(OverworldError::UnknownDirection(other)),
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        direction as i32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
