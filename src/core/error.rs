//=========================================================================
// Overworld Errors
//=========================================================================
//
// Lookups of absent state answer with `None`. This type covers the few
// inputs that are invalid rather than merely absent.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::world::MapId;

//=== OverworldError ======================================================

/// Invalid input to an overworld operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverworldError {
    /// The map handle was not created by this overworld.
    UnknownMap(MapId),

    /// The number does not name one of the four cardinal directions.
    UnknownDirection(i32),
}

impl std::fmt::Display for OverworldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMap(id) => write!(f, "Unknown map handle: {}", id),
            Self::UnknownDirection(n) => write!(f, "Unknown direction: {}", n),
        }
    }
}

impl std::error::Error for OverworldError {}

//=========================================================================
// Unit Tests
//=========================================================================
