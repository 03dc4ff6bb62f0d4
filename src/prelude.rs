//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_overworld::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Facade
pub use crate::overworld::{MapListener, Overworld, OverworldBuilder};

// Host contract
pub use crate::core::host::{Follow, Fx8, FxVec, Host, Motion, SpriteId, SpriteKind};

// World
pub use crate::core::world::{Connection, MapId, WorldMap};

// Tiles
pub use crate::core::tiles::{Direction, Location, MAX_TILE_SCALE};

// Errors
pub use crate::core::error::OverworldError;
