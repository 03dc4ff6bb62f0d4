//=========================================================================
// World
//=========================================================================
//
// Data side of the overworld: maps, their connections and the grid.
//
// Architecture:
//   WorldRegistry
//     ├─ WorldMap ── Vec<Connection>   (graph addressing)
//     └─ WorldGrid ── (col,row) → MapId (grid addressing)
//
// Nothing here talks to the host; `Overworld` drives the side effects.
//
//=========================================================================

//=== Module Declarations =================================================

mod grid;
mod map;
mod registry;

//=== Public API ==========================================================

pub use grid::WorldGrid;
pub use map::{Connection, MapId, WorldMap};
pub use registry::{WorldRegistry, UNSET_WORLD_LOCATION};
