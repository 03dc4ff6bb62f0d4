//=========================================================================
// Core Building Blocks
//
// Host-independent pieces the `Overworld` facade is assembled from.
//
// Responsibilities:
// - `host`: the contract with the tile/sprite engine (`Host` trait)
// - `world`: maps, connections, the overworld grid, loaded-map state
// - `store`: sprite snapshots and the per-scene store stack
// - `events`: map lifecycle notifications and their reserved ids
// - `tiles`: locations, directions and unit conversions
// - `error`: the crate's error type
//
// Notes:
// Everything here is plain data plus logic over it. Side effects on the
// host only happen through `Overworld` or through functions that take a
// `Host` explicitly.
//
//=========================================================================

pub mod error;
pub mod events;
pub mod host;
pub mod store;
pub mod tiles;
pub mod world;

//=== Re-exports ==========================================================

pub use error::OverworldError;
pub use host::{Follow, Fx8, FxVec, Host, Motion, SpriteId, SpriteKind};
pub use tiles::{Direction, Location, MAX_TILE_SCALE};
pub use world::MapId;
