//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the overworld with the tile/sprite engine that hosts it.
//
// Components:
// - `interface`: the `Host` trait and the value types crossing it
//
//=========================================================================

//=== Module Declarations =================================================

mod interface;

//=== Public API ==========================================================

pub use interface::{Follow, Fx8, FxVec, Host, Motion, SpriteId, SpriteKind};
