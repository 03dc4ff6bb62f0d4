//=========================================================================
// Sprite Store
//=========================================================================
//
// Keeps sprites of a map alive across map switches without keeping them
// in the host.
//
// Flow:
//   store:   host sprite → SpriteSnapshot::capture → retag → destroy
//                                ↓
//            StoreStack (current frame, keyed by loaded map)
//                                ↓
//   restore: SpriteSnapshot::recreate → host sprite (new id)
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_stack;
mod snapshot;

//=== Public API ==========================================================

pub use frame_stack::{StoreFrame, StoreStack};
pub use snapshot::SpriteSnapshot;
