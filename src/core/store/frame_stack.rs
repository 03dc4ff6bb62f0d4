//=========================================================================
// Store Stack
//=========================================================================
//
// Stored sprites, scoped to the scene nesting level that stored them.
//
// Architecture:
//   StoreStack
//     └─ frames: Vec<StoreFrame>      (one per scene level, top = current)
//          └─ Option<MapId> → Vec<SpriteSnapshot>
//
// The key is the map loaded at store time; storing while no map is
// loaded files the sprites under `None`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::SpriteSnapshot;
use crate::core::world::MapId;

//=== StoreFrame ==========================================================

/// Snapshots stored at one scene level, grouped by map.
#[derive(Debug)]
pub struct StoreFrame<I, D> {
    stored: HashMap<Option<MapId>, Vec<SpriteSnapshot<I, D>>>,
}

impl<I, D> StoreFrame<I, D> {
    fn new() -> Self {
        Self {
            stored: HashMap::new(),
        }
    }

    /// Number of snapshots stored for `map`.
    pub fn stored_count(&self, map: Option<MapId>) -> usize {
        self.stored.get(&map).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }
}

//=== StoreStack ==========================================================

/// Stack of store frames following the host's scene stack.
#[derive(Debug)]
pub struct StoreStack<I, D> {
    frames: Vec<StoreFrame<I, D>>,
}

impl<I, D> StoreStack<I, D> {
    //--- Construction -----------------------------------------------------

    /// Creates a stack holding the frame of the base scene.
    pub fn new() -> Self {
        Self {
            frames: vec![StoreFrame::new()],
        }
    }

    //--- Scene Levels -----------------------------------------------------

    /// Enters a nested scene level with an empty frame.
    pub fn push_frame(&mut self) {
        self.frames.push(StoreFrame::new());
        debug!("Pushed sprite store frame, depth {}", self.frames.len());
    }

    /// Leaves the current scene level, discarding what it stored.
    pub fn pop_frame(&mut self) {
        match self.frames.pop() {
            Some(frame) if !frame.is_empty() => {
                debug!(
                    "Popped sprite store frame with stored sprites, depth {}",
                    self.frames.len()
                );
            }
            Some(_) => debug!("Popped sprite store frame, depth {}", self.frames.len()),
            None => warn!("Popped sprite store frame with no frame on the stack"),
        }
    }

    /// Number of frames currently on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The frame of the current scene level, if any.
    pub fn current(&self) -> Option<&StoreFrame<I, D>> {
        self.frames.last()
    }

    /// The frame of the current scene level, recreating a base frame if
    /// more levels were popped than pushed.
    fn current_mut(&mut self) -> &mut StoreFrame<I, D> {
        if self.frames.is_empty() {
            self.frames.push(StoreFrame::new());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    //--- Snapshots --------------------------------------------------------

    /// Appends `snapshots` to those already stored for `map`.
    pub fn store(&mut self, map: Option<MapId>, snapshots: Vec<SpriteSnapshot<I, D>>) {
        self.current_mut()
            .stored
            .entry(map)
            .or_default()
            .extend(snapshots);
    }

    /// Removes and returns everything stored for `map` at this level.
    pub fn take(&mut self, map: Option<MapId>) -> Option<Vec<SpriteSnapshot<I, D>>> {
        self.current_mut().stored.remove(&map)
    }

    /// Number of snapshots stored for `map` at this level.
    pub fn stored_count(&self, map: Option<MapId>) -> usize {
        self.current().map_or(0, |frame| frame.stored_count(map))
    }
}

impl<I, D> Default for StoreStack<I, D> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
