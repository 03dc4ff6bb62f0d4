//=========================================================================
// Overworld Sprites
//=========================================================================
//
// Storing the sprites of the loaded map and restoring them later.
//
// Stored sprites are retagged to the internal stored kind before being
// destroyed, so game destroy handlers for their real kind do not run.
// Restored sprites get new host ids.
//
// Might not suit every game: anything the snapshot does not capture
// (flags, z, lifespan, ...) comes back with host defaults.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::Overworld;
use crate::core::host::{Host, SpriteId, SpriteKind};
use crate::core::store::SpriteSnapshot;

impl<H: Host> Overworld<H> {
    /// Stores every sprite of `kind` for the loaded map and removes them
    /// from the host. Returns how many sprites were stored.
    pub fn store_sprites_by_kind_for_loaded_map(&mut self, kind: SpriteKind) -> usize {
        let sprites = self.host.sprites_of_kind(kind);
        self.store_for_loaded_map(sprites)
    }

    /// Stores every sprite of every kind for the loaded map and removes
    /// them from the host. Returns how many sprites were stored.
    pub fn store_all_sprites_for_loaded_map(&mut self) -> usize {
        let sprites: Vec<SpriteId> = self
            .host
            .sprite_kinds()
            .into_iter()
            .flat_map(|kind| self.host.sprites_of_kind(kind))
            .collect();
        self.store_for_loaded_map(sprites)
    }

    /// Recreates the sprites stored for the loaded map at the current
    /// scene level and forgets them. Returns the new sprite ids.
    ///
    /// Follow relationships are re-linked only to sprites that are alive
    /// at restore time.
    pub fn restore_sprites_for_loaded_map(&mut self) -> Vec<SpriteId> {
        let map = self.world.loaded();
        let Some(snapshots) = self.store.take(map) else {
            return Vec::new();
        };

        let staging = self.stored_kind;
        let restored: Vec<SpriteId> = snapshots
            .into_iter()
            .map(|snapshot| snapshot.recreate(&mut self.host, staging))
            .collect();

        debug!("Restored {} sprites for map {:?}", restored.len(), map);
        restored
    }

    /// Number of sprites stored for the loaded map at the current scene
    /// level.
    pub fn stored_sprite_count_for_loaded_map(&self) -> usize {
        self.store.stored_count(self.world.loaded())
    }

    fn store_for_loaded_map(&mut self, sprites: Vec<SpriteId>) -> usize {
        if sprites.is_empty() {
            return 0;
        }

        let mut snapshots = Vec::with_capacity(sprites.len());
        for sprite in sprites {
            snapshots.push(SpriteSnapshot::capture(&mut self.host, sprite));
            self.host.set_sprite_kind(sprite, self.stored_kind);
            self.host.destroy_sprite(sprite);
        }

        let count = snapshots.len();
        let map = self.world.loaded();
        self.store.store(map, snapshots);
        debug!("Stored {} sprites for map {:?}", count, map);
        count
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
