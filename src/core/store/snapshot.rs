//=========================================================================
// Sprite Snapshot
//=========================================================================
//
// Everything needed to recreate a sprite after it has been removed from
// the host: image, kind, motion, follow relationship and user data.
//
// Follow targets are recorded by host sprite id. A target that is itself
// stored gets a new id when restored, so a follow between two sprites of
// the same stored batch cannot be re-linked.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::host::{Follow, Host, Motion, SpriteId, SpriteKind};

//=== SpriteSnapshot ======================================================

/// Captured state of a removed sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSnapshot<I, D> {
    pub image: I,
    pub kind: SpriteKind,
    pub motion: Motion,
    pub follow: Option<Follow>,
    pub data: D,
}

impl<I, D> SpriteSnapshot<I, D> {
    /// Captures `sprite`, moving its user data out of the host.
    pub fn capture<H>(host: &mut H, sprite: SpriteId) -> Self
    where
        H: Host<Image = I, Data = D>,
    {
        Self {
            image: host.sprite_image(sprite),
            kind: host.sprite_kind(sprite),
            motion: host.motion(sprite),
            follow: host.following(sprite),
            data: host.take_sprite_data(sprite),
        }
    }

    /// Recreates the sprite on the host and returns its new id.
    ///
    /// The sprite is created under `staging_kind` and only then retagged,
    /// so created handlers of the real kind do not run a second time.
    pub fn recreate<H>(self, host: &mut H, staging_kind: SpriteKind) -> SpriteId
    where
        H: Host<Image = I, Data = D>,
    {
        let sprite = host.create_sprite(self.image, staging_kind);
        host.set_motion(sprite, self.motion);
        host.set_sprite_kind(sprite, self.kind);

        if let Some(follow) = self.follow {
            if let Some(target) = find_live_sprite(host, follow.target) {
                host.follow(sprite, Follow { target, ..follow });
            }
        }

        host.set_sprite_data(sprite, self.data);
        sprite
    }
}

//=== Helpers =============================================================

/// Searches every sprite set for a live, not destroyed sprite with `id`.
fn find_live_sprite<H: Host>(host: &H, id: SpriteId) -> Option<SpriteId> {
    host.sprite_kinds()
        .into_iter()
        .flat_map(|kind| host.sprites_of_kind(kind))
        .find(|&sprite| sprite == id)
        .filter(|&sprite| !host.is_destroyed(sprite))
}

//=========================================================================
// Unit Tests
//=========================================================================
