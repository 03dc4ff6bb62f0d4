//=========================================================================
// Overworld
//=========================================================================
//
// Context object tying the world registry, the sprite store and the
// listeners to one host engine.
//
// Architecture:
// ```text
//     OverworldBuilder  ──build(host)──>  Overworld<H>
//         │                                 ├─ host: H
//         ├─ with_fallback_tile_scale()     ├─ world: WorldRegistry
//         └─ with_tile_sprite_cleanup()     ├─ store: StoreStack
//                                           ├─ events: Vec<MapEvent>
//                                           └─ loaded/unload listeners
// ```
//
// Operations are split by concern:
// - `maps`: loading, connections, overworld grid
// - `sprites`: storing and restoring sprites per map
// - `tiles`: tile queries and conversions on the active tilemap
//
//=========================================================================

//=== Module Declarations =================================================

mod maps;
mod sprites;
mod tiles;

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::events::MapEvent;
use crate::core::host::{Host, SpriteKind};
use crate::core::store::StoreStack;
use crate::core::tiles::MAX_TILE_SCALE;
use crate::core::world::{MapId, WorldRegistry};

//=== Listener Types ======================================================

/// Callback run with the overworld and a map.
///
/// Unload listeners receive the outgoing map, loaded listeners the map
/// loaded at dispatch time.
pub type MapListener<H> = Box<dyn FnMut(&mut Overworld<H>, MapId)>;

//=== OverworldBuilder ====================================================

/// Builder for configuring and constructing an [`Overworld`].
///
/// # Default Values
///
/// - **Fallback tile scale**: 4 (16 px tiles when no tilemap is loaded)
/// - **Tile sprite cleanup**: enabled
///
/// # Examples
///
/// ```ignore
/// use aetheric_overworld::OverworldBuilder;
///
/// let mut overworld = OverworldBuilder::new()
///     .with_fallback_tile_scale(3)      // 8 px tiles
///     .with_tile_sprite_cleanup(false)  // keep cover sprites across loads
///     .build(my_host);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OverworldBuilder {
    fallback_tile_scale: u32,
    tile_sprite_cleanup: bool,
}

impl OverworldBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fallback_tile_scale: 4,
            tile_sprite_cleanup: true,
        }
    }

    /// Sets the tile scale (log2 of the tile size) used by conversions
    /// while no tilemap is loaded.
    ///
    /// Default: 4
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not in `1..=MAX_TILE_SCALE`.
    pub fn with_fallback_tile_scale(mut self, scale: u32) -> Self {
        assert!(
            (1..=MAX_TILE_SCALE).contains(&scale),
            "Fallback tile scale must be in 1..={}, got {}",
            MAX_TILE_SCALE,
            scale
        );
        self.fallback_tile_scale = scale;
        self
    }

    /// Whether loading a map destroys every cover sprite created with
    /// [`Overworld::create_tile_sprite`].
    ///
    /// Default: true
    pub fn with_tile_sprite_cleanup(mut self, enabled: bool) -> Self {
        self.tile_sprite_cleanup = enabled;
        self
    }

    /// Builds the overworld around `host`.
    ///
    /// Allocates two sprite kinds from the host: one for tile cover
    /// sprites and one internal kind stored sprites pass through.
    pub fn build<H: Host>(self, mut host: H) -> Overworld<H> {
        let tile_sprite_kind = host.new_sprite_kind();
        let stored_kind = host.new_sprite_kind();
        debug!(
            "Overworld created (tile sprites {:?}, stored sprites {:?})",
            tile_sprite_kind, stored_kind
        );

        Overworld {
            host,
            fallback_tile_scale: self.fallback_tile_scale,
            tile_sprite_cleanup: self.tile_sprite_cleanup,
            tile_sprite_kind,
            stored_kind,
            world: WorldRegistry::new(),
            events: Vec::new(),
            loaded_listeners: Vec::new(),
            unload_listeners: Vec::new(),
            store: StoreStack::new(),
        }
    }
}

impl Default for OverworldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Overworld ===========================================================

/// Overworld of connected tilemaps on top of a host engine.
///
/// Owns the host for its whole lifetime; use [`Overworld::host`] and
/// [`Overworld::host_mut`] to reach engine features the overworld does
/// not wrap.
pub struct Overworld<H: Host> {
    host: H,

    //--- Configuration ---------------------------------------------------
    fallback_tile_scale: u32,
    tile_sprite_cleanup: bool,
    tile_sprite_kind: SpriteKind,
    stored_kind: SpriteKind,

    //--- World State -----------------------------------------------------
    world: WorldRegistry<H::TileMap>,
    // Pending loaded notifications, drained by `dispatch_events`.
    events: Vec<MapEvent>,
    loaded_listeners: Vec<MapListener<H>>,
    unload_listeners: Vec<MapListener<H>>,

    //--- Sprite Store ----------------------------------------------------
    store: StoreStack<H::Image, H::Data>,
}

impl<H: Host> Overworld<H> {
    //--- Construction -----------------------------------------------------

    /// Creates an overworld with default settings.
    pub fn new(host: H) -> Self {
        OverworldBuilder::new().build(host)
    }

    //--- Accessors --------------------------------------------------------

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the overworld, giving the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Maps, connections, grid and loaded state.
    pub fn world(&self) -> &WorldRegistry<H::TileMap> {
        &self.world
    }

    /// Sprites stored per scene level.
    pub fn store(&self) -> &StoreStack<H::Image, H::Data> {
        &self.store
    }

    /// Kind of the cover sprites created by [`Overworld::create_tile_sprite`].
    pub fn tile_sprite_kind(&self) -> SpriteKind {
        self.tile_sprite_kind
    }

    /// Internal kind sprites carry while being stored or restored.
    pub fn stored_kind(&self) -> SpriteKind {
        self.stored_kind
    }

    //--- Scene Lifecycle --------------------------------------------------

    /// Host hook: a scene was pushed on top of the current one.
    pub fn on_scene_pushed(&mut self) {
        self.store.push_frame();
    }

    /// Host hook: the top scene was popped.
    pub fn on_scene_popped(&mut self) {
        self.store.pop_frame();
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Number of notifications waiting for [`Overworld::dispatch_events`].
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Delivers queued notifications to the loaded listeners.
    ///
    /// Call once per tick. Each listener receives the map loaded at the
    /// time it runs; notifications are dropped if no map is loaded anymore.
    /// Notifications raised by listeners wait for the next call.
    pub fn dispatch_events(&mut self) {
        for event in std::mem::take(&mut self.events) {
            match event {
                MapEvent::Loaded => {
                    let mut listeners = std::mem::take(&mut self.loaded_listeners);
                    for listener in listeners.iter_mut() {
                        if let Some(map) = self.world.loaded() {
                            listener(self, map);
                        }
                    }
                    // Listeners registered during the callbacks go last.
                    listeners.append(&mut self.loaded_listeners);
                    self.loaded_listeners = listeners;
                }
            }
        }
    }

    /// Runs every unload listener with the outgoing map.
    fn notify_unloaded(&mut self, outgoing: MapId) {
        let mut listeners = std::mem::take(&mut self.unload_listeners);
        for listener in listeners.iter_mut() {
            listener(self, outgoing);
        }
        listeners.append(&mut self.unload_listeners);
        self.unload_listeners = listeners;
    }

    /// Tile scale of the active tilemap, or the fallback scale.
    fn tile_scale(&self) -> u32 {
        self.active_tile_scale().unwrap_or(self.fallback_tile_scale)
    }

    /// Host tile scale, clamped to `MAX_TILE_SCALE` so shifts stay in range.
    fn active_tile_scale(&self) -> Option<u32> {
        self.host.tile_scale().map(|scale| scale.min(MAX_TILE_SCALE))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
