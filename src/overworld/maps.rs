//=========================================================================
// Overworld Maps
//=========================================================================
//
// Creating and loading maps, connections between maps, and the overworld
// grid.
//
// Load sequence:
//   1. destroy cover sprites (if enabled)
//   2. unload listeners(outgoing)       ← loaded_map() is still outgoing
//   3. loaded map = new map
//   4. host tilemap switch + loaded notification, or tilemap clear
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::Overworld;
use crate::core::error::OverworldError;
use crate::core::events::MapEvent;
use crate::core::host::Host;
use crate::core::tiles::Direction;
use crate::core::world::{MapId, WorldMap};

impl<H: Host> Overworld<H> {
    //--- Creation ---------------------------------------------------------

    /// Wraps a host tilemap in a map that can be connected to others.
    pub fn create_map(&mut self, tilemap: H::TileMap) -> MapId {
        self.world.create_map(tilemap)
    }

    pub fn map(&self, id: MapId) -> Result<&WorldMap<H::TileMap>, OverworldError> {
        self.world.map(id)
    }

    /// The host tilemap wrapped by `id`.
    pub fn tilemap(&self, id: MapId) -> Result<&H::TileMap, OverworldError> {
        self.world.map(id).map(WorldMap::tilemap)
    }

    //--- Loading ----------------------------------------------------------

    /// Makes `map` the loaded map, or unloads the current one with `None`.
    ///
    /// Unload listeners run before the swap, while [`Overworld::loaded_map`]
    /// still returns the outgoing map. A handle not created by this
    /// overworld is ignored.
    pub fn load_map(&mut self, map: Option<MapId>) {
        if let Some(id) = map {
            if !self.world.contains(id) {
                warn!("Ignoring load of unknown map {}", id);
                return;
            }
        }

        if self.tile_sprite_cleanup {
            self.destroy_sprites_of_kind(self.tile_sprite_kind);
        }

        if let Some(outgoing) = self.world.loaded() {
            debug!("Unloading map {}", outgoing);
            self.notify_unloaded(outgoing);
        }

        self.world.set_loaded(map);

        let loaded = map.and_then(|id| self.world.map(id).ok().map(|m| (id, m)));
        match loaded {
            Some((id, loaded)) => {
                self.host.set_tile_map(loaded.tilemap());
                let (source, value) = MapEvent::Loaded.host_event();
                self.host.raise_event(source, value);
                self.events.push(MapEvent::Loaded);
                debug!("Loaded map {}", id);
            }
            None => {
                self.host.clear_tile_map();
                debug!("Cleared loaded map");
            }
        }
    }

    /// The currently loaded map.
    pub fn loaded_map(&self) -> Option<MapId> {
        self.world.loaded()
    }

    /// Registers a listener for loaded maps, delivered through
    /// [`Overworld::dispatch_events`]. Listeners cannot be removed.
    pub fn on_map_loaded<F>(&mut self, listener: F)
    where
        F: FnMut(&mut Overworld<H>, MapId) + 'static,
    {
        self.loaded_listeners.push(Box::new(listener));
    }

    /// Registers a listener run synchronously with the outgoing map each
    /// time a loaded map is replaced. Listeners cannot be removed.
    pub fn on_map_unloaded<F>(&mut self, listener: F)
    where
        F: FnMut(&mut Overworld<H>, MapId) + 'static,
    {
        self.unload_listeners.push(Box::new(listener));
    }

    //--- Connections ------------------------------------------------------

    /// Connects `source` and `destination` to each other under `id`.
    ///
    /// Ids are scoped to the map storing them and can be reused between
    /// different maps. Reusing an id on the same map redirects it.
    pub fn connect_map_by_id(&mut self, source: MapId, destination: MapId, id: i32) {
        self.world.connect(source, destination, id);
    }

    /// Connects `source` to `destination` under `id` without the reverse
    /// connection.
    pub fn connect_map_one_way(&mut self, source: MapId, destination: MapId, id: i32) {
        self.world.connect_one_way(source, destination, id);
    }

    /// Map connected to `source` by `id`.
    pub fn connected_map(&self, source: MapId, id: i32) -> Option<MapId> {
        self.world.connected(source, id)
    }

    /// Loads the map connected to the loaded map by `id`.
    ///
    /// Loads no map at all if nothing is loaded or the connection is missing.
    pub fn load_connected_map(&mut self, id: i32) {
        let target = self
            .world
            .loaded()
            .and_then(|source| self.world.connected(source, id));
        self.load_map(target);
    }

    //--- Overworld Grid ---------------------------------------------------

    /// Places `map` at the given column and row of the overworld grid.
    pub fn set_world_location_to_map(&mut self, column: i32, row: i32, map: MapId) {
        self.world.set_map_at(column, row, map);
    }

    /// Map at the given column and row of the overworld grid.
    pub fn map_at_world_location(&self, column: i32, row: i32) -> Option<MapId> {
        self.world.map_at(column, row)
    }

    /// Loads the map at the given grid cell and records the cell as the
    /// loaded location, even if the cell is empty.
    pub fn load_map_at(&mut self, column: i32, row: i32) {
        self.load_map(self.world.map_at(column, row));
        self.world.set_loaded_location(column, row);
    }

    /// Loads the grid neighbour of the loaded location.
    pub fn load_map_in_direction(&mut self, direction: Direction) {
        let column = direction.column_in(self.world.loaded_column());
        let row = direction.row_in(self.world.loaded_row());
        self.load_map_at(column, row);
    }

    /// Column of the last grid load, `-1` before any.
    pub fn loaded_world_column(&self) -> i32 {
        self.world.loaded_column()
    }

    /// Row of the last grid load, `-1` before any.
    pub fn loaded_world_row(&self) -> i32 {
        self.world.loaded_row()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
