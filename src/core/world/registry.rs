//=========================================================================
// World Registry
//=========================================================================
//
// Owns every map of an overworld and the bookkeeping around them.
//
// Architecture:
//   WorldRegistry
//     ├─ maps: Vec<WorldMap<T>>     (arena, indexed by MapId)
//     ├─ grid: WorldGrid            (column/row addressing)
//     └─ loaded map + loaded column/row
//
// Every registry draws a process-unique owner tag. Handles it issues
// carry the tag and only resolve against the registry that issued them.
//
// The loaded column/row are separate fields, not derived from the loaded
// map: only grid loads update them.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};
use std::sync::atomic::{AtomicU32, Ordering};

//=== Internal Dependencies ===============================================

use super::{MapId, WorldGrid, WorldMap};
use crate::core::error::OverworldError;

//=== Constants ===========================================================

/// Loaded column/row value before any grid load happened.
pub const UNSET_WORLD_LOCATION: i32 = -1;

// Tag 0 is never issued.
static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

//=== WorldRegistry =======================================================

/// Map arena, connection graph, grid and loaded-map state.
#[derive(Debug)]
pub struct WorldRegistry<T> {
    owner: u32,
    maps: Vec<WorldMap<T>>,
    grid: WorldGrid,
    loaded: Option<MapId>,
    loaded_column: i32,
    loaded_row: i32,
}

impl<T> WorldRegistry<T> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            maps: Vec::new(),
            grid: WorldGrid::new(),
            loaded: None,
            loaded_column: UNSET_WORLD_LOCATION,
            loaded_row: UNSET_WORLD_LOCATION,
        }
    }

    //--- Maps -------------------------------------------------------------

    /// Wraps `tilemap` in a new, unconnected map.
    pub fn create_map(&mut self, tilemap: T) -> MapId {
        let id = MapId::new(self.owner, self.maps.len());
        self.maps.push(WorldMap::new(tilemap));
        id
    }

    /// Whether `id` was issued by this registry.
    pub fn contains(&self, id: MapId) -> bool {
        self.slot(id).is_some()
    }

    pub fn map(&self, id: MapId) -> Result<&WorldMap<T>, OverworldError> {
        self.slot(id)
            .and_then(|index| self.maps.get(index))
            .ok_or(OverworldError::UnknownMap(id))
    }

    /// Number of maps created so far.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    //--- Connections ------------------------------------------------------

    /// Connects `source` to `destination` under `id` without mirroring.
    ///
    /// Returns false and changes nothing if either handle is foreign.
    pub fn connect_one_way(&mut self, source: MapId, destination: MapId, id: i32) -> bool {
        if !self.contains(destination) {
            warn!("Ignoring connection {} to unknown map {}", id, destination);
            return false;
        }
        let Some(map) = self.slot(source).and_then(|index| self.maps.get_mut(index)) else {
            warn!("Ignoring connection {} from unknown map {}", id, source);
            return false;
        };

        map.connect(id, destination);
        debug!("Connected map {} -> {} with id {}", source, destination, id);
        true
    }

    /// Connects both maps to each other under the same `id`.
    pub fn connect(&mut self, a: MapId, b: MapId, id: i32) -> bool {
        if !self.contains(a) || !self.contains(b) {
            warn!("Ignoring connection {} between {} and {}: unknown map", id, a, b);
            return false;
        }
        self.connect_one_way(a, b, id) && self.connect_one_way(b, a, id)
    }

    /// Map connected to `source` by `id`, if any.
    pub fn connected(&self, source: MapId, id: i32) -> Option<MapId> {
        self.map(source).ok().and_then(|map| map.connected(id))
    }

    //--- Grid -------------------------------------------------------------

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn set_map_at(&mut self, column: i32, row: i32, map: MapId) {
        if !self.contains(map) {
            warn!("Ignoring unknown map {} placed at ({}, {})", map, column, row);
            return;
        }
        self.grid.set(column, row, map);
    }

    pub fn map_at(&self, column: i32, row: i32) -> Option<MapId> {
        self.grid.get(column, row)
    }

    //--- Loaded State -----------------------------------------------------

    pub fn loaded(&self) -> Option<MapId> {
        self.loaded
    }

    pub(crate) fn set_loaded(&mut self, map: Option<MapId>) {
        self.loaded = map;
    }

    pub fn loaded_column(&self) -> i32 {
        self.loaded_column
    }

    pub fn loaded_row(&self) -> i32 {
        self.loaded_row
    }

    pub(crate) fn set_loaded_location(&mut self, column: i32, row: i32) {
        self.loaded_column = column;
        self.loaded_row = row;
    }

    fn slot(&self, id: MapId) -> Option<usize> {
        let owned = id.owner() == self.owner && id.index() < self.maps.len();
        owned.then(|| id.index())
    }
}

impl<T> Default for WorldRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
