//=========================================================================
// World Maps
//=========================================================================
//
// A map wraps a host tilemap and an ordered list of outgoing connections.
//
// Connections live on the source map only. Ids are unique per list, not
// globally, and lookup is first match by id.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== MapId ===============================================================

/// Handle to a map owned by an overworld. Map identity is handle identity.
///
/// Handles carry the tag of the registry that issued them, so a handle
/// from another overworld never resolves to a local map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId {
    owner: u32,
    index: usize,
}

impl MapId {
    pub(crate) const fn new(owner: u32, index: usize) -> Self {
        Self { owner, index }
    }

    pub(crate) fn owner(self) -> u32 {
        self.owner
    }

    /// Position in the owning registry's arena.
    pub(crate) fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

//=== Connection ==========================================================

/// A numbered edge from the map that stores it to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub id: i32,
    pub target: MapId,
}

//=== WorldMap ============================================================

/// A tilemap that can be connected to other maps of the overworld.
#[derive(Debug)]
pub struct WorldMap<T> {
    tilemap: T,
    connections: Vec<Connection>,
}

impl<T> WorldMap<T> {
    pub(crate) fn new(tilemap: T) -> Self {
        Self {
            tilemap,
            connections: Vec::new(),
        }
    }

    pub fn tilemap(&self) -> &T {
        &self.tilemap
    }

    /// Outgoing connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Target of the first connection with the given id.
    pub fn connected(&self, id: i32) -> Option<MapId> {
        self.connections
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.target)
    }

    /// Points connection `id` at `target`, overwriting an existing
    /// connection with that id in place.
    pub(crate) fn connect(&mut self, id: i32, target: MapId) {
        match self.connections.iter_mut().find(|c| c.id == id) {
            Some(existing) => existing.target = target,
            None => self.connections.push(Connection { id, target }),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
