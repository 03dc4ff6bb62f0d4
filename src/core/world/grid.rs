//=========================================================================
// World Grid
//=========================================================================
//
// Sparse placement of maps on an overworld grid addressed by column/row.
//
// The grid is independent of the connection graph: the same maps may be
// laid out here in a way that disagrees with their connections.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::MapId;

//=== WorldGrid ===========================================================

/// Maps `(column, row)` cells to maps. Negative cells are never occupied.
#[derive(Debug, Default)]
pub struct WorldGrid {
    cells: HashMap<(i32, i32), MapId>,
}

impl WorldGrid {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Places `map` at the given cell, replacing any previous occupant.
    ///
    /// Negative cells can never be read back, so writes to them are dropped.
    pub fn set(&mut self, column: i32, row: i32, map: MapId) {
        if column < 0 || row < 0 {
            warn!("Ignoring map {} placed at negative cell ({}, {})", map, column, row);
            return;
        }
        self.cells.insert((column, row), map);
    }

    pub fn get(&self, column: i32, row: i32) -> Option<MapId> {
        if column < 0 || row < 0 {
            return None;
        }
        self.cells.get(&(column, row)).copied()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut grid = WorldGrid::new();
        grid.set(0, 0, MapId::new(0, 0));
        grid.set(3, 1, MapId::new(0, 1));

        assert_eq!(grid.get(0, 0), Some(MapId::new(0, 0)));
        assert_eq!(grid.get(3, 1), Some(MapId::new(0, 1)));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn unset_cells_are_absent() {
        let mut grid = WorldGrid::new();
        grid.set(1, 1, MapId::new(0, 0));

        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.get(5, 5), None);
    }

    #[test]
    fn negative_cells_are_absent() {
        let mut grid = WorldGrid::new();
        grid.set(-1, 0, MapId::new(0, 0));

        assert!(grid.is_empty());
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -4), None);
    }

    #[test]
    fn set_replaces_occupant() {
        let mut grid = WorldGrid::new();
        grid.set(2, 2, MapId::new(0, 0));
        grid.set(2, 2, MapId::new(0, 4));

        assert_eq!(grid.get(2, 2), Some(MapId::new(0, 4)));
        assert_eq!(grid.len(), 1);
    }
}
