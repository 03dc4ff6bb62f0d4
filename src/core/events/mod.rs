//=========================================================================
// Overworld Events
//=========================================================================
//
// Map lifecycle notifications.
//
// Flow:
//   load_map() ─┬─ Host::raise_event(OVERWORLD_MAP_ID, MAP_LOADED_EVENT)
//               └─ pending events += Loaded
//                         ↓
//   dispatch_events() → loaded listeners
//
// Unload notifications do not go through the queue: they run
// synchronously inside `load_map`, before the swap.
//
//=========================================================================

//=== Reserved Event Ids ==================================================

/// Event source id the overworld raises its notifications under.
pub const OVERWORLD_MAP_ID: i32 = 7686;

/// Event value raised after a map has been loaded.
pub const MAP_LOADED_EVENT: i32 = 7687;

//=== MapEvent ============================================================

/// Notification queued for the overworld's own listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// A map was loaded. Listeners receive the map loaded at dispatch time.
    Loaded,
}

impl MapEvent {
    /// The `(source, value)` pair this event is raised under on the host.
    pub fn host_event(self) -> (i32, i32) {
        match self {
            MapEvent::Loaded => (OVERWORLD_MAP_ID, MAP_LOADED_EVENT),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
