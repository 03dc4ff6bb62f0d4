//=========================================================================
// Aetheric Overworld — Library Root
//
// Overworld helpers for tile-based games: maps wrapping host tilemaps,
// numbered connections between them, a 2D grid of maps, and per-map
// storage of sprites across map switches.
//
// Responsibilities:
// - Expose the `Overworld` facade and its builder
// - Expose `core` for the host contract and the plain data types
// - Keep the facade's operation modules private
//
// Typical usage:
// ```ignore
// use aetheric_overworld::prelude::*;
//
// let mut overworld = Overworld::new(my_host);
// let town = overworld.create_map(town_tilemap);
// let forest = overworld.create_map(forest_tilemap);
// overworld.connect_map_by_id(town, forest, 1);
// overworld.load_map(Some(town));
//
// // once per frame
// overworld.dispatch_events();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the `Host` trait and the host-independent building blocks
// (world registry, sprite store, tile helpers). Games implement `Host`
// and otherwise go through the `Overworld` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `overworld` defines the facade; its operations are split across
// private submodules by concern.
//
mod overworld;

#[cfg(test)]
mod testutils;

//--- Public Exports ------------------------------------------------------

pub use crate::core::events::{MAP_LOADED_EVENT, OVERWORLD_MAP_ID};
pub use crate::core::world::UNSET_WORLD_LOCATION;
pub use overworld::{MapListener, Overworld, OverworldBuilder};
