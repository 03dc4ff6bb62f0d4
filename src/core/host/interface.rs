//=========================================================================
// Host Interface
//=========================================================================
//
// Contract between the overworld and the tile/sprite engine it runs on.
//
// The overworld never renders, simulates or owns sprites itself. Every
// tilemap switch, sprite creation and event goes through `Host`, which
// the embedding game implements over its engine of choice.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::tiles::Location;

//=== SpriteId ============================================================

/// Identifier the host assigns to a live sprite.
///
/// Ids are expected to be unique for the lifetime of the host; recreated
/// sprites always receive fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u32);

//=== SpriteKind ==========================================================

/// Numeric kind tag of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteKind(pub i32);

//=== Fixed Point =========================================================

/// Fixed-point number with 8 fractional bits, as stored in sprite physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fx8(pub i32);

impl Fx8 {
    pub const ZERO: Fx8 = Fx8(0);

    pub const fn from_int(value: i32) -> Self {
        Fx8(value << 8)
    }

    /// Integer part, rounded towards negative infinity.
    pub const fn to_int(self) -> i32 {
        self.0 >> 8
    }
}

/// Two-component fixed-point vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FxVec {
    pub x: Fx8,
    pub y: Fx8,
}

impl FxVec {
    pub const fn new(x: Fx8, y: Fx8) -> Self {
        Self { x, y }
    }
}

//=== Motion ==============================================================

/// Physical state of a sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Motion {
    pub position: FxVec,
    pub velocity: FxVec,
    pub acceleration: FxVec,
    pub friction: FxVec,
}

//=== Follow ==============================================================

/// A "sprite follows target" relationship as tracked by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follow {
    pub target: SpriteId,
    pub speed: f32,
    pub turn_rate: f32,
}

//=== Host Trait ==========================================================

/// Engine services consumed by the overworld.
///
/// All methods are synchronous and run on the game loop thread. Queries
/// about sprites the host no longer knows should answer with neutral
/// values (default motion, no follow, destroyed) rather than panic.
pub trait Host {
    /// Tile grid resource a map wraps.
    type TileMap;

    /// Image used for tiles and sprites. Tile equality is image equality.
    type Image: Clone + PartialEq;

    /// Arbitrary per-sprite user data.
    type Data;

    //--- Tilemap ----------------------------------------------------------

    /// Makes `tilemap` the active tilemap of the current scene.
    fn set_tile_map(&mut self, tilemap: &Self::TileMap);

    /// Removes the active tilemap from the current scene.
    fn clear_tile_map(&mut self);

    /// Log2 of the tile size of the active tilemap, or `None` if no
    /// tilemap is active. Values above `MAX_TILE_SCALE` are clamped.
    fn tile_scale(&self) -> Option<u32>;

    /// Pixel width and height of the active tilemap.
    fn tile_area(&self) -> Option<(i32, i32)>;

    /// Tile image at the given cell of the active tilemap.
    fn tile_at(&self, column: i32, row: i32) -> Option<Self::Image>;

    fn set_tile_at(&mut self, column: i32, row: i32, tile: &Self::Image);

    /// Whether the given cell of the active tilemap is a wall.
    fn is_obstacle(&self, column: i32, row: i32) -> bool;

    fn center_camera_at(&mut self, x: i32, y: i32);

    //--- Events -----------------------------------------------------------

    /// Raises a numeric `(source, value)` event on the host event bus.
    fn raise_event(&mut self, source: i32, value: i32);

    //--- Sprites ----------------------------------------------------------

    /// Allocates a fresh sprite kind no game code has handlers for yet.
    fn new_sprite_kind(&mut self) -> SpriteKind;

    /// Every kind that currently has a sprite set, in host order.
    fn sprite_kinds(&self) -> Vec<SpriteKind>;

    /// Live sprites of the given kind, in creation order.
    fn sprites_of_kind(&self, kind: SpriteKind) -> Vec<SpriteId>;

    /// Creates a sprite and runs the created handlers for `kind`.
    fn create_sprite(&mut self, image: Self::Image, kind: SpriteKind) -> SpriteId;

    /// Adds a sprite with a placeholder image without running created
    /// handlers.
    fn add_sprite(&mut self, kind: SpriteKind) -> SpriteId;

    /// Runs the created handlers registered for the sprite's kind.
    fn run_created_handlers(&mut self, sprite: SpriteId);

    /// Destroys the sprite, running destroy handlers for its kind.
    fn destroy_sprite(&mut self, sprite: SpriteId);

    fn is_destroyed(&self, sprite: SpriteId) -> bool;

    fn sprite_kind(&self, sprite: SpriteId) -> SpriteKind;

    fn set_sprite_kind(&mut self, sprite: SpriteId, kind: SpriteKind);

    fn sprite_image(&self, sprite: SpriteId) -> Self::Image;

    fn motion(&self, sprite: SpriteId) -> Motion;

    fn set_motion(&mut self, sprite: SpriteId, motion: Motion);

    /// Moves the user data out of the sprite.
    fn take_sprite_data(&mut self, sprite: SpriteId) -> Self::Data;

    fn set_sprite_data(&mut self, sprite: SpriteId, data: Self::Data);

    /// The sprite's follow relationship, if it is following another sprite.
    fn following(&self, sprite: SpriteId) -> Option<Follow>;

    fn follow(&mut self, sprite: SpriteId, follow: Follow);

    fn set_ghost(&mut self, sprite: SpriteId, ghost: bool);

    fn set_z(&mut self, sprite: SpriteId, z: i32);

    /// Centers the sprite on the given tile.
    fn place_on_tile(&mut self, sprite: SpriteId, location: Location);
}

//=========================================================================
// Unit Tests
//=========================================================================
