//=========================================================================
// Test Utilities
//=========================================================================
//
// In-memory `Host` used by the unit tests.
//
// Images are string labels and user data is a plain `i32`. Sprite ids
// are handed out monotonically and never reused. Destroyed sprites are
// forgotten, but the kinds they had at destruction are recorded.
//
//=========================================================================

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::host::{Follow, Fx8, FxVec, Host, Motion, SpriteId, SpriteKind};
use crate::core::tiles::{self, Location, MAX_TILE_SCALE};

const FALLBACK_SCALE: u32 = 4;

// Oversized test scales yield 0 instead of overflowing.
fn shift(value: i32, scale: u32) -> i32 {
    value.checked_shl(scale).unwrap_or(0)
}

//=== MockTileMap =========================================================

#[derive(Debug, Clone)]
pub(crate) struct MockTileMap {
    name: &'static str,
    scale: u32,
    columns: i32,
    rows: i32,
    // Row-major; `None` marks a cell without an image.
    tiles: Vec<Option<&'static str>>,
    walls: HashSet<(i32, i32)>,
}

impl MockTileMap {
    /// `columns` x `rows` map of 16 px tiles, all set to `tile`.
    pub(crate) fn filled(name: &'static str, columns: i32, rows: i32, tile: &'static str) -> Self {
        Self {
            name,
            scale: 4,
            columns,
            rows,
            tiles: vec![Some(tile); (columns * rows) as usize],
            walls: HashSet::new(),
        }
    }

    pub(crate) fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub(crate) fn with_tile(mut self, column: i32, row: i32, tile: &'static str) -> Self {
        if let Some(index) = self.index(column, row) {
            self.tiles[index] = Some(tile);
        }
        self
    }

    pub(crate) fn without_tile(mut self, column: i32, row: i32) -> Self {
        if let Some(index) = self.index(column, row) {
            self.tiles[index] = None;
        }
        self
    }

    pub(crate) fn with_wall(mut self, column: i32, row: i32) -> Self {
        self.walls.insert((column, row));
        self
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        let inside = (0..self.columns).contains(&column) && (0..self.rows).contains(&row);
        inside.then(|| (row * self.columns + column) as usize)
    }
}

//=== MockSprite ==========================================================

#[derive(Debug, Clone)]
struct MockSprite {
    kind: SpriteKind,
    image: &'static str,
    motion: Motion,
    data: i32,
    follow: Option<Follow>,
    ghost: bool,
    z: i32,
    placements: Vec<Location>,
    handler_positions: Vec<Location>,
}

//=== MockHost ============================================================

#[derive(Debug)]
pub(crate) struct MockHost {
    tilemap: Option<MockTileMap>,
    events: Vec<(i32, i32)>,
    camera: Option<(i32, i32)>,
    next_kind: i32,
    next_id: u32,
    sprites: BTreeMap<SpriteId, MockSprite>,
    created_images: HashMap<SpriteKind, &'static str>,
    created_kinds: Vec<SpriteKind>,
    destroyed_kinds: Vec<SpriteKind>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self {
            tilemap: None,
            events: Vec::new(),
            camera: None,
            next_kind: 100,
            next_id: 1,
            sprites: BTreeMap::new(),
            created_images: HashMap::new(),
            created_kinds: Vec::new(),
            destroyed_kinds: Vec::new(),
        }
    }

    //--- Setup ------------------------------------------------------------

    /// Registers a created handler for `kind` that sets the sprite image.
    pub(crate) fn on_created(&mut self, kind: SpriteKind, image: &'static str) {
        self.created_images.insert(kind, image);
    }

    //--- Inspection -------------------------------------------------------

    pub(crate) fn active_tile_map(&self) -> Option<&'static str> {
        self.tilemap.as_ref().map(|tilemap| tilemap.name)
    }

    pub(crate) fn raised_events(&self) -> &[(i32, i32)] {
        &self.events
    }

    pub(crate) fn camera(&self) -> Option<(i32, i32)> {
        self.camera
    }

    /// Kind of each sprite at the time its created handlers ran.
    pub(crate) fn created_kinds(&self) -> Vec<SpriteKind> {
        self.created_kinds.clone()
    }

    /// Kind of each sprite at the time it was destroyed.
    pub(crate) fn destroyed_kinds(&self) -> Vec<SpriteKind> {
        self.destroyed_kinds.clone()
    }

    pub(crate) fn sprite_data(&self, sprite: SpriteId) -> i32 {
        self.sprites.get(&sprite).map_or(0, |s| s.data)
    }

    pub(crate) fn is_ghost(&self, sprite: SpriteId) -> bool {
        self.sprites.get(&sprite).is_some_and(|s| s.ghost)
    }

    pub(crate) fn z(&self, sprite: SpriteId) -> i32 {
        self.sprites.get(&sprite).map_or(0, |s| s.z)
    }

    pub(crate) fn placements(&self, sprite: SpriteId) -> &[Location] {
        self.sprites
            .get(&sprite)
            .map(|s| s.placements.as_slice())
            .unwrap_or_default()
    }

    /// Tile the sprite sat on each time its created handlers ran.
    pub(crate) fn handler_positions(&self, sprite: SpriteId) -> &[Location] {
        self.sprites
            .get(&sprite)
            .map(|s| s.handler_positions.as_slice())
            .unwrap_or_default()
    }

    fn insert_sprite(&mut self, image: &'static str, kind: SpriteKind) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.insert(
            id,
            MockSprite {
                kind,
                image,
                motion: Motion::default(),
                data: 0,
                follow: None,
                ghost: false,
                z: 0,
                placements: Vec::new(),
                handler_positions: Vec::new(),
            },
        );
        id
    }
}

impl Host for MockHost {
    type TileMap = MockTileMap;
    type Image = &'static str;
    type Data = i32;

    //--- Tilemap ----------------------------------------------------------

    fn set_tile_map(&mut self, tilemap: &MockTileMap) {
        self.tilemap = Some(tilemap.clone());
    }

    fn clear_tile_map(&mut self) {
        self.tilemap = None;
    }

    fn tile_scale(&self) -> Option<u32> {
        self.tilemap.as_ref().map(|tilemap| tilemap.scale)
    }

    fn tile_area(&self) -> Option<(i32, i32)> {
        self.tilemap
            .as_ref()
            .map(|t| (shift(t.columns, t.scale), shift(t.rows, t.scale)))
    }

    fn tile_at(&self, column: i32, row: i32) -> Option<&'static str> {
        let tilemap = self.tilemap.as_ref()?;
        tilemap.index(column, row).and_then(|index| tilemap.tiles[index])
    }

    fn set_tile_at(&mut self, column: i32, row: i32, tile: &&'static str) {
        if let Some(tilemap) = self.tilemap.as_mut() {
            if let Some(index) = tilemap.index(column, row) {
                tilemap.tiles[index] = Some(*tile);
            }
        }
    }

    fn is_obstacle(&self, column: i32, row: i32) -> bool {
        self.tilemap
            .as_ref()
            .is_some_and(|tilemap| tilemap.walls.contains(&(column, row)))
    }

    fn center_camera_at(&mut self, x: i32, y: i32) {
        self.camera = Some((x, y));
    }

    //--- Events -----------------------------------------------------------

    fn raise_event(&mut self, source: i32, value: i32) {
        self.events.push((source, value));
    }

    //--- Sprites ----------------------------------------------------------

    fn new_sprite_kind(&mut self) -> SpriteKind {
        let kind = SpriteKind(self.next_kind);
        self.next_kind += 1;
        kind
    }

    fn sprite_kinds(&self) -> Vec<SpriteKind> {
        let mut kinds: Vec<SpriteKind> = self.sprites.values().map(|s| s.kind).collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    fn sprites_of_kind(&self, kind: SpriteKind) -> Vec<SpriteId> {
        self.sprites
            .iter()
            .filter(|(_, s)| s.kind == kind)
            .map(|(&id, _)| id)
            .collect()
    }

    fn create_sprite(&mut self, image: &'static str, kind: SpriteKind) -> SpriteId {
        let id = self.insert_sprite(image, kind);
        self.run_created_handlers(id);
        id
    }

    fn add_sprite(&mut self, kind: SpriteKind) -> SpriteId {
        self.insert_sprite("", kind)
    }

    fn run_created_handlers(&mut self, sprite: SpriteId) {
        let Some(s) = self.sprites.get_mut(&sprite) else {
            return;
        };
        self.created_kinds.push(s.kind);
        if let Some(&image) = self.created_images.get(&s.kind) {
            s.image = image;
        }
        if let Some(&location) = s.placements.last() {
            s.handler_positions.push(location);
        }
    }

    fn destroy_sprite(&mut self, sprite: SpriteId) {
        if let Some(s) = self.sprites.remove(&sprite) {
            self.destroyed_kinds.push(s.kind);
        }
    }

    fn is_destroyed(&self, sprite: SpriteId) -> bool {
        !self.sprites.contains_key(&sprite)
    }

    fn sprite_kind(&self, sprite: SpriteId) -> SpriteKind {
        self.sprites.get(&sprite).map_or(SpriteKind(0), |s| s.kind)
    }

    fn set_sprite_kind(&mut self, sprite: SpriteId, kind: SpriteKind) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.kind = kind;
        }
    }

    fn sprite_image(&self, sprite: SpriteId) -> &'static str {
        self.sprites.get(&sprite).map_or("", |s| s.image)
    }

    fn motion(&self, sprite: SpriteId) -> Motion {
        self.sprites.get(&sprite).map(|s| s.motion).unwrap_or_default()
    }

    fn set_motion(&mut self, sprite: SpriteId, motion: Motion) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.motion = motion;
        }
    }

    fn take_sprite_data(&mut self, sprite: SpriteId) -> i32 {
        self.sprites
            .get_mut(&sprite)
            .map_or(0, |s| std::mem::take(&mut s.data))
    }

    fn set_sprite_data(&mut self, sprite: SpriteId, data: i32) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.data = data;
        }
    }

    fn following(&self, sprite: SpriteId) -> Option<Follow> {
        self.sprites.get(&sprite).and_then(|s| s.follow)
    }

    fn follow(&mut self, sprite: SpriteId, follow: Follow) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.follow = Some(follow);
        }
    }

    fn set_ghost(&mut self, sprite: SpriteId, ghost: bool) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.ghost = ghost;
        }
    }

    fn set_z(&mut self, sprite: SpriteId, z: i32) {
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.z = z;
        }
    }

    fn place_on_tile(&mut self, sprite: SpriteId, location: Location) {
        let scale = self.tile_scale().unwrap_or(FALLBACK_SCALE).min(MAX_TILE_SCALE);
        if let Some(s) = self.sprites.get_mut(&sprite) {
            s.motion.position = FxVec::new(
                Fx8::from_int(tiles::tile_to_screen_centered(location.column, scale)),
                Fx8::from_int(tiles::tile_to_screen_centered(location.row, scale)),
            );
            s.placements.push(location);
        }
    }
}
