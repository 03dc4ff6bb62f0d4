//=========================================================================
// Overworld Tiles
//=========================================================================
//
// Tile queries, bulk tile operations and unit conversions on the host's
// active tilemap.
//
// Tiles are visited column by column (outer loop over columns, inner
// over rows). Without an active tilemap, queries come back empty and
// conversions use the fallback tile scale.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Overworld;
use crate::core::host::{Host, SpriteId, SpriteKind};
use crate::core::tiles::{self, Location};

impl<H: Host> Overworld<H> {
    //--- Conversions ------------------------------------------------------

    /// Screen coordinate to tile coordinate.
    pub fn screen_coordinate_to_tile(&self, value: i32) -> i32 {
        tiles::screen_to_tile(value, self.tile_scale())
    }

    /// Tile coordinate to the screen coordinate of the tile's edge.
    pub fn tile_coordinate_to_screen(&self, value: i32) -> i32 {
        tiles::tile_to_screen(value, self.tile_scale())
    }

    /// Tile coordinate to the screen coordinate of the tile's center.
    pub fn centered_tile_coordinate_to_screen(&self, value: i32) -> i32 {
        tiles::tile_to_screen_centered(value, self.tile_scale())
    }

    /// Screen x of the center of `location`.
    pub fn location_x(&self, location: Location) -> i32 {
        self.centered_tile_coordinate_to_screen(location.column)
    }

    /// Screen y of the center of `location`.
    pub fn location_y(&self, location: Location) -> i32 {
        self.centered_tile_coordinate_to_screen(location.row)
    }

    //--- Tilemap Queries --------------------------------------------------

    /// Tile size in pixels, 0 without an active tilemap.
    pub fn tile_width(&self) -> i32 {
        self.active_tile_scale().map_or(0, |scale| 1 << scale)
    }

    /// Column count of the active tilemap, 0 without one.
    pub fn tilemap_columns(&self) -> i32 {
        self.tilemap_dimensions().0
    }

    /// Row count of the active tilemap, 0 without one.
    pub fn tilemap_rows(&self) -> i32 {
        self.tilemap_dimensions().1
    }

    /// The tile a sprite's position falls on.
    pub fn location_of_sprite(&self, sprite: SpriteId) -> Location {
        let position = self.host.motion(sprite).position;
        Location::new(
            self.screen_coordinate_to_tile(position.x.to_int()),
            self.screen_coordinate_to_tile(position.y.to_int()),
        )
    }

    /// Whether the tile at `location` is `tile`.
    pub fn tile_is(&self, location: Location, tile: &H::Image) -> bool {
        self.host.tile_at(location.column, location.row).as_ref() == Some(tile)
    }

    /// Whether the tile at `location` is a wall. False without a tilemap.
    pub fn tile_is_wall(&self, location: Location) -> bool {
        self.active_tile_scale().is_some() && self.host.is_obstacle(location.column, location.row)
    }

    /// Every location whose tile is `tile`.
    pub fn tiles_of_kind(&self, tile: &H::Image) -> Vec<Location> {
        let mut found = Vec::new();
        self.for_each_tile_of_kind(tile, |location| found.push(location));
        found
    }

    /// Runs `f` for every location whose tile is `tile`.
    pub fn for_each_tile_of_kind<F>(&self, tile: &H::Image, mut f: F)
    where
        F: FnMut(Location),
    {
        self.for_each_tile(|location, image| {
            if image == *tile {
                f(location);
            }
        });
    }

    /// Runs `f` for every tile of the active tilemap.
    ///
    /// Cells the host reports no tile image for are skipped.
    pub fn for_each_tile<F>(&self, mut f: F)
    where
        F: FnMut(Location, H::Image),
    {
        let (columns, rows) = self.tilemap_dimensions();
        for column in 0..columns {
            for row in 0..rows {
                if let Some(image) = self.host.tile_at(column, row) {
                    f(Location::new(column, row), image);
                }
            }
        }
    }

    //--- Tile Operations --------------------------------------------------

    /// Replaces every `from` tile with `to`. Returns how many were replaced.
    pub fn replace_all_tiles(&mut self, from: &H::Image, to: &H::Image) -> usize {
        let locations = self.tiles_of_kind(from);
        for location in &locations {
            self.host.set_tile_at(location.column, location.row, to);
        }
        locations.len()
    }

    /// Covers the tile at `location` with a ghost sprite of the tile
    /// sprite kind, drawn below other sprites.
    pub fn create_tile_sprite(&mut self, location: Location, cover: H::Image) -> SpriteId {
        let sprite = self.host.create_sprite(cover, self.tile_sprite_kind);
        self.host.set_ghost(sprite, true);
        self.host.set_z(sprite, -1);
        self.host.place_on_tile(sprite, location);
        sprite
    }

    /// Covers every `tile` of the active tilemap with a `cover` sprite.
    pub fn cover_all_tiles(&mut self, tile: &H::Image, cover: &H::Image) -> Vec<SpriteId> {
        self.tiles_of_kind(tile)
            .into_iter()
            .map(|location| self.create_tile_sprite(location, cover.clone()))
            .collect()
    }

    /// Creates a sprite of `kind` on every `tile` and runs the created
    /// handlers for it with the sprite already in place.
    pub fn create_sprites_on_tiles(&mut self, tile: &H::Image, kind: SpriteKind) -> Vec<SpriteId> {
        let mut created = Vec::new();
        for location in self.tiles_of_kind(tile) {
            let sprite = self.host.add_sprite(kind);
            self.host.place_on_tile(sprite, location);
            self.host.run_created_handlers(sprite);
            // Handlers may resize the sprite; center it again.
            self.host.place_on_tile(sprite, location);
            created.push(sprite);
        }
        created
    }

    /// Destroys every sprite of `kind`. Returns how many were destroyed.
    pub fn destroy_sprites_of_kind(&mut self, kind: SpriteKind) -> usize {
        let sprites = self.host.sprites_of_kind(kind);
        for &sprite in &sprites {
            self.host.destroy_sprite(sprite);
        }
        sprites.len()
    }

    /// Centers the camera on the given tile.
    pub fn center_camera_on_tile(&mut self, location: Location) {
        let (x, y) = (self.location_x(location), self.location_y(location));
        self.host.center_camera_at(x, y);
    }

    fn tilemap_dimensions(&self) -> (i32, i32) {
        match (self.active_tile_scale(), self.host.tile_area()) {
            (Some(scale), Some((width, height))) => (width >> scale, height >> scale),
            _ => (0, 0),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
