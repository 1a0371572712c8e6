//! Tile grid and collision query
//!
//! The grid is owned here but read-only to the rest of the core: actors
//! only ever ask which tiles a rectangle overlaps. Loading real level
//! data is the job of an external loader; `create_test_map` builds the
//! small fixed level the demo and the tests run against.

use crate::render::DrawList;
use crate::sim::rect::Rectangle;
use crate::sprite::Sprite;
use crate::units::{Tile, game_to_tile, tile_to_game, tile_to_pixel};

const WALL_SHEET: &str = "content/cave.bmp";

/// Closed classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Air,
    Wall,
}

/// Read-only snapshot of one overlapped cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionTile {
    pub row: Tile,
    pub col: Tile,
    pub tile_type: TileType,
}

pub struct Map {
    tiles: Vec<Vec<TileType>>,
    wall_sprite: Sprite,
}

impl Map {
    /// All-air grid of the given dimensions.
    pub fn new(num_rows: Tile, num_cols: Tile) -> Self {
        Self {
            tiles: vec![vec![TileType::Air; num_cols]; num_rows],
            wall_sprite: Sprite::new(
                WALL_SHEET,
                tile_to_pixel(1),
                0,
                tile_to_pixel(1),
                tile_to_pixel(1),
            ),
        }
    }

    /// Fixed 20x15 level: a solid floor with a small staircase of blocks.
    pub fn create_test_map() -> Self {
        let num_rows = crate::consts::SCREEN_HEIGHT;
        let num_cols = crate::consts::SCREEN_WIDTH;
        let mut map = Self::new(num_rows, num_cols);

        let floor_row = 11;
        for col in 0..num_cols {
            map.set_tile(floor_row, col, TileType::Wall);
        }
        map.set_tile(10, 5, TileType::Wall);
        map.set_tile(9, 4, TileType::Wall);
        map.set_tile(8, 3, TileType::Wall);
        map.set_tile(7, 2, TileType::Wall);
        map.set_tile(10, 3, TileType::Wall);

        log::debug!("test map built: {num_rows}x{num_cols}, floor at row {floor_row}");
        map
    }

    pub fn set_tile(&mut self, row: Tile, col: Tile, tile_type: TileType) {
        self.tiles[row][col] = tile_type;
    }

    pub fn num_rows(&self) -> Tile {
        self.tiles.len()
    }

    pub fn num_cols(&self) -> Tile {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Every cell the rectangle overlaps, boundary cells included.
    ///
    /// Traversal order is deterministic (row-major) but callers scan for
    /// the first matching tile type rather than relying on it. Rectangles
    /// reaching past the grid clamp to valid indices.
    pub fn colliding_tiles(&self, rectangle: &Rectangle) -> Vec<CollisionTile> {
        let max_row = self.num_rows() - 1;
        let max_col = self.num_cols() - 1;
        // negative coordinates saturate to tile 0 in game_to_tile
        let first_row = game_to_tile(rectangle.top()).min(max_row);
        let last_row = game_to_tile(rectangle.bottom()).min(max_row);
        let first_col = game_to_tile(rectangle.left()).min(max_col);
        let last_col = game_to_tile(rectangle.right()).min(max_col);

        let mut collision_tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                collision_tiles.push(CollisionTile {
                    row,
                    col,
                    tile_type: self.tiles[row][col],
                });
            }
        }
        collision_tiles
    }

    pub fn draw(&self, draw_list: &mut DrawList) {
        for (row, cols) in self.tiles.iter().enumerate() {
            for (col, tile_type) in cols.iter().enumerate() {
                if *tile_type == TileType::Wall {
                    self.wall_sprite
                        .draw(draw_list, tile_to_game(col), tile_to_game(row));
                }
            }
        }
    }
}
