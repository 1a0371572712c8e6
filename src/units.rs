//! Unit types and conversion constants
//!
//! Positions and velocities are measured in floating-point "game units",
//! distinct from both tile indices and output pixels. The conversion
//! factors are fixed and shared by every subsystem.

/// Continuous world-space unit (position, distance)
pub type Game = f32;
/// Output pixel coordinate
pub type Pixel = i32;
/// Tile grid index
pub type Tile = usize;
/// Sprite-sheet frame index
pub type Frame = u32;
/// Milliseconds of wall-clock / frame time
pub type Ms = u32;
/// Animation frame rate
pub type Fps = u32;
/// Hit points
pub type Hp = i32;
/// Angle in degrees
pub type Degrees = f32;

/// Game units per millisecond
pub type Velocity = f32;
/// Game units per millisecond squared
pub type Acceleration = f32;
/// Degrees per millisecond
pub type AngularVelocity = f32;

/// Side length of one tile in game units
pub const TILE_SIZE: Game = 32.0;
pub const HALF_TILE: Game = TILE_SIZE / 2.0;

#[inline]
pub fn tile_to_game(tile: Tile) -> Game {
    tile as Game * TILE_SIZE
}

/// Truncating conversion; a coordinate exactly on a boundary belongs to
/// the tile it starts.
#[inline]
pub fn game_to_tile(game: Game) -> Tile {
    (game / TILE_SIZE) as Tile
}

#[inline]
pub fn game_to_pixel(game: Game) -> Pixel {
    game.round() as Pixel
}

#[inline]
pub fn tile_to_pixel(tile: Tile) -> Pixel {
    game_to_pixel(tile_to_game(tile))
}

#[inline]
pub fn degrees_to_radians(degrees: Degrees) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
