//! Frame-driven simulation module
//!
//! All gameplay state mutation happens here, once per frame, in a strict
//! order: velocity integration per axis, two-pass collision resolution
//! against the tile grid, then sprite-state derivation. No rendering or
//! platform dependencies; drawing is mediated by the draw list.

pub mod bat;
pub mod collision;
pub mod kinematics;
pub mod map;
pub mod player;
pub mod rect;
pub mod state;
pub mod timer;

pub use bat::Bat;
pub use collision::{Axis, Direction, Pass, PassRule, first_wall, pass_rule};
pub use kinematics::{HorizontalKinematics, VerticalKinematics, position_delta};
pub use map::{CollisionTile, Map, TileType};
pub use player::Player;
pub use rect::Rectangle;
pub use state::{HorizontalFacing, MotionType, SpriteState, VerticalFacing};
pub use timer::{TimerId, Timers};
