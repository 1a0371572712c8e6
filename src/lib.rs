//! Cave Runner - tile-based side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (kinematics, tile collision, actors, timers)
//! - `sprite`: Sprite resources (static frames and timed animations)
//! - `render`: Backend-agnostic draw-command list
//! - `input`: Per-frame control-input snapshot
//! - `hud`: Health bar and floating damage numbers
//! - `game`: Per-frame orchestration of the above
//!
//! The windowing/event loop, actual rendering, audio, and level loading
//! are external collaborators; this crate only produces draw commands and
//! consumes elapsed time and input snapshots.

pub mod game;
pub mod hud;
pub mod input;
pub mod render;
pub mod sim;
pub mod sprite;
pub mod units;

pub use game::Game;
pub use input::{Button, Input};

/// Game configuration constants
pub mod consts {
    use crate::units::{Fps, Ms, Tile};

    /// Target frame rate of the external loop
    pub const FPS: Fps = 60;
    /// Largest single integration step; bigger frame times clamp to this
    pub const MAX_FRAME_TIME: Ms = 5 * 1000 / 60;

    /// Screen dimensions in tiles
    pub const SCREEN_WIDTH: Tile = 20;
    pub const SCREEN_HEIGHT: Tile = 15;
}
