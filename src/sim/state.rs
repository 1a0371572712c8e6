//! Discrete sprite-state space
//!
//! Continuous physics collapses to a small closed state space used to key
//! the per-actor sprite maps. The composite key orders and hashes
//! lexicographically over its fields so it can serve as a map key; the
//! maps themselves are populated over the full cross-product at actor
//! construction and never change afterwards.

use crate::units::Velocity;

/// Animation category derived from physical state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotionType {
    Standing,
    Walking,
    Jumping,
    Falling,
    Interacting,
}

impl MotionType {
    pub const ALL: [MotionType; 5] = [
        MotionType::Standing,
        MotionType::Walking,
        MotionType::Jumping,
        MotionType::Falling,
        MotionType::Interacting,
    ];

    /// Pure derivation from the frame's already-resolved physical state.
    pub fn from_physics(
        interacting: bool,
        on_ground: bool,
        acceleration_x: i32,
        velocity_y: Velocity,
    ) -> MotionType {
        if interacting {
            MotionType::Interacting
        } else if on_ground {
            if acceleration_x != 0 {
                MotionType::Walking
            } else {
                MotionType::Standing
            }
        } else if velocity_y < 0.0 {
            MotionType::Jumping
        } else {
            MotionType::Falling
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HorizontalFacing {
    Left,
    Right,
}

impl HorizontalFacing {
    pub const ALL: [HorizontalFacing; 2] = [HorizontalFacing::Left, HorizontalFacing::Right];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerticalFacing {
    Up,
    Down,
    Horizontal,
}

impl VerticalFacing {
    pub const ALL: [VerticalFacing; 3] = [
        VerticalFacing::Up,
        VerticalFacing::Down,
        VerticalFacing::Horizontal,
    ];
}

/// Composite sprite-map key for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteState {
    pub motion_type: MotionType,
    pub horizontal_facing: HorizontalFacing,
    pub vertical_facing: VerticalFacing,
}

impl SpriteState {
    pub fn new(
        motion_type: MotionType,
        horizontal_facing: HorizontalFacing,
        vertical_facing: VerticalFacing,
    ) -> Self {
        Self {
            motion_type,
            horizontal_facing,
            vertical_facing,
        }
    }
}
