//! Per-axis kinematic integration
//!
//! Velocity updates are axis-independent and happen before the frame's
//! position delta is computed. The horizontal axis accelerates toward a
//! clamped top speed under input and decays by friction when idle on the
//! ground; the vertical axis applies one of two gravities and clamps the
//! downward speed only.

use crate::units::{Acceleration, Game, Ms, Velocity};

/// Horizontal axis parameters.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalKinematics {
    pub ground_acceleration: Acceleration,
    pub air_acceleration: Acceleration,
    pub max_speed: Velocity,
    pub friction: Acceleration,
}

impl HorizontalKinematics {
    /// `intent` is the held-direction sign: -1 left, 0 neither, +1 right.
    pub fn step(&self, velocity: Velocity, intent: i32, on_ground: bool, elapsed_time: Ms) -> Velocity {
        let acceleration = if on_ground {
            self.ground_acceleration
        } else {
            self.air_acceleration
        } * intent as f32;

        let velocity = velocity + acceleration * elapsed_time as Game;
        if intent < 0 {
            velocity.max(-self.max_speed)
        } else if intent > 0 {
            velocity.min(self.max_speed)
        } else if on_ground {
            // friction decays toward zero without crossing it
            if velocity > 0.0 {
                (velocity - self.friction * elapsed_time as Game).max(0.0)
            } else {
                (velocity + self.friction * elapsed_time as Game).min(0.0)
            }
        } else {
            velocity
        }
    }
}

/// Vertical axis parameters.
#[derive(Debug, Clone, Copy)]
pub struct VerticalKinematics {
    pub gravity: Acceleration,
    /// Reduced gravity while the jump is held and the actor is still rising
    pub jump_gravity: Acceleration,
    pub max_fall_speed: Velocity,
}

impl VerticalKinematics {
    pub fn step(&self, velocity: Velocity, jump_held: bool, elapsed_time: Ms) -> Velocity {
        let gravity = if jump_held && velocity < 0.0 {
            self.jump_gravity
        } else {
            self.gravity
        };
        (velocity + gravity * elapsed_time as Game).min(self.max_fall_speed)
    }
}

/// Position delta for the frame, computed after the velocity update.
#[inline]
pub fn position_delta(velocity: Velocity, elapsed_time: Ms) -> Game {
    velocity * elapsed_time as Game
}
