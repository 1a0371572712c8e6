//! Two-pass axis collision rules
//!
//! Each axis resolves independently: a leading-edge pass swept by the
//! frame's delta, then a zero-extension recheck of the trailing edge to
//! catch an actor embedded from the other side. The side effects of a hit
//! differ per {axis, motion direction, pass}; they are encoded here as an
//! explicit rule table so each cell can be tested on its own. A hit
//! always snaps the checked edge to the near tile boundary.

use crate::sim::map::{CollisionTile, Map, TileType};
use crate::sim::rect::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Sign of the frame's motion on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Leading,
    Trailing,
}

/// Side effects applied when a pass finds a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRule {
    pub zero_velocity: bool,
    /// `Some(value)` overwrites the grounded flag on a hit
    pub on_ground_hit: Option<bool>,
}

/// The {axis, direction, pass} rule table.
///
/// The negative-X trailing cell setting the grounded flag mirrors the
/// landing detection of the negative-Y trailing cell.
pub fn pass_rule(axis: Axis, direction: Direction, pass: Pass) -> PassRule {
    use Direction::*;
    use Pass::*;
    match (axis, direction, pass) {
        (Axis::X, Positive, Leading) => PassRule {
            zero_velocity: true,
            on_ground_hit: None,
        },
        (Axis::X, Positive, Trailing) => PassRule {
            zero_velocity: false,
            on_ground_hit: None,
        },
        (Axis::X, Negative, Leading) => PassRule {
            zero_velocity: true,
            on_ground_hit: None,
        },
        (Axis::X, Negative, Trailing) => PassRule {
            zero_velocity: false,
            on_ground_hit: Some(true),
        },
        (Axis::Y, Positive, Leading) => PassRule {
            zero_velocity: true,
            on_ground_hit: Some(true),
        },
        (Axis::Y, Positive, Trailing) => PassRule {
            zero_velocity: false,
            on_ground_hit: None,
        },
        (Axis::Y, Negative, Leading) => PassRule {
            zero_velocity: true,
            on_ground_hit: Some(false),
        },
        (Axis::Y, Negative, Trailing) => PassRule {
            zero_velocity: false,
            on_ground_hit: Some(true),
        },
    }
}

/// Grounded-flag overwrite when a leading pass moves the full delta
/// unobstructed: vertical motion clears it, horizontal leaves it alone.
pub fn clear_on_free_move(axis: Axis) -> Option<bool> {
    match axis {
        Axis::X => None,
        Axis::Y => Some(false),
    }
}

/// First wall tile in the query's traversal order, if any.
pub fn first_wall(map: &Map, rectangle: &Rectangle) -> Option<CollisionTile> {
    map.colliding_tiles(rectangle)
        .into_iter()
        .find(|tile| tile.tile_type == TileType::Wall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TILE_SIZE;

    #[test]
    fn test_x_positive_leading() {
        let rule = pass_rule(Axis::X, Direction::Positive, Pass::Leading);
        assert!(rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, None);
    }

    #[test]
    fn test_x_positive_trailing() {
        let rule = pass_rule(Axis::X, Direction::Positive, Pass::Trailing);
        assert!(!rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, None);
    }

    #[test]
    fn test_x_negative_leading() {
        let rule = pass_rule(Axis::X, Direction::Negative, Pass::Leading);
        assert!(rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, None);
    }

    #[test]
    fn test_x_negative_trailing_sets_grounded() {
        let rule = pass_rule(Axis::X, Direction::Negative, Pass::Trailing);
        assert!(!rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, Some(true));
    }

    #[test]
    fn test_y_positive_leading_lands() {
        let rule = pass_rule(Axis::Y, Direction::Positive, Pass::Leading);
        assert!(rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, Some(true));
    }

    #[test]
    fn test_y_positive_trailing() {
        let rule = pass_rule(Axis::Y, Direction::Positive, Pass::Trailing);
        assert!(!rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, None);
    }

    #[test]
    fn test_y_negative_leading_leaves_ground() {
        let rule = pass_rule(Axis::Y, Direction::Negative, Pass::Leading);
        assert!(rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, Some(false));
    }

    #[test]
    fn test_y_negative_trailing_detects_landing() {
        let rule = pass_rule(Axis::Y, Direction::Negative, Pass::Trailing);
        assert!(!rule.zero_velocity);
        assert_eq!(rule.on_ground_hit, Some(true));
    }

    #[test]
    fn test_free_move_clears_grounded_only_vertically() {
        assert_eq!(clear_on_free_move(Axis::X), None);
        assert_eq!(clear_on_free_move(Axis::Y), Some(false));
    }

    #[test]
    fn test_first_wall_scans_for_wall_tiles() {
        let mut map = Map::new(15, 20);
        map.set_tile(5, 5, TileType::Wall);

        let air = Rectangle::new(0.0, 0.0, TILE_SIZE, TILE_SIZE);
        assert!(first_wall(&map, &air).is_none());

        let over_wall = Rectangle::new(4.0 * TILE_SIZE, 5.0 * TILE_SIZE, 2.0 * TILE_SIZE, 1.0);
        let tile = first_wall(&map, &over_wall).unwrap();
        assert_eq!((tile.row, tile.col), (5, 5));
    }
}
