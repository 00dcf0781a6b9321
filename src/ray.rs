use crate::grid::Grid;
use crate::player::normalize_angle;
use serde::Serialize;
use std::f32::consts::{FRAC_PI_2, PI};

/// Offset used to probe the cell on the far side of a grid line when
/// the ray travels toward smaller coordinates
const PROBE_OFFSET: f32 = 0.01;

/// Below this |sin| or |cos| the ray is treated as parallel to that set of grid lines
const AXIS_EPSILON: f32 = 1e-6;

/// Distances closer than this count as a tie, which the horizontal hit wins
pub const TIE_TOLERANCE: f32 = 1e-3;

/// A single sight line and its nearest wall hit
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Ray {
    /// Absolute angle in `[0, 2π)`
    pub angle: f32,
    pub facing_down: bool,
    pub facing_right: bool,
    pub hit_x: f32,
    pub hit_y: f32,
    /// Euclidean distance from the origin to the hit point
    pub distance: f32,
    /// True when the hit lies on a vertical grid line
    pub was_hit_vertical: bool,
}

/// First wall crossing found by one of the two grid-line scans
#[derive(Debug, Clone, Copy)]
struct Crossing {
    x: f32,
    y: f32,
}

impl Crossing {
    fn distance_from(&self, x: f32, y: f32) -> f32 {
        (self.x - x).hypot(self.y - y)
    }
}

impl Ray {
    /// Create an uncast ray at the given absolute angle
    pub fn new(angle: f32) -> Self {
        let angle = normalize_angle(angle);
        Ray {
            angle,
            facing_down: angle > 0.0 && angle < PI,
            facing_right: angle < FRAC_PI_2 || angle > 3.0 * FRAC_PI_2,
            hit_x: 0.0,
            hit_y: 0.0,
            distance: f32::INFINITY,
            was_hit_vertical: false,
        }
    }

    pub fn facing_up(&self) -> bool {
        !self.facing_down
    }

    pub fn facing_left(&self) -> bool {
        !self.facing_right
    }

    /// Cast a ray at `heading + angle_offset` from (origin_x, origin_y)
    pub fn cast(origin_x: f32, origin_y: f32, heading: f32, angle_offset: f32, grid: &Grid) -> Self {
        let mut ray = Ray::new(heading + angle_offset);
        ray.cast_from(origin_x, origin_y, grid);
        ray
    }

    /// Find the nearest wall along this ray, overwriting any previous hit
    pub fn cast_from(&mut self, origin_x: f32, origin_y: f32, grid: &Grid) {
        let horizontal = self.scan_horizontal(origin_x, origin_y, grid);
        let vertical = self.scan_vertical(origin_x, origin_y, grid);

        let horz_distance = horizontal
            .map(|c| c.distance_from(origin_x, origin_y))
            .unwrap_or(f32::INFINITY);
        let vert_distance = vertical
            .map(|c| c.distance_from(origin_x, origin_y))
            .unwrap_or(f32::INFINITY);

        // Vertical must be strictly closer, beyond tolerance; ties go to horizontal
        let vertical_wins = match (horizontal, vertical) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(_), Some(_)) => horz_distance - vert_distance > TIE_TOLERANCE,
        };

        let (hit, distance) = if vertical_wins {
            (vertical, vert_distance)
        } else {
            (horizontal, horz_distance)
        };

        // Unreachable while the grid treats its outside as wall
        let hit = hit.unwrap_or(Crossing { x: origin_x, y: origin_y });

        self.hit_x = hit.x;
        self.hit_y = hit.y;
        self.distance = distance;
        self.was_hit_vertical = vertical_wins;
    }

    /// Step across horizontal grid lines (constant y) until a wall is found
    fn scan_horizontal(&self, origin_x: f32, origin_y: f32, grid: &Grid) -> Option<Crossing> {
        // Parallel to horizontal lines: never crosses one
        if self.angle.sin().abs() < AXIS_EPSILON {
            return None;
        }

        let tile = grid.tile_size;
        let tan = self.angle.tan();

        // First horizontal line the ray crosses
        let mut y_intercept = (origin_y / tile).floor() * tile;
        if self.facing_down {
            y_intercept += tile;
        }
        let x_intercept = origin_x + (y_intercept - origin_y) / tan;

        let y_step = if self.facing_up() { -tile } else { tile };
        let mut x_step = tile / tan;
        if (self.facing_left() && x_step > 0.0) || (self.facing_right && x_step < 0.0) {
            x_step = -x_step;
        }

        let mut next_x = x_intercept;
        let mut next_y = y_intercept;
        let probe_dy = if self.facing_up() { -PROBE_OFFSET } else { 0.0 };

        while in_bounds(grid, next_x, next_y) {
            if grid.is_wall(next_x, next_y + probe_dy) {
                return Some(Crossing { x: next_x, y: next_y });
            }
            next_x += x_step;
            next_y += y_step;
        }

        None
    }

    /// Step across vertical grid lines (constant x) until a wall is found
    fn scan_vertical(&self, origin_x: f32, origin_y: f32, grid: &Grid) -> Option<Crossing> {
        // Parallel to vertical lines: never crosses one
        if self.angle.cos().abs() < AXIS_EPSILON {
            return None;
        }

        let tile = grid.tile_size;
        let tan = self.angle.tan();

        // First vertical line the ray crosses
        let mut x_intercept = (origin_x / tile).floor() * tile;
        if self.facing_right {
            x_intercept += tile;
        }
        let y_intercept = origin_y + (x_intercept - origin_x) * tan;

        let x_step = if self.facing_left() { -tile } else { tile };
        let mut y_step = tile * tan;
        if (self.facing_up() && y_step > 0.0) || (self.facing_down && y_step < 0.0) {
            y_step = -y_step;
        }

        let mut next_x = x_intercept;
        let mut next_y = y_intercept;
        let probe_dx = if self.facing_left() { -PROBE_OFFSET } else { 0.0 };

        while in_bounds(grid, next_x, next_y) {
            if grid.is_wall(next_x + probe_dx, next_y) {
                return Some(Crossing { x: next_x, y: next_y });
            }
            next_x += x_step;
            next_y += y_step;
        }

        None
    }
}

/// Slack around the world rectangle so a crossing that rounds just past the
/// map edge still gets probed (and hits the implicit boundary wall)
const EDGE_SLACK: f32 = 1e-3;

/// Closed world rectangle; the far edges are valid crossing points
fn in_bounds(grid: &Grid, x: f32, y: f32) -> bool {
    x >= -EDGE_SLACK
        && x <= grid.world_width() + EDGE_SLACK
        && y >= -EDGE_SLACK
        && y <= grid.world_height() + EDGE_SLACK
}
