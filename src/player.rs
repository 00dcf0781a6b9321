use crate::input::{MovementIntent, TurnIntent};
use crate::Grid;
use serde::Serialize;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Normalize an angle into `[0, 2π)`
pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// The viewer: floating-point position, heading and held intents
#[derive(Clone, Debug, Serialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Heading in radians, always in `[0, 2π)`
    pub heading: f32,
    /// Minimap marker radius
    pub radius: f32,
    pub walk: MovementIntent,
    pub turn: TurnIntent,
    /// World units per tick
    pub move_speed: f32,
    /// Radians per tick
    pub turn_speed: f32,
}

impl Player {
    /// Create a player at (x, y) facing +Y
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            heading: FRAC_PI_2,
            radius: 5.0,
            walk: MovementIntent::None,
            turn: TurnIntent::None,
            move_speed: 2.0,
            turn_speed: 4.0_f32.to_radians(),
        }
    }

    /// Create a player at the center of the map facing +Y
    pub fn centered(grid: &Grid) -> Self {
        Self::new(grid.world_width() / 2.0, grid.world_height() / 2.0)
    }

    pub fn with_speeds(mut self, move_speed: f32, turn_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.turn_speed = turn_speed;
        self
    }

    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = normalize_angle(heading);
        self
    }

    pub fn set_movement_intent(&mut self, intent: MovementIntent) {
        self.walk = intent;
    }

    pub fn set_turn_intent(&mut self, intent: TurnIntent) {
        self.turn = intent;
    }

    /// Advance one tick.
    ///
    /// The heading always turns. The move is committed only when the
    /// candidate position is not inside a wall; otherwise the player stops
    /// dead for this tick (no sliding).
    /// Returns true if the position changed.
    pub fn tick(&mut self, grid: &Grid) -> bool {
        self.heading = normalize_angle(self.heading + self.turn.sign() * self.turn_speed);

        let step = self.walk.sign() * self.move_speed;
        if step == 0.0 {
            return false;
        }

        let new_x = self.x + self.heading.cos() * step;
        let new_y = self.y + self.heading.sin() * step;

        if grid.is_wall(new_x, new_y) {
            return false;
        }

        self.x = new_x;
        self.y = new_y;
        true
    }

    /// Cell the player currently stands in, as (col, row)
    pub fn cell(&self, grid: &Grid) -> (i32, i32) {
        (
            (self.x / grid.tile_size).floor() as i32,
            (self.y / grid.tile_size).floor() as i32,
        )
    }
}
