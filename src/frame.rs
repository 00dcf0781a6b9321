use crate::config::Config;
use crate::grid::Grid;
use crate::player::Player;
use crate::projection::{Projection, WallStrip};
use crate::ray::Ray;
use crate::raycast::{ray_count_for, RayCaster};
use serde::Serialize;

/// All per-session state, owned in one place and advanced once per frame
#[derive(Clone, Debug)]
pub struct Simulation {
    pub grid: Grid,
    pub player: Player,
    pub caster: RayCaster,
    pub projection: Projection,
    /// Cast on the rayon pool instead of the calling thread
    pub parallel: bool,
}

/// Serializable view of one frame
#[derive(Debug, Serialize)]
pub struct FrameSnapshot {
    pub player: Player,
    pub rays: Vec<Ray>,
    pub strips: Vec<WallStrip>,
}

impl Simulation {
    /// Player centered on the grid, one ray per `strip_width` pixels of a grid-sized screen
    pub fn new(grid: Grid, fov: f32, strip_width: f32) -> Self {
        let player = Player::centered(&grid);
        let screen_width = grid.world_width();
        let screen_height = grid.world_height();
        let ray_count = ray_count_for(screen_width, strip_width);
        let strip_width = if strip_width > 0.0 { strip_width } else { 1.0 };

        let mut sim = Simulation {
            caster: RayCaster::new(fov, ray_count),
            projection: Projection::new(fov, screen_width, screen_height, strip_width, grid.tile_size),
            grid,
            player,
            parallel: false,
        };
        sim.recast();
        sim
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        config.validate_fov()?;
        let grid = config.build_grid()?;
        let mut sim = Self::new(grid, config.fov(), config.camera.strip_width);
        sim.player.move_speed = config.player.move_speed;
        sim.player.turn_speed = config.turn_speed();
        sim.player.radius = config.player.radius;
        sim.parallel = config.camera.parallel;
        // Starting cell may be a wall in a custom layout
        if sim.grid.is_wall(sim.player.x, sim.player.y) {
            return Err(format!(
                "map center ({}, {}) is inside a wall",
                sim.player.x, sim.player.y
            ));
        }
        sim.recast();
        Ok(sim)
    }

    /// Advance the player one tick, then recast every column
    pub fn update(&mut self) {
        self.player.tick(&self.grid);
        self.recast();
    }

    /// Recast from the current player snapshot
    pub fn recast(&mut self) {
        let (x, y, heading) = (self.player.x, self.player.y, self.player.heading);
        if self.parallel {
            self.caster.cast_all_parallel(x, y, heading, &self.grid);
        } else {
            self.caster.cast_all(x, y, heading, &self.grid);
        }
    }

    pub fn rays(&self) -> &[Ray] {
        self.caster.rays()
    }

    /// Projected wall strips for the last cast, left to right
    pub fn strips(&self) -> impl Iterator<Item = WallStrip> + '_ {
        let heading = self.player.heading;
        self.caster
            .rays()
            .iter()
            .enumerate()
            .map(move |(column, ray)| self.projection.project(column, ray, heading))
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: self.player.clone(),
            rays: self.rays().to_vec(),
            strips: self.strips().collect(),
        }
    }
}
