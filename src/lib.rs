pub mod config;
pub mod frame;
pub mod grid;
pub mod input;
pub mod input_log;
pub mod player;
pub mod projection;
pub mod ray;
pub mod raycast;
pub mod render;

pub use frame::Simulation;
pub use grid::{Cell, Grid};
pub use player::Player;
pub use projection::{Projection, WallStrip};
pub use ray::Ray;
pub use raycast::{cast_all, RayCaster};
