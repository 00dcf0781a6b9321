use crate::ray::Ray;
use serde::Serialize;

/// Smallest corrected distance fed into the projection; keeps strip height finite
const MIN_DISTANCE: f32 = 1e-3;

/// Screen geometry of one projected wall slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallStrip {
    pub column_x: f32,
    pub top_y: f32,
    pub width: f32,
    pub height: f32,
    pub was_hit_vertical: bool,
}

/// Perspective projection for a fixed screen, FOV and tile size
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub screen_width: f32,
    pub screen_height: f32,
    pub strip_width: f32,
    pub tile_size: f32,
    /// Distance from the eye to the projection plane, in pixels
    pub plane_distance: f32,
}

impl Projection {
    pub fn new(fov: f32, screen_width: f32, screen_height: f32, strip_width: f32, tile_size: f32) -> Self {
        Projection {
            screen_width,
            screen_height,
            strip_width,
            tile_size,
            plane_distance: projection_plane_distance(screen_width, fov),
        }
    }

    /// Project the ray for `column`, removing fish-eye distortion against `heading`
    pub fn project(&self, column: usize, ray: &Ray, heading: f32) -> WallStrip {
        let corrected = corrected_distance(ray.distance, ray.angle, heading);
        let height = strip_height(corrected, self.tile_size, self.plane_distance);

        WallStrip {
            column_x: column as f32 * self.strip_width,
            top_y: self.screen_height / 2.0 - height / 2.0,
            width: self.strip_width,
            height,
            was_hit_vertical: ray.was_hit_vertical,
        }
    }
}

/// `(screen_width / 2) / tan(fov / 2)`
pub fn projection_plane_distance(screen_width: f32, fov: f32) -> f32 {
    (screen_width / 2.0) / (fov / 2.0).tan()
}

/// Distance along the heading rather than along the ray
pub fn corrected_distance(distance: f32, ray_angle: f32, heading: f32) -> f32 {
    distance * (ray_angle - heading).cos()
}

/// Projected wall height; strictly decreasing in `distance`
pub fn strip_height(distance: f32, tile_size: f32, plane_distance: f32) -> f32 {
    (tile_size / distance.max(MIN_DISTANCE)) * plane_distance
}
