use crate::grid::Grid;
use crate::ray::Ray;
use rayon::prelude::*;

/// Casts one ray per screen column into a fixed buffer that is reused every frame
#[derive(Clone, Debug)]
pub struct RayCaster {
    /// Total angular width of the view, in radians
    pub fov: f32,
    rays: Vec<Ray>,
}

impl RayCaster {
    /// Create a caster for `ray_count` columns (at least one)
    pub fn new(fov: f32, ray_count: usize) -> Self {
        RayCaster {
            fov,
            rays: vec![Ray::default(); ray_count.max(1)],
        }
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    /// Offset from the heading of the ray for `column`
    pub fn angle_offset(&self, column: usize) -> f32 {
        -self.fov / 2.0 + column as f32 * (self.fov / self.rays.len() as f32)
    }

    /// Results of the most recent cast, left to right
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Recast every column from (x, y) at `heading`, overwriting the buffer in place
    pub fn cast_all(&mut self, x: f32, y: f32, heading: f32, grid: &Grid) -> &[Ray] {
        let fov = self.fov;
        let count = self.rays.len() as f32;

        for (column, slot) in self.rays.iter_mut().enumerate() {
            let offset = -fov / 2.0 + column as f32 * (fov / count);
            *slot = Ray::cast(x, y, heading, offset, grid);
        }

        &self.rays
    }

    /// Same as [`cast_all`](Self::cast_all), spread across the rayon pool.
    ///
    /// Every column writes only its own slot, so the order is unchanged.
    pub fn cast_all_parallel(&mut self, x: f32, y: f32, heading: f32, grid: &Grid) -> &[Ray] {
        let fov = self.fov;
        let count = self.rays.len() as f32;

        self.rays.par_iter_mut().enumerate().for_each(|(column, slot)| {
            let offset = -fov / 2.0 + column as f32 * (fov / count);
            *slot = Ray::cast(x, y, heading, offset, grid);
        });

        &self.rays
    }
}

/// Rays needed to cover `screen_width` pixels with strips of `strip_width`; at least one
pub fn ray_count_for(screen_width: f32, strip_width: f32) -> usize {
    let strip_width = if strip_width > 0.0 { strip_width } else { 1.0 };
    ((screen_width / strip_width).floor() as usize).max(1)
}

/// Cast `ray_count` rays across `fov` centered on `heading`, left to right
pub fn cast_all(x: f32, y: f32, heading: f32, fov: f32, ray_count: usize, grid: &Grid) -> Vec<Ray> {
    let mut caster = RayCaster::new(fov, ray_count);
    caster.cast_all(x, y, heading, grid);
    caster.rays
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_ray_count_and_order() {
        let grid = Grid::with_border(11, 15, 32.0);
        let fov = 60.0_f32.to_radians();
        let rays = cast_all(240.0, 176.0, FRAC_PI_2, fov, 40, &grid);

        assert_eq!(rays.len(), 40);
        // First ray starts half a FOV to the left of the heading
        assert!((rays[0].angle - (FRAC_PI_2 - fov / 2.0)).abs() < 1e-5);
        for pair in rays.windows(2) {
            assert!((pair[1].angle - pair[0].angle - fov / 40.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_zero_rays_is_clamped() {
        let caster = RayCaster::new(1.0, 0);
        assert_eq!(caster.ray_count(), 1);
    }

    #[test]
    fn test_buffer_is_reused() {
        let grid = Grid::with_border(11, 15, 32.0);
        let mut caster = RayCaster::new(1.0, 8);
        let before = caster.rays().as_ptr();
        caster.cast_all(240.0, 176.0, 0.0, &grid);
        caster.cast_all(100.0, 100.0, 1.0, &grid);
        assert_eq!(caster.rays().as_ptr(), before);
        assert_eq!(caster.ray_count(), 8);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let grid = Grid::default_layout(32.0);
        let mut sequential = RayCaster::new(60.0_f32.to_radians(), 120);
        let mut parallel = sequential.clone();

        sequential.cast_all(240.0, 176.0, 1.3, &grid);
        parallel.cast_all_parallel(240.0, 176.0, 1.3, &grid);

        for (a, b) in sequential.rays().iter().zip(parallel.rays()) {
            assert_eq!(a.angle, b.angle);
            assert_eq!(a.distance, b.distance);
            assert_eq!(a.was_hit_vertical, b.was_hit_vertical);
        }
    }
}
