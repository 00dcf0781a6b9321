use crate::frame::Simulation;

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgba = Rgba(0, 0, 0, 255);
pub const WALL_TILE: Rgba = Rgba(34, 34, 34, 255);
pub const EMPTY_TILE: Rgba = Rgba(255, 255, 255, 255);
pub const PLAYER: Rgba = Rgba(255, 0, 0, 255);
pub const SIGHT_RAY: Rgba = Rgba(255, 0, 0, 77);
pub const WALL_STRIP: Rgba = Rgba(240, 240, 240, 255);

/// Drawing primitives the host provides
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Length of the heading indicator on the minimap, in world units
const HEADING_LINE: f32 = 30.0;

/// Draw one full frame: the projected view, then the minimap on top of it
pub fn render_scene<C: Canvas>(canvas: &mut C, sim: &Simulation, minimap_scale: f32) {
    let projection = &sim.projection;
    canvas.fill_rect(0.0, 0.0, projection.screen_width, projection.screen_height, BACKGROUND);

    render_walls(canvas, sim);
    render_minimap(canvas, sim, minimap_scale);
}

pub fn render_walls<C: Canvas>(canvas: &mut C, sim: &Simulation) {
    for strip in sim.strips() {
        canvas.fill_rect(strip.column_x, strip.top_y, strip.width, strip.height, WALL_STRIP);
    }
}

/// Tiles, sight rays and the player marker, scaled down by `scale`
pub fn render_minimap<C: Canvas>(canvas: &mut C, sim: &Simulation, scale: f32) {
    let grid = &sim.grid;
    let tile = grid.tile_size * scale;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let color = if grid.is_wall_cell(col, row) { WALL_TILE } else { EMPTY_TILE };
            canvas.fill_rect(col as f32 * tile, row as f32 * tile, tile, tile, color);
        }
    }

    let player = &sim.player;
    for ray in sim.rays() {
        canvas.line(
            player.x * scale,
            player.y * scale,
            ray.hit_x * scale,
            ray.hit_y * scale,
            SIGHT_RAY,
        );
    }

    canvas.fill_circle(player.x * scale, player.y * scale, player.radius * scale, PLAYER);
    canvas.line(
        player.x * scale,
        player.y * scale,
        (player.x + player.heading.cos() * HEADING_LINE) * scale,
        (player.y + player.heading.sin() * HEADING_LINE) * scale,
        PLAYER,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[derive(Default)]
    struct Recorder {
        rects: Vec<(f32, f32, f32, f32, Rgba)>,
        lines: usize,
        circles: usize,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
            self.rects.push((x, y, width, height, color));
        }

        fn line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _color: Rgba) {
            self.lines += 1;
        }

        fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Rgba) {
            self.circles += 1;
        }
    }

    #[test]
    fn test_scene_draw_calls() {
        let sim = Simulation::new(Grid::with_border(11, 15, 32.0), 1.0, 8.0);
        let mut canvas = Recorder::default();
        render_scene(&mut canvas, &sim, 0.2);

        let strips = canvas.rects.iter().filter(|r| r.4 == WALL_STRIP).count();
        let tiles = canvas.rects.iter().filter(|r| r.4 == WALL_TILE || r.4 == EMPTY_TILE).count();

        assert_eq!(canvas.rects[0].4, BACKGROUND);
        assert_eq!(strips, 60);
        assert_eq!(tiles, 11 * 15);
        // One line per ray plus the heading indicator
        assert_eq!(canvas.lines, 61);
        assert_eq!(canvas.circles, 1);
    }

    #[test]
    fn test_minimap_tiles_are_scaled() {
        let sim = Simulation::new(Grid::with_border(3, 3, 10.0), 1.0, 30.0);
        let mut canvas = Recorder::default();
        render_minimap(&mut canvas, &sim, 0.5);

        let (x, y, w, h, color) = canvas.rects[4];
        assert_eq!((x, y, w, h), (5.0, 5.0, 5.0, 5.0));
        assert_eq!(color, EMPTY_TILE);
    }
}
