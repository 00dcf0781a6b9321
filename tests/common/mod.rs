#![allow(dead_code)]

use gridcaster::{Grid, Player};

pub const TILE: f32 = 32.0;
pub const ROWS: i32 = 11;
pub const COLS: i32 = 15;

/// 15x11 map with a solid border and an open interior
pub fn open_map() -> Grid {
    Grid::with_border(ROWS, COLS, TILE)
}

/// The built-in 15x11 layout with interior walls
pub fn default_map() -> Grid {
    Grid::default_layout(TILE)
}

/// Player at the map center facing +Y, moving 2 units and turning 4 degrees per tick
pub fn centered_player(grid: &Grid) -> Player {
    Player::centered(grid).with_speeds(2.0, 4.0_f32.to_radians())
}

/// Center points of every empty cell, in world units
pub fn empty_cell_centers(grid: &Grid) -> Vec<(f32, f32)> {
    let mut centers = Vec::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if !grid.is_wall_cell(col, row) {
                centers.push((
                    (col as f32 + 0.5) * grid.tile_size,
                    (row as f32 + 0.5) * grid.tile_size,
                ));
            }
        }
    }
    centers
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (+/- {}), got {}",
        expected,
        tolerance,
        actual
    );
}
