use serde::Serialize;

/// State of a single map cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Wall,
}

/// Layout the renderer boots with when no layout is configured
pub const DEFAULT_LAYOUT: [&str; 11] = [
    "111111111111111",
    "100000000000101",
    "100001000000101",
    "111100000010101",
    "100000000010101",
    "100000001111101",
    "100000000000001",
    "100000000000001",
    "111111000111101",
    "100000000000001",
    "111111111111111",
];

/// Static occupancy grid, stored row-major (`cells[row * cols + col]`)
#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    /// World units per cell edge
    pub tile_size: f32,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells empty
    pub fn new(rows: i32, cols: i32, tile_size: f32) -> Self {
        Grid {
            rows,
            cols,
            tile_size,
            cells: vec![Cell::Empty; (rows.max(0) * cols.max(0)) as usize],
        }
    }

    /// Create a grid with a solid wall border and an open interior
    pub fn with_border(rows: i32, cols: i32, tile_size: f32) -> Self {
        let mut grid = Self::new(rows, cols, tile_size);
        for row in 0..rows {
            for col in 0..cols {
                if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                    let id = grid.get_id(col, row) as usize;
                    grid.cells[id] = Cell::Wall;
                }
            }
        }
        grid
    }

    /// The built-in 15x11 layout
    pub fn default_layout(tile_size: f32) -> Self {
        // The constant layout is well-formed, so this cannot fail
        Self::from_rows(&DEFAULT_LAYOUT, tile_size).unwrap_or_else(|_| Self::with_border(11, 15, tile_size))
    }

    /// Build a grid from row strings.
    ///
    /// Wall: `1`, `#`, `■`. Empty: `0`, `.`, `□`, space.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, String> {
        if rows.is_empty() {
            return Err("layout has no rows".to_string());
        }
        if tile_size.is_nan() || tile_size <= 0.0 {
            return Err(format!("tile size must be positive, got {}", tile_size));
        }

        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            return Err("layout rows are empty".to_string());
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != cols {
                return Err(format!("row {} has {} cells, expected {}", y, width, cols));
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '1' | '#' | '■' => Cell::Wall,
                    '0' | '.' | '□' | ' ' => Cell::Empty,
                    other => {
                        return Err(format!("unknown cell '{}' at row {}, column {}", other, y, x));
                    }
                };
                cells.push(cell);
            }
        }

        Ok(Grid {
            rows: rows.len() as i32,
            cols: cols as i32,
            tile_size,
            cells,
        })
    }

    /// Parse a multi-line layout, ignoring blank lines
    pub fn parse(text: &str, tile_size: f32) -> Result<Self, String> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();
        Self::from_rows(&lines, tile_size)
    }

    /// Convert (col, row) coordinates to cell ID
    pub fn get_id(&self, col: i32, row: i32) -> i32 {
        col + row * self.cols
    }

    /// Convert cell ID to (col, row) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    /// Cell at (col, row); anything outside the grid is a wall
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        if col < 0 || col >= self.cols || row < 0 || row >= self.rows {
            return Cell::Wall;
        }
        self.cells[self.get_id(col, row) as usize]
    }

    pub fn is_wall_cell(&self, col: i32, row: i32) -> bool {
        self.cell_at(col, row) == Cell::Wall
    }

    /// Wall query in world units.
    ///
    /// Everything outside `[0, width) x [0, height)` counts as a wall, so
    /// the grid array is never indexed out of range.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if !(x >= 0.0 && x < self.world_width() && y >= 0.0 && y < self.world_height()) {
            return true;
        }
        let col = (x / self.tile_size).floor() as i32;
        let row = (y / self.tile_size).floor() as i32;
        self.is_wall_cell(col, row)
    }

    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Render the grid as text (`■` wall, `□` empty), optionally marking one cell with `s`
    pub fn to_layout_string(&self, marker: Option<(i32, i32)>) -> String {
        let mut result = String::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = if marker == Some((col, row)) {
                    's'
                } else if self.is_wall_cell(col, row) {
                    '■'
                } else {
                    '□'
                };
                result.push(symbol);
            }
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_dimensions() {
        let grid = Grid::default_layout(32.0);
        assert_eq!(grid.rows, 11);
        assert_eq!(grid.cols, 15);
        assert_eq!(grid.world_width(), 480.0);
        assert_eq!(grid.world_height(), 352.0);
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = Grid::default_layout(32.0);
        // Row 2 has a single interior wall at column 5
        assert!(grid.is_wall_cell(5, 2));
        assert!(!grid.is_wall_cell(2, 5));
        assert!(grid.is_wall(5.0 * 32.0 + 1.0, 2.0 * 32.0 + 1.0));
        assert!(!grid.is_wall(2.0 * 32.0 + 1.0, 5.0 * 32.0 + 1.0));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = Grid::new(4, 4, 10.0);
        assert!(!grid.is_wall(0.0, 0.0));
        assert!(!grid.is_wall(39.9, 39.9));
        assert!(grid.is_wall(40.0, 5.0));
        assert!(grid.is_wall(5.0, 40.0));
        assert!(grid.is_wall(-0.1, 5.0));
        assert!(grid.is_wall(5.0, -0.1));
        assert!(grid.is_wall(f32::NAN, 5.0));
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert!(Grid::parse("", 32.0).is_err());
        assert!(Grid::parse("111\n11\n", 32.0).is_err());
        assert!(Grid::parse("1x1\n", 32.0).is_err());
        assert!(Grid::parse("111\n", 0.0).is_err());
    }

    #[test]
    fn test_parse_accepts_symbol_styles() {
        let grid = Grid::parse("■■■\n#.□\n1 0\n", 16.0).unwrap();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cols, 3);
        assert!(grid.is_wall_cell(0, 1));
        assert!(!grid.is_wall_cell(1, 1));
        assert!(!grid.is_wall_cell(2, 1));
        assert!(!grid.is_wall_cell(1, 2));
    }

    #[test]
    fn test_layout_string_round_trips() {
        let grid = Grid::default_layout(32.0);
        let text = grid.to_layout_string(None);
        let parsed = Grid::parse(&text, 32.0).unwrap();
        assert_eq!(parsed.cells, grid.cells);
    }

    #[test]
    fn test_layout_string_marker() {
        let grid = Grid::with_border(3, 3, 8.0);
        assert_eq!(grid.to_layout_string(Some((1, 1))), "■■■\n■s■\n■■■\n");
    }
}
