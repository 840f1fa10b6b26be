//! Board geometry.
//!
//! Converts 1-indexed `(row, column)` cells into positions on a drawing
//! surface of `board_width x board_height` units (pixels for a canvas, cells
//! for a terminal). The tile grid is centred on the surface. Pure arithmetic,
//! no state beyond the configured sizes.

/// Tile sizes plus the surface the grid is centred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub tile_width: i32,
    pub tile_height: i32,
    pub tile_padding: i32,
    pub board_width: i32,
    pub board_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        // Terminal cells: 8x5 slots (6x3 drawable), two cells of gutter.
        Self {
            tile_width: 8,
            tile_height: 5,
            tile_padding: 2,
            board_width: 80,
            board_height: 24,
        }
    }
}

/// Axis-aligned rectangle, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDescriptor {
    rows: u8,
    columns: u8,
    config: LayoutConfig,
}

impl PositionDescriptor {
    pub fn new(rows: u8, columns: u8, config: LayoutConfig) -> Self {
        Self {
            rows,
            columns,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Same grid, different surface size (e.g. after a terminal resize).
    pub fn with_surface(mut self, board_width: i32, board_height: i32) -> Self {
        self.config.board_width = board_width;
        self.config.board_height = board_height;
        self
    }

    /// Horizontal margin left of the first tile
    pub fn initial_padding_width(&self) -> i32 {
        let c = &self.config;
        let tiles_width = self.columns as i32 * (c.tile_width + c.tile_padding) - 2 * c.tile_padding;
        (c.board_width - tiles_width) / 2
    }

    /// Vertical margin above the first tile
    pub fn initial_padding_height(&self) -> i32 {
        let c = &self.config;
        let tiles_height = self.rows as i32 * (c.tile_height + c.tile_padding) - 2 * c.tile_padding;
        (c.board_height - tiles_height) / 2
    }

    /// Top-left corner of a tile slot
    pub fn tile_origin(&self, row: u8, column: u8) -> (i32, i32) {
        let c = &self.config;
        let x = (column as i32 - 1) * c.tile_width + c.tile_padding + self.initial_padding_width();
        let y = (row as i32 - 1) * c.tile_height + c.tile_padding + self.initial_padding_height();
        (x, y)
    }

    /// Centre of a face-down tile
    pub fn tile(&self, row: u8, column: u8) -> (i32, i32) {
        let (x, y) = self.tile_origin(row, column);
        (x + self.config.tile_width / 2, y + self.config.tile_height / 2)
    }

    /// Anchor of a revealed tile image
    pub fn tile_image(&self, row: u8, column: u8) -> (i32, i32) {
        let (x, y) = self.tile(row, column);
        let half_pad = self.config.tile_padding / 2;
        (x - half_pad, y - half_pad)
    }

    /// Anchor of the player sprite
    pub fn player(&self, row: u8, column: u8) -> (i32, i32) {
        self.tile_image(row, column)
    }

    /// Drawable area of a tile; the padding is left as a gutter.
    pub fn tile_rect(&self, row: u8, column: u8) -> Rect {
        let (x, y) = self.tile_origin(row, column);
        Rect {
            x,
            y,
            width: (self.config.tile_width - self.config.tile_padding).max(1),
            height: (self.config.tile_height - self.config.tile_padding).max(1),
        }
    }

    /// Extent of the whole tile grid
    pub fn grid_rect(&self) -> Rect {
        let (x, y) = self.tile_origin(1, 1);
        let last = self.tile_rect(self.rows.max(1), self.columns.max(1));
        Rect {
            x,
            y,
            width: last.x + last.width - x,
            height: last.y + last.height - y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> LayoutConfig {
        LayoutConfig {
            tile_width: 130,
            tile_height: 130,
            tile_padding: 10,
            board_width: 800,
            board_height: 600,
        }
    }

    #[test]
    fn test_initial_padding() {
        let pd = PositionDescriptor::new(4, 5, canvas());
        // 5 * 140 - 20 = 680 => (800 - 680) / 2
        assert_eq!(pd.initial_padding_width(), 60);
        // 4 * 140 - 20 = 540 => (600 - 540) / 2
        assert_eq!(pd.initial_padding_height(), 30);
    }

    #[test]
    fn test_tile_positions() {
        let pd = PositionDescriptor::new(4, 5, canvas());
        assert_eq!(pd.tile_origin(1, 1), (70, 40));
        assert_eq!(pd.tile(1, 1), (135, 105));
        assert_eq!(pd.tile_image(1, 1), (130, 100));
        assert_eq!(pd.player(2, 3), pd.tile_image(2, 3));
        assert_eq!(pd.tile_origin(2, 3), (70 + 260, 40 + 130));
    }

    #[test]
    fn test_tiles_do_not_overlap() {
        let pd = PositionDescriptor::new(3, 3, LayoutConfig::default());
        let a = pd.tile_rect(1, 1);
        let b = pd.tile_rect(1, 2);
        let c = pd.tile_rect(2, 1);
        assert!(a.x + a.width <= b.x);
        assert!(a.y + a.height <= c.y);
    }

    #[test]
    fn test_grid_is_centred() {
        let pd = PositionDescriptor::new(2, 2, LayoutConfig::default()).with_surface(100, 40);
        let grid = pd.grid_rect();
        let left = grid.x;
        let right = 100 - (grid.x + grid.width);
        assert!((left - right).abs() <= 2, "left {} right {}", left, right);
    }
}
