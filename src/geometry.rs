use crate::Cell;
use std::ops::{Add, Sub};

/// A position or offset in board pixel space, origin at the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Grid indices that may lie off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: i64,
    pub row: i64,
}

impl GridPos {
    pub fn cell(self) -> Option<Cell> {
        Cell::try_new(self.col, self.row)
    }
}

/// Maps between board cells and pixels for square tiles of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    tile_size: f32,
}

impl TileGeometry {
    pub const DEFAULT_TILE_SIZE: f32 = 90.0;

    pub fn new(tile_size: f32) -> Self {
        assert!(
            tile_size.is_finite() && tile_size > 0.0,
            "Invalid tile size {tile_size}"
        );
        Self { tile_size }
    }

    pub fn tile_size(self) -> f32 {
        self.tile_size
    }

    pub fn board_size(self) -> f32 {
        self.tile_size * Cell::WIDTH as f32
    }

    /// Top-left corner of `cell`.
    pub fn cell_to_pixel(self, cell: Cell) -> Point {
        Point::new(
            cell.col() as f32 * self.tile_size,
            cell.row() as f32 * self.tile_size,
        )
    }

    /// Grid position whose top-left corner is nearest to `point`.
    ///
    /// Used for a piece's top-left corner, so a piece dropped more than half a
    /// tile past a cell lands on the next one. Not clamped to the board.
    pub fn pixel_to_cell(self, point: Point) -> GridPos {
        GridPos {
            col: (point.x / self.tile_size).round() as i64,
            row: (point.y / self.tile_size).round() as i64,
        }
    }

    /// Grid position of the tile containing `point`. Not clamped to the board.
    pub fn grid_pos_at(self, point: Point) -> GridPos {
        GridPos {
            col: (point.x / self.tile_size).floor() as i64,
            row: (point.y / self.tile_size).floor() as i64,
        }
    }

    pub fn cell_center(self, cell: Cell) -> Point {
        let half = 0.5 * self.tile_size;
        self.cell_to_pixel(cell) + Point::new(half, half)
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TILE_SIZE)
    }
}
