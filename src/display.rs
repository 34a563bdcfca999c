// Drawing-space geometry. Everything that needs to know where a square is drawn goes through
// `CoordinateMapper`, so there is exactly one place that decides board orientation.

use std::ops;

use serde::{Deserialize, Serialize};

use crate::coord::{File, NUM_FILES, NUM_RANKS, Rank, Square};
use crate::error::DiagramError;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum BoardOrientation {
    #[default]
    Normal, // White at bottom: rank 8 is grid row 0, file 'a' is grid column 0
    Rotated, // Black at bottom: both axes mirrored
}

// Integer cell of the drawing grid. Row 0 is the top-most row on screen, column 0 is the
// left-most column. Both lie in [0, 7].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GridPoint {
    pub col: u8,
    pub row: u8,
}

// Floating-point drawing coords. Cell centers sit on integer values, so cell (col, row) spans
// [col - 0.5, col + 0.5] x [row - 0.5, row + 0.5] and the whole board spans [-0.5, 7.5] on both
// axes. The y axis points down.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct CoordinateMapper {
    pub orientation: BoardOrientation,
}

impl GridPoint {
    pub fn new(col: u8, row: u8) -> Self { GridPoint { col, row } }

    pub fn center(self) -> Point {
        Point {
            x: f64::from(self.col),
            y: f64::from(self.row),
        }
    }

    // Top-left corner of the cell.
    pub fn pivot(self) -> Point { self.center() + (-0.5, -0.5) }

    pub fn all() -> impl Iterator<Item = GridPoint> {
        (0..NUM_RANKS).flat_map(|row| (0..NUM_FILES).map(move |col| GridPoint { col, row }))
    }
}

impl CoordinateMapper {
    pub fn new(orientation: BoardOrientation) -> Self { CoordinateMapper { orientation } }

    pub fn to_grid(self, sq: Square) -> GridPoint {
        let file = sq.file.to_zero_based();
        let rank = sq.rank.to_zero_based();
        match self.orientation {
            BoardOrientation::Normal => GridPoint { col: file, row: NUM_RANKS - rank - 1 },
            BoardOrientation::Rotated => GridPoint { col: NUM_FILES - file - 1, row: rank },
        }
    }

    pub fn from_grid(self, point: GridPoint) -> Result<Square, DiagramError> {
        let invalid = || DiagramError::InvalidSquare(format!("grid ({}, {})", point.col, point.row));
        if point.col >= NUM_FILES || point.row >= NUM_RANKS {
            return Err(invalid());
        }
        let (file, rank) = match self.orientation {
            BoardOrientation::Normal => (point.col, NUM_RANKS - point.row - 1),
            BoardOrientation::Rotated => (NUM_FILES - point.col - 1, point.row),
        };
        Square::from_zero_based(file, rank).map_err(|_| invalid())
    }

    // Grid column that shows `file`, used for axis labels.
    pub fn file_column(self, file: File) -> u8 {
        self.to_grid(Square::new(file, Rank::_1)).col
    }

    // Grid row that shows `rank`, used for axis labels.
    pub fn rank_row(self, rank: Rank) -> u8 {
        self.to_grid(Square::new(File::A, rank)).row
    }

    pub fn square_center(self, sq: Square) -> Point { self.to_grid(sq).center() }
}

// Poor man's 2D geometry, just enough for arrows.

impl ops::Add<(f64, f64)> for Point {
    type Output = Self;
    fn add(self, (x, y): (f64, f64)) -> Self::Output { Point { x: self.x + x, y: self.y + y } }
}

impl ops::Sub for Point {
    type Output = (f64, f64);
    fn sub(self, rhs: Point) -> Self::Output { (self.x - rhs.x, self.y - rhs.y) }
}

pub fn mult_vec((x, y): (f64, f64), s: f64) -> (f64, f64) { (x * s, y * s) }

pub fn normalize_vec((x, y): (f64, f64)) -> (f64, f64) { mult_vec((x, y), 1. / x.hypot(y)) }
