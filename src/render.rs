// Board rendering. Layer order within a pass is always:
//   checkers (optional) -> grid lines -> axis labels -> piece glyphs,
// so pieces are never hidden by the board itself. Move arrows and highlights go after all of it.

use itertools::Itertools;

use crate::coord::{File, NUM_FILES, NUM_RANKS, Rank, Square};
use crate::display::{CoordinateMapper, GridPoint, Point};
use crate::layer::{DrawLayer, Ink, SquareShade};
use crate::piece::Piece;
use crate::position::Position;
use crate::style::BoardStyle;


const BOARD_MIN: f64 = -0.5;
const BOARD_MAX: f64 = 7.5;
// Distance from the board edge to the axis label centers, in cells.
const LABEL_OFFSET: f64 = 0.3;

pub fn render_board(
    position: &Position, mapper: CoordinateMapper, style: &BoardStyle,
) -> Vec<DrawLayer> {
    let mut layers = blank_board(mapper, style);
    layers.extend(
        position
            .grid()
            .pieces()
            .map(|(sq, piece)| piece_layer(sq, piece, mapper, style.ink)),
    );
    log::debug!("Rendered board: {} layers", layers.len());
    layers
}

// Everything but the pieces.
pub fn blank_board(mapper: CoordinateMapper, style: &BoardStyle) -> Vec<DrawLayer> {
    let mut layers = Vec::new();
    if style.checkered {
        layers.push(checkers_layer(style));
    }
    layers.extend(grid_lines(style));
    layers.extend(axis_labels(mapper, style.ink));
    layers
}

pub fn piece_layer(sq: Square, piece: Piece, mapper: CoordinateMapper, ink: Ink) -> DrawLayer {
    DrawLayer::Glyph {
        at: mapper.to_grid(sq),
        piece,
        glyph: piece.glyph(),
        ink,
    }
}

pub fn square_shade(point: GridPoint) -> SquareShade {
    if (point.col + point.row) % 2 == 0 { SquareShade::Light } else { SquareShade::Dark }
}

fn checkers_layer(style: &BoardStyle) -> DrawLayer {
    let mut cells = [[SquareShade::Light; NUM_FILES as usize]; NUM_RANKS as usize];
    for point in GridPoint::all() {
        cells[point.row as usize][point.col as usize] = square_shade(point);
    }
    DrawLayer::Checkers {
        light: style.light_square,
        dark: style.dark_square,
        cells,
    }
}

fn grid_lines(style: &BoardStyle) -> Vec<DrawLayer> {
    let line = |from, to| DrawLayer::GridLine {
        from,
        to,
        width: style.grid_line_width,
        ink: style.ink,
    };
    let offsets = (0..=NUM_RANKS).map(|i| f64::from(i) + BOARD_MIN).collect_vec();
    let horizontal = offsets
        .iter()
        .map(|&y| line(Point { x: BOARD_MIN, y }, Point { x: BOARD_MAX, y }));
    let vertical = offsets
        .iter()
        .map(|&x| line(Point { x, y: BOARD_MIN }, Point { x, y: BOARD_MAX }));
    horizontal.chain(vertical).collect()
}

// File letters above and below the board, rank digits on both sides.
fn axis_labels(mapper: CoordinateMapper, ink: Ink) -> Vec<DrawLayer> {
    let mut layers = Vec::new();
    for y in [BOARD_MIN - LABEL_OFFSET, BOARD_MAX + LABEL_OFFSET] {
        for file in File::all() {
            let x = f64::from(mapper.file_column(file));
            layers.push(DrawLayer::AxisLabel { at: Point { x, y }, text: file.to_algebraic(), ink });
        }
    }
    for x in [BOARD_MIN - LABEL_OFFSET, BOARD_MAX + LABEL_OFFSET] {
        for rank in Rank::all() {
            let y = f64::from(mapper.rank_row(rank));
            layers.push(DrawLayer::AxisLabel { at: Point { x, y }, text: rank.to_algebraic(), ink });
        }
    }
    layers
}
