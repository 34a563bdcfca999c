// Not every test binary uses every helper.
#![allow(dead_code)]

use chessplot::display::GridPoint;
use chessplot::layer::{DrawLayer, Ink, LayerKind};
use chessplot::moves::parse_move_list;
use chessplot::position::Position;
use chessplot::rules::BasicRules;
use chessplot::timeline::Timeline;
use itertools::Itertools;


#[macro_export]
macro_rules! sq {
    ($sq:ident) => {
        chessplot::coord::Square::from_algebraic(stringify!($sq)).unwrap()
    };
}

#[macro_export]
macro_rules! piece {
    ($force:ident $kind:ident) => {
        chessplot::piece::Piece::new(
            chessplot::piece::PieceKind::$kind,
            chessplot::force::Force::$force,
        )
    };
}

pub fn replay(moves: &str) -> Timeline {
    let moves = parse_move_list(moves).unwrap();
    Timeline::build(&Position::starting(), &moves, &BasicRules).unwrap()
}

// Consecutive layers of the same kind collapsed into one entry.
pub fn kind_runs(layers: &[DrawLayer]) -> Vec<LayerKind> {
    layers.iter().map(DrawLayer::kind).dedup().collect_vec()
}

pub fn glyphs(layers: &[DrawLayer]) -> Vec<(GridPoint, char, Ink)> {
    layers
        .iter()
        .filter_map(|layer| match layer {
            DrawLayer::Glyph { at, glyph, ink, .. } => Some((*at, *glyph, *ink)),
            _ => None,
        })
        .collect_vec()
}
