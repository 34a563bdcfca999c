mod common;

use chessplot::annotate::annotate_move;
use chessplot::coord::Square;
use chessplot::display::{BoardOrientation, CoordinateMapper, GridPoint, Point};
use chessplot::error::{DiagramError, MoveError};
use chessplot::fen::position_from_fen;
use chessplot::highlight::highlight_move;
use chessplot::layer::{ArrowShape, DrawLayer, Ink, LayerKind};
use chessplot::moves::{Move, parse_move_list};
use chessplot::position::Position;
use chessplot::render::render_board;
use chessplot::rules::BasicRules;
use chessplot::style::{BoardStyle, HighlightStyle, MoveStyle};
use chessplot::svg::render_svg;
use chessplot::timeline::Timeline;
use chessplot::viewer::{ViewerOptions, render_frame};
use itertools::Itertools;
use pretty_assertions::assert_eq;

use common::*;


#[test]
fn mapping_is_a_bijection_in_both_orientations() {
    for orientation in [BoardOrientation::Normal, BoardOrientation::Rotated] {
        let mapper = CoordinateMapper::new(orientation);
        let points = Square::all().map(|sq| mapper.to_grid(sq)).collect_vec();
        assert_eq!(points.iter().unique().count(), 64);
        for sq in Square::all() {
            assert_eq!(mapper.from_grid(mapper.to_grid(sq)), Ok(sq));
        }
    }
}

#[test]
fn corners() {
    let normal = CoordinateMapper::new(BoardOrientation::Normal);
    assert_eq!(normal.to_grid(sq!(a1)), GridPoint::new(0, 7));
    assert_eq!(normal.to_grid(sq!(h8)), GridPoint::new(7, 0));
    let rotated = CoordinateMapper::new(BoardOrientation::Rotated);
    assert_eq!(rotated.to_grid(sq!(a1)), GridPoint::new(7, 0));
    assert_eq!(rotated.to_grid(sq!(h8)), GridPoint::new(0, 7));
}

#[test]
fn board_layers_come_in_fixed_order() {
    let layers = render_board(&Position::starting(), CoordinateMapper::default(), &BoardStyle::default());
    assert_eq!(
        kind_runs(&layers),
        [LayerKind::Checkers, LayerKind::GridLine, LayerKind::AxisLabel, LayerKind::Glyph]
    );
    assert_eq!(glyphs(&layers).len(), 32);
}

#[test]
fn e2e4_annotation() {
    let mapper = CoordinateMapper::default();
    let style = MoveStyle::faded();
    let layers = annotate_move(&Position::starting(), Move::from_uci("e2e4").unwrap(), mapper, &style).unwrap();
    assert_eq!(layers.len(), 2);
    let DrawLayer::Arrow { shape: ArrowShape::Straight { tail, tip, .. }, ink, .. } = layers[0] else {
        panic!("expected a straight arrow, got {:?}", layers[0]);
    };
    assert_eq!(tail, Point { x: 4., y: 6. });
    assert_eq!(tip, Point { x: 4., y: 4. });
    assert_eq!(ink, style.arrow);
    assert_eq!(glyphs(&layers), [(GridPoint::new(4, 4), '♙', style.piece)]);
}

#[test]
fn promotion_is_drawn_as_the_new_piece() {
    let before = position_from_fen("8/4P3/8/8/8/8/8/8 w - - 0 1").unwrap();
    let mv = Move::from_uci("e7e8q").unwrap();
    let timeline = Timeline::build(&before, &[mv], &BasicRules).unwrap();
    assert_eq!(timeline.last().position.piece_at(sq!(e8)), Some(piece!(White Queen)));

    let layers = annotate_move(&before, mv, CoordinateMapper::default(), &MoveStyle::default()).unwrap();
    assert_eq!(glyphs(&layers), [(GridPoint::new(4, 0), '♕', Ink::default())]);
}

#[test]
fn black_move_is_drawn_in_black() {
    let timeline = replay("e2e4 e7e5");
    let layers = render_frame(&timeline, 2, &ViewerOptions::new()).unwrap();
    let (_, glyph, _) = *glyphs(&layers).last().unwrap();
    assert_eq!(glyph, '♟');
}

#[test]
fn frame_with_marked_move() {
    let timeline = replay("g1f3");
    let options = ViewerOptions { mark_last_move: true, ..ViewerOptions::new() };
    let layers = render_frame(&timeline, 1, &options).unwrap();
    assert_eq!(
        kind_runs(&layers),
        [
            LayerKind::Checkers,
            LayerKind::GridLine,
            LayerKind::AxisLabel,
            LayerKind::Glyph,
            LayerKind::Arrow,
            LayerKind::Glyph,
            LayerKind::Outline,
        ]
    );
    let outlines = highlight_move(Move::from_uci("g1f3").unwrap(), options.mapper(), &HighlightStyle::default());
    assert!(layers.ends_with(&outlines));
}

#[test]
fn rendering_is_deterministic() {
    let timeline = replay("1. e2e4 e7e5 2. g1f3 b8c6 3. f1b5");
    let options = ViewerOptions::new();
    for index in 0..timeline.len() {
        let first = render_frame(&timeline, index, &options).unwrap();
        let second = render_frame(&timeline, index, &options).unwrap();
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
        assert_eq!(render_svg(&first), render_svg(&second));
    }
}

#[test]
fn bad_move_list_fails_as_a_whole() {
    let moves = parse_move_list("e2e4 e7e5 d1d2").unwrap();
    let err = Timeline::build(&Position::starting(), &moves, &BasicRules).unwrap_err();
    assert_eq!(
        err,
        DiagramError::IllegalMove { ply: 2, mv: moves[2], reason: MoveError::DestinationOccupied }
    );
    assert_eq!(err.to_string(), "illegal move #3 (d1d2): destination holds a piece of the same color");
}
