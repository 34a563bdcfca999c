use crate::coord::Square;
use crate::display::{CoordinateMapper, mult_vec, normalize_vec};
use crate::error::DiagramError;
use crate::layer::{ArrowShape, DrawLayer, Ink};
use crate::moves::Move;
use crate::piece::Piece;
use crate::position::Position;
use crate::render::piece_layer;
use crate::style::MoveStyle;


pub const ARROW_WIDTH: f64 = 0.04;
pub const ARROW_HEAD_WIDTH: f64 = 0.2;
pub const ARROW_HEAD_LENGTH: f64 = 0.25;
pub const LOOP_RADIUS: f64 = 0.3;

// Layers for `mv` played in `position_before`: an arrow from origin to destination followed by the
// piece that will stand on the destination. Meant to be appended after `render_board` output.
pub fn annotate_move(
    position_before: &Position, mv: Move, mapper: CoordinateMapper, style: &MoveStyle,
) -> Result<Vec<DrawLayer>, DiagramError> {
    let moving = position_before
        .piece_at(mv.from)
        .ok_or(DiagramError::EmptyOriginSquare(mv.from))?;
    let shown = match mv.promote_to {
        None => moving,
        Some(kind) => Piece::new(kind, moving.force),
    };
    Ok(vec![
        arrow_layer(mv.from, mv.to, mapper, style.arrow),
        piece_layer(mv.to, shown, mapper, style.piece),
    ])
}

pub fn arrow_layer(from: Square, to: Square, mapper: CoordinateMapper, ink: Ink) -> DrawLayer {
    let tail = mapper.square_center(from);
    let tip = mapper.square_center(to);
    let shape = if from == to {
        ArrowShape::Loop { center: tip, radius: LOOP_RADIUS }
    } else {
        // Distinct squares are at least one cell apart, so the head always fits.
        let back = mult_vec(normalize_vec(tip - tail), -ARROW_HEAD_LENGTH);
        ArrowShape::Straight {
            tail,
            head_base: tip + back,
            tip,
            head_width: ARROW_HEAD_WIDTH,
        }
    };
    DrawLayer::Arrow { shape, width: ARROW_WIDTH, ink }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{GridPoint, Point};
    use crate::fen::position_from_fen;
    use crate::force::Force;
    use crate::layer::Color;
    use crate::piece::PieceKind;

    fn sq(s: &str) -> Square { Square::from_algebraic(s).unwrap() }

    #[test]
    fn arrow_ends_on_destination_center() {
        let layer = arrow_layer(sq("e2"), sq("e4"), CoordinateMapper::default(), Ink::default());
        let DrawLayer::Arrow { shape: ArrowShape::Straight { tail, head_base, tip, .. }, .. } = layer
        else {
            panic!("unexpected layer: {layer:?}");
        };
        assert_eq!(tail, Point { x: 4., y: 6. });
        assert_eq!(tip, Point { x: 4., y: 4. });
        assert_eq!(head_base, Point { x: 4., y: 4. + ARROW_HEAD_LENGTH });
    }

    #[test]
    fn null_arrow_is_a_loop() {
        let layer = arrow_layer(sq("d5"), sq("d5"), CoordinateMapper::default(), Ink::default());
        let DrawLayer::Arrow { shape: ArrowShape::Loop { center, radius }, .. } = layer else {
            panic!("unexpected layer: {layer:?}");
        };
        assert_eq!(center, Point { x: 3., y: 3. });
        assert!(radius > 0.);
    }

    #[test]
    fn arrow_and_piece_styles_are_independent() {
        let style = MoveStyle {
            arrow: Ink::new(Color::Blue, 0.3),
            piece: Ink::new(Color::Red, 0.8),
        };
        let layers =
            annotate_move(&Position::starting(), Move::from_uci("g1f3").unwrap(), CoordinateMapper::default(), &style)
                .unwrap();
        let [DrawLayer::Arrow { ink: arrow_ink, .. }, DrawLayer::Glyph { ink: piece_ink, at, piece, .. }] =
            layers.as_slice()
        else {
            panic!("unexpected layers: {layers:?}");
        };
        assert_eq!(*arrow_ink, style.arrow);
        assert_eq!(*piece_ink, style.piece);
        assert_eq!(*at, GridPoint::new(5, 5));
        assert_eq!(*piece, Piece::new(PieceKind::Knight, Force::White));
    }

    #[test]
    fn promotion_keeps_mover_color() {
        let pos = position_from_fen("1r5k/P7/8/8/8/8/8/7K w - - 0 1").unwrap();
        let layers = annotate_move(
            &pos,
            Move::from_uci("a7b8q").unwrap(),
            CoordinateMapper::default(),
            &MoveStyle::default(),
        )
        .unwrap();
        let DrawLayer::Glyph { piece, glyph, .. } = &layers[1] else {
            panic!("unexpected layer: {:?}", layers[1]);
        };
        assert_eq!(*piece, Piece::new(PieceKind::Queen, Force::White));
        assert_eq!(*glyph, '♕');
    }

    #[test]
    fn empty_origin() {
        assert_eq!(
            annotate_move(
                &Position::starting(),
                Move::from_uci("e4e5").unwrap(),
                CoordinateMapper::default(),
                &MoveStyle::default()
            ),
            Err(DiagramError::EmptyOriginSquare(sq("e4")))
        );
    }
}
