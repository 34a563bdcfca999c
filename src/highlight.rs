use crate::coord::Square;
use crate::display::CoordinateMapper;
use crate::layer::{DrawLayer, Ink};
use crate::moves::Move;
use crate::style::HighlightStyle;


// One outline per square, in input order. Duplicates are kept: the last one drawn wins.
pub fn highlight_squares(
    squares: &[Square], mapper: CoordinateMapper, style: &HighlightStyle,
) -> Vec<DrawLayer> {
    squares
        .iter()
        .map(|&sq| DrawLayer::Outline {
            at: mapper.to_grid(sq),
            inset: style.inset,
            line_width: style.line_width,
            ink: style.ink,
        })
        .collect()
}

// Origin first, then destination, even if they coincide.
pub fn highlight_move(mv: Move, mapper: CoordinateMapper, style: &HighlightStyle) -> Vec<DrawLayer> {
    highlight_squares(&[mv.from, mv.to], mapper, style)
}

// Paints whole cells. Use a translucent ink to keep the pieces visible.
pub fn color_squares(squares: &[Square], mapper: CoordinateMapper, ink: Ink) -> Vec<DrawLayer> {
    squares
        .iter()
        .map(|&sq| DrawLayer::Fill { at: mapper.to_grid(sq), ink })
        .collect()
}
