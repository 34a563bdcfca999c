// One-off diagrams: a position, optionally the move that was just played, optionally some marked
// squares. Output is either SVG or the raw layer list as JSON.

use std::io::{self, Write};

use anyhow::Context;

use chessplot::coord::Square;
use chessplot::display::BoardOrientation;
use chessplot::highlight::highlight_squares;
use chessplot::layer::{Color, DrawLayer, Ink};
use chessplot::moves::Move;
use chessplot::position::Position;
use chessplot::rules::BasicRules;
use chessplot::style::{BoardStyle, HighlightStyle, MoveStyle};
use chessplot::surface::Surface;
use chessplot::svg::SvgSurface;
use chessplot::timeline::Timeline;
use chessplot::viewer::{ViewerOptions, render_frame};


pub struct DiagramConfig {
    pub position: Position,
    pub last_move: Option<Move>,
    pub marks: Vec<Square>,
    pub mark_color: Color,
    pub orientation: BoardOrientation,
    pub checkered: bool,
}

pub fn diagram_layers(config: &DiagramConfig) -> anyhow::Result<Vec<DrawLayer>> {
    let options = ViewerOptions {
        orientation: config.orientation,
        board: BoardStyle { checkered: config.checkered, ..BoardStyle::default() },
        last_move: MoveStyle::default(),
        highlight: HighlightStyle { ink: Ink::solid(config.mark_color), ..HighlightStyle::default() },
        ..ViewerOptions::new()
    };
    let moves = Vec::from_iter(config.last_move);
    let timeline = Timeline::build(&config.position, &moves, &BasicRules)?;
    let mut layers = render_frame(&timeline, timeline.num_moves(), &options)?;
    layers.extend(highlight_squares(&config.marks, options.mapper(), &options.highlight));
    Ok(layers)
}

pub fn run_render(config: &DiagramConfig, output: Option<&String>) -> anyhow::Result<()> {
    let mut surface = SvgSurface::new();
    surface.submit(&diagram_layers(config)?);
    surface.redraw()?;
    match output {
        Some(path) => {
            std::fs::write(path, surface.document()).with_context(|| format!("Writing {path}"))?;
            log::info!("Diagram written to {path}");
        }
        None => io::stdout().write_all(surface.document().as_bytes())?,
    }
    Ok(())
}

pub fn run_layers(config: &DiagramConfig) -> anyhow::Result<()> {
    let layers = diagram_layers(config)?;
    println!("{}", serde_json::to_string_pretty(&layers)?);
    Ok(())
}


#[cfg(test)]
mod tests {
    use chessplot::layer::LayerKind;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(last_move: Option<&str>, marks: &[&str]) -> DiagramConfig {
        DiagramConfig {
            position: Position::starting(),
            last_move: last_move.map(|mv| Move::from_uci(mv).unwrap()),
            marks: marks.iter().map(|sq| Square::from_algebraic(sq).unwrap()).collect(),
            mark_color: Color::Red,
            orientation: BoardOrientation::Normal,
            checkered: true,
        }
    }

    #[test]
    fn layer_sequence() {
        let layers = diagram_layers(&config(Some("e2e4"), &["d5"])).unwrap();
        let kinds = layers.iter().map(DrawLayer::kind).dedup().collect_vec();
        assert_eq!(
            kinds,
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
    }

    #[test]
    fn marks_use_the_requested_color() {
        let cfg = DiagramConfig { mark_color: Color::Green, ..config(None, &["d5", "e4"]) };
        let layers = diagram_layers(&cfg).unwrap();
        let outline_inks = layers
            .iter()
            .filter_map(|layer| match layer {
                DrawLayer::Outline { ink, .. } => Some(*ink),
                _ => None,
            })
            .collect_vec();
        assert_eq!(outline_inks, [Ink::solid(Color::Green); 2]);
    }

    #[test]
    fn json_is_deterministic() {
        let cfg = config(Some("g1f3"), &[]);
        let first = serde_json::to_string(&diagram_layers(&cfg).unwrap()).unwrap();
        let second = serde_json::to_string(&diagram_layers(&cfg).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn illegal_move_is_reported() {
        assert!(diagram_layers(&config(Some("e3e4"), &[])).is_err());
    }
}
