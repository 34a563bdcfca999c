// Text rendering of layer lists. The board becomes a 10x10 block of character cells: the 8x8
// squares plus a one-cell frame holding the axis labels. Each cell is three characters wide.

use std::io::{self, Write};

use console::Style;
use crossterm::{cursor, queue, style as term_style, terminal};
use itertools::Itertools;

use chessplot::display::{GridPoint, Point};
use chessplot::layer::{ArrowShape, Color, DrawLayer, Ink, SquareShade};
use chessplot::surface::Surface;


const FRAME_CELLS: usize = 10;
const ORIGIN_MARKER: char = '·';

#[derive(Clone, Copy, Debug, Default)]
struct Cell {
    background: Option<Color>,
    content: Option<(char, Ink)>,
    outline: Option<Ink>,
}

type Frame = [[Cell; FRAME_CELLS]; FRAME_CELLS];

fn frame_index(v: f64) -> Option<usize> {
    let i = v.round() as i64 + 1;
    usize::try_from(i).ok().filter(|&i| i < FRAME_CELLS)
}

fn cell_at(frame: &mut Frame, p: Point) -> Option<&mut Cell> {
    let (col, row) = (frame_index(p.x)?, frame_index(p.y)?);
    Some(&mut frame[row][col])
}

fn square_cell(frame: &mut Frame, at: GridPoint) -> &mut Cell {
    &mut frame[usize::from(at.row) + 1][usize::from(at.col) + 1]
}

fn blend(below: Color, above: Ink) -> Color {
    let (r0, g0, b0) = below.rgb();
    let (r1, g1, b1) = above.color.rgb();
    let mix = |c0: u8, c1: u8| (f64::from(c0) * (1. - above.alpha) + f64::from(c1) * above.alpha).round() as u8;
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

// Closest entry of the 6x6x6 color cube.
fn ansi256(color: Color) -> u8 {
    let (r, g, b) = color.rgb();
    let level = |c: u8| (u16::from(c) * 5 + 127) / 255;
    (16 + 36 * level(r) + 6 * level(g) + level(b)) as u8
}

fn paint(frame: &mut Frame, layer: &DrawLayer) {
    match layer {
        DrawLayer::Checkers { light, dark, cells } => {
            for at in GridPoint::all() {
                let color = match cells[usize::from(at.row)][usize::from(at.col)] {
                    SquareShade::Light => *light,
                    SquareShade::Dark => *dark,
                };
                square_cell(frame, at).background = Some(color);
            }
        }
        // Cell boundaries already play the role of grid lines.
        DrawLayer::GridLine { .. } => {}
        DrawLayer::AxisLabel { at, text, ink } => {
            if let Some(cell) = cell_at(frame, *at) {
                cell.content = Some((*text, *ink));
            }
        }
        DrawLayer::Glyph { at, glyph, ink, .. } => {
            square_cell(frame, *at).content = Some((*glyph, *ink));
        }
        DrawLayer::Arrow { shape, ink, .. } => match shape {
            ArrowShape::Straight { tail, .. } => {
                if let Some(cell) = cell_at(frame, *tail) {
                    if cell.content.is_none() {
                        cell.content = Some((ORIGIN_MARKER, *ink));
                    }
                }
            }
            // The piece stays in the cell, so frame it instead.
            ArrowShape::Loop { center, .. } => {
                if let Some(cell) = cell_at(frame, *center) {
                    cell.outline = Some(*ink);
                }
            }
        },
        DrawLayer::Outline { at, ink, .. } => {
            square_cell(frame, *at).outline = Some(*ink);
        }
        DrawLayer::Fill { at, ink } => {
            let cell = square_cell(frame, *at);
            cell.background = Some(blend(cell.background.unwrap_or(Color::White), *ink));
        }
    }
}

fn ink_style(base: &Style, ink: Ink) -> Style {
    let style = base.clone().color256(ansi256(ink.color));
    if ink.alpha < 1. { style.dim() } else { style }
}

fn render_cell(cell: &Cell, colored: bool) -> String {
    let (left, right) = if cell.outline.is_some() { ('[', ']') } else { (' ', ' ') };
    let content = cell.content.map_or(' ', |(ch, _)| ch);
    if !colored {
        return format!("{left}{content}{right}");
    }
    let base = match cell.background {
        Some(color) => Style::new().on_color256(ansi256(color)),
        None => Style::new(),
    };
    let side = |ch: char| match cell.outline {
        Some(ink) => ink_style(&base, ink).bold().apply_to(ch).to_string(),
        None => base.apply_to(ch).to_string(),
    };
    let middle = match cell.content {
        Some((ch, ink)) => ink_style(&base, ink).apply_to(ch).to_string(),
        None => base.apply_to(' ').to_string(),
    };
    format!("{}{}{}", side(left), middle, side(right))
}

// Layers are painted in order, so later layers win within a cell.
pub fn render_layers(layers: &[DrawLayer], colored: bool) -> String {
    let mut frame = Frame::default();
    for layer in layers {
        paint(&mut frame, layer);
    }
    frame
        .iter()
        .map(|row| row.iter().map(|cell| render_cell(cell, colored)).join(""))
        .join("\n")
}

// Draws into a terminal that is already in raw mode.
pub struct TerminalSurface<W: Write> {
    out: W,
    pending: Vec<DrawLayer>,
    colored: bool,
    footer: String,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, colored: bool) -> Self {
        TerminalSurface { out, pending: Vec::new(), colored, footer: String::new() }
    }

    // Text shown below the board on every redraw.
    pub fn set_footer(&mut self, footer: impl Into<String>) { self.footer = footer.into(); }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) { self.pending.clear(); }
    fn submit(&mut self, layers: &[DrawLayer]) { self.pending.extend_from_slice(layers); }

    fn redraw(&mut self) -> io::Result<()> {
        let text = render_layers(&self.pending, self.colored);
        queue!(self.out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
        // Raw mode: a bare '\n' doesn't return the carriage.
        for line in text.split('\n').chain(["", self.footer.as_str()]) {
            queue!(self.out, term_style::Print(line), cursor::MoveToNextLine(1))?;
        }
        queue!(self.out, cursor::Hide)?;
        self.out.flush()
    }
}
