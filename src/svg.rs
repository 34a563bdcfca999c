// SVG output. The document is a pure function of the layer list, so it can be stored and compared
// byte-by-byte across runs.

use std::fmt::Write;
use std::io;

use itertools::Itertools;

use crate::display::{GridPoint, Point, normalize_vec};
use crate::layer::{ArrowShape, DrawLayer, Ink, SquareShade};
use crate::surface::Surface;


const VIEW_MIN: f64 = -1.2;
const VIEW_SIZE: f64 = 9.4;
const PIXELS_PER_CELL: f64 = 60.;
const GLYPH_SIZE: f64 = 0.8;
const LABEL_SIZE: f64 = 0.35;

#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    pending: Vec<DrawLayer>,
    document: String,
}

impl SvgSurface {
    pub fn new() -> Self { Self::default() }

    // Document as of the last `redraw`.
    pub fn document(&self) -> &str { &self.document }
}

impl Surface for SvgSurface {
    fn clear(&mut self) { self.pending.clear(); }
    fn submit(&mut self, layers: &[DrawLayer]) { self.pending.extend_from_slice(layers); }
    fn redraw(&mut self) -> io::Result<()> {
        self.document = render_svg(&self.pending);
        Ok(())
    }
}

// Up to three decimals, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn fill_attrs(ink: Ink) -> String {
    format!(r#"fill="{}" fill-opacity="{}""#, ink.color.to_hex(), num(ink.alpha))
}

fn stroke_attrs(ink: Ink, width: f64) -> String {
    format!(
        r#"fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        ink.color.to_hex(),
        num(ink.alpha),
        num(width)
    )
}

fn cell_rect(at: GridPoint, inset: f64, attrs: &str) -> String {
    let pivot = at.pivot();
    let side = 1. - 2. * inset;
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" {attrs}/>"#,
        num(pivot.x + inset),
        num(pivot.y + inset),
        num(side),
        num(side)
    )
}

fn text(at: Point, size: f64, content: char, ink: Ink) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central" {}>{content}</text>"#,
        num(at.x),
        num(at.y),
        num(size),
        fill_attrs(ink)
    )
}

fn arrow(shape: ArrowShape, width: f64, ink: Ink) -> String {
    match shape {
        ArrowShape::Straight { tail, head_base, tip, head_width } => {
            let (dx, dy) = normalize_vec(tip - tail);
            let (px, py) = (-dy * head_width / 2., dx * head_width / 2.);
            let corners = [tip, head_base + (px, py), head_base + (-px, -py)];
            let points = corners.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).join(" ");
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/><polygon points="{points}" {}/>"#,
                num(tail.x),
                num(tail.y),
                num(head_base.x),
                num(head_base.y),
                stroke_attrs(ink, width),
                fill_attrs(ink)
            )
        }
        ArrowShape::Loop { center, radius } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            num(center.x),
            num(center.y),
            num(radius),
            stroke_attrs(ink, width)
        ),
    }
}

fn render_layer(layer: &DrawLayer) -> String {
    match layer {
        DrawLayer::Checkers { light, dark, cells } => GridPoint::all()
            .map(|at| {
                let color = match cells[at.row as usize][at.col as usize] {
                    SquareShade::Light => *light,
                    SquareShade::Dark => *dark,
                };
                cell_rect(at, 0., &fill_attrs(Ink::solid(color)))
            })
            .join(""),
        DrawLayer::GridLine { from, to, width, ink } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            stroke_attrs(*ink, *width)
        ),
        DrawLayer::AxisLabel { at, text: label, ink } => text(*at, LABEL_SIZE, *label, *ink),
        DrawLayer::Glyph { at, glyph, ink, .. } => text(at.center(), GLYPH_SIZE, *glyph, *ink),
        DrawLayer::Arrow { shape, width, ink } => arrow(*shape, *width, *ink),
        DrawLayer::Outline { at, inset, line_width, ink } => {
            cell_rect(*at, *inset, &stroke_attrs(*ink, *line_width))
        }
        DrawLayer::Fill { at, ink } => cell_rect(*at, 0., &fill_attrs(*ink)),
    }
}

pub fn render_svg(layers: &[DrawLayer]) -> String {
    let pixels = num(VIEW_SIZE * PIXELS_PER_CELL);
    let mut doc = String::new();
    // Writing into a `String` cannot fail.
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{pixels}" height="{pixels}" viewBox="{} {} {} {}">"#,
        num(VIEW_MIN),
        num(VIEW_MIN),
        num(VIEW_SIZE),
        num(VIEW_SIZE)
    );
    for layer in layers {
        let _ = writeln!(doc, "{}", render_layer(layer));
    }
    doc.push_str("</svg>\n");
    doc
}
