// Draw layers are plain values: a render pass produces an ordered `Vec<DrawLayer>`, and identical
// inputs always produce identical vectors. Surfaces consume them in order, so a later layer is
// painted over earlier ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumDiscriminants;

use crate::display::{GridPoint, Point};
use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Grey,
    Red,
    Green,
    Blue,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Grey => (128, 128, 128),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 128, 0),
            Color::Blue => (0, 0, 255),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            "grey" | "gray" => Ok(Color::Grey),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => {
                let hex = s.strip_prefix('#').filter(|h| h.len() == 6 && h.is_ascii());
                let channel = |i: usize| hex.and_then(|h| u8::from_str_radix(&h[i..i + 2], 16).ok());
                match (channel(0), channel(2), channel(4)) {
                    (Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r, g, b)),
                    _ => Err(format!("unknown color: '{s}'")),
                }
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

// Paint: a color plus opacity in [0, 1]. Constructors clamp; deserialization rejects values
// outside the range.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "InkFields")]
pub struct Ink {
    pub color: Color,
    pub alpha: f64,
}

#[derive(Deserialize)]
struct InkFields {
    color: Color,
    alpha: f64,
}

impl Ink {
    pub fn new(color: Color, alpha: f64) -> Self { Ink { color, alpha: clamp_alpha(alpha) } }
    pub const fn solid(color: Color) -> Self { Ink { color, alpha: 1.0 } }
    pub fn with_alpha(self, alpha: f64) -> Self { Ink { alpha: clamp_alpha(alpha), ..self } }
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) }
}

impl TryFrom<InkFields> for Ink {
    type Error = String;
    fn try_from(fields: InkFields) -> Result<Self, Self::Error> {
        let InkFields { color, alpha } = fields;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(format!("alpha must be within [0, 1], got {alpha}"));
        }
        Ok(Ink { color, alpha })
    }
}

impl Default for Ink {
    fn default() -> Self { Ink::solid(Color::Black) }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SquareShade {
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ArrowShape {
    // The tip lies exactly on the destination center; the head occupies [head_base, tip].
    Straight {
        tail: Point,
        head_base: Point,
        tip: Point,
        head_width: f64,
    },
    // A move that starts and ends on the same square: an open ring around the center.
    Loop { center: Point, radius: f64 },
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, EnumDiscriminants)]
#[strum_discriminants(name(LayerKind))]
pub enum DrawLayer {
    // Indexed as `cells[row][col]` in grid space.
    Checkers {
        light: Color,
        dark: Color,
        cells: [[SquareShade; 8]; 8],
    },
    GridLine {
        from: Point,
        to: Point,
        width: f64,
        ink: Ink,
    },
    AxisLabel {
        at: Point,
        text: char,
        ink: Ink,
    },
    Glyph {
        at: GridPoint,
        piece: Piece,
        glyph: char,
        ink: Ink,
    },
    Arrow {
        shape: ArrowShape,
        width: f64,
        ink: Ink,
    },
    Outline {
        at: GridPoint,
        inset: f64,
        line_width: f64,
        ink: Ink,
    },
    Fill {
        at: GridPoint,
        ink: Ink,
    },
}

impl DrawLayer {
    pub fn kind(&self) -> LayerKind { LayerKind::from(self) }
}
