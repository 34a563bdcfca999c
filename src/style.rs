use serde::{Deserialize, Serialize};

use crate::error::DiagramError;
use crate::layer::{Color, Ink};


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStyle {
    pub checkered: bool,
    pub light_square: Color,
    pub dark_square: Color,
    // Used for pieces, grid lines and labels.
    pub ink: Ink,
    pub grid_line_width: f64,
}

#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveStyle {
    pub arrow: Ink,
    pub piece: Ink,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    pub ink: Ink,
    // Distance between the outline and the cell border, in cells.
    pub inset: f64,
    pub line_width: f64,
}

impl Default for BoardStyle {
    fn default() -> Self {
        BoardStyle {
            checkered: true,
            light_square: Color::Rgb(235, 235, 235),
            dark_square: Color::Rgb(150, 150, 150),
            ink: Ink::default(),
            grid_line_width: 0.02,
        }
    }
}

impl BoardStyle {
    pub fn validate(&self) -> Result<(), DiagramError> {
        check_width("grid_line_width", self.grid_line_width)
    }
}

impl MoveStyle {
    pub fn uniform(ink: Ink) -> Self { MoveStyle { arrow: ink, piece: ink } }

    // How the move that led to the displayed position is drawn in the viewer.
    pub fn faded() -> Self { MoveStyle::uniform(Ink::default().with_alpha(0.4)) }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        HighlightStyle {
            ink: Ink::solid(Color::Red),
            inset: 0.04,
            line_width: 0.05,
        }
    }
}

impl HighlightStyle {
    // The outline must frame its own cell and nothing else: `line_width / 2 <= inset < 0.5`.
    pub fn validate(&self) -> Result<(), DiagramError> {
        check_width("line_width", self.line_width)?;
        let (inset, line_width) = (self.inset, self.line_width);
        if !(line_width / 2.0 <= inset && inset < 0.5) {
            return Err(DiagramError::InvalidStyle(format!(
                "outline inset {inset} must be at least half the line width ({line_width}) and below 0.5"
            )));
        }
        Ok(())
    }
}

fn check_width(name: &str, value: f64) -> Result<(), DiagramError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(DiagramError::InvalidStyle(format!("{name} must be a non-negative number, got {value}")));
    }
    Ok(())
}
