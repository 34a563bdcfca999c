#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod annotate;
pub mod coord;
pub mod display;
pub mod error;
pub mod fen;
pub mod force;
pub mod grid;
pub mod highlight;
pub mod layer;
pub mod moves;
pub mod piece;
pub mod position;
pub mod render;
pub mod rules;
pub mod style;
pub mod surface;
pub mod svg;
pub mod timeline;
pub mod viewer;

pub use annotate::{annotate_move, arrow_layer};
pub use coord::{File, Rank, Square};
pub use display::{BoardOrientation, CoordinateMapper, GridPoint, Point};
pub use error::{DiagramError, MoveError};
pub use fen::{STARTING_FEN, position_from_fen, position_to_fen};
pub use force::Force;
pub use highlight::{color_squares, highlight_move, highlight_squares};
pub use layer::{Color, DrawLayer, Ink, LayerKind};
pub use moves::{Move, parse_move_list};
pub use piece::{Piece, PieceKind};
pub use position::Position;
pub use render::{blank_board, piece_layer, render_board};
pub use rules::{BasicRules, RulesEngine};
pub use style::{BoardStyle, HighlightStyle, MoveStyle};
pub use surface::{RecordingSurface, Surface};
pub use svg::{SvgSurface, render_svg};
pub use timeline::{Timeline, TimelineEntry};
pub use viewer::{InteractiveViewer, ViewerEvent, ViewerOptions, ViewerState, ViewerStatus, render_frame};
