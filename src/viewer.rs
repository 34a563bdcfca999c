// Stepping through a game. Navigation itself is a pure function of (state, event); the viewer
// wraps it and repaints the surface after every navigation event.

use std::io;

use serde::{Deserialize, Serialize};

use crate::annotate::annotate_move;
use crate::display::{BoardOrientation, CoordinateMapper};
use crate::error::DiagramError;
use crate::highlight::highlight_move;
use crate::layer::DrawLayer;
use crate::render::render_board;
use crate::style::{BoardStyle, HighlightStyle, MoveStyle};
use crate::surface::Surface;
use crate::timeline::Timeline;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewerEvent {
    Prev,
    Next,
    Quit,
    Other,
}

impl ViewerEvent {
    // Key names as reported by keyboard-style event sources.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "left" | "h" => ViewerEvent::Prev,
            "right" | "l" => ViewerEvent::Next,
            "q" | "escape" => ViewerEvent::Quit,
            _ => ViewerEvent::Other,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewerState {
    index: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    // Show the position at the new index. Also produced when clamping keeps the index unchanged.
    Show(ViewerState),
    Ignore,
    End,
}

impl ViewerState {
    pub fn initial() -> Self { ViewerState { index: 0 } }
    pub fn index(self) -> usize { self.index }

    pub fn transition(self, event: ViewerEvent, num_positions: usize) -> Transition {
        let last = num_positions.saturating_sub(1);
        match event {
            ViewerEvent::Prev => Transition::Show(ViewerState { index: self.index.saturating_sub(1).min(last) }),
            ViewerEvent::Next => Transition::Show(ViewerState { index: (self.index + 1).min(last) }),
            ViewerEvent::Quit => Transition::End,
            ViewerEvent::Other => Transition::Ignore,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    pub orientation: BoardOrientation,
    pub board: BoardStyle,
    pub last_move: MoveStyle,
    // Also outline the origin and destination of the move that was just played.
    pub mark_last_move: bool,
    pub highlight: HighlightStyle,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        ViewerOptions {
            orientation: BoardOrientation::default(),
            board: BoardStyle::default(),
            last_move: MoveStyle::faded(),
            mark_last_move: false,
            highlight: HighlightStyle::default(),
        }
    }
}

impl ViewerOptions {
    pub fn new() -> Self { Self::default() }

    pub fn mapper(&self) -> CoordinateMapper { CoordinateMapper::new(self.orientation) }

    pub fn validate(&self) -> Result<(), DiagramError> {
        self.board.validate()?;
        self.highlight.validate()
    }
}

// Everything shown for `timeline[index]`: the board, then the move that led to it (if any).
pub fn render_frame(
    timeline: &Timeline, index: usize, options: &ViewerOptions,
) -> Result<Vec<DrawLayer>, DiagramError> {
    let mapper = options.mapper();
    let entry = timeline
        .get(index)
        .ok_or(DiagramError::PositionOutOfRange { index, len: timeline.len() })?;
    let mut layers = render_board(&entry.position, mapper, &options.board);
    if let (Some(mv), Some(prev_index)) = (entry.last_move, index.checked_sub(1)) {
        let position_before = &timeline[prev_index].position;
        layers.extend(annotate_move(position_before, mv, mapper, &options.last_move)?);
        if options.mark_last_move {
            layers.extend(highlight_move(mv, mapper, &options.highlight));
        }
    }
    Ok(layers)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewerStatus {
    Running,
    Ended,
}

pub struct InteractiveViewer<S: Surface> {
    timeline: Timeline,
    options: ViewerOptions,
    state: ViewerState,
    status: ViewerStatus,
    surface: S,
}

impl<S: Surface> InteractiveViewer<S> {
    // Shows the initial position right away.
    pub fn start(timeline: Timeline, options: ViewerOptions, surface: S) -> io::Result<Self> {
        options.validate().map_err(io::Error::other)?;
        log::info!("Starting viewer over {} positions", timeline.len());
        let mut viewer = InteractiveViewer {
            timeline,
            options,
            state: ViewerState::initial(),
            status: ViewerStatus::Running,
            surface,
        };
        viewer.show()?;
        Ok(viewer)
    }

    pub fn state(&self) -> ViewerState { self.state }
    pub fn status(&self) -> ViewerStatus { self.status }
    pub fn timeline(&self) -> &Timeline { &self.timeline }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn into_surface(self) -> S { self.surface }

    // Processes one event, including the repaint it causes. Events after `Quit` are dropped.
    pub fn handle_event(&mut self, event: ViewerEvent) -> io::Result<ViewerStatus> {
        if self.status == ViewerStatus::Ended {
            return Ok(self.status);
        }
        match self.state.transition(event, self.timeline.len()) {
            Transition::Show(state) => {
                log::debug!("Viewer: {:?} -> position {}", event, state.index());
                self.state = state;
                self.show()?;
            }
            Transition::Ignore => {}
            Transition::End => {
                log::info!("Viewer session ended at position {}", self.state.index());
                self.status = ViewerStatus::Ended;
            }
        }
        Ok(self.status)
    }

    fn show(&mut self) -> io::Result<()> {
        // `Timeline::build` guarantees every move has a piece to annotate.
        let layers =
            render_frame(&self.timeline, self.state.index(), &self.options).map_err(io::Error::other)?;
        self.surface.clear();
        self.surface.submit(&layers);
        self.surface.redraw()
    }
}
