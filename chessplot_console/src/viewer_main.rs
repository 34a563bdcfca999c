use std::io;

use crossterm::event::{self as term_event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use scopeguard::defer;

use chessplot::moves::Move;
use chessplot::position::Position;
use chessplot::rules::BasicRules;
use chessplot::timeline::Timeline;
use chessplot::viewer::{InteractiveViewer, ViewerEvent, ViewerOptions, ViewerStatus};

use crate::tui::TerminalSurface;


pub struct ViewConfig {
    pub position: Position,
    pub moves: Vec<Move>,
    pub options: ViewerOptions,
}

fn viewer_event(code: KeyCode) -> ViewerEvent {
    match code {
        KeyCode::Left => ViewerEvent::Prev,
        KeyCode::Right => ViewerEvent::Next,
        KeyCode::Esc => ViewerEvent::Quit,
        KeyCode::Char(ch) => ViewerEvent::from_key_name(ch.encode_utf8(&mut [0; 4])),
        _ => ViewerEvent::Other,
    }
}

pub fn run(config: ViewConfig) -> anyhow::Result<()> {
    // Replay before touching the terminal, so that bad input is reported on a normal screen.
    let timeline = Timeline::build(&config.position, &config.moves, &BasicRules)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    defer! { let _ = terminal::disable_raw_mode(); };
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    defer! { let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen); };

    let mut surface = TerminalSurface::new(io::stdout(), true);
    surface.set_footer(format!("{} moves. ←/→ or h/l to step, q to quit.", timeline.num_moves()));
    let mut viewer = InteractiveViewer::start(timeline, config.options, surface)?;
    loop {
        let event = match term_event::read()? {
            term_event::Event::Key(key) if key.kind != KeyEventKind::Release => viewer_event(key.code),
            _ => continue,
        };
        if viewer.handle_event(event)? == ViewerStatus::Ended {
            return Ok(());
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        assert_eq!(viewer_event(KeyCode::Left), ViewerEvent::Prev);
        assert_eq!(viewer_event(KeyCode::Char('l')), ViewerEvent::Next);
        assert_eq!(viewer_event(KeyCode::Char('q')), ViewerEvent::Quit);
        assert_eq!(viewer_event(KeyCode::Esc), ViewerEvent::Quit);
        assert_eq!(viewer_event(KeyCode::Enter), ViewerEvent::Other);
        assert_eq!(viewer_event(KeyCode::Char('x')), ViewerEvent::Other);
    }
}
