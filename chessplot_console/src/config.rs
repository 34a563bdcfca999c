use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use chessplot::display::BoardOrientation;
use chessplot::style::{BoardStyle, HighlightStyle, MoveStyle};
use chessplot::viewer::ViewerOptions;


// Contents of the `--config` file. Any subset of fields may be given.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub board: BoardStyle,
    pub last_move: MoveStyle,
    pub highlight: HighlightStyle,
    pub mark_last_move: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let options = ViewerOptions::new();
        ViewerConfig {
            board: options.board,
            last_move: options.last_move,
            highlight: options.highlight,
            mark_last_move: options.mark_last_move,
        }
    }
}

impl ViewerConfig {
    pub fn into_options(self, orientation: BoardOrientation) -> ViewerOptions {
        ViewerOptions {
            orientation,
            board: self.board,
            last_move: self.last_move,
            mark_last_move: self.mark_last_move,
            highlight: self.highlight,
        }
    }
}

pub fn read_config_file(path: &Path) -> anyhow::Result<ViewerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Reading config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Parsing config file {}", path.display()))
}

fn parse_config(contents: &str) -> anyhow::Result<ViewerConfig> {
    let config: ViewerConfig = serde_yaml::from_str(contents)?;
    config.board.validate()?;
    config.highlight.validate()?;
    Ok(config)
}
