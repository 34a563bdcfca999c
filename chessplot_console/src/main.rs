#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod config;
mod input;
mod render_main;
mod tui;
mod viewer_main;

use std::path::Path;

use chessplot::coord::Square;
use chessplot::display::BoardOrientation;
use chessplot::layer::Color;
use chessplot::style::HighlightStyle;
use clap::{ArgAction, ArgMatches, Command, arg};

use crate::config::{ViewerConfig, read_config_file};
use crate::render_main::DiagramConfig;


fn orientation(matches: &ArgMatches) -> BoardOrientation {
    if matches.get_flag("flip") { BoardOrientation::Rotated } else { BoardOrientation::Normal }
}

fn diagram_config(matches: &ArgMatches) -> anyhow::Result<DiagramConfig> {
    let marks = matches
        .get_many::<String>("mark")
        .unwrap_or_default()
        .map(|sq| Square::from_algebraic(sq))
        .collect::<Result<Vec<_>, _>>()?;
    let mark_color = match matches.get_one::<String>("mark-color") {
        Some(color) => color.parse::<Color>().map_err(anyhow::Error::msg)?,
        None => HighlightStyle::default().ink.color,
    };
    Ok(DiagramConfig {
        position: input::initial_position(matches.get_one::<String>("fen"))?,
        last_move: matches.get_one::<String>("move").map(|mv| input::parse_move(mv)).transpose()?,
        marks,
        mark_color,
        orientation: orientation(matches),
        checkered: !matches.get_flag("no-checkers"),
    })
}

fn main() -> anyhow::Result<()> {
    // Stdout belongs to the diagrams and the viewer.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let fen_arg = || arg!(--fen <fen> "Initial position in FEN. The standard starting position by default.");
    let flip_arg = || arg!(--flip "Show the board from Black's side");
    let mark_arg = || arg!(--mark <square> "Outline a square; may be repeated").action(ArgAction::Append);
    let mark_color_arg = || arg!(--"mark-color" <color> "Outline color: a name such as 'blue' or '#rrggbb'");
    let move_arg = || arg!(--"move" <uci> "Move just played from the initial position, e.g. e2e4");
    let matches = Command::new("chessplot")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Chess diagrams and a terminal game viewer")
        .subcommand_required(true)
        .subcommand(
            Command::new("view")
                .about("Step through a game in the terminal")
                .arg(fen_arg())
                .arg(arg!(--config <file> "YAML file with viewer styles: serialized ViewerConfig."))
                .arg(flip_arg())
                .arg(arg!(<moves> "File with moves in UCI notation, or '-' to read stdin")),
        )
        .subcommand(
            Command::new("render")
                .about("Draw one diagram as SVG")
                .arg(fen_arg())
                .arg(move_arg())
                .arg(mark_arg())
                .arg(mark_color_arg())
                .arg(flip_arg())
                .arg(arg!(--"no-checkers" "Plain background instead of alternating square colors"))
                .arg(arg!(-o --output <file> "Output file. Stdout by default.")),
        )
        .subcommand(
            Command::new("layers")
                .about("Print the draw layers of one diagram as JSON")
                .arg(fen_arg())
                .arg(move_arg())
                .arg(mark_arg())
                .arg(mark_color_arg())
                .arg(flip_arg())
                .arg(arg!(--"no-checkers" "Plain background instead of alternating square colors")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("view", sub_matches)) => {
            let config = match sub_matches.get_one::<String>("config") {
                Some(path) => read_config_file(Path::new(path))?,
                None => ViewerConfig::default(),
            };
            let moves_source = sub_matches
                .get_one::<String>("moves")
                .ok_or_else(|| anyhow::anyhow!("Missing moves file"))?;
            viewer_main::run(viewer_main::ViewConfig {
                position: input::initial_position(sub_matches.get_one::<String>("fen"))?,
                moves: input::read_moves(moves_source)?,
                options: config.into_options(orientation(sub_matches)),
            })
        }
        Some(("render", sub_matches)) => {
            render_main::run_render(&diagram_config(sub_matches)?, sub_matches.get_one::<String>("output"))
        }
        Some(("layers", sub_matches)) => render_main::run_layers(&diagram_config(sub_matches)?),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
