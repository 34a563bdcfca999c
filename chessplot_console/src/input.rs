use std::io::{self, Read};

use anyhow::Context;

use chessplot::fen::position_from_fen;
use chessplot::moves::{Move, parse_move_list};
use chessplot::position::Position;


pub fn initial_position(fen: Option<&String>) -> anyhow::Result<Position> {
    match fen {
        Some(fen) => Ok(position_from_fen(fen)?),
        None => Ok(Position::starting()),
    }
}

pub fn parse_move(uci: &str) -> anyhow::Result<Move> {
    Ok(Move::from_uci(uci)?)
}

// Reads a whitespace-separated move list from a file, or from stdin when `source` is "-".
pub fn read_moves(source: &str) -> anyhow::Result<Vec<Move>> {
    let text = if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("Reading moves from stdin")?;
        text
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Reading moves file {source}"))?
    };
    Ok(parse_move_list(&text)?)
}
