// Only the fields a diagram needs are kept. Castling availability and the move counters are
// accepted when reading and written back with neutral values.

use itertools::Itertools;

use crate::coord::{File, NUM_FILES, NUM_RANKS, Rank, Square};
use crate::error::DiagramError;
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::position::Position;


pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn force_to_fen(force: Force) -> char {
    match force {
        Force::White => 'w',
        Force::Black => 'b',
    }
}
fn force_from_fen(s: &str) -> Result<Force, DiagramError> {
    match s {
        "w" => Ok(Force::White),
        "b" => Ok(Force::Black),
        _ => Err(DiagramError::InvalidFen(format!("invalid active color: {s}"))),
    }
}

fn en_passant_target_to_fen(target: Option<Square>) -> String {
    match target {
        None => "-".to_owned(),
        Some(sq) => sq.to_algebraic(),
    }
}
fn en_passant_target_from_fen(s: &str) -> Result<Option<Square>, DiagramError> {
    if s == "-" {
        return Ok(None);
    }
    let sq = Square::from_algebraic(s)
        .map_err(|_| DiagramError::InvalidFen(format!("invalid en passant target: {s}")))?;
    Ok(Some(sq))
}

fn grid_to_fen(grid: &Grid) -> String {
    Rank::all()
        .rev()
        .map(|rank| {
            let mut rank_notation = String::new();
            let mut empty_file_count: u8 = 0;
            for file in File::all() {
                if let Some(piece) = grid[Square::new(file, rank)] {
                    if empty_file_count > 0 {
                        rank_notation.push_str(&empty_file_count.to_string());
                        empty_file_count = 0;
                    }
                    rank_notation.push(piece.to_ascii());
                } else {
                    empty_file_count += 1;
                }
            }
            if empty_file_count > 0 {
                rank_notation.push_str(&empty_file_count.to_string());
            }
            rank_notation
        })
        .join("/")
}

fn grid_from_fen(placement: &str) -> Result<Grid, DiagramError> {
    let rank_notations = placement.split('/').collect_vec();
    if rank_notations.len() != NUM_RANKS as usize {
        return Err(DiagramError::InvalidFen(format!(
            "expected {NUM_RANKS} ranks, found {}",
            rank_notations.len()
        )));
    }
    let mut grid = Grid::new();
    for (rank, rank_notation) in Rank::all().rev().zip(rank_notations) {
        let mut file_idx: u8 = 0;
        for ch in rank_notation.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file_idx = file_idx.saturating_add(skip as u8);
            } else {
                let piece = Piece::from_ascii(ch)?;
                let file = File::from_zero_based(file_idx).ok_or_else(|| {
                    DiagramError::InvalidFen(format!("rank {} is too long", rank.to_algebraic()))
                })?;
                grid[Square::new(file, rank)] = Some(piece);
                file_idx += 1;
            }
        }
        if file_idx != NUM_FILES {
            return Err(DiagramError::InvalidFen(format!(
                "rank {} has {file_idx} files",
                rank.to_algebraic()
            )));
        }
    }
    Ok(grid)
}

// Accepts both a full FEN record and a bare piece placement field.
pub fn position_from_fen(fen: &str) -> Result<Position, DiagramError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| DiagramError::InvalidFen("empty".to_owned()))?;
    let grid = grid_from_fen(placement)?;
    let active_force = fields.next().map_or(Ok(Force::White), force_from_fen)?;
    let _castling = fields.next();
    let en_passant_target = fields.next().map_or(Ok(None), en_passant_target_from_fen)?;
    Ok(Position::from_grid(grid, active_force, en_passant_target))
}

pub fn position_to_fen(position: &Position) -> String {
    format!(
        "{} {} - {} 0 1",
        grid_to_fen(position.grid()),
        force_to_fen(position.active_force()),
        en_passant_target_to_fen(position.en_passant_target()),
    )
}
