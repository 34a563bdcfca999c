use serde::{Deserialize, Serialize};

use crate::coord::{File, Rank, Square};
use crate::force::Force;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};


// A full board snapshot: which piece (if any) stands on each square, plus the bits of state
// the rules engine needs to apply the next move.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    grid: Grid,
    active_force: Force,
    en_passant_target: Option<Square>,
}

impl Position {
    pub fn empty() -> Self {
        Position {
            grid: Grid::new(),
            active_force: Force::White,
            en_passant_target: None,
        }
    }

    pub fn starting() -> Self {
        use PieceKind::*;
        const BACK_ROW: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut grid = Grid::new();
        for (file, kind) in File::all().zip(BACK_ROW) {
            grid[Square::new(file, Rank::_1)] = Some(Piece::new(kind, Force::White));
            grid[Square::new(file, Rank::_2)] = Some(Piece::new(Pawn, Force::White));
            grid[Square::new(file, Rank::_7)] = Some(Piece::new(Pawn, Force::Black));
            grid[Square::new(file, Rank::_8)] = Some(Piece::new(kind, Force::Black));
        }
        Position::from_grid(grid, Force::White, None)
    }

    pub fn from_grid(grid: Grid, active_force: Force, en_passant_target: Option<Square>) -> Self {
        Position { grid, active_force, en_passant_target }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.grid[sq] }
    pub fn active_force(&self) -> Force { self.active_force }
    pub fn en_passant_target(&self) -> Option<Square> { self.en_passant_target }

    pub fn set_active_force(&mut self, force: Force) { self.active_force = force; }
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }
}
