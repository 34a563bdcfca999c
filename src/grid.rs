use std::{fmt, ops};

use ndarray::{Array, Array2};
use serde::{Deserialize, Serialize};

use crate::coord::{NUM_FILES, NUM_RANKS, Square};
use crate::piece::Piece;


// Board contents indexed by `Square`. Cloning produces a fully independent copy.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_RANKS as usize, NUM_FILES as usize), None),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self[sq].map(|piece| (sq, piece)))
    }
}

impl ops::Index<Square> for Grid {
    type Output = Option<Piece>;
    fn index(&self, sq: Square) -> &Self::Output { &self.data[square_to_index(sq)] }
}

impl ops::IndexMut<Square> for Grid {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.data[square_to_index(sq)]
    }
}

// `Square` is always in bounds, so indexing can't panic.
fn square_to_index(sq: Square) -> [usize; 2] {
    [sq.rank.to_zero_based() as usize, sq.file.to_zero_based() as usize]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(sq, piece)| (sq.to_algebraic(), piece.to_ascii())))
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::Force;
    use crate::piece::PieceKind;

    fn sq(s: &str) -> Square { Square::from_algebraic(s).unwrap() }

    #[test]
    fn clone_is_independent() {
        let mut g = Grid::new();
        g[sq("a1")] = Some(Piece::new(PieceKind::Rook, Force::White));
        let snapshot = g.clone();
        g[sq("a1")] = None;
        g[sq("d4")] = Some(Piece::new(PieceKind::Queen, Force::Black));
        assert_eq!(snapshot[sq("a1")], Some(Piece::new(PieceKind::Rook, Force::White)));
        assert_eq!(snapshot[sq("d4")], None);
    }

    #[test]
    fn debug_lists_pieces_top_down() {
        let mut g = Grid::new();
        g[sq("e1")] = Some(Piece::new(PieceKind::King, Force::White));
        g[sq("e8")] = Some(Piece::new(PieceKind::King, Force::Black));
        assert_eq!(format!("{g:?}"), r#"Grid {"e8": 'k', "e1": 'K'}"#);
    }
}
