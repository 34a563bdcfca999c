use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::Rank;


// Piece color. `White` is the light side, `Black` is the dark side.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    White,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::White => Force::Black,
            Force::Black => Force::White,
        }
    }

    // Rank delta of a single pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Force::White => 1,
            Force::Black => -1,
        }
    }

    pub fn home_rank(self) -> Rank {
        match self {
            Force::White => Rank::_1,
            Force::Black => Rank::_8,
        }
    }

    // The rank where this force's pawns promote.
    pub fn last_rank(self) -> Rank { self.opponent().home_rank() }
}
