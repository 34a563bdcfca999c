use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::DiagramError;
use crate::force::Force;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

impl PieceKind {
    pub fn to_ascii_upper(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_ascii_upper(ch: char) -> Option<Self> {
        match ch {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn can_be_promoted_to(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl Piece {
    // FEN-style letter: upper case for white, lower case for black.
    pub fn to_ascii(self) -> char {
        let ch = self.kind.to_ascii_upper();
        match self.force {
            Force::White => ch,
            Force::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn from_ascii(ch: char) -> Result<Self, DiagramError> {
        let kind =
            PieceKind::from_ascii_upper(ch.to_ascii_uppercase()).ok_or(DiagramError::UnknownPiece(ch))?;
        let force = if ch.is_ascii_uppercase() { Force::White } else { Force::Black };
        Ok(Piece { kind, force })
    }

    pub fn glyph(self) -> char { piece_to_pictogram(self.kind, self.force) }
}

// Total over all kind/color pairs, so a glyph miss can only happen while parsing untyped input
// (see `Piece::from_ascii`).
pub fn piece_to_pictogram(piece_kind: PieceKind, force: Force) -> char {
    use self::Force::*;
    use self::PieceKind::*;
    match (force, piece_kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    fn all_pieces() -> Vec<Piece> {
        Force::iter()
            .cartesian_product(PieceKind::iter())
            .map(|(force, kind)| Piece::new(kind, force))
            .collect()
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: HashSet<char> = all_pieces().into_iter().map(Piece::glyph).collect();
        assert_eq!(glyphs.len(), 12);
    }

    #[test]
    fn ascii_conversion() {
        for piece in all_pieces() {
            assert_eq!(Piece::from_ascii(piece.to_ascii()), Ok(piece));
        }
        assert_eq!(Piece::from_ascii('x'), Err(DiagramError::UnknownPiece('x')));
        assert_eq!(Piece::from_ascii('1'), Err(DiagramError::UnknownPiece('1')));
    }

    #[test]
    fn glyph_colors() {
        assert_eq!(Piece::new(PieceKind::Queen, Force::White).glyph(), '♕');
        assert_eq!(Piece::new(PieceKind::Queen, Force::Black).glyph(), '♛');
    }
}
