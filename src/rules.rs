use crate::coord::{File, Square};
use crate::error::MoveError;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;


// The collaborator that knows how positions change. Diagram code trusts it completely.
pub trait RulesEngine {
    // Applies `mv` to `position` in place. On error `position` must be left untouched.
    fn apply_move(&self, position: &mut Position, mv: Move) -> Result<(), MoveError>;
}

// Mechanical move application: moves the piece, handles captures, promotion, castling rook
// relocation and en passant. Piece trajectories and king safety are not checked, so any input
// coming from a real chess library replays without surprises, while garbage like moving from an
// empty square is still caught.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicRules;

#[derive(Clone, Copy, Debug)]
struct CastlingRook {
    from: Square,
    to: Square,
}

impl BasicRules {
    fn verify(&self, position: &Position, mv: Move) -> Result<Piece, MoveError> {
        if mv.from == mv.to {
            return Err(MoveError::NullMove);
        }
        let piece = position.piece_at(mv.from).ok_or(MoveError::PieceMissing)?;
        if piece.force != position.active_force() {
            return Err(MoveError::WrongTurnOrder);
        }
        if let Some(target) = position.piece_at(mv.to) {
            if target.force == piece.force {
                return Err(MoveError::DestinationOccupied);
            }
        }
        let reaches_last_rank =
            piece.kind == PieceKind::Pawn && mv.to.rank == piece.force.last_rank();
        match (reaches_last_rank, mv.promote_to) {
            (true, None) => return Err(MoveError::MissingPromotion),
            (true, Some(kind)) if !kind.can_be_promoted_to() => {
                return Err(MoveError::BadPromotion);
            }
            (false, Some(_)) => return Err(MoveError::BadPromotion),
            _ => {}
        }
        Ok(piece)
    }

    fn castling_rook(&self, position: &Position, piece: Piece, mv: Move) -> Option<CastlingRook> {
        if piece.kind != PieceKind::King
            || mv.from != Square::new(File::E, piece.force.home_rank())
            || mv.to.rank != mv.from.rank
        {
            return None;
        }
        let rank = mv.from.rank;
        let (rook_from, rook_to) = match mv.to.file {
            File::G => (File::H, File::F),
            File::C => (File::A, File::D),
            _ => return None,
        };
        let rook_from = Square::new(rook_from, rank);
        let rook = Piece::new(PieceKind::Rook, piece.force);
        (position.piece_at(rook_from) == Some(rook)).then_some(CastlingRook {
            from: rook_from,
            to: Square::new(rook_to, rank),
        })
    }

    fn en_passant_victim(&self, position: &Position, piece: Piece, mv: Move) -> Option<Square> {
        let is_diagonal_pawn_move = piece.kind == PieceKind::Pawn && mv.from.file != mv.to.file;
        if is_diagonal_pawn_move
            && position.piece_at(mv.to).is_none()
            && position.en_passant_target() == Some(mv.to)
        {
            Some(Square::new(mv.to.file, mv.from.rank))
        } else {
            None
        }
    }
}

impl RulesEngine for BasicRules {
    fn apply_move(&self, position: &mut Position, mv: Move) -> Result<(), MoveError> {
        let piece = self.verify(position, mv)?;
        let castling_rook = self.castling_rook(position, piece, mv);
        let en_passant_victim = self.en_passant_victim(position, piece, mv);
        let double_step = piece.kind == PieceKind::Pawn
            && (mv.to.rank.to_zero_based() as i8 - mv.from.rank.to_zero_based() as i8).abs() == 2;
        let new_en_passant_target = if double_step && mv.from.file == mv.to.file {
            mv.from.offset(0, piece.force.pawn_direction())
        } else {
            None
        };

        let grid = position.grid_mut();
        grid[mv.from] = None;
        grid[mv.to] = Some(Piece::new(mv.promote_to.unwrap_or(piece.kind), piece.force));
        if let Some(rook) = castling_rook {
            grid[rook.to] = grid[rook.from].take();
        }
        if let Some(victim) = en_passant_victim {
            grid[victim] = None;
        }
        position.set_en_passant_target(new_en_passant_target);
        position.set_active_force(piece.force.opponent());
        Ok(())
    }
}
