use std::ops;

use crate::error::{DiagramError, MoveError};
use crate::moves::Move;
use crate::position::Position;
use crate::rules::RulesEngine;


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimelineEntry {
    pub position: Position,
    // The move that produced `position`; `None` only for the first entry.
    pub last_move: Option<Move>,
}

// Every position of a game, from the initial one to the final one. Never empty, immutable once
// built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    // Replays `moves` on a private working copy. Each stored position is a separate snapshot.
    // Fails as a whole on the first move the rules engine rejects.
    pub fn build(
        initial: &Position, moves: &[Move], rules: &impl RulesEngine,
    ) -> Result<Self, DiagramError> {
        let mut working = initial.clone();
        let mut entries = Vec::with_capacity(moves.len() + 1);
        entries.push(TimelineEntry { position: working.clone(), last_move: None });
        for (ply, &mv) in moves.iter().enumerate() {
            // Checked here as well as by the engine: the move is later drawn from this square.
            if working.piece_at(mv.from).is_none() {
                return Err(DiagramError::IllegalMove { ply, mv, reason: MoveError::PieceMissing });
            }
            rules
                .apply_move(&mut working, mv)
                .map_err(|reason| DiagramError::IllegalMove { ply, mv, reason })?;
            entries.push(TimelineEntry {
                position: working.clone(),
                last_move: Some(mv),
            });
        }
        log::info!("Built timeline with {} positions", entries.len());
        Ok(Timeline { entries })
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { false }
    pub fn num_moves(&self) -> usize { self.entries.len() - 1 }
    pub fn get(&self, index: usize) -> Option<&TimelineEntry> { self.entries.get(index) }
    pub fn last(&self) -> &TimelineEntry { &self[self.entries.len() - 1] }
}

impl ops::Index<usize> for Timeline {
    type Output = TimelineEntry;
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output { &self.entries[index] }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_move_list;
    use crate::rules::BasicRules;

    #[test]
    fn length_and_moves() {
        let moves = parse_move_list("e2e4 e7e5 g1f3").unwrap();
        let timeline = Timeline::build(&Position::starting(), &moves, &BasicRules).unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.num_moves(), 3);
        assert_eq!(timeline[0].position, Position::starting());
        assert_eq!(timeline[0].last_move, None);
        for (j, mv) in moves.iter().enumerate() {
            assert_eq!(timeline[j + 1].last_move, Some(*mv));
        }
    }

    #[test]
    fn snapshots_are_distinct() {
        let moves = parse_move_list("e2e4 e7e5").unwrap();
        let timeline = Timeline::build(&Position::starting(), &moves, &BasicRules).unwrap();
        assert_ne!(timeline[0].position, timeline[1].position);
        assert_ne!(timeline[1].position, timeline[2].position);
        assert!(timeline[1].position.piece_at("e7".parse().unwrap()).is_some());
        assert!(timeline[2].position.piece_at("e7".parse().unwrap()).is_none());
    }

    #[test]
    fn empty_game() {
        let timeline = Timeline::build(&Position::starting(), &[], &BasicRules).unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last().position, Position::starting());
    }

    #[test]
    fn illegal_move_aborts() {
        let moves = parse_move_list("e2e4 e2e4").unwrap();
        assert_eq!(
            Timeline::build(&Position::starting(), &moves, &BasicRules),
            Err(DiagramError::IllegalMove {
                ply: 1,
                mv: moves[1],
                reason: MoveError::PieceMissing
            })
        );
    }
}
