use std::fmt;
use std::sync::LazyLock;

use derive_new::new;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::coord::Square;
use crate::error::DiagramError;
use crate::piece::PieceKind;


#[derive(Clone, Copy, PartialEq, Eq, Hash, new, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promote_to: Option<PieceKind>,
}

impl Move {
    // Long algebraic notation as used by UCI engines: "e2e4", "e7e8q".
    pub fn from_uci(s: &str) -> Result<Self, DiagramError> {
        let invalid = || DiagramError::InvalidMoveNotation(s.to_owned());
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[0..2]).map_err(|_| invalid())?;
        let to = Square::from_algebraic(&s[2..4]).map_err(|_| invalid())?;
        let promote_to = match s[4..].chars().next() {
            None => None,
            Some(ch) => Some(
                PieceKind::from_ascii_upper(ch.to_ascii_uppercase())
                    .filter(|kind| kind.can_be_promoted_to())
                    .ok_or_else(invalid)?,
            ),
        };
        Ok(Move { from, to, promote_to })
    }

    pub fn to_uci(self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promote_to {
            s.push(kind.to_ascii_upper().to_ascii_lowercase());
        }
        s
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Move({})", self.to_uci()) }
}

// Parses a whitespace-separated list of UCI moves. Move numbers ("1.", "12...", "1.e2e4") and
// game results ("1-0", "1/2-1/2", "*") are skipped.
pub fn parse_move_list(log: &str) -> Result<Vec<Move>, DiagramError> {
    static TURN_NUMBER_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(?:[0-9]+\.+)?(.*)$").unwrap());
    const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];
    let mut moves = Vec::new();
    for token in log.split_whitespace() {
        let notation = match TURN_NUMBER_RE.captures(token).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => token,
        };
        if notation.is_empty() {
            continue;
        }
        if RESULTS.contains(&notation) {
            log::debug!("Skipping game result token '{notation}'");
            continue;
        }
        moves.push(Move::from_uci(notation)?);
    }
    Ok(moves)
}
