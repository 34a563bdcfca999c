use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::DiagramError;


pub const NUM_RANKS: u8 = 8;
pub const NUM_FILES: u8 = 8;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Rank {
    idx: u8, // 0-based, rank '1' is 0
}

impl Rank {
    pub const fn from_zero_based(idx: u8) -> Option<Self> {
        if idx < NUM_RANKS { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('1' as u32)?;
        Self::from_zero_based(u8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub fn offset(self, delta: i8) -> Option<Self> {
        let idx = u8::try_from(self.idx as i8 + delta).ok()?;
        Self::from_zero_based(idx)
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_RANKS).map(|idx| Self { idx })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct File {
    idx: u8, // 0-based, file 'a' is 0
}

impl File {
    pub const fn from_zero_based(idx: u8) -> Option<Self> {
        if idx < NUM_FILES { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('a' as u32)?;
        Self::from_zero_based(u8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn offset(self, delta: i8) -> Option<Self> {
        let idx = u8::try_from(self.idx as i8 + delta).ok()?;
        Self::from_zero_based(idx)
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..NUM_FILES).map(|idx| Self { idx })
    }
}

impl Rank {
    pub const _1: Rank = Rank { idx: 0 };
    pub const _2: Rank = Rank { idx: 1 };
    pub const _7: Rank = Rank { idx: 6 };
    pub const _8: Rank = Rank { idx: 7 };
}

impl File {
    pub const A: File = File { idx: 0 };
    pub const C: File = File { idx: 2 };
    pub const D: File = File { idx: 3 };
    pub const E: File = File { idx: 4 };
    pub const F: File = File { idx: 5 };
    pub const G: File = File { idx: 6 };
    pub const H: File = File { idx: 7 };
}


// One of the 64 board cells. Serialized in algebraic form ("e4").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    pub const fn new(file: File, rank: Rank) -> Self { Self { file, rank } }

    pub fn from_zero_based(file: u8, rank: u8) -> Result<Self, DiagramError> {
        match (File::from_zero_based(file), Rank::from_zero_based(rank)) {
            (Some(file), Some(rank)) => Ok(Self { file, rank }),
            _ => Err(DiagramError::InvalidSquare(format!("({file}, {rank})"))),
        }
    }

    pub fn from_algebraic(s: &str) -> Result<Self, DiagramError> {
        let invalid = || DiagramError::InvalidSquare(s.to_owned());
        let (file_ch, rank_ch) = s.chars().collect_tuple().ok_or_else(invalid)?;
        let file = File::from_algebraic(file_ch).ok_or_else(invalid)?;
        let rank = Rank::from_algebraic(rank_ch).ok_or_else(invalid)?;
        Ok(Self { file, rank })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file.to_algebraic(), self.rank.to_algebraic())
    }

    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Some(Self {
            file: self.file.offset(file_delta)?,
            rank: self.rank.offset(rank_delta)?,
        })
    }

    // All squares in reading order of a diagram with white at the bottom: a8, b8, ..., h8, a7, ..., h1.
    // The order is board-relative, so it doesn't depend on the orientation chosen for drawing.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::all().rev().cartesian_product(File::all()).map(|(rank, file)| Square { file, rank })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_algebraic(), self.rank.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Square({})", self) }
}

impl FromStr for Square {
    type Err = DiagramError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_algebraic(s) }
}

impl From<Square> for String {
    fn from(square: Square) -> Self { square.to_algebraic() }
}

impl TryFrom<String> for Square {
    type Error = DiagramError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::from_algebraic(&s) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.file, File::E);
        assert_eq!(e4.rank.to_zero_based(), 3);
        assert_eq!(e4.to_algebraic(), "e4");
        assert_eq!(format!("{e4:?}"), "Square(e4)");
    }

    #[test]
    fn invalid_squares() {
        for s in ["", "e", "e9", "i1", "e0", "E4", "e44", "4e"] {
            assert_eq!(
                Square::from_algebraic(s),
                Err(DiagramError::InvalidSquare(s.to_owned())),
                "{s}"
            );
        }
        assert!(Square::from_zero_based(8, 0).is_err());
        assert!(Square::from_zero_based(0, 8).is_err());
    }

    #[test]
    fn traversal_order() {
        let all = Square::all().map(|sq| sq.to_algebraic()).collect_vec();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], "a8");
        assert_eq!(all[7], "h8");
        assert_eq!(all[8], "a7");
        assert_eq!(all[63], "h1");
    }

    #[test]
    fn offsets() {
        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(1, 2), Some(Square::from_algebraic("b3").unwrap()));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, 8), None);
    }

    #[test]
    fn serde_as_string() {
        let sq = Square::from_algebraic("g7").unwrap();
        assert_eq!(serde_json::to_string(&sq).unwrap(), "\"g7\"");
        assert_eq!(serde_json::from_str::<Square>("\"g7\"").unwrap(), sq);
        assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
    }
}
