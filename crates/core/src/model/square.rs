//! Board coordinates

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the 64 board cells.
///
/// File and rank are both zero-based, so `a1` is `(0, 0)` and `h8` is `(7, 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Square from its 0..64 index, rank-major (`a1 = 0`, `b1 = 1`, `h8 = 63`)
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::new(index % 8, index / 8)
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// Light squares have an odd file + rank sum; `a1` is dark.
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    pub fn name(self) -> String {
        self.to_string()
    }

    /// All squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare(name.to_string()));
        }

        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank).ok_or_else(|| Error::InvalidSquare(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_coordinates_agree() {
        for square in Square::all() {
            let parsed: Square = square.name().parse().unwrap();
            assert_eq!(parsed, square);
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_known_squares() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_rejects_bad_names() {
        for bad in ["", "e", "e9", "i1", "E4", "e44", "4e"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
        assert!(Square::new(8, 0).is_none());
    }

    #[test]
    fn test_checkerboard_parity() {
        assert!(!"a1".parse::<Square>().unwrap().is_light());
        assert!("b1".parse::<Square>().unwrap().is_light());
        assert!("h1".parse::<Square>().unwrap().is_light());
        assert!(!"h8".parse::<Square>().unwrap().is_light());
    }
}
