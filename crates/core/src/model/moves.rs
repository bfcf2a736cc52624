//! Move specifications built from square clicks

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::error::Error;

/// Piece a pawn may promote to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionKind {
    /// Choice order shown to the player
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Queen,
        PromotionKind::Rook,
        PromotionKind::Bishop,
        PromotionKind::Knight,
    ];

    pub fn letter(self) -> char {
        match self {
            PromotionKind::Queen => 'q',
            PromotionKind::Rook => 'r',
            PromotionKind::Bishop => 'b',
            PromotionKind::Knight => 'n',
        }
    }

    /// Only the lowercase letters are accepted.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'q' => Some(PromotionKind::Queen),
            'r' => Some(PromotionKind::Rook),
            'b' => Some(PromotionKind::Bishop),
            'n' => Some(PromotionKind::Knight),
            _ => None,
        }
    }

    /// Glyph on the promotion choice buttons
    pub fn glyph(self) -> char {
        match self {
            PromotionKind::Queen => '♕',
            PromotionKind::Rook => '♖',
            PromotionKind::Bishop => '♗',
            PromotionKind::Knight => '♘',
        }
    }
}

/// Origin, destination and optional promotion of one move attempt.
///
/// Serialized in coordinate notation: `e2e4`, `e7e8q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSpec {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionKind>,
}

impl MoveSpec {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(self, kind: PromotionKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Same move without its promotion letter
    pub fn base(self) -> Self {
        Self {
            promotion: None,
            ..self
        }
    }

    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl FromStr for MoveSpec {
    type Err = Error;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidNotation(notation.to_string());

        if !notation.is_ascii() || !(notation.len() == 4 || notation.len() == 5) {
            return Err(invalid());
        }

        let from: Square = notation[0..2].parse().map_err(|_| invalid())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid())?;
        let promotion = match notation[4..].chars().next() {
            Some(letter) => Some(PromotionKind::from_letter(letter).ok_or_else(invalid)?),
            None => None,
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_notation_without_promotion() {
        let spec = MoveSpec::new(sq("e2"), sq("e4"));
        assert_eq!(spec.notation(), "e2e4");
    }

    #[test]
    fn test_notation_with_promotion() {
        let spec = MoveSpec::new(sq("e7"), sq("e8")).with_promotion(PromotionKind::Knight);
        assert_eq!(spec.notation(), "e7e8n");
        assert_eq!(spec.base().notation(), "e7e8");
    }

    #[test]
    fn test_parse_notation() {
        let spec: MoveSpec = "a7a8q".parse().unwrap();
        assert_eq!(spec.from, sq("a7"));
        assert_eq!(spec.to, sq("a8"));
        assert_eq!(spec.promotion, Some(PromotionKind::Queen));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "e2", "e2e", "e2e4qq", "e2e9", "e7e8k", "e7e8Q", "é2e4"] {
            assert!(bad.parse::<MoveSpec>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_promotion_letters() {
        let letters: String = PromotionKind::ALL.iter().map(|k| k.letter()).collect();
        assert_eq!(letters, "qrbn");
        for kind in PromotionKind::ALL {
            assert_eq!(PromotionKind::from_letter(kind.letter()), Some(kind));
        }
    }
}
