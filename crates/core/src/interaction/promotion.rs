//! Promotion ambiguity detection and piece choice

use crate::model::{MoveSpec, PieceKind, PromotionKind};
use crate::presenter::PromotionChoice;
use crate::rules::RulesEngine;

/// A pawn move waiting for the player to pick a promotion piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    base: MoveSpec,
}

impl PendingPromotion {
    pub fn new(base: MoveSpec) -> Self {
        Self { base: base.base() }
    }

    pub fn base(&self) -> MoveSpec {
        self.base
    }

    pub fn complete(&self, kind: PromotionKind) -> MoveSpec {
        self.base.with_promotion(kind)
    }
}

/// True when `attempt` is a bare pawn move that is only legal with a
/// promotion piece appended.
pub fn needs_promotion(engine: &impl RulesEngine, attempt: &MoveSpec) -> bool {
    if attempt.promotion.is_some() {
        return false;
    }

    match engine.piece_at(attempt.from) {
        Some(piece) if piece.kind == PieceKind::Pawn => {}
        _ => return false,
    }

    let legal = engine.legal_moves();
    PromotionKind::ALL
        .iter()
        .any(|kind| legal.contains(&attempt.with_promotion(*kind)))
}

/// Picker buttons in display order: queen, rook, bishop, knight
pub fn promotion_choices() -> Vec<PromotionChoice> {
    PromotionKind::ALL.into_iter().map(PromotionChoice::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Square;
    use crate::rules::ShakmatyEngine;

    fn spec(from: &str, to: &str) -> MoveSpec {
        MoveSpec::new(from.parse::<Square>().unwrap(), to.parse::<Square>().unwrap())
    }

    #[test]
    fn test_pawn_push_to_last_rank() {
        let engine = ShakmatyEngine::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(needs_promotion(&engine, &spec("e7", "e8")));
        assert!(!needs_promotion(&engine, &spec("e7", "e6")));
        assert!(!needs_promotion(
            &engine,
            &spec("e7", "e8").with_promotion(PromotionKind::Queen)
        ));
    }

    #[test]
    fn test_capture_promotion() {
        let engine = ShakmatyEngine::from_fen("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(needs_promotion(&engine, &spec("e7", "d8")));
        assert!(!needs_promotion(&engine, &spec("e7", "f8")));
    }

    #[test]
    fn test_blocked_pawn() {
        let engine = ShakmatyEngine::from_fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(!needs_promotion(&engine, &spec("e7", "e8")));
    }

    #[test]
    fn test_non_pawn_never_promotes() {
        let engine = ShakmatyEngine::from_fen("7k/4R3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(!needs_promotion(&engine, &spec("e7", "e8")));
    }

    #[test]
    fn test_choice_order() {
        let letters: Vec<char> = promotion_choices().iter().map(|c| c.letter).collect();
        assert_eq!(letters, vec!['q', 'r', 'b', 'n']);
    }

    #[test]
    fn test_pending_drops_promotion_letter() {
        let pending =
            PendingPromotion::new(spec("a2", "a1").with_promotion(PromotionKind::Rook));
        assert_eq!(pending.base(), spec("a2", "a1"));
        assert_eq!(pending.complete(PromotionKind::Knight).notation(), "a2a1n");
    }
}
