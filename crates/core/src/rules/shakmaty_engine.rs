//! [`RulesEngine`] backed by shakmaty

use shakmaty::{
    fen::Fen, san::San, uci::UciMove, CastlingMode, Chess, Color, EnPassantMode, File, Move,
    Position, Role,
};
use tracing::{debug, warn};

use super::{MoveError, RulesEngine};
use crate::error::{Error, Result};
use crate::model::{MoveSpec, Piece, PieceKind, PromotionKind, Side, Square};

/// A game in progress: its starting position, the live position and the
/// moves that lead from one to the other.
#[derive(Debug, Clone)]
pub struct ShakmatyEngine {
    initial: Chess,
    position: Chess,
    /// Position before each applied move, parallel to `moves`
    previous: Vec<Chess>,
    moves: Vec<Move>,
}

impl ShakmatyEngine {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(position: Chess) -> Self {
        Self {
            initial: position.clone(),
            position,
            previous: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Starts a game from an arbitrary legal position
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parsed: Fen = fen
            .parse()
            .map_err(|e| Error::Fen(format!("{}: {}", fen, e)))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::Position(format!("{}: {}", fen, e)))?;
        Ok(Self::from_position(position))
    }

    /// FEN of the live position
    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Resolves coordinate notation against the live position.
    fn resolve(&self, notation: &str) -> std::result::Result<Move, MoveError> {
        let spec: MoveSpec = notation
            .parse()
            .map_err(|_| MoveError::InvalidNotation(notation.to_string()))?;

        // A click pair on one square names no move.
        if spec.from == spec.to {
            return Err(MoveError::InvalidNotation(notation.to_string()));
        }

        let uci = UciMove::Normal {
            from: to_shakmaty_square(spec.from),
            to: to_shakmaty_square(spec.to),
            promotion: spec.promotion.map(promotion_role),
        };

        uci.to_move(&self.position)
            .map_err(|_| MoveError::IllegalInPosition(notation.to_string()))
    }
}

impl Default for ShakmatyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ShakmatyEngine {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(to_shakmaty_square(square))
            .map(|piece| Piece::new(side_of(piece.color), kind_of(piece.role)))
    }

    fn legal_moves(&self) -> Vec<MoveSpec> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(move_to_spec)
            .collect()
    }

    fn turn(&self) -> Side {
        side_of(self.position.turn())
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn apply_move(&mut self, notation: &str) -> std::result::Result<MoveSpec, MoveError> {
        let mv = match self.resolve(notation) {
            Ok(mv) => mv,
            Err(e) => {
                debug!(notation, error = %e, "engine rejected move");
                return Err(e);
            }
        };

        let Some(spec) = move_to_spec(&mv) else {
            warn!(notation, "resolved move has no board coordinates");
            return Err(MoveError::InvalidNotation(notation.to_string()));
        };

        let next = self
            .position
            .clone()
            .play(mv.clone())
            .map_err(|_| MoveError::IllegalInPosition(notation.to_string()))?;

        let before = std::mem::replace(&mut self.position, next);
        self.previous.push(before);
        self.moves.push(mv);
        Ok(spec)
    }

    fn undo_last_move(&mut self) -> Option<MoveSpec> {
        let mv = self.moves.pop()?;
        if let Some(before) = self.previous.pop() {
            self.position = before;
        }
        move_to_spec(&mv)
    }

    fn move_stack(&self) -> Vec<MoveSpec> {
        self.moves.iter().filter_map(move_to_spec).collect()
    }

    fn san_of(&self, mv: &MoveSpec) -> Option<String> {
        let resolved = self.resolve(&mv.notation()).ok()?;
        let san = San::from_move(&self.position, resolved.clone()).to_string();

        let after = self.position.clone().play(resolved).ok()?;
        let suffix = if after.is_checkmate() {
            "#"
        } else if after.is_check() {
            "+"
        } else {
            ""
        };
        Some(format!("{}{}", san, suffix))
    }

    fn replay_board(&self) -> Self {
        Self::from_position(self.initial.clone())
    }
}

fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square.index()))
}

fn from_shakmaty_square(square: shakmaty::Square) -> Option<Square> {
    Square::from_index(square as u8)
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn promotion_role(kind: PromotionKind) -> Role {
    match kind {
        PromotionKind::Queen => Role::Queen,
        PromotionKind::Rook => Role::Rook,
        PromotionKind::Bishop => Role::Bishop,
        PromotionKind::Knight => Role::Knight,
    }
}

fn promotion_kind(role: Role) -> Option<PromotionKind> {
    match role {
        Role::Queen => Some(PromotionKind::Queen),
        Role::Rook => Some(PromotionKind::Rook),
        Role::Bishop => Some(PromotionKind::Bishop),
        Role::Knight => Some(PromotionKind::Knight),
        _ => None,
    }
}

/// Converts a shakmaty move to the squares a player clicks for it.
/// Castling is reported as the king's two-square step.
fn move_to_spec(mv: &Move) -> Option<MoveSpec> {
    match mv {
        Move::Normal {
            from,
            to,
            promotion,
            ..
        } => Some(MoveSpec {
            from: from_shakmaty_square(*from)?,
            to: from_shakmaty_square(*to)?,
            promotion: promotion.and_then(promotion_kind),
        }),
        Move::EnPassant { from, to } => Some(MoveSpec::new(
            from_shakmaty_square(*from)?,
            from_shakmaty_square(*to)?,
        )),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            let king_to = shakmaty::Square::from_coords(file, king.rank());
            Some(MoveSpec::new(
                from_shakmaty_square(*king)?,
                from_shakmaty_square(king_to)?,
            ))
        }
        Move::Put { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let engine = ShakmatyEngine::new();
        assert_eq!(engine.legal_moves().len(), 20);
        assert_eq!(engine.turn(), Side::White);
        assert_eq!(
            engine.piece_at(sq("e1")),
            Some(Piece::new(Side::White, PieceKind::King))
        );
        assert_eq!(engine.piece_at(sq("e4")), None);
        assert!(!engine.is_check());
    }

    #[test]
    fn test_apply_and_undo() {
        let mut engine = ShakmatyEngine::new();
        let spec = engine.apply_move("e2e4").unwrap();
        assert_eq!(spec.notation(), "e2e4");
        assert_eq!(engine.turn(), Side::Black);
        assert_eq!(engine.peek_last_move(), Some(spec));

        assert_eq!(engine.undo_last_move(), Some(spec));
        assert_eq!(engine.turn(), Side::White);
        assert!(engine.move_stack().is_empty());
        assert_eq!(engine.undo_last_move(), None);
    }

    #[test]
    fn test_classifies_failures() {
        let mut engine = ShakmatyEngine::new();
        assert!(matches!(
            engine.apply_move("e2e5"),
            Err(MoveError::IllegalInPosition(_))
        ));
        assert!(matches!(
            engine.apply_move("e2e2"),
            Err(MoveError::InvalidNotation(_))
        ));
        assert!(matches!(
            engine.apply_move("zz"),
            Err(MoveError::InvalidNotation(_))
        ));
        assert!(engine.move_stack().is_empty());
    }

    #[test]
    fn test_castling_reported_as_king_step() {
        let engine =
            ShakmatyEngine::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let destinations: Vec<String> = engine
            .legal_moves()
            .into_iter()
            .filter(|m| m.from == sq("e1"))
            .map(|m| m.to.to_string())
            .collect();
        assert!(destinations.contains(&"g1".to_string()));
        assert!(destinations.contains(&"c1".to_string()));

        let mut engine = engine;
        engine.apply_move("e1g1").unwrap();
        assert_eq!(
            engine.piece_at(sq("f1")),
            Some(Piece::new(Side::White, PieceKind::Rook))
        );
    }

    #[test]
    fn test_san_is_position_dependent() {
        let mut engine = ShakmatyEngine::new();
        assert_eq!(engine.san_of(&"g1f3".parse().unwrap()).as_deref(), Some("Nf3"));
        engine.apply_move("f2f3").unwrap();
        engine.apply_move("e7e5").unwrap();
        engine.apply_move("g2g4").unwrap();
        assert_eq!(engine.san_of(&"d8h4".parse().unwrap()).as_deref(), Some("Qh4#"));
    }

    #[test]
    fn test_replay_board_starts_over() {
        let mut engine =
            ShakmatyEngine::from_fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        engine.apply_move("e1d2").unwrap();
        let replay = engine.replay_board();
        assert!(replay.move_stack().is_empty());
        assert_eq!(
            replay.piece_at(sq("e1")),
            Some(Piece::new(Side::White, PieceKind::King))
        );
    }

    #[test]
    fn test_rejects_bad_fen() {
        assert!(matches!(ShakmatyEngine::from_fen("not a fen"), Err(Error::Fen(_))));
        assert!(matches!(
            ShakmatyEngine::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(Error::Position(_))
        ));
    }
}
