//! Rules engine contract
//!
//! The interaction core never computes legality itself. Everything it needs
//! to know about the position comes through [`RulesEngine`].

mod shakmaty_engine;

use thiserror::Error;

use crate::model::{MoveSpec, Piece, Side, Square};

pub use shakmaty_engine::ShakmatyEngine;

/// Why the engine refused a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The notation does not describe a coordinate move at all
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
    /// Well-formed, but not among the legal moves of the position
    #[error("illegal move in this position: {0}")]
    IllegalInPosition(String),
}

/// Board state queries and move application, owned by one game session
pub trait RulesEngine {
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Every legal move of the side to move. A promotion appears once per
    /// promotion kind.
    fn legal_moves(&self) -> Vec<MoveSpec>;

    fn turn(&self) -> Side;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Applies a move given in coordinate notation (`e2e4`, `e7e8q`).
    fn apply_move(&mut self, notation: &str) -> Result<MoveSpec, MoveError>;

    /// Takes back the most recent move, if any.
    fn undo_last_move(&mut self) -> Option<MoveSpec>;

    /// Applied moves, oldest first
    fn move_stack(&self) -> Vec<MoveSpec>;

    fn peek_last_move(&self) -> Option<MoveSpec> {
        self.move_stack().last().copied()
    }

    /// Standard algebraic notation of `mv` in the current position
    fn san_of(&self, mv: &MoveSpec) -> Option<String>;

    /// A fresh engine at this game's initial position, with no moves applied
    fn replay_board(&self) -> Self
    where
        Self: Sized;
}
