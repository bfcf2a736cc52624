//! Value types shared by the interaction core and its front-ends

mod moves;
mod piece;
mod square;

pub use moves::{MoveSpec, PromotionKind};
pub use piece::{Piece, PieceKind, Side};
pub use square::Square;
