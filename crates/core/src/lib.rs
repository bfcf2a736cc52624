//! Click-to-move chess interaction core
//!
//! Turns square clicks into moves, resolves promotions, tracks highlights
//! and the move list, and decides which status messages to show. Chess
//! rules come from a [`RulesEngine`]; drawing is left to a [`Presenter`].

pub mod config;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod presenter;
pub mod rules;
pub mod view;

pub use config::InterfaceConfig;
pub use error::{Error, Result};
pub use interaction::{ClickOutcome, InteractionController, StatusNotice};
pub use layout::BoardLayout;
pub use model::{MoveSpec, Piece, PieceKind, PromotionKind, Side, Square};
pub use presenter::{BoardEvents, ColorRole, Notification, Presenter, PromotionChoice};
pub use rules::{MoveError, RulesEngine, ShakmatyEngine};
pub use view::BoardView;

/// A game on the shakmaty engine, drawn into a [`BoardView`]
pub type Game = InteractionController<ShakmatyEngine, BoardView>;
