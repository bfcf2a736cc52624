//! Click selection state machine

use tracing::debug;

use super::promotion::PendingPromotion;
use crate::model::{MoveSpec, Square};

/// Where the player is in entering a move.
///
/// The origin held by `OriginSelected` is the whole selection buffer: it
/// never holds more than one square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    OriginSelected(Square),
    /// Board clicks are ignored until a promotion piece is chosen.
    AwaitingPromotion(PendingPromotion),
}

/// What a board click asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTransition {
    Ignored,
    Select(Square),
    /// The selection buffer has been consumed; the attempt must be resolved.
    Attempt(MoveSpec),
}

impl SelectionState {
    pub fn origin(&self) -> Option<Square> {
        match self {
            SelectionState::OriginSelected(origin) => Some(*origin),
            _ => None,
        }
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        match self {
            SelectionState::AwaitingPromotion(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn accepts_board_input(&self) -> bool {
        !matches!(self, SelectionState::AwaitingPromotion(_))
    }

    /// Feeds one board click. `occupied` tells whether a piece stands on
    /// `square`; it only matters when nothing is selected yet.
    pub fn click(&mut self, square: Square, occupied: bool) -> ClickTransition {
        let transition = match *self {
            SelectionState::AwaitingPromotion(_) => ClickTransition::Ignored,
            SelectionState::Idle if !occupied => ClickTransition::Ignored,
            SelectionState::Idle => {
                *self = SelectionState::OriginSelected(square);
                ClickTransition::Select(square)
            }
            SelectionState::OriginSelected(origin) => {
                *self = SelectionState::Idle;
                ClickTransition::Attempt(MoveSpec::new(origin, square))
            }
        };

        debug!(%square, ?transition, state = ?self, "board click");
        transition
    }

    /// Drops any selection or pending promotion.
    pub fn reset(&mut self) {
        *self = SelectionState::Idle;
    }
}
