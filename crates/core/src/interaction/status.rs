//! Post-move status evaluation

use serde::{Deserialize, Serialize};

use crate::presenter::ColorRole;
use crate::rules::RulesEngine;

/// A status the player is told about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusNotice {
    Check,
    Checkmate,
    Stalemate,
    IllegalMove,
    InvalidMove,
}

impl StatusNotice {
    pub fn message(self) -> &'static str {
        match self {
            StatusNotice::Check => "Check!",
            StatusNotice::Checkmate => "Checkmate!",
            StatusNotice::Stalemate => "Stalemate!",
            StatusNotice::IllegalMove => "Illegal Move!",
            StatusNotice::InvalidMove => "Invalid Move!",
        }
    }

    pub fn color(self) -> ColorRole {
        match self {
            StatusNotice::Check | StatusNotice::IllegalMove | StatusNotice::InvalidMove => {
                ColorRole::Alert
            }
            StatusNotice::Checkmate => ColorRole::Victory,
            StatusNotice::Stalemate => ColorRole::Draw,
        }
    }
}

/// Notices for the position after a move, in display order. Check is
/// suppressed by checkmate; stalemate is judged on its own.
pub fn evaluate_status(engine: &impl RulesEngine) -> Vec<StatusNotice> {
    let mut notices = Vec::new();
    let checkmate = engine.is_checkmate();

    if engine.is_check() && !checkmate {
        notices.push(StatusNotice::Check);
    }
    if checkmate {
        notices.push(StatusNotice::Checkmate);
    }
    if engine.is_stalemate() {
        notices.push(StatusNotice::Stalemate);
    }
    notices
}
