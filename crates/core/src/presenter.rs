//! Seams between the interaction core and whatever draws the board
//!
//! The core calls [`Presenter`] to change what is on screen; front-ends
//! call [`BoardEvents`] to deliver player input.

use serde::{Deserialize, Serialize};

use crate::interaction::{ClickOutcome, StatusNotice};
use crate::layout::BoardLayout;
use crate::model::{PromotionKind, Square};

/// What a square or message is colored as. Front-ends map roles to colors
/// through the configured palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Light,
    Dark,
    Selected,
    Reachable,
    Alert,
    Victory,
    Draw,
    Promotion,
}

impl ColorRole {
    /// Checkerboard color of a square with nothing highlighted
    pub fn base(square: Square) -> ColorRole {
        if square.is_light() {
            ColorRole::Light
        } else {
            ColorRole::Dark
        }
    }
}

/// Transient status message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub notice: StatusNotice,
    pub message: String,
    pub color: ColorRole,
    pub duration_seconds: f32,
}

impl Notification {
    pub fn new(notice: StatusNotice, duration_seconds: f32) -> Self {
        Self {
            notice,
            message: notice.message().to_string(),
            color: notice.color(),
            duration_seconds,
        }
    }
}

/// One button of the promotion picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionChoice {
    pub kind: PromotionKind,
    pub letter: char,
    pub glyph: char,
}

impl From<PromotionKind> for PromotionChoice {
    fn from(kind: PromotionKind) -> Self {
        Self {
            kind,
            letter: kind.letter(),
            glyph: kind.glyph(),
        }
    }
}

/// Display operations the core drives
pub trait Presenter {
    fn set_square_glyph(&mut self, square: Square, glyph: Option<char>);

    fn set_square_color(&mut self, square: Square, role: ColorRole);

    fn show_notification(&mut self, notification: &Notification);

    fn set_last_move_text(&mut self, text: &str);

    fn set_history_entries(&mut self, labels: &[String]);

    fn show_promotion_choices(&mut self, choices: &[PromotionChoice]);

    fn hide_promotion_choices(&mut self);

    fn set_board_input_enabled(&mut self, enabled: bool);

    fn apply_layout(&mut self, layout: &BoardLayout);
}

/// Player input, delivered one event at a time
pub trait BoardEvents {
    fn on_square_clicked(&mut self, square_name: &str) -> ClickOutcome;

    fn on_promotion_choice_clicked(&mut self, letter: &str) -> ClickOutcome;

    /// Returns whether a move was taken back.
    fn on_undo_requested(&mut self) -> bool;

    fn on_resize(&mut self, width: f32, height: f32);
}
