//! Board view with wall-clock notification expiry

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use clickchess_core::layout::BoardLayout;
use clickchess_core::presenter::PromotionChoice;
use clickchess_core::{BoardView, ColorRole, Notification, Presenter, Square};

/// A notification and the moment it went up
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        let millis = (self.notification.duration_seconds * 1000.0).round() as i64;
        self.shown_at + Duration::milliseconds(millis)
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

/// [`BoardView`] for the board itself plus timestamps for the toasts it was asked to show
#[derive(Debug, Clone, Default)]
pub struct WebView {
    board: BoardView,
    toasts: Vec<Toast>,
}

impl WebView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Toasts still on screen at `now`, oldest first
    pub fn live_toasts(&self, now: DateTime<Utc>) -> Vec<Toast> {
        self.toasts
            .iter()
            .filter(|toast| toast.is_live(now))
            .cloned()
            .collect()
    }

    /// Forgets toasts that have run out.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|toast| toast.is_live(now));
    }
}

impl Presenter for WebView {
    fn set_square_glyph(&mut self, square: Square, glyph: Option<char>) {
        self.board.set_square_glyph(square, glyph);
    }

    fn set_square_color(&mut self, square: Square, role: ColorRole) {
        self.board.set_square_color(square, role);
    }

    /// Toasts are the only record kept; expired ones are dropped by `prune`.
    fn show_notification(&mut self, notification: &Notification) {
        self.toasts.push(Toast {
            notification: notification.clone(),
            shown_at: Utc::now(),
        });
    }

    fn set_last_move_text(&mut self, text: &str) {
        self.board.set_last_move_text(text);
    }

    fn set_history_entries(&mut self, labels: &[String]) {
        self.board.set_history_entries(labels);
    }

    fn show_promotion_choices(&mut self, choices: &[PromotionChoice]) {
        self.board.show_promotion_choices(choices);
    }

    fn hide_promotion_choices(&mut self) {
        self.board.hide_promotion_choices();
    }

    fn set_board_input_enabled(&mut self, enabled: bool) {
        self.board.set_board_input_enabled(enabled);
    }

    fn apply_layout(&mut self, layout: &BoardLayout) {
        self.board.apply_layout(layout);
    }
}
