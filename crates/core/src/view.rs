//! Retained board view
//!
//! [`BoardView`] is a [`Presenter`] that simply remembers what it was told
//! to show. Front-ends render from it, and tests assert against it.

use serde::Serialize;

use crate::layout::BoardLayout;
use crate::model::Square;
use crate::presenter::{ColorRole, Notification, Presenter, PromotionChoice};

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    glyphs: Vec<Option<char>>,
    colors: Vec<ColorRole>,
    notifications: Vec<Notification>,
    last_move_text: String,
    history: Vec<String>,
    promotion_choices: Vec<PromotionChoice>,
    input_enabled: bool,
    layout: Option<BoardLayout>,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            glyphs: vec![None; 64],
            colors: Square::all().map(ColorRole::base).collect(),
            notifications: Vec::new(),
            last_move_text: String::new(),
            history: Vec::new(),
            promotion_choices: Vec::new(),
            input_enabled: true,
            layout: None,
        }
    }

    pub fn glyph(&self, square: Square) -> Option<char> {
        self.glyphs[square.index() as usize]
    }

    pub fn color(&self, square: Square) -> ColorRole {
        self.colors[square.index() as usize]
    }

    /// Every notification shown so far, oldest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn last_move_text(&self) -> &str {
        &self.last_move_text
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn promotion_choices(&self) -> &[PromotionChoice] {
        &self.promotion_choices
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    /// Text diagram, rank 8 at the top. Highlighted squares are bracketed.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            out.push(char::from(b'1' + rank));
            out.push(' ');
            for file in 0..8u8 {
                let Some(square) = Square::new(file, rank) else {
                    continue;
                };
                let glyph = self.glyph(square).unwrap_or('·');
                match self.color(square) {
                    ColorRole::Selected => out.push_str(&format!("[{}]", glyph)),
                    ColorRole::Reachable => out.push_str(&format!("({})", glyph)),
                    _ => out.push_str(&format!(" {} ", glyph)),
                }
            }
            out.push('\n');
        }
        out.push_str("   a  b  c  d  e  f  g  h\n");
        out
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for BoardView {
    fn set_square_glyph(&mut self, square: Square, glyph: Option<char>) {
        self.glyphs[square.index() as usize] = glyph;
    }

    fn set_square_color(&mut self, square: Square, role: ColorRole) {
        self.colors[square.index() as usize] = role;
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn set_last_move_text(&mut self, text: &str) {
        self.last_move_text = text.to_string();
    }

    fn set_history_entries(&mut self, labels: &[String]) {
        self.history = labels.to_vec();
    }

    fn show_promotion_choices(&mut self, choices: &[PromotionChoice]) {
        self.promotion_choices = choices.to_vec();
    }

    fn hide_promotion_choices(&mut self) {
        self.promotion_choices.clear();
    }

    fn set_board_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn apply_layout(&mut self, layout: &BoardLayout) {
        self.layout = Some(layout.clone());
    }
}
