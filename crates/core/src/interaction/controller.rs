//! The per-game interaction controller

use tracing::{debug, error, info, warn};

use super::highlight::HighlightEngine;
use super::history::MoveHistoryTracker;
use super::promotion::{needs_promotion, promotion_choices, PendingPromotion};
use super::selection::{ClickTransition, SelectionState};
use super::status::{evaluate_status, StatusNotice};
use crate::config::InterfaceConfig;
use crate::error::{Error, Result};
use crate::layout::BoardLayout;
use crate::model::{MoveSpec, PromotionKind, Square};
use crate::presenter::{BoardEvents, ColorRole, Notification, Presenter};
use crate::rules::{MoveError, RulesEngine, ShakmatyEngine};

/// How one input event was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// A piece was picked up and its destinations highlighted
    Selected(Square),
    /// The engine accepted the move
    Applied(MoveSpec),
    /// The move needs a promotion piece; board input is suspended
    PromotionPending(MoveSpec),
    Illegal(MoveSpec),
    Invalid(MoveSpec),
    /// The promotion picker was open but no completion was legal
    PromotionAborted(MoveSpec),
}

/// Everything one game session needs: the engine, the view, the selection
/// state and the current highlights.
#[derive(Debug)]
pub struct InteractionController<E, P> {
    engine: E,
    view: P,
    state: SelectionState,
    highlights: HighlightEngine,
    history: MoveHistoryTracker,
    notification_seconds: f32,
    layout: Option<BoardLayout>,
}

impl<P: Presenter> InteractionController<ShakmatyEngine, P> {
    /// Starts a game from `config.start_fen`, or the standard position.
    pub fn from_config(view: P, config: &InterfaceConfig) -> Result<Self> {
        let engine = match &config.start_fen {
            Some(fen) => ShakmatyEngine::from_fen(fen)?,
            None => ShakmatyEngine::new(),
        };
        Ok(Self::new(engine, view, config))
    }
}

impl<E: RulesEngine, P: Presenter> InteractionController<E, P> {
    /// Wraps a game and draws its current state.
    pub fn new(engine: E, view: P, config: &InterfaceConfig) -> Self {
        let mut controller = Self {
            engine,
            view,
            state: SelectionState::Idle,
            highlights: HighlightEngine::new(),
            history: MoveHistoryTracker::new(config),
            notification_seconds: config.notification_seconds,
            layout: None,
        };

        for square in Square::all() {
            controller
                .view
                .set_square_color(square, ColorRole::base(square));
        }
        controller.view.hide_promotion_choices();
        controller.view.set_board_input_enabled(true);
        controller.refresh_board();
        controller.refresh_history();
        controller
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut P {
        &mut self.view
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn highlights(&self) -> &HighlightEngine {
        &self.highlights
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    pub fn is_awaiting_promotion(&self) -> bool {
        !self.state.accepts_board_input()
    }

    pub fn history_labels(&self) -> Vec<String> {
        self.history.labels(&self.engine)
    }

    /// Handles a click on a board square.
    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        let occupied = self.engine.piece_at(square).is_some();

        match self.state.click(square, occupied) {
            ClickTransition::Ignored => ClickOutcome::Ignored,
            ClickTransition::Select(origin) => {
                let legal = self.engine.legal_moves();
                self.highlights.select(origin, &legal, &mut self.view);
                ClickOutcome::Selected(origin)
            }
            ClickTransition::Attempt(attempt) => {
                self.highlights.clear(&mut self.view);
                self.attempt(attempt)
            }
        }
    }

    /// Handles a promotion picker button.
    pub fn choose_promotion(&mut self, kind: PromotionKind) -> ClickOutcome {
        let Some(pending) = self.state.pending_promotion().copied() else {
            debug!(?kind, "promotion choice without a pending promotion");
            return ClickOutcome::Ignored;
        };

        self.state.reset();
        self.view.hide_promotion_choices();
        self.view.set_board_input_enabled(true);

        let completed = pending.complete(kind);
        match self.engine.apply_move(&completed.notation()) {
            Ok(applied) => {
                info!(notation = %applied, "promotion applied");
                self.after_move();
                ClickOutcome::Applied(applied)
            }
            Err(e) => {
                let violation = Error::InconsistentPromotion(pending.base().notation());
                error!(error = %violation, cause = %e, "aborting promotion");
                ClickOutcome::PromotionAborted(pending.base())
            }
        }
    }

    /// Takes back the last move. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        if self.engine.move_stack().is_empty() {
            debug!("undo with no moves played");
            return false;
        }

        if self.is_awaiting_promotion() {
            self.view.hide_promotion_choices();
            self.view.set_board_input_enabled(true);
        }
        self.state.reset();

        let undone = self.engine.undo_last_move();
        info!(notation = ?undone.map(|mv| mv.notation()), "move taken back");

        self.refresh_board();
        self.highlights.clear(&mut self.view);
        self.refresh_history();
        true
    }

    /// Recomputes the layout for a new window size.
    pub fn resize(&mut self, width: f32, height: f32) {
        match BoardLayout::compute(width, height) {
            Some(layout) => {
                self.view.apply_layout(&layout);
                self.layout = Some(layout);
            }
            None => debug!(width, height, "ignoring degenerate window size"),
        }
    }

    fn attempt(&mut self, attempt: MoveSpec) -> ClickOutcome {
        match self.engine.apply_move(&attempt.notation()) {
            Ok(applied) => {
                info!(notation = %applied, "move applied");
                self.after_move();
                ClickOutcome::Applied(applied)
            }
            Err(MoveError::IllegalInPosition(_)) if needs_promotion(&self.engine, &attempt) => {
                self.begin_promotion(attempt);
                ClickOutcome::PromotionPending(attempt)
            }
            Err(MoveError::IllegalInPosition(_)) => {
                self.notify(StatusNotice::IllegalMove);
                ClickOutcome::Illegal(attempt)
            }
            Err(MoveError::InvalidNotation(_)) => {
                self.notify(StatusNotice::InvalidMove);
                ClickOutcome::Invalid(attempt)
            }
        }
    }

    fn begin_promotion(&mut self, attempt: MoveSpec) {
        debug!(notation = %attempt, "promotion required");
        self.state = SelectionState::AwaitingPromotion(PendingPromotion::new(attempt));
        self.view.set_board_input_enabled(false);
        self.view.show_promotion_choices(&promotion_choices());
    }

    fn after_move(&mut self) {
        self.refresh_board();
        self.refresh_history();
        for notice in evaluate_status(&self.engine) {
            self.notify(notice);
        }
    }

    fn refresh_board(&mut self) {
        for square in Square::all() {
            let glyph = self.engine.piece_at(square).map(|piece| piece.glyph());
            self.view.set_square_glyph(square, glyph);
        }

        let last = self
            .engine
            .peek_last_move()
            .map(|mv| mv.notation())
            .unwrap_or_default();
        self.view.set_last_move_text(&last);
    }

    fn refresh_history(&mut self) {
        let labels = self.history.labels(&self.engine);
        self.view.set_history_entries(&labels);
    }

    fn notify(&mut self, notice: StatusNotice) {
        debug!(?notice, "notification");
        let notification = Notification::new(notice, self.notification_seconds);
        self.view.show_notification(&notification);
    }
}

impl<E: RulesEngine, P: Presenter> BoardEvents for InteractionController<E, P> {
    fn on_square_clicked(&mut self, square_name: &str) -> ClickOutcome {
        match square_name.parse::<Square>() {
            Ok(square) => self.click_square(square),
            Err(e) => {
                warn!(error = %e, "click on unknown square");
                ClickOutcome::Ignored
            }
        }
    }

    fn on_promotion_choice_clicked(&mut self, letter: &str) -> ClickOutcome {
        let mut chars = letter.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => PromotionKind::from_letter(c),
            _ => None,
        };

        match kind {
            Some(kind) => self.choose_promotion(kind),
            None => {
                warn!(letter, "unknown promotion letter");
                ClickOutcome::Ignored
            }
        }
    }

    fn on_undo_requested(&mut self) -> bool {
        self.undo()
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }
}
