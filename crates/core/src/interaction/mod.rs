//! Click-to-move interaction: selection, highlighting, promotion,
//! move application, status and history

mod controller;
mod highlight;
mod history;
mod promotion;
mod selection;
mod status;

pub use controller::{ClickOutcome, InteractionController};
pub use highlight::{compute_highlights, HighlightEngine, HighlightSet};
pub use history::{HistoryEntry, MoveHistoryTracker};
pub use promotion::{needs_promotion, promotion_choices, PendingPromotion};
pub use selection::{ClickTransition, SelectionState};
pub use status::{evaluate_status, StatusNotice};
