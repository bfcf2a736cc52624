//! Move list derived from the engine's move stack

use tracing::warn;

use crate::config::InterfaceConfig;
use crate::model::Side;
use crate::rules::RulesEngine;

/// One half-move as shown in the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub side: Side,
    pub san: String,
}

/// Builds move-list labels by replaying the game from its initial position.
///
/// Nothing is cached: SAN depends on where the other pieces stood when the
/// move was made, so every refresh replays the whole stack.
#[derive(Debug, Clone)]
pub struct MoveHistoryTracker {
    white_marker: String,
    black_marker: String,
    empty_label: String,
}

impl MoveHistoryTracker {
    pub fn new(config: &InterfaceConfig) -> Self {
        Self {
            white_marker: config.white_marker.clone(),
            black_marker: config.black_marker.clone(),
            empty_label: config.empty_history_label.clone(),
        }
    }

    pub fn entries<E: RulesEngine>(&self, engine: &E) -> Vec<HistoryEntry> {
        let mut replay = engine.replay_board();
        let mut entries = Vec::new();

        for mv in engine.move_stack() {
            let side = replay.turn();
            let san = replay.san_of(&mv).unwrap_or_else(|| {
                warn!(notation = %mv, "no SAN for recorded move, showing coordinates");
                mv.notation()
            });

            if let Err(e) = replay.apply_move(&mv.notation()) {
                warn!(notation = %mv, error = %e, "history replay diverged from the live game");
                break;
            }
            entries.push(HistoryEntry { side, san });
        }

        entries
    }

    /// Labels for the move list; a single placeholder when no move was played
    pub fn labels<E: RulesEngine>(&self, engine: &E) -> Vec<String> {
        let entries = self.entries(engine);
        if entries.is_empty() {
            return vec![self.empty_label.clone()];
        }

        entries.iter().map(|entry| self.label(entry)).collect()
    }

    pub fn label(&self, entry: &HistoryEntry) -> String {
        let marker = match entry.side {
            Side::White => &self.white_marker,
            Side::Black => &self.black_marker,
        };
        format!("{}   {}", marker, entry.san)
    }
}

impl Default for MoveHistoryTracker {
    fn default() -> Self {
        Self::new(&InterfaceConfig::default())
    }
}
