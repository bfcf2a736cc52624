//! Selected-origin and reachable-square highlighting

use std::collections::BTreeSet;

use crate::model::{MoveSpec, Square};
use crate::presenter::{ColorRole, Presenter};

/// Squares currently drawn as the selected origin or a legal destination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    origin: Option<Square>,
    reachable: BTreeSet<Square>,
}

impl HighlightSet {
    pub fn origin(&self) -> Option<Square> {
        self.origin
    }

    pub fn reachable(&self) -> &BTreeSet<Square> {
        &self.reachable
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.reachable.is_empty()
    }

    /// Origin plus every reachable square
    pub fn squares(&self) -> BTreeSet<Square> {
        self.origin
            .into_iter()
            .chain(self.reachable.iter().copied())
            .collect()
    }

    pub fn role_of(&self, square: Square) -> Option<ColorRole> {
        if self.origin == Some(square) {
            Some(ColorRole::Selected)
        } else if self.reachable.contains(&square) {
            Some(ColorRole::Reachable)
        } else {
            None
        }
    }
}

/// Highlights for `origin`: the origin itself and the destination of every
/// legal move leaving it.
pub fn compute_highlights(legal_moves: &[MoveSpec], origin: Square) -> HighlightSet {
    let reachable = legal_moves
        .iter()
        .filter(|mv| mv.from == origin)
        .map(|mv| mv.to)
        .collect();

    HighlightSet {
        origin: Some(origin),
        reachable,
    }
}

/// Keeps the presenter's square colors in step with one [`HighlightSet`]
#[derive(Debug, Default)]
pub struct HighlightEngine {
    current: HighlightSet,
}

impl HighlightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &HighlightSet {
        &self.current
    }

    /// Clears the previous highlights, then marks `origin` and its legal
    /// destinations.
    pub fn select(&mut self, origin: Square, legal_moves: &[MoveSpec], view: &mut impl Presenter) {
        self.clear(view);
        self.current = compute_highlights(legal_moves, origin);

        for square in self.current.squares() {
            if let Some(role) = self.current.role_of(square) {
                view.set_square_color(square, role);
            }
        }
    }

    /// Restores the checkerboard color of every highlighted square.
    pub fn clear(&mut self, view: &mut impl Presenter) {
        for square in std::mem::take(&mut self.current).squares() {
            view.set_square_color(square, ColorRole::base(square));
        }
    }
}
