//! Board geometry for a given window size
//!
//! Coordinates are in UI units: the window is one unit tall and the origin
//! sits at its center. Nothing here touches game state.

use serde::{Deserialize, Serialize};

use crate::model::Square;

/// Gap between promotion buttons, in tiles
const PROMOTION_SPACING: f32 = 1.2;

/// Last-move label size, in tiles
const LAST_MOVE_SCALE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub tile_len: f32,
    /// Square centers indexed by [`Square::index`]
    pub square_centers: Vec<Point>,
    pub last_move_anchor: Point,
    pub last_move_scale: f32,
    pub promotion_slots: Vec<Point>,
}

impl BoardLayout {
    /// Lays out the board for a `width` x `height` window. Returns `None`
    /// for a degenerate window, so callers keep their previous layout.
    pub fn compute(width: f32, height: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }

        let aspect = width / height;
        let mut tile_len = 1.0 / 8.0;
        if aspect < 1.0 {
            tile_len *= aspect;
        }

        let origin = -tile_len * 4.0;
        let square_centers: Vec<Point> = Square::all()
            .map(|square| Point {
                x: origin + (square.file() as f32 + 0.5) * tile_len,
                y: origin + (square.rank() as f32 + 0.5) * tile_len,
            })
            .collect();

        let a8 = Square::new(0, 7).map(|sq| square_centers[sq.index() as usize])?;

        let spacing = tile_len * PROMOTION_SPACING;
        let start_x = -1.5 * spacing;
        let promotion_slots = (0..4)
            .map(|i| Point {
                x: start_x + i as f32 * spacing,
                y: 0.0,
            })
            .collect();

        Some(Self {
            tile_len,
            square_centers,
            last_move_anchor: a8,
            last_move_scale: tile_len * LAST_MOVE_SCALE,
            promotion_slots,
        })
    }

    pub fn square_center(&self, square: Square) -> Point {
        self.square_centers[square.index() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_wide_window_uses_full_height() {
        let layout = BoardLayout::compute(1600.0, 900.0).unwrap();
        assert!(approx(layout.tile_len, 0.125));

        let a1 = layout.square_center("a1".parse().unwrap());
        assert!(approx(a1.x, -0.4375));
        assert!(approx(a1.y, -0.4375));

        let h8 = layout.square_center("h8".parse().unwrap());
        assert!(approx(h8.x, 0.4375));
        assert!(approx(h8.y, 0.4375));
    }

    #[test]
    fn test_tall_window_shrinks_tiles() {
        let layout = BoardLayout::compute(500.0, 1000.0).unwrap();
        assert!(approx(layout.tile_len, 0.0625));
        assert!(approx(layout.last_move_scale, 0.0625 * 0.9));
    }

    #[test]
    fn test_last_move_label_sits_on_a8() {
        let layout = BoardLayout::compute(800.0, 800.0).unwrap();
        assert_eq!(
            layout.last_move_anchor,
            layout.square_center("a8".parse().unwrap())
        );
    }

    #[test]
    fn test_promotion_slots_are_centered() {
        let layout = BoardLayout::compute(800.0, 800.0).unwrap();
        assert_eq!(layout.promotion_slots.len(), 4);
        let sum: f32 = layout.promotion_slots.iter().map(|p| p.x).sum();
        assert!(approx(sum, 0.0));
        assert!(layout.promotion_slots.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_degenerate_window() {
        assert!(BoardLayout::compute(0.0, 600.0).is_none());
        assert!(BoardLayout::compute(800.0, -1.0).is_none());
        assert!(BoardLayout::compute(f32::NAN, 600.0).is_none());
    }
}
