//! Axis-aligned rectangle overlap
//!
//! Everything in the game is a box: the player, every cactus and the
//! visible region. Rectangles are half-open, `[x, x + w) × [y, y + h)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap on both axes; touching edges do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_detected() {
        let player = Rect::new(50.0, 160.0, 40.0, 50.0);
        let cactus = Rect::new(80.0, 175.0, 20.0, 40.0);
        assert!(player.overlaps(&cactus));
        assert!(cactus.overlaps(&player));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = Rect::new(50.0, 160.0, 40.0, 50.0);

        // Cactus starts exactly at the player's right edge
        let cactus = Rect::new(90.0, 175.0, 20.0, 40.0);
        assert!(!player.overlaps(&cactus));

        // Player's bottom edge exactly on the cactus top
        let cactus = Rect::new(60.0, 210.0, 20.0, 40.0);
        assert!(!player.overlaps(&cactus));
    }

    #[test]
    fn test_jumping_clear_of_cactus() {
        let player = Rect::new(50.0, 100.0, 40.0, 50.0);
        let cactus = Rect::new(60.0, 175.0, 60.0, 40.0);
        assert!(!player.overlaps(&cactus));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
