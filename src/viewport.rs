//! Visible play area
//!
//! Every host hands us its width once at startup; everything else about the
//! play area is fixed.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Size of the visible play area in game units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: MAX_VIEW_WIDTH,
            height: VIEW_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl Viewport {
    /// Fit the play area to a host that is `host_width` units wide
    pub fn for_host_width(host_width: f32) -> Self {
        let width = (host_width - VIEW_SIDE_MARGIN)
            .min(MAX_VIEW_WIDTH)
            .max(MIN_VIEW_WIDTH);
        Self {
            width,
            ..Self::default()
        }
    }

    /// Y coordinate a grounded entity's bottom edge rests on
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Y coordinate of the painted ground line
    #[inline]
    pub fn ground_line_y(&self) -> f32 {
        self.ground_y() + GROUND_LINE_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_host_caps_width() {
        let viewport = Viewport::for_host_width(1920.0);
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 250.0);
        assert_eq!(viewport.ground_y(), 210.0);
    }

    #[test]
    fn test_narrow_host_leaves_margin() {
        let viewport = Viewport::for_host_width(400.0);
        assert_eq!(viewport.width, 360.0);

        // Degenerate hosts still get a playable area
        let viewport = Viewport::for_host_width(10.0);
        assert_eq!(viewport.width, MIN_VIEW_WIDTH);
    }
}
