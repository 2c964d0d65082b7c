//! Rendering
//!
//! The painter only knows the [`DrawSurface`] capability. Hosts provide the
//! actual surface: an HTML canvas in the browser, a character grid in the
//! terminal.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::{TerminalHud, TerminalSurface};

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex notation, e.g. `#535353`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Stroke/fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Rgb,
}

/// Text font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size_px: f32,
    pub family: &'static str,
}

impl Font {
    pub fn to_css(self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Ground and cacti
pub const GROUND_STYLE: Style = Style {
    color: Rgb(0x53, 0x53, 0x53),
};
pub const OBSTACLE_STYLE: Style = GROUND_STYLE;
pub const PLAYER_STYLE: Style = Style {
    color: Rgb(0x2e, 0x8b, 0x57),
};
/// HUD text
pub const TEXT_STYLE: Style = Style {
    color: Rgb(0xdd, 0xdd, 0xdd),
};
pub const HUD_FONT: Font = Font {
    size_px: 20.0,
    family: "sans-serif",
};

/// 2D drawing capability provided by the host
pub trait DrawSurface {
    type Error;

    fn clear(&mut self, region: Rect) -> Result<(), Self::Error>;
    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) -> Result<(), Self::Error>;
    fn draw_text(&mut self, content: &str, position: Vec2, font: Font) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), Self::Error>;
}

/// Paint one frame of the session. Never mutates the state.
pub fn draw<S: DrawSurface>(state: &GameState, surface: &mut S) -> Result<(), S::Error> {
    let viewport = &state.viewport;

    surface.clear(Rect::new(0.0, 0.0, viewport.width, viewport.height))?;

    let ground_y = viewport.ground_line_y();
    surface.draw_line(
        Vec2::new(0.0, ground_y),
        Vec2::new(viewport.width, ground_y),
        GROUND_STYLE,
    )?;

    surface.fill_rect(state.player.rect(), PLAYER_STYLE)?;

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.rect(), OBSTACLE_STYLE)?;
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::convert::Infallible;

    use super::*;

    /// Drawing call captured by [`Recorder`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Rect),
        Line(Vec2, Vec2, Style),
        Text(String, Vec2),
        Fill(Rect, Style),
    }

    /// Surface that records every call
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<DrawCall>,
    }

    impl DrawSurface for Recorder {
        type Error = Infallible;

        fn clear(&mut self, region: Rect) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Clear(region));
            Ok(())
        }

        fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Line(from, to, style));
            Ok(())
        }

        fn draw_text(&mut self, content: &str, position: Vec2, _font: Font) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Text(content.to_string(), position));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Fill(rect, style));
            Ok(())
        }
    }
}
