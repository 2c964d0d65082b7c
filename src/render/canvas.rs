//! HTML canvas 2D surface for the browser host

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawSurface, Font, Style, TEXT_STYLE};
use crate::sim::Rect;

/// Wraps the canvas' 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, region: Rect) -> Result<(), JsValue> {
        self.ctx.clear_rect(
            region.left() as f64,
            region.top() as f64,
            region.size.x as f64,
            region.size.y as f64,
        );
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&style.color.to_css());
        self.ctx.stroke();
        Ok(())
    }

    fn draw_text(&mut self, content: &str, position: Vec2, font: Font) -> Result<(), JsValue> {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_fill_style_str(&TEXT_STYLE.color.to_css());
        self.ctx
            .fill_text(content, position.x as f64, position.y as f64)
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
        Ok(())
    }
}
