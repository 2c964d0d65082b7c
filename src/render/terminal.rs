//! Character-cell surface for the terminal host
//!
//! Drawing goes into an in-memory grid (so it cannot fail); [`present`]
//! flushes the grid to the terminal with crossterm.
//!
//! [`present`]: TerminalSurface::present

use std::convert::Infallible;
use std::io::{self, Write};

use crossterm::{cursor, queue, style};
use glam::Vec2;

use super::{DrawSurface, Font, HUD_FONT, Rgb, Style, TEXT_STYLE};
use crate::driver::Hud;
use crate::sim::Rect;
use crate::viewport::Viewport;

const FILL_CHAR: char = '█';
const LINE_CHAR: char = '─';
const GAME_OVER_TEXT: &str = "GAME OVER - press any key to restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Option<Rgb>,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: None,
};

/// Play area scaled onto a `cols × rows` character grid
pub struct TerminalSurface {
    viewport: Viewport,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

/// Score and game-over message, drawn over the grid on [`TerminalSurface::present`]
#[derive(Debug, Default, Clone)]
pub struct TerminalHud {
    score: u32,
    game_over_visible: bool,
}

impl TerminalSurface {
    pub fn new(viewport: Viewport, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1) as usize;
        let rows = rows.max(1) as usize;
        Self {
            viewport,
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1) as usize;
        self.rows = rows.max(1) as usize;
        self.cells = vec![BLANK; self.cols * self.rows];
    }

    /// Game units per cell, horizontally and vertically
    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.viewport.width / self.cols as f32,
            self.viewport.height / self.rows as f32,
        )
    }

    fn to_cell(&self, point: Vec2) -> (i32, i32) {
        let cell = self.cell_size();
        (
            (point.x / cell.x).floor() as i32,
            (point.y / cell.y).floor() as i32,
        )
    }

    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.cells[row as usize * self.cols + col as usize] = cell;
        }
    }

    /// Cell range covered by a rect; never empty for a non-empty rect
    fn cell_span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let cell = self.cell_size();
        let c0 = (rect.left() / cell.x).round() as i32;
        let r0 = (rect.top() / cell.y).round() as i32;
        let c1 = ((rect.right() / cell.x).round() as i32).max(c0 + 1);
        let r1 = ((rect.bottom() / cell.y).round() as i32).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    /// Game-space position that lands in the middle of a cell
    fn cell_origin(&self, col: usize, row: usize) -> Vec2 {
        let cell = self.cell_size();
        Vec2::new((col as f32 + 0.5) * cell.x, (row as f32 + 0.5) * cell.y)
    }

    /// Character at a cell, for tests and debugging
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col].ch)
    }

    /// Draw the HUD on top of the last frame and flush everything
    pub fn present(&mut self, hud: &TerminalHud, out: &mut impl Write) -> io::Result<()> {
        self.overlay_hud(hud);

        queue!(out, cursor::MoveTo(0, 0))?;
        let mut current: Option<Rgb> = None;
        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if cell.color != current {
                    match cell.color {
                        Some(Rgb(r, g, b)) => {
                            queue!(out, style::SetForegroundColor(style::Color::Rgb { r, g, b }))?
                        }
                        None => queue!(out, style::ResetColor)?,
                    }
                    current = cell.color;
                }
                queue!(out, style::Print(cell.ch))?;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }

    fn overlay_hud(&mut self, hud: &TerminalHud) {
        let score = format!("Score: {}", hud.score);
        let col = self.cols.saturating_sub(score.chars().count() + 1);
        let at = self.cell_origin(col, 0);
        let Ok(()) = self.draw_text(&score, at, HUD_FONT);

        if hud.game_over_visible {
            let col = (self.cols / 2).saturating_sub(GAME_OVER_TEXT.chars().count() / 2);
            let at = self.cell_origin(col, self.rows / 3);
            let Ok(()) = self.draw_text(GAME_OVER_TEXT, at, HUD_FONT);
        }
    }
}

impl DrawSurface for TerminalSurface {
    type Error = Infallible;

    fn clear(&mut self, region: Rect) -> Result<(), Infallible> {
        let (c0, r0, c1, r1) = self.cell_span(&region);
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, BLANK);
            }
        }
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: Style) -> Result<(), Infallible> {
        let (c0, r0) = self.to_cell(from);
        let (c1, r1) = self.to_cell(to);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        let cell = Cell {
            ch: LINE_CHAR,
            color: Some(style.color),
        };
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = c0 + ((c1 - c0) as f32 * t).round() as i32;
            let row = r0 + ((r1 - r0) as f32 * t).round() as i32;
            self.set(col, row, cell);
        }
        Ok(())
    }

    fn draw_text(&mut self, content: &str, position: Vec2, _font: Font) -> Result<(), Infallible> {
        let (col, row) = self.to_cell(position);
        for (i, ch) in content.chars().enumerate() {
            self.set(
                col + i as i32,
                row,
                Cell {
                    ch,
                    color: Some(TEXT_STYLE.color),
                },
            );
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) -> Result<(), Infallible> {
        let (c0, r0, c1, r1) = self.cell_span(&rect);
        let cell = Cell {
            ch: FILL_CHAR,
            color: Some(style.color),
        };
        for row in r0..r1 {
            for col in c0..c1 {
                self.set(col, row, cell);
            }
        }
        Ok(())
    }
}

impl Hud for TerminalHud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.game_over_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GROUND_STYLE, draw};
    use crate::sim::GameState;
    use crate::sim::spawn::testing::Scripted;
    use crate::{LoopDriver, LoopPhase};

    /// 100 × 25 cells over the default 800 × 250 play area: 8 × 10 units per cell
    fn surface() -> TerminalSurface {
        TerminalSurface::new(Viewport::default(), 100, 25)
    }

    fn row_text(surface: &TerminalSurface, row: usize) -> String {
        (0..surface.cols)
            .filter_map(|col| surface.char_at(col, row))
            .collect()
    }

    #[test]
    fn test_fill_rect_maps_to_cells() {
        let mut surface = surface();
        let Ok(()) = surface.fill_rect(Rect::new(50.0, 160.0, 40.0, 50.0), GROUND_STYLE);

        // cols 6..11 (50/8 = 6.25, 90/8 = 11.25), rows 16..21
        assert_eq!(surface.char_at(6, 16), Some(FILL_CHAR));
        assert_eq!(surface.char_at(10, 20), Some(FILL_CHAR));
        assert_eq!(surface.char_at(11, 20), Some(' '));
        assert_eq!(surface.char_at(6, 21), Some(' '));
    }

    #[test]
    fn test_clipped_shapes_are_ignored() {
        let mut surface = surface();
        let Ok(()) = surface.fill_rect(Rect::new(-100.0, 0.0, 50.0, 50.0), GROUND_STYLE);
        let Ok(()) = surface.fill_rect(Rect::new(790.0, 0.0, 60.0, 50.0), GROUND_STYLE);
        assert_eq!(surface.char_at(0, 0), Some(' '));
        assert_eq!(surface.char_at(99, 0), Some(FILL_CHAR));
    }

    #[test]
    fn test_frame_shows_ground() {
        let mut rng = Scripted::repeat(0.0);
        let state = GameState::new(Viewport::default(), &mut rng);
        let mut surface = surface();
        let Ok(()) = draw(&state, &mut surface);

        // Ground line at y = 211 -> row 21
        assert_eq!(surface.char_at(0, 21), Some(LINE_CHAR));
        assert_eq!(surface.char_at(50, 21), Some(LINE_CHAR));
    }

    #[test]
    fn test_hud_overlay() {
        let mut surface = surface();
        let mut hud = TerminalHud::default();
        hud.set_score(42);
        hud.set_game_over_visible(true);

        let mut out = Vec::new();
        surface.present(&hud, &mut out).unwrap();

        assert!(row_text(&surface, 0).trim_end().ends_with("Score: 42"));
        assert!(row_text(&surface, 25 / 3).contains("GAME OVER"));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_resize_while_stopped_keeps_overlay() {
        let mut driver = LoopDriver::new(Viewport::default(), Scripted::repeat(0.0));
        let mut surface = surface();
        let mut hud = TerminalHud::default();
        let mut out = Vec::new();

        // Nobody jumps, so the first cactus ends the session
        driver.start(&mut hud);
        let mut frames = 0;
        while let Ok(true) = driver.frame(&mut surface, &mut hud) {
            frames += 1;
            assert!(frames < 1000, "session never ended");
        }
        assert_eq!(driver.phase(), LoopPhase::StoppedDisplay);

        surface.resize(120, 30);
        assert!(!row_text(&surface, 30 / 3).contains("GAME OVER"));

        let Ok(()) = driver.repaint(&mut surface);
        surface.present(&hud, &mut out).unwrap();

        assert!(row_text(&surface, 30 / 3).contains("GAME OVER"));
        let score = format!("Score: {}", driver.state().display_score());
        assert!(row_text(&surface, 0).trim_end().ends_with(&score));
        // Ground at y = 211 -> row 25 of 30 (250 / 30 units per row)
        assert_eq!(surface.char_at(0, 25), Some(LINE_CHAR));
    }
}
