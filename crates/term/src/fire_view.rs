//! FireView: maps a rendered [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ColorTier;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Styles for each color tier, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub neutral: CellStyle,
    /// Fire tiers A..D, hottest first.
    pub fire: [CellStyle; 4],
}

impl Default for Palette {
    fn default() -> Self {
        // White, yellow, red, magenta on the terminal's own background.
        Self {
            neutral: CellStyle::default(),
            fire: [
                CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
                CellStyle::fg(Rgb::new(255, 215, 0)),
                CellStyle::fg(Rgb::new(220, 40, 20)),
                CellStyle::fg(Rgb::new(170, 0, 170)),
            ],
        }
    }
}

impl Palette {
    pub fn style(&self, tier: ColorTier) -> CellStyle {
        match tier {
            ColorTier::Neutral => self.neutral,
            ColorTier::A => self.fire[0],
            ColorTier::B => self.fire[1],
            ColorTier::C => self.fire[2],
            ColorTier::D => self.fire[3],
        }
    }
}

/// Blits fire frames into a terminal-sized framebuffer.
#[derive(Debug, Clone, Default)]
pub struct FireView {
    palette: Palette,
}

impl FireView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render `frame` into a fresh framebuffer of the viewport's size.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, &mut fb);
        fb
    }

    /// Render `frame` into `fb`, anchored at the top-left corner.
    ///
    /// Cells that fall outside `fb` are dropped; uncovered cells are blank.
    pub fn render_into(&self, frame: &Frame, fb: &mut FrameBuffer) {
        fb.clear(self.palette.neutral.into_cell(' '));

        let dims = frame.dims();
        let rows = dims.height.min(fb.height() as usize);
        let cols = dims.width.min(fb.width() as usize);
        for y in 0..rows {
            for x in 0..cols {
                if let Some(g) = frame.get(y, x) {
                    fb.set(x as u16, y as u16, self.palette.style(g.tier).into_cell(g.ch));
                }
            }
        }
    }
}
