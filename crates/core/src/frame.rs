//! Frame module - maps a [`Scene`] to `(char, ColorTier)` cells
//!
//! This is pure (no I/O): the terminal layer decides what the tiers look like.

use crate::scene::Scene;
use crate::types::{ColorTier, Dims, BLANK, FIRE_CHARS, FIRE_PALETTE_SIZE, VISIBLE_HEAT};

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    pub ch: char,
    pub tier: ColorTier,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: BLANK,
        tier: ColorTier::Neutral,
    };
}

/// A rendered frame, same size as the scene it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    dims: Dims,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![Glyph::BLANK; dims.area()],
        }
    }

    /// Allocate a frame and render `scene` into it.
    pub fn from_scene(scene: &Scene) -> Self {
        let mut frame = Self::new(scene.dims());
        render_into(scene, &mut frame);
        frame
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn get(&self, y: usize, x: usize) -> Option<Glyph> {
        self.dims.index(y, x).map(|i| self.cells[i])
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Row `y` as a string (handy in tests and logs), `None` when out of bounds.
    pub fn row_string(&self, y: usize) -> Option<String> {
        if y >= self.dims.height {
            return None;
        }
        let w = self.dims.width;
        Some(self.cells[y * w..(y + 1) * w].iter().map(|g| g.ch).collect())
    }
}

/// Map one heat value to its fire glyph.
///
/// Returns [`Glyph::BLANK`] for heat at or below the visibility cutoff.
pub fn fire_glyph(heat: f32) -> Glyph {
    if heat <= VISIBLE_HEAT {
        return Glyph::BLANK;
    }
    let index = ((heat * FIRE_PALETTE_SIZE as f32).floor().max(0.0) as usize).min(FIRE_PALETTE_SIZE);
    Glyph {
        ch: FIRE_CHARS[FIRE_PALETTE_SIZE - index],
        tier: ColorTier::for_heat(heat),
    }
}

/// Render `scene` into an existing frame, reusing its allocation.
///
/// Unburned text wins over fire; the frame is resized if the scene differs.
pub fn render_into(scene: &Scene, frame: &mut Frame) {
    if frame.dims != scene.dims() {
        frame.dims = scene.dims();
        frame.cells.resize(frame.dims.area(), Glyph::BLANK);
    }

    let cells = frame.cells.iter_mut();
    let sources = scene.glyphs().iter().zip(scene.heat_grid());
    for (out, (&ch, &heat)) in cells.zip(sources) {
        *out = if ch != BLANK {
            Glyph {
                ch,
                tier: ColorTier::Neutral,
            }
        } else {
            fire_glyph(heat)
        };
    }
}
