//! Scene module - display grid and heat grid
//!
//! A scene holds two row-major grids of equal size:
//!
//! - the **display grid**: one glyph per cell, [`BLANK`] where nothing is drawn
//! - the **heat grid**: one intensity per cell in `[0, 1]`
//!
//! Coordinates are `(y, x)`: `y` grows downward, the last row is the heat
//! source. Glyphs only ever disappear (see [`crate::sim::burn`]).

use crate::types::{Dims, BANNER_BOTTOM_OFFSET, BLANK, DEFAULT_BANNER, TEXT_CENTER_LIFT};

/// Display grid plus heat grid for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    dims: Dims,
    /// Flat array of glyphs, row-major order (y * width + x)
    glyphs: Vec<char>,
    /// Flat array of heat values, same layout as `glyphs`
    heat: Vec<f32>,
}

impl Scene {
    /// Allocate blank grids and seed them from `input`.
    ///
    /// Non-empty input is placed line by line, left-justified, a little above
    /// the vertical center. Empty input places [`DEFAULT_BANNER`] centered near
    /// the bottom. Anything that falls outside the grid is dropped.
    pub fn new(dims: Dims, input: &str) -> Self {
        let mut scene = Self::blank(dims);
        if input.is_empty() {
            scene.place_banner(DEFAULT_BANNER);
        } else {
            scene.place_lines(&split_lines(input));
        }
        scene
    }

    /// Blank grids with zero heat.
    pub fn blank(dims: Dims) -> Self {
        let len = dims.area();
        Self {
            dims,
            glyphs: vec![BLANK; len],
            heat: vec![0.0; len],
        }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Glyph at `(y, x)`, `None` when out of bounds.
    pub fn glyph(&self, y: usize, x: usize) -> Option<char> {
        self.dims.index(y, x).map(|i| self.glyphs[i])
    }

    /// Heat at `(y, x)`, `None` when out of bounds.
    pub fn heat(&self, y: usize, x: usize) -> Option<f32> {
        self.dims.index(y, x).map(|i| self.heat[i])
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn heat_grid(&self) -> &[f32] {
        &self.heat
    }

    /// One row of the heat grid, `None` when out of bounds.
    pub fn heat_row(&self, y: usize) -> Option<&[f32]> {
        if y >= self.dims.height {
            return None;
        }
        let w = self.dims.width;
        Some(&self.heat[y * w..(y + 1) * w])
    }

    /// Number of glyphs that have not burned yet.
    pub fn unburned_count(&self) -> usize {
        self.glyphs.iter().filter(|&&c| c != BLANK).count()
    }

    /// Overwrite the heat at `(y, x)`, clamped into `[0, 1]`.
    ///
    /// Returns false if out of bounds. Only tests and benches use this to
    /// pre-heat cells; the simulation never calls it.
    #[doc(hidden)]
    pub fn set_heat(&mut self, y: usize, x: usize, value: f32) -> bool {
        match self.dims.index(y, x) {
            Some(i) => {
                self.heat[i] = value.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    pub(crate) fn heat_mut(&mut self) -> &mut [f32] {
        &mut self.heat
    }

    pub(crate) fn grids_mut(&mut self) -> (&mut [char], &mut [f32]) {
        (&mut self.glyphs, &mut self.heat)
    }

    fn put(&mut self, y: isize, x: isize, ch: char) {
        if y < 0 || x < 0 {
            return;
        }
        if let Some(i) = self.dims.index(y as usize, x as usize) {
            self.glyphs[i] = sanitize(ch);
        }
    }

    fn place_lines(&mut self, lines: &[&str]) {
        let h = self.dims.height as isize;
        let n = lines.len() as isize;
        let start_row = ((h - n).div_euclid(2) - TEXT_CENTER_LIFT).max(0);

        for (i, line) in lines.iter().enumerate() {
            let y = start_row + i as isize;
            if y >= h {
                break;
            }
            for (x, ch) in line.chars().take(self.dims.width).enumerate() {
                self.put(y, x as isize, ch);
            }
        }
    }

    fn place_banner(&mut self, banner: &str) {
        let row = self.dims.height as isize - BANNER_BOTTOM_OFFSET as isize;
        if row < 0 {
            return;
        }
        let len = banner.chars().count() as isize;
        let start_col = (self.dims.width as isize - len).div_euclid(2).max(0);
        for (i, ch) in banner.chars().enumerate() {
            self.put(row, start_col + i as isize, ch);
        }
    }
}

/// Control characters would move the terminal cursor; draw them as blank.
fn sanitize(ch: char) -> char {
    if ch.is_control() {
        BLANK
    } else {
        ch
    }
}

/// Characters that end a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as one terminator.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines. A trailing terminator does not start an extra
/// empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(is_line_break) {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") {
                    2
                } else {
                    rest[i..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
