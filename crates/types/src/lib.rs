//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, terminal driver).
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `COOLING_FACTOR` | 0.75 | Heat retained per step; cooling jitter is `1 - COOLING_FACTOR` |
//! | `WIND_FACTOR` | 0.1 | Nominal wind strength (not applied, see [`WIND_FACTOR`]) |
//! | `WIND_SPREAD` | 4.0 | Width of the lateral jitter window |
//! | `BURN_THRESHOLD` | 0.6 | Heat above which a glyph ignites |
//! | `SOURCE_DECAY` | 0.9 | Per-tick multiplier on the source row |
//! | `REIGNITE_CHANCE` | 0.15 | Per-column chance of a source row flare |
//! | `FRAME_MS` | 80 | Frame period of the terminal driver |
//!
//! # Examples
//!
//! ```
//! use textburn_types::{ColorTier, Dims, FireParams};
//!
//! let dims = Dims::new(24, 80);
//! assert_eq!(dims.area(), 24 * 80);
//!
//! let params = FireParams::default();
//! assert_eq!(params.cooling_jitter(), 0.25);
//!
//! assert_eq!(ColorTier::for_heat(0.9), ColorTier::A);
//! ```

/// Heat retained by a cell as it rises one row.
///
/// The stochastic cooling subtracted per step is scaled by
/// `1.0 - COOLING_FACTOR`, i.e. up to 0.25 heat is lost per row.
pub const COOLING_FACTOR: f32 = 0.75;

/// Nominal wind strength.
///
/// Kept as a named tunable, but the propagation rule does not read it: the
/// lateral jitter width is fixed by [`WIND_SPREAD`]. Changing this value has no
/// visible effect.
pub const WIND_FACTOR: f32 = 0.1;

/// Width of the lateral jitter window used when heat rises.
///
/// `wind_dx = floor((u - 0.5) * WIND_SPREAD)`, which yields offsets in `-2..=1`.
pub const WIND_SPREAD: f32 = 4.0;

/// A glyph burns once the heat under it strictly exceeds this value.
pub const BURN_THRESHOLD: f32 = 0.6;

/// Heat assigned to a cell when its glyph burns or a source ember flares.
pub const IGNITION_HEAT: f32 = 1.0;

/// Multiplier applied to the source row every tick.
pub const SOURCE_DECAY: f32 = 0.9;

/// Per-column chance that a source row cell flares to full heat.
pub const REIGNITE_CHANCE: f32 = 0.15;

/// Heat at or below this value renders as empty space.
pub const VISIBLE_HEAT: f32 = 0.01;

/// Frame period of the terminal driver in milliseconds.
pub const FRAME_MS: u32 = 80;

/// Smallest terminal the animation runs in (columns).
pub const MIN_WIDTH: u16 = 1;

/// Smallest terminal the animation runs in (rows).
///
/// One source row plus at least one row for heat to rise into.
pub const MIN_HEIGHT: u16 = 2;

/// Fire glyphs ordered from hottest to coolest.
pub const FIRE_CHARS: [char; 5] = ['#', 'O', 'o', '.', ' '];

/// Highest palette index (`FIRE_CHARS.len() - 1`).
pub const FIRE_PALETTE_SIZE: usize = FIRE_CHARS.len() - 1;

/// Blank sentinel for the display grid.
pub const BLANK: char = ' ';

/// Banner burned when nothing is piped in.
pub const DEFAULT_BANNER: &str = "=== TEXTBURN ===";

/// Rows between the banner and the bottom edge.
pub const BANNER_BOTTOM_OFFSET: usize = 5;

/// Rows the piped text is lifted above the vertical center.
pub const TEXT_CENTER_LIFT: isize = 4;

/// Frame dimensions, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub height: usize,
    pub width: usize,
}

impl Dims {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of cells.
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    /// Row-major index of `(y, x)`, or `None` when out of bounds.
    #[inline(always)]
    pub fn index(&self, y: usize, x: usize) -> Option<usize> {
        if y >= self.height || x >= self.width {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// Color class of a rendered cell.
///
/// Fire tiers are ordered hottest (`A`) to coolest (`D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTier {
    /// Text and empty space: terminal default colors.
    #[default]
    Neutral,
    /// Heat above 0.8.
    A,
    /// Heat above 0.6.
    B,
    /// Heat above 0.4.
    C,
    /// Any other visible heat.
    D,
}

impl ColorTier {
    /// Classify a visible heat value into a fire tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use textburn_types::ColorTier;
    ///
    /// assert_eq!(ColorTier::for_heat(1.0), ColorTier::A);
    /// assert_eq!(ColorTier::for_heat(0.8), ColorTier::B);
    /// assert_eq!(ColorTier::for_heat(0.5), ColorTier::C);
    /// assert_eq!(ColorTier::for_heat(0.4), ColorTier::D);
    /// ```
    pub fn for_heat(heat: f32) -> Self {
        if heat > 0.8 {
            ColorTier::A
        } else if heat > 0.6 {
            ColorTier::B
        } else if heat > 0.4 {
            ColorTier::C
        } else {
            ColorTier::D
        }
    }

    pub fn is_fire(&self) -> bool {
        !matches!(self, ColorTier::Neutral)
    }
}

/// Tunables of the fire simulation.
///
/// `Default` reproduces the reference look; tests build custom values to force
/// deterministic outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireParams {
    /// Heat retained per row; cooling jitter scale is `1 - cooling_factor`.
    pub cooling_factor: f32,
    /// Nominal, see [`WIND_FACTOR`].
    pub wind_factor: f32,
    /// Lateral jitter window, see [`WIND_SPREAD`].
    pub wind_spread: f32,
    pub burn_threshold: f32,
    pub source_decay: f32,
    pub reignite_chance: f32,
}

impl FireParams {
    /// Maximum heat lost by a cell as it rises one row.
    pub fn cooling_jitter(&self) -> f32 {
        1.0 - self.cooling_factor
    }
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            cooling_factor: COOLING_FACTOR,
            wind_factor: WIND_FACTOR,
            wind_spread: WIND_SPREAD,
            burn_threshold: BURN_THRESHOLD,
            source_decay: SOURCE_DECAY,
            reignite_chance: REIGNITE_CHANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        assert_eq!(COOLING_FACTOR, 0.75);
        assert_eq!(WIND_FACTOR, 0.1);
        assert_eq!(BURN_THRESHOLD, 0.6);
        assert_eq!(SOURCE_DECAY, 0.9);
        assert_eq!(REIGNITE_CHANCE, 0.15);
        assert_eq!(FIRE_PALETTE_SIZE, 4);
    }

    #[test]
    fn cooling_jitter_matches_reference_scale() {
        assert_eq!(FireParams::default().cooling_jitter(), 0.25);
    }

    #[test]
    fn dims_index_is_bounds_checked() {
        let d = Dims::new(3, 4);
        assert_eq!(d.index(0, 0), Some(0));
        assert_eq!(d.index(2, 3), Some(11));
        assert_eq!(d.index(3, 0), None);
        assert_eq!(d.index(0, 4), None);
    }

    #[test]
    fn tier_thresholds_are_strict() {
        assert_eq!(ColorTier::for_heat(0.81), ColorTier::A);
        assert_eq!(ColorTier::for_heat(0.6), ColorTier::C);
        assert_eq!(ColorTier::for_heat(0.02), ColorTier::D);
        assert!(!ColorTier::Neutral.is_fire());
        assert!(ColorTier::D.is_fire());
    }
}
