//! Fire simulation - one discrete tick over a [`Scene`]
//!
//! A tick runs three passes, each over the result of the previous one:
//!
//! 1. [`propagate`]: every row except the source takes the heat of the row
//!    below, shifted sideways by a random wind offset and reduced by random
//!    cooling.
//! 2. [`burn`]: glyphs sitting on heat above the burn threshold ignite. The
//!    cell flares to full heat and the glyph is gone for good.
//! 3. [`refresh_source`]: the bottom row decays and random embers flare back
//!    to full heat.
//!
//! All randomness comes from the caller's [`UniformSource`], so a fixed seed
//! replays the same fire.

use crate::rng::UniformSource;
use crate::scene::Scene;
use crate::types::{FireParams, BLANK, IGNITION_HEAT};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Glyphs consumed by the burn pass.
    pub burned: usize,
}

/// Advance the scene by exactly one tick.
pub fn tick<R: UniformSource + ?Sized>(
    scene: &mut Scene,
    params: &FireParams,
    rng: &mut R,
) -> TickReport {
    propagate(scene, params, rng);
    let burned = burn(scene, params);
    refresh_source(scene, params, rng);
    TickReport { burned }
}

/// Move heat one row up with wind jitter and stochastic cooling.
///
/// Rows are processed top-down so row `y + 1` still holds its pre-pass values
/// when row `y` reads from it. Two samples are drawn per cell: wind, then
/// cooling.
pub fn propagate<R: UniformSource + ?Sized>(scene: &mut Scene, params: &FireParams, rng: &mut R) {
    let dims = scene.dims();
    let (height, width) = (dims.height, dims.width);
    if height < 2 || width == 0 {
        return;
    }

    let jitter = params.cooling_jitter();
    let max_x = width as isize - 1;
    let heat = scene.heat_mut();

    for y in 0..height - 1 {
        let (upper, lower) = heat.split_at_mut((y + 1) * width);
        let row = &mut upper[y * width..];
        let below = &lower[..width];

        for (x, cell) in row.iter_mut().enumerate() {
            let wind_dx = ((rng.next_unit() - 0.5) * params.wind_spread).floor() as isize;
            let src_x = (x as isize + wind_dx).clamp(0, max_x) as usize;
            *cell = (below[src_x] - rng.next_unit() * jitter).max(0.0);
        }
    }
}

/// Ignite glyphs whose heat strictly exceeds the burn threshold.
///
/// Returns the number of glyphs consumed.
pub fn burn(scene: &mut Scene, params: &FireParams) -> usize {
    let (glyphs, heat) = scene.grids_mut();
    let mut burned = 0;
    for (glyph, h) in glyphs.iter_mut().zip(heat.iter_mut()) {
        if *glyph != BLANK && *h > params.burn_threshold {
            *h = IGNITION_HEAT;
            *glyph = BLANK;
            burned += 1;
        }
    }
    burned
}

/// Decay the source row and let random embers flare to full heat.
///
/// One sample is drawn per column.
pub fn refresh_source<R: UniformSource + ?Sized>(
    scene: &mut Scene,
    params: &FireParams,
    rng: &mut R,
) {
    let dims = scene.dims();
    if dims.height == 0 {
        return;
    }
    let start = (dims.height - 1) * dims.width;
    for h in &mut scene.heat_mut()[start..] {
        *h *= params.source_decay;
        if rng.next_unit() < params.reignite_chance {
            *h = IGNITION_HEAT;
        }
    }
}
