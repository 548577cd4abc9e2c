//! Animation loop, decoupled from the terminal.
//!
//! One iteration is three explicit steps: advance the simulation, present the
//! rendered frame, then wait out the rest of the frame period while watching
//! for a stop request. The terminal binary supplies the [`FrameSink`] and
//! [`ControlSource`]; tests supply scripted ones.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{render_into, sim, Frame, Scene, TickReport, UniformSource};
use crate::types::FireParams;

/// Outcome of one wait step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Frame period elapsed; keep animating.
    Continue,
    /// The user pressed the quit key.
    Quit,
    /// The process was interrupted.
    Interrupt,
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    Interrupted,
}

/// Receives every rendered frame.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// The single wait primitive: paces frames and polls for stop requests.
pub trait ControlSource {
    /// Block until `deadline` unless a stop request arrives first.
    fn wait_until(&mut self, deadline: Instant) -> Result<Control>;
}

/// Summary returned when the loop stops cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub burned: usize,
    pub reason: StopReason,
}

/// Scene, tunables and randomness for one run, plus a reusable frame.
#[derive(Debug, Clone)]
pub struct Animation<R> {
    scene: Scene,
    params: FireParams,
    rng: R,
    frame: Frame,
    ticks: u64,
    burned: usize,
}

impl<R: UniformSource> Animation<R> {
    pub fn new(scene: Scene, params: FireParams, rng: R) -> Self {
        let frame = Frame::new(scene.dims());
        Self {
            scene,
            params,
            rng,
            frame,
            ticks: 0,
            burned: 0,
        }
    }

    /// Run one simulation tick.
    pub fn advance(&mut self) -> TickReport {
        let report = sim::tick(&mut self.scene, &self.params, &mut self.rng);
        self.ticks += 1;
        self.burned += report.burned;
        report
    }

    /// Render the current state into the internal frame.
    pub fn render(&mut self) -> &Frame {
        render_into(&self.scene, &mut self.frame);
        &self.frame
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Glyphs burned since the start of the run.
    pub fn burned(&self) -> usize {
        self.burned
    }
}

/// Drive the animation until the control source asks to stop.
///
/// Errors from the sink or the control source end the loop and are returned
/// as-is; the caller is responsible for restoring the display.
pub fn run_loop<R, S, C>(
    anim: &mut Animation<R>,
    sink: &mut S,
    control: &mut C,
    period: Duration,
) -> Result<RunSummary>
where
    R: UniformSource,
    S: FrameSink + ?Sized,
    C: ControlSource + ?Sized,
{
    loop {
        let started = Instant::now();

        let report = anim.advance();
        if report.burned > 0 {
            debug!(
                tick = anim.ticks(),
                burned = report.burned,
                left = anim.scene().unburned_count(),
                "glyphs burned"
            );
        }
        sink.present(anim.render())?;

        let reason = match control.wait_until(started + period)? {
            Control::Continue => continue,
            Control::Quit => StopReason::Quit,
            Control::Interrupt => StopReason::Interrupted,
        };

        info!(ticks = anim.ticks(), burned = anim.burned(), ?reason, "animation stopped");
        return Ok(RunSummary {
            ticks: anim.ticks(),
            burned: anim.burned(),
            reason,
        });
    }
}
