//! textburn (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `textburn::{core,input,term,types}`
//! paths and hosts the terminal-independent animation loop in [`driver`].

pub mod driver;

pub use textburn_core as core;
pub use textburn_input as input;
pub use textburn_term as term;
pub use textburn_types as types;

pub use driver::{run_loop, Animation, Control, ControlSource, FrameSink, RunSummary, StopReason};
