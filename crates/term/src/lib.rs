//! Terminal "fire renderer" module.
//!
//! A small rendering layer for the fire animation. It avoids any widget
//! library and instead renders into a simple framebuffer that is diffed and
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep color choices in one [`Palette`] value built at startup
//! - Restore the terminal on every exit path

pub mod error;
pub mod fb;
pub mod fire_view;
pub mod renderer;

pub use textburn_core as core;
pub use textburn_types as types;

pub use error::{check_size, DisplayError};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use fire_view::{FireView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
