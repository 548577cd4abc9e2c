//! Terminal input module (driver-facing).
//!
//! Everything the driver needs to know about the outside world besides the
//! terminal size: which keys quit, where the seed text comes from, and whether
//! the process was interrupted.

pub mod interrupt;
pub mod map;
pub mod source;

pub use interrupt::InterruptFlag;
pub use map::should_quit;
pub use source::{read_seed_from, read_seed_text, read_text};
