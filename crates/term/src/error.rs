//! Display errors reported to the user after the terminal is restored.

use thiserror::Error;

use crate::types::{Dims, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

impl DisplayError {
    /// Extra line shown under the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            DisplayError::TooSmall { .. } => "Your terminal might be too small to run the animation.",
        }
    }
}

/// Validate a terminal size and convert it to scene dimensions.
pub fn check_size(width: u16, height: u16) -> Result<Dims, DisplayError> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(DisplayError::TooSmall {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(Dims::new(height as usize, width as usize))
}
