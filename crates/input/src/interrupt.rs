//! OS interrupt flag.
//!
//! In raw mode Ctrl-C arrives as a key, but a SIGINT sent from elsewhere
//! (`kill -INT`) still needs to end the loop through the normal shutdown path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

/// Shared "stop requested" flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a process-wide Ctrl-C / SIGINT handler that raises this flag.
    ///
    /// Can only be called once per process.
    pub fn install(&self) -> Result<()> {
        let raised = Arc::clone(&self.raised);
        ctrlc::set_handler(move || {
            raised.store(true, Ordering::SeqCst);
        })
        .context("failed to install interrupt handler")
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
