//! Latest-value-wins handoff of joint-variable targets

use std::sync::Arc;

use parking_lot::Mutex;

/// Single-slot mailbox for complete joint-variable vectors.
///
/// Producers post full base-to-tip vectors; the simulation loop takes the
/// newest one before each set-variables-then-forward-kinematics pair, so a
/// partial joint update is never observable across a computation boundary.
/// Posting replaces any pending vector.
#[derive(Debug, Clone, Default)]
pub struct TargetMailbox {
    slot: Arc<Mutex<Option<Vec<f64>>>>,
}

impl TargetMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending target with a complete variable vector
    pub fn post(&self, values: Vec<f64>) {
        *self.slot.lock() = Some(values);
    }

    /// Take the newest pending target, leaving the slot empty
    pub fn take(&self) -> Option<Vec<f64>> {
        self.slot.lock().take()
    }

    /// Whether a target is waiting
    pub fn has_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}
