// clampcore/src/compute.rs
//! The computation core: a private adjustment, a ready flag, a fixed range,
//! and a shared invocation counter.
//!
//! The module moves Uninitialized -> Ready through [`ComputeModule::initialize`]
//! only. Calling [`ComputeModule::compute`] early is an error, not a panic, so
//! callers can initialize and retry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    bounds::BoundsRange,
    counter::StatsCounter,
    error::{ComputeError, ComputeResult},
};

/// Offset folded into every computation once the module is ready.
const ADJUSTMENT: i64 = 42;

/// Opaque initialization tag. Accepted for forward compatibility; both
/// variants currently yield the same adjustment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    A,
    B,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::A
    }
}

#[derive(Debug)]
pub struct ComputeModule {
    adjustment: i64,
    initialized: bool,
    bounds: BoundsRange,
    counter: Arc<StatsCounter>,
}

impl ComputeModule {
    pub fn new(bounds: BoundsRange, counter: Arc<StatsCounter>) -> Self {
        Self {
            adjustment: 0,
            initialized: false,
            bounds,
            counter,
        }
    }

    /// Set the adjustment and mark the module ready.
    ///
    /// Idempotent: every call resets to the same constant. `mode` does not
    /// change the adjustment today.
    pub fn initialize(&mut self, _mode: Mode) {
        self.adjustment = ADJUSTMENT;
        self.initialized = true;
    }

    /// Add the adjustment to `base` and clamp the sum into the configured
    /// range. Records one invocation when instrumentation is enabled.
    pub fn compute(&self, base: i64) -> ComputeResult<i64> {
        if !self.initialized {
            return Err(ComputeError::NotInitialized);
        }
        self.counter.increment();
        Ok(self.bounds.clamp(base.saturating_add(self.adjustment)))
    }
}

/* ================================== Tests ================================== */
