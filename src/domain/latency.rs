// src/domain/latency.rs

use std::thread;
use std::time::Duration;

/// Points where the site pauses so the skeleton cards have a chance to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Before the first grid is rendered for a page visit.
    InitialLoad,
    /// Before a filter change is applied.
    Filter,
}

/// Fake latency hook. It must never influence what gets rendered, only when.
pub trait Latency: Send + Sync {
    fn pause(&self, phase: LoadPhase);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn pause(&self, _phase: LoadPhase) {}
}

#[derive(Debug, Clone, Copy)]
pub struct FixedLatency {
    pub initial_load: Duration,
    pub filter: Duration,
}

impl FixedLatency {
    pub fn new(initial_load: Duration, filter: Duration) -> Self {
        Self {
            initial_load,
            filter,
        }
    }

    pub fn delay_for(&self, phase: LoadPhase) -> Duration {
        match phase {
            LoadPhase::InitialLoad => self.initial_load,
            LoadPhase::Filter => self.filter,
        }
    }
}

impl Latency for FixedLatency {
    fn pause(&self, phase: LoadPhase) {
        let delay = self.delay_for(phase);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Picks the cheapest hook for the configured delays.
pub fn latency_from_millis(initial_load_ms: u64, filter_ms: u64) -> Box<dyn Latency> {
    if initial_load_ms == 0 && filter_ms == 0 {
        Box::new(NoLatency)
    } else {
        Box::new(FixedLatency::new(
            Duration::from_millis(initial_load_ms),
            Duration::from_millis(filter_ms),
        ))
    }
}
