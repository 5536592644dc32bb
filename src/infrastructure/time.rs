// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation of the [`Clock`] port. Every stored timestamp
/// in this crate, publication stamps included, is read through the port,
/// so hosts and tests can substitute a deterministic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
