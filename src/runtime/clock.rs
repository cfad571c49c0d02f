use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::core::EpochMs;

/// Where the host loop reads "now" from.
///
/// The core itself never touches the system clock; injecting the source
/// keeps playback deterministic in tests and offline renders.
pub trait TimeSource {
    fn now(&self) -> EpochMs;
}

/// Wall-clock time from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> EpochMs {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        EpochMs(since_epoch.as_millis() as u64)
    }
}

/// A hand-driven clock for tests and deterministic playback.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(now: EpochMs) -> Self {
        Self {
            now_ms: Cell::new(now.0),
        }
    }

    pub fn set(&self, now: EpochMs) {
        self.now_ms.set(now.0);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(ms));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> EpochMs {
        EpochMs(self.now_ms.get())
    }
}
