use {
    crate::epoch::{UNIX_EPOCH_OFFSET_SECS, SECOND_TICKS, unix_parts_to_ticks},
    chrono::Utc,
    parking_lot::RwLock,
};

/// Provides the current time in ticks since the FILETIME epoch.
pub trait TickSource {
    /// Returns the current time in 100ns ticks since 1601-01-01 00:00:00 UTC.
    fn current_ticks(&self) -> u64;
}

/// Wall clock backed by the system UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TickSource for SystemClock {
    fn current_ticks(&self) -> u64 {
        let now = Utc::now();
        unix_parts_to_ticks(now.timestamp(), now.timestamp_subsec_nanos())
    }
}

/// Manually driven clock.
///
/// Useful for testing purposes.
#[derive(Debug)]
pub struct ManualClock {
    /// The current time in ticks since the FILETIME epoch.
    ticks: RwLock<u64>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(UNIX_EPOCH_OFFSET_SECS * SECOND_TICKS)
    }
}

impl TickSource for ManualClock {
    fn current_ticks(&self) -> u64 {
        *self.ticks.read()
    }
}

impl ManualClock {
    /// Creates a new `ManualClock` reading the given tick count.
    pub fn new(ticks: u64) -> Self {
        Self {
            ticks: RwLock::new(ticks),
        }
    }

    /// Sets the current tick count.
    pub fn set_ticks(&self, ticks: u64) {
        *self.ticks.write() = ticks;
    }

    /// Moves the clock forward by `delta` ticks.
    pub fn advance(&self, delta: u64) {
        let mut w = self.ticks.write();
        *w = w.wrapping_add(delta);
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn current_ticks(&self) -> u64 {
        (**self).current_ticks()
    }
}
