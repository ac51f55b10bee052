//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::bus::SerialBus;
use crate::controller::LampController;
use crate::encoder::Encoder;

/// Interval the lamp controller expects its tick at.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Calls the lamp controller's tick hook
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new();
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.poll(&mut lamp, Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TickScheduler {
    next_tick: Instant,
    interval: Duration,
}

impl TickScheduler {
    /// Create a new tick scheduler using [`TICK_INTERVAL`].
    pub const fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    /// Create a new tick scheduler with a custom interval.
    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            next_tick: Instant::from_millis(0),
            interval,
        }
    }

    /// Tick the lamp and return timing information.
    ///
    /// If the caller fell behind by more than two intervals, the schedule
    /// restarts from `now` instead of bursting through the backlog.
    pub fn poll<B: SerialBus, E: Encoder>(
        &mut self,
        lamp: &mut LampController<B, E>,
        now: Instant,
    ) -> TickResult {
        let max_drift = self.interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        lamp.tick();

        self.next_tick += self.interval;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
