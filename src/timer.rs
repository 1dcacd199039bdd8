use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Cancellable periodic timer driven by the event loop.
///
/// The timer does not spawn anything: the loop asks how long it may sleep
/// (`time_until_next`) and then collects the ticks that elapsed (`due_ticks`).
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl TickTimer {
    /// Intervals shorter than a millisecond are raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            next_deadline: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Number of whole intervals elapsed since the last call; advances the deadline past `now`.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_deadline else {
            return 0;
        };
        let mut ticks = 0;
        while deadline <= now {
            ticks += 1;
            deadline += self.interval;
        }
        self.next_deadline = Some(deadline);
        ticks
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
