use std::time::Duration;

/// Repeating autoplay timer driven by the host's frame clock (seconds).
#[derive(Debug, Clone, Default)]
pub struct Autoplay {
    interval: Option<Duration>,
    deadline: Option<f64>,
    paused: bool,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms, rearms or tears down the timer.
    ///
    /// The deadline restarts only when the interval changes or the timer was
    /// disabled; calling this every frame with the same values is a no-op.
    pub fn configure(&mut self, enabled: bool, interval: Duration, now: f64) {
        if !enabled || interval.is_zero() {
            if self.deadline.is_some() {
                log::trace!("autoplay: torn down");
            }
            self.interval = None;
            self.deadline = None;
            return;
        }

        if self.interval != Some(interval) || self.deadline.is_none() {
            self.interval = Some(interval);
            self.deadline = Some(now + interval.as_secs_f64());
            log::trace!("autoplay: armed every {:?}", interval);
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` when the caller should advance.
    ///
    /// A tick that lands while paused is consumed. At most one tick is
    /// reported per call, however far behind the clock is.
    pub fn poll(&mut self, now: f64) -> bool {
        let (Some(interval), Some(deadline)) = (self.interval, self.deadline) else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let period = interval.as_secs_f64();
        let mut next = deadline + period;
        if next <= now {
            next = now + period;
        }
        self.deadline = Some(next);

        log::trace!("autoplay: tick at {:.3}s (paused: {})", now, self.paused);
        !self.paused
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn until_next(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|deadline| Duration::from_secs_f64((deadline - now).max(0.0)))
    }
}
