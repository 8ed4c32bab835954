use std::time::Duration;

pub const HEIGHT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Outcome of one measurement pass of the active slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Nonzero height, report it upward.
    Settled(f32),
    /// Zero height; measure again at the given clock time.
    Retry { at: f64 },
    /// A retry is already scheduled for later.
    Waiting,
    /// Retry budget spent for this active index.
    GaveUp,
}

/// Retry-until-nonzero height measurement with a fixed backoff.
///
/// A new active index supersedes whatever retry was pending.
#[derive(Debug, Clone)]
pub struct HeightProbe {
    retry_limit: u32,
    active: Option<usize>,
    attempts: u32,
    retry_at: Option<f64>,
}

impl HeightProbe {
    pub fn new(retry_limit: u32) -> Self {
        Self {
            retry_limit,
            active: None,
            attempts: 0,
            retry_at: None,
        }
    }

    pub fn observe(&mut self, active: usize, measured: f32, now: f64) -> Measurement {
        if self.active != Some(active) {
            self.active = Some(active);
            self.attempts = 0;
            self.retry_at = None;
        }

        if measured > 0.0 {
            self.attempts = 0;
            self.retry_at = None;
            return Measurement::Settled(measured);
        }

        if let Some(at) = self.retry_at {
            if now < at {
                return Measurement::Waiting;
            }
        }

        if self.attempts >= self.retry_limit {
            if self.retry_at.take().is_some() {
                log::warn!(
                    "carousel: slide {} still has zero height after {} retries",
                    active,
                    self.attempts
                );
            }
            return Measurement::GaveUp;
        }

        self.attempts += 1;
        let at = now + HEIGHT_RETRY_DELAY.as_secs_f64();
        self.retry_at = Some(at);
        log::trace!(
            "carousel: slide {} measured zero height, retry {} at {:.3}s",
            active,
            self.attempts,
            at
        );
        Measurement::Retry { at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_settles_immediately() {
        let mut probe = HeightProbe::new(5);
        assert_eq!(probe.observe(0, 240.0, 0.0), Measurement::Settled(240.0));
    }

    #[test]
    fn zero_retries_after_delay() {
        let mut probe = HeightProbe::new(5);
        assert_eq!(probe.observe(0, 0.0, 1.0), Measurement::Retry { at: 1.1 });
        assert_eq!(probe.observe(0, 0.0, 1.05), Measurement::Waiting);
        assert!(matches!(probe.observe(0, 0.0, 1.1), Measurement::Retry { .. }));
        assert_eq!(probe.observe(0, 180.0, 1.2), Measurement::Settled(180.0));
    }

    #[test]
    fn gives_up_after_limit() {
        let mut probe = HeightProbe::new(2);
        assert!(matches!(probe.observe(1, 0.0, 0.0), Measurement::Retry { .. }));
        assert!(matches!(probe.observe(1, 0.0, 0.2), Measurement::Retry { .. }));
        assert_eq!(probe.observe(1, 0.0, 0.4), Measurement::GaveUp);
        assert_eq!(probe.observe(1, 0.0, 0.6), Measurement::GaveUp);
    }

    #[test]
    fn last_retry_is_awaited_before_giving_up() {
        let mut probe = HeightProbe::new(2);
        assert_eq!(probe.observe(0, 0.0, 0.0), Measurement::Retry { at: 0.1 });
        assert!(matches!(probe.observe(0, 0.0, 0.1), Measurement::Retry { .. }));
        assert_eq!(probe.observe(0, 0.0, 0.15), Measurement::Waiting);
        assert_eq!(probe.observe(0, 0.0, 0.25), Measurement::GaveUp);
    }

    #[test]
    fn new_active_index_supersedes_pending_retry() {
        let mut probe = HeightProbe::new(1);
        assert!(matches!(probe.observe(0, 0.0, 0.0), Measurement::Retry { .. }));
        assert_eq!(probe.observe(0, 0.0, 0.5), Measurement::GaveUp);

        assert!(matches!(probe.observe(1, 0.0, 0.5), Measurement::Retry { .. }));
    }
}
