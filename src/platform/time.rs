//! Frame timing

/// Turns host animation-frame timestamps (ms) into frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: f64,
    max_delta: f64,
}

impl FrameClock {
    /// Start the clock at `now`; deltas are capped at `max_delta` ms
    pub fn start(now: f64, max_delta: f64) -> Self {
        Self {
            last_tick: now,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Record `timestamp` and return the milliseconds since the previous one
    ///
    /// Clamped to `[0, max_delta]`; a long gap (e.g. a hidden tab) becomes
    /// one bounded step.
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        let dt = timestamp - self.last_tick;
        self.last_tick = timestamp;
        dt.clamp(0.0, self.max_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_returns_delta() {
        let mut clock = FrameClock::start(1000.0, 100.0);
        assert_eq!(clock.advance(1016.0), 16.0);
        assert_eq!(clock.advance(1033.0), 17.0);
    }

    #[test]
    fn test_advance_clamps_long_gaps() {
        let mut clock = FrameClock::start(0.0, 100.0);
        assert_eq!(clock.advance(5000.0), 100.0);
        // Next frame measures from the late timestamp, not the clamp
        assert_eq!(clock.advance(5016.0), 16.0);
    }

    #[test]
    fn test_advance_never_negative() {
        let mut clock = FrameClock::start(500.0, 100.0);
        assert_eq!(clock.advance(490.0), 0.0);
        assert_eq!(clock.advance(500.0), 10.0);
    }

    #[test]
    fn test_negative_cap_is_zeroed() {
        let mut clock = FrameClock::start(0.0, -5.0);
        assert_eq!(clock.advance(16.0), 0.0);
    }
}
