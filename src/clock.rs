//! Frame delta timing
//!
//! The host supplies a monotonic millisecond counter; `FrameClock` turns it
//! into per-frame delta seconds for frame-independent movement.

/// Derives per-frame delta time from a host-supplied millisecond counter.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: u64,
}

impl FrameClock {
    /// Create a clock with the current counter value as the baseline.
    pub fn new(now_ms: u64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Seconds elapsed since the previous call.
    ///
    /// A counter that steps backwards yields 0.0 rather than a negative
    /// delta, so a misbehaving source can never run the simulation in
    /// reverse.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let diff = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        diff as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_seconds() {
        let mut clock = FrameClock::new(1000);
        assert!((clock.tick(1016) - 0.016).abs() < 1e-6);
        assert!((clock.tick(1116) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_non_monotonic_clamps_to_zero() {
        let mut clock = FrameClock::new(5000);
        assert_eq!(clock.tick(4000), 0.0);
        // Baseline moved to the reported time, so the next delta is sane
        assert!((clock.tick(4100) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_first_tick_after_new_is_zero() {
        let mut clock = FrameClock::new(42);
        assert_eq!(clock.tick(42), 0.0);
    }
}
