/// Fixed-interval frame gating
///
/// The host polls at display refresh rate (~60 Hz); `FrameClock` turns that
/// into a fixed 20 Hz stepping signal so animation speed does not depend on
/// how often the host calls in.
use std::time::Duration;

/// Time each sprite frame stays on screen (50ms, 20 frames per second)
pub const FRAME_DURATION: Duration = Duration::from_millis(50);

/// Monotonic nanosecond counter supplied by the host driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch, also used as the "never advanced" sentinel
    pub const ZERO: Timestamp = Timestamp(0);

    #[cfg(test)]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future
    pub fn saturating_duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }

    /// A timestamp `offset` later than this one, saturating at the end of time
    pub fn after(&self, offset: Duration) -> Timestamp {
        let nanos = u64::try_from(offset.as_nanos()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(nanos))
    }
}

/// Gate that accepts at most one advance per `frame_duration`
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time of the last accepted advance
    last_frame_time: Timestamp,
    /// Minimum spacing between accepted advances
    frame_duration: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_DURATION)
    }
}

impl FrameClock {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            last_frame_time: Timestamp::ZERO,
            frame_duration,
        }
    }

    /// Try to advance at `now`
    ///
    /// Returns `true` and records `now` only when at least one frame duration
    /// has passed since the last accepted advance.
    pub fn advance(&mut self, now: Timestamp) -> bool {
        if now.saturating_duration_since(self.last_frame_time) < self.frame_duration {
            return false;
        }

        self.last_frame_time = now;
        true
    }

    /// Forget the last accepted advance
    pub fn rewind(&mut self) {
        self.last_frame_time = Timestamp::ZERO;
    }

    #[cfg(test)]
    pub fn last_frame_time(&self) -> Timestamp {
        self.last_frame_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_is_50ms() {
        assert_eq!(FRAME_DURATION.as_nanos(), 50_000_000);
    }

    #[test]
    fn test_first_advance_needs_one_frame_from_epoch() {
        let mut clock = FrameClock::default();
        assert!(!clock.advance(Timestamp::from_millis(49)));
        assert_eq!(clock.last_frame_time(), Timestamp::ZERO);

        assert!(clock.advance(Timestamp::from_millis(50)));
        assert_eq!(clock.last_frame_time(), Timestamp::from_millis(50));
    }

    #[test]
    fn test_no_double_advance_within_window() {
        let mut clock = FrameClock::default();
        let start = Timestamp::from_millis(1_000);
        assert!(clock.advance(start));

        // ~60 Hz polling inside one 50ms window
        for ms in [16, 33, 49] {
            assert!(!clock.advance(start.after(Duration::from_millis(ms))));
        }
        assert_eq!(clock.last_frame_time(), start);

        assert!(clock.advance(start.after(Duration::from_millis(50))));
    }

    #[test]
    fn test_window_is_measured_from_accepted_advance() {
        let mut clock = FrameClock::default();
        assert!(clock.advance(Timestamp::from_millis(100)));
        assert!(!clock.advance(Timestamp::from_millis(140)));
        // Rejected poll at 140 must not move the window
        assert!(clock.advance(Timestamp::from_millis(150)));
    }

    #[test]
    fn test_time_going_backwards_is_rejected() {
        let mut clock = FrameClock::default();
        assert!(clock.advance(Timestamp::from_millis(500)));
        assert!(!clock.advance(Timestamp::from_millis(100)));
        assert_eq!(clock.last_frame_time(), Timestamp::from_millis(500));
    }

    #[test]
    fn test_rewind_resets_to_epoch() {
        let mut clock = FrameClock::default();
        assert!(clock.advance(Timestamp::from_millis(500)));
        clock.rewind();
        assert_eq!(clock.last_frame_time(), Timestamp::ZERO);
        // Any time at least one frame past the epoch is accepted again
        assert!(clock.advance(Timestamp::from_millis(510)));
    }

    #[test]
    fn test_timestamp_arithmetic() {
        let ts = Timestamp::ZERO.after(Duration::from_millis(3));
        assert_eq!(ts, Timestamp::from_millis(3));
        assert_eq!(
            Timestamp::from_millis(10).saturating_duration_since(Timestamp::from_millis(25)),
            Duration::ZERO
        );
        assert_eq!(
            Timestamp::from_millis(25).saturating_duration_since(Timestamp::from_millis(10)),
            Duration::from_millis(15)
        );
    }

    #[test]
    fn test_after_saturates() {
        let end = Timestamp::ZERO.after(Duration::MAX);
        assert_eq!(end.after(Duration::from_millis(1)), end);
        assert!(end > Timestamp::from_millis(u64::MAX / 1_000_000));
    }
}
