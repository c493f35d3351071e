use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

/// Default length of one simulation tick (30 ticks per second).
pub const DEFAULT_TICK: Duration = Duration::from_micros(33_333);

/// Simulation time as elapsed duration since the simulation started.
///
/// A plain `Duration` wrapper. Ordering is chronological; subtraction
/// saturates at zero so cooldown checks never underflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimTime(Duration);

impl SimTime {
    pub const ZERO: SimTime = SimTime(Duration::ZERO);

    pub fn from_duration(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    pub fn from_secs_f32(secs: f32) -> Self {
        Self(Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }

    pub fn as_secs_f32(self) -> f32 {
        self.0.as_secs_f32()
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn since(self, earlier: SimTime) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    /// True once at least `interval` has passed since `last`.
    pub fn has_elapsed(self, last: SimTime, interval: Duration) -> bool {
        self.since(last) >= interval
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: Duration) -> SimTime {
        SimTime(self.0.saturating_add(rhs))
    }
}

impl Sub for SimTime {
    type Output = Duration;

    fn sub(self, rhs: SimTime) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.0.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_saturates() {
        let early = SimTime::from_secs_f32(1.0);
        let late = SimTime::from_secs_f32(3.0);
        assert_eq!(late.since(early), Duration::from_secs(2));
        assert_eq!(early.since(late), Duration::ZERO);
    }

    #[test]
    fn has_elapsed_is_inclusive() {
        let last = SimTime::from_duration(Duration::from_secs(10));
        let now = last + Duration::from_secs(3);
        assert!(now.has_elapsed(last, Duration::from_secs(3)));
        assert!(!now.has_elapsed(last, Duration::from_millis(3001)));
    }

    #[test]
    fn ordering_is_chronological() {
        let a = SimTime::from_duration(Duration::from_millis(100));
        let b = a + Duration::from_millis(1);
        assert!(a < b);
        assert_eq!(b - a, Duration::from_millis(1));
    }

    #[test]
    fn from_secs_saturates_out_of_range_input() {
        assert_eq!(SimTime::from_secs_f32(f32::MAX).as_duration(), Duration::MAX);
        assert_eq!(SimTime::from_secs_f32(f32::INFINITY).as_duration(), Duration::MAX);
        assert_eq!(SimTime::from_secs_f32(-4.0), SimTime::ZERO);
    }

    #[test]
    fn display_shows_seconds() {
        let t = SimTime::from_duration(Duration::from_millis(1500));
        assert_eq!(t.to_string(), "t=1.500s");
    }
}
