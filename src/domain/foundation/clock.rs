//! Wall-clock abstraction.
//!
//! Time-of-day framing depends on the local hour, so the clock is injected
//! rather than read directly.

use chrono::{DateTime, FixedOffset, Local, Utc};

use super::Timestamp;

/// Source of the current local time.
pub trait Clock: Send + Sync {
    /// Current instant in the server's local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current instant as a UTC timestamp.
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now().with_timezone(&Utc))
    }
}

/// Clock backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant. Used for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Clock frozen at the given UTC hour of 2024-01-15.
    pub fn at_hour(hour: u32) -> Self {
        let instant = DateTime::parse_from_rfc3339(&format!("2024-01-15T{:02}:30:00+00:00", hour % 24))
            .unwrap_or_else(|_| Utc::now().fixed_offset());
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn fixed_clock_reports_requested_hour() {
        for hour in [0, 5, 12, 18, 23] {
            assert_eq!(FixedClock::at_hour(hour).now().hour(), hour);
        }
    }

    #[test]
    fn fixed_clock_timestamp_is_utc_equivalent() {
        let instant = DateTime::parse_from_rfc3339("2024-01-15T09:00:00+02:00").unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.timestamp().to_rfc3339(), "2024-01-15T07:00:00+00:00");
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let before = Utc::now();
        let ts = SystemClock.timestamp();
        assert!(ts.as_datetime() >= &before);
    }
}
