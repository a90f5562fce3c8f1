//! Time-of-day buckets used for temporal framing.

use std::fmt;

/// Part of the day a message arrives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// Hours 5 through 11.
    Morning,
    /// Hours 12 through 17.
    Afternoon,
    /// Hours 18 through 4.
    Evening,
}

impl TimeOfDay {
    /// Buckets a 24-hour clock hour. Boundary hours belong to the later bucket.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
