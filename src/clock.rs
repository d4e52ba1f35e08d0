use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Every time computation in the crate happens in the salon's local zone.
pub const TIMEZONE: Tz = chrono_tz::Europe::Madrid;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// Wall clock in Europe/Madrid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&TIMEZONE)
    }
}

/// Clock pinned to a single instant, used by tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&TIMEZONE),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant
    }
}
