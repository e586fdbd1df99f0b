//! Clock abstraction so time-dependent rules can be evaluated at any moment

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Source of the current moment
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Wall-clock moment in the restaurant's local time zone
    fn local_now(&self) -> NaiveDateTime;

    /// Absolute moment, used for identifier generation
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one moment; the same naive moment is reported as local and UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    moment: NaiveDateTime,
}

impl FixedClock {
    pub fn new(moment: NaiveDateTime) -> Self {
        Self { moment }
    }

    /// Noon on the given calendar date, `None` for an invalid date
    pub fn on_date(year: i32, month: u32, day: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> NaiveDateTime {
        self.moment
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.moment.and_utc()
    }
}
