use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Source of "now" for records created without an explicit timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system() -> SharedClock {
    Arc::new(SystemClock)
}

pub fn fixed(at: DateTime<Utc>) -> SharedClock {
    Arc::new(FixedClock(at))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let at = Utc.with_ymd_and_hms(2025, 9, 1, 8, 15, 0).unwrap();
        let clock = fixed(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn system_clock_reports_current_time() {
        let before = Utc::now();
        let now = system().now();
        assert!(now >= before - chrono::Duration::seconds(1));
    }
}
