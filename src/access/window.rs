//! Business-hours window evaluation.
//!
//! # Rules
//! - Open Monday through Friday
//! - Open from 09:00 (inclusive) to 17:00 (exclusive), wall-clock time
//! - Everything else is closed
//!
//! Evaluation is a pure function of the instant it is given; the zone of that
//! instant decides what "09:00" means.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};

/// A fixed set of open weekdays and an open hour range `[start_hour, end_hour)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    days: Vec<Weekday>,
    start_hour: u32,
    end_hour: u32,
}

impl TimeWindow {
    /// Monday to Friday, 9 AM to 5 PM.
    pub fn business_hours() -> Self {
        Self {
            days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            start_hour: 9,
            end_hour: 17,
        }
    }

    /// Returns true if the instant falls on an open day and inside the hour range.
    pub fn contains(&self, now: &DateTime<FixedOffset>) -> bool {
        let is_working_day = self.days.contains(&now.weekday());
        let hour = now.hour();
        let is_working_hour = hour >= self.start_hour && hour < self.end_hour;
        is_working_day && is_working_hour
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::business_hours()
    }
}

/// Outcome of checking a request against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationResult {
    /// Hand the request on to routing.
    Proceed,
    /// Serve the closed notice, stamped with the evaluated instant.
    Blocked(DateTime<FixedOffset>),
}

/// Decides whether a request may reach the router.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    window: TimeWindow,
}

impl AccessGate {
    pub fn new(window: TimeWindow) -> Self {
        Self { window }
    }

    pub fn evaluate(&self, now: DateTime<FixedOffset>) -> EvaluationResult {
        if self.window.contains(&now) {
            EvaluationResult::Proceed
        } else {
            EvaluationResult::Blocked(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_open_on_weekdays_during_hours() {
        let gate = AccessGate::default();
        // 2026-10-12 is a Monday
        for day in 12..=16 {
            for hour in 9..17 {
                let now = at(&format!("2026-10-{day:02}T{hour:02}:30:00+00:00"));
                assert_eq!(gate.evaluate(now), EvaluationResult::Proceed, "{now}");
            }
        }
    }

    #[test]
    fn test_closed_on_weekends() {
        let gate = AccessGate::default();
        for now in [at("2026-10-17T12:00:00+00:00"), at("2026-10-18T14:00:00+00:00")] {
            assert_eq!(gate.evaluate(now), EvaluationResult::Blocked(now));
        }
    }

    #[test]
    fn test_closed_outside_hours() {
        let gate = AccessGate::default();
        for hour in (0..9).chain(17..24) {
            let now = at(&format!("2026-10-14T{hour:02}:00:00+00:00"));
            assert_eq!(gate.evaluate(now), EvaluationResult::Blocked(now));
        }
    }

    fn is_open(gate: &AccessGate, now: DateTime<FixedOffset>) -> bool {
        gate.evaluate(now) == EvaluationResult::Proceed
    }

    #[test]
    fn test_boundaries() {
        let gate = AccessGate::default();
        assert!(is_open(&gate, at("2026-10-14T09:00:00+00:00")));
        assert!(is_open(&gate, at("2026-10-14T16:59:59+00:00")));
        assert!(!is_open(&gate, at("2026-10-14T17:00:00+00:00")));
        assert!(!is_open(&gate, at("2026-10-14T08:59:59+00:00")));
    }

    #[test]
    fn test_wall_clock_of_the_instant_decides() {
        let gate = AccessGate::default();
        // Same instant: 08:00 UTC is 10:00 at +02:00.
        let utc = at("2026-10-14T08:00:00+00:00");
        let east = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        assert!(!is_open(&gate, utc));
        assert!(is_open(&gate, east));
    }

    #[test]
    fn test_window_invariants() {
        let window = TimeWindow::business_hours();
        assert!(window.start_hour < window.end_hour);
        assert_eq!(window.days.len(), 5);
    }
}
