//! Wall clock abstraction.
//!
//! The business-hours check reads "now" through the [`Clock`] trait so the
//! zone that governs "9 AM" is an explicit setting, and so tests can pin the
//! instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current instant, expressed in the zone the window is evaluated in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Zone used to interpret the business-hours window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneSetting {
    /// Whatever the host reports as its local zone.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

/// Error returned when a zone string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timezone '{0}': expected \"local\", \"utc\" or an offset like \"+02:00\"")]
pub struct InvalidZone(pub String);

impl FromStr for ZoneSetting {
    type Err = InvalidZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(ZoneSetting::Local),
            "utc" | "z" => return Ok(ZoneSetting::Utc),
            _ => {}
        }

        parse_offset(trimmed)
            .map(ZoneSetting::Fixed)
            .ok_or_else(|| InvalidZone(s.to_string()))
    }
}

/// Parses `+HH:MM` / `-HH:MM` (the colon is optional).
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl TryFrom<String> for ZoneSetting {
    type Error = InvalidZone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZoneSetting> for String {
    fn from(zone: ZoneSetting) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSetting::Local => write!(f, "local"),
            ZoneSetting::Utc => write!(f, "utc"),
            ZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Reads the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: ZoneSetting,
}

impl SystemClock {
    pub fn new(zone: ZoneSetting) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.zone {
            ZoneSetting::Local => Local::now().fixed_offset(),
            ZoneSetting::Utc => Utc::now().fixed_offset(),
            ZoneSetting::Fixed(offset) => Utc::now().with_timezone(&offset),
        }
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
