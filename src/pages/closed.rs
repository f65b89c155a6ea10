//! Notice served while the site is outside business hours.
//!
//! This page does not use the shared layout: no navigation, no footer.

use chrono::{DateTime, FixedOffset};

use crate::pages::document::{BodyRegion, Fragment, Head, HtmlDocument};

pub const CLOSED_TITLE: &str = "Outside Working Hours";

/// Formats an instant the way an en-US locale string reads,
/// e.g. `10/17/2026, 12:00:00 PM`.
pub fn locale_timestamp(now: &DateTime<FixedOffset>) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub fn render(now: DateTime<FixedOffset>) -> HtmlDocument {
    let message = format!(
        r#"    <div class="outside-hours-message">
      <h1>🕐 We're Currently Closed</h1>
      <p>Our web application is only available during working hours:</p>
      <div class="working-hours">
        <strong>Monday to Friday</strong><br>
        <span>9:00 AM - 5:00 PM</span>
      </div>
      <p>Please visit us again during our operating hours. Thank you for your understanding!</p>
      <div class="current-time">
        Current time: {}
      </div>
    </div>"#,
        locale_timestamp(&now)
    );

    HtmlDocument::new(
        Head::new(CLOSED_TITLE),
        vec![BodyRegion::Container(Fragment::generated(message))],
    )
}
