//! Daily reminders and the affirmation of the day.

use crate::Reminder;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Reminders still ahead of `now` on the same day
pub fn upcoming_reminders(reminders: &[Reminder], now: NaiveTime) -> Vec<&Reminder> {
    let (hour, minute) = (now.hour(), now.minute());
    reminders
        .iter()
        .filter(|r| r.hour > hour || (r.hour == hour && r.minute > minute))
        .collect()
}

/// Affirmation for a date, rotating by weekday (Sunday first)
pub fn affirmation_for(affirmations: &[String], date: NaiveDate) -> Option<&str> {
    if affirmations.is_empty() {
        return None;
    }
    let index = date.weekday().num_days_from_sunday() as usize % affirmations.len();
    Some(affirmations[index].as_str())
}
