//! Month calendar view over the cycle resolver.

use crate::{CycleResolver, DailyPlan, Error, Result};
use chrono::{Datelike, NaiveDate};

/// One calendar month with the plan of each day
#[derive(Clone, Debug)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 in a Sunday-first week
    pub leading_blanks: usize,
    pub days: Vec<DailyPlan<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Build the grid for `year`/`month` (1-12)
    pub fn new(resolver: &'a CycleResolver, year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::InvalidInput(format!("no such month: {}-{}", year, month)))?;
        let last = last_day_of_month(first)
            .ok_or_else(|| Error::InvalidInput(format!("month out of range: {}-{}", year, month)))?;

        Ok(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday() as usize,
            days: resolver.plans_between(first, last),
        })
    }

    /// Rows of seven cells, Sunday first; `None` pads before day 1 and after
    /// the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DailyPlan<'a>>>> {
        let mut cells: Vec<Option<&DailyPlan<'a>>> = vec![None; self.leading_blanks];
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells.chunks(7).map(|row| row.to_vec()).collect()
    }

    /// e.g. "January 2024"
    pub fn title(&self) -> String {
        self.days
            .first()
            .map(|plan| plan.date.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// One-character calendar marker per distinct workout tag, in cycle order.
///
/// A tag takes the first of its letters or digits (uppercased) not already
/// claimed by an earlier tag, then falls back to `0`-`9`, then `?`.
pub fn tag_markers(resolver: &CycleResolver) -> Vec<(&str, char)> {
    let mut markers: Vec<(&str, char)> = Vec::new();

    for slot in &resolver.tables().workout_cycle {
        let tag = slot.tag.as_str();
        if markers.iter().any(|(seen, _)| *seen == tag) {
            continue;
        }

        let marker = tag
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_uppercase)
            .chain('0'..='9')
            .find(|c| markers.iter().all(|(_, used)| used != c))
            .unwrap_or('?');
        markers.push((tag, marker));
    }

    markers
}

/// Long form date, e.g. "Monday, January 1, 2024"
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
