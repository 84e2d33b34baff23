//! Cyclical plan resolution.
//!
//! Every calendar date maps to one slot of a fixed-length repeating cycle,
//! anchored so that the reference date is slot 0. Dates before the reference
//! walk the cycle backwards: the day before the reference is the last slot.

use crate::{Error, NutritionEntry, PlanTables, Result, WorkoutDetail, WorkoutSlot};
use chrono::{NaiveDate, NaiveDateTime};
use std::num::NonZeroUsize;

const DAYS_PER_WEEK: usize = 7;

/// Map `date` to its position in a cycle of `cycle_length` days starting at
/// `reference_date`.
///
/// The result is always in `0..cycle_length`.
pub fn resolve_cycle_index(
    date: NaiveDate,
    reference_date: NaiveDate,
    cycle_length: NonZeroUsize,
) -> usize {
    let len = cycle_length.get() as u64;
    let diff_days = (date - reference_date).num_days().unsigned_abs();
    let offset = diff_days % len;

    let index = if date >= reference_date {
        offset
    } else {
        (len - offset) % len
    };

    index as usize
}

/// Same as [`resolve_cycle_index`], truncating a timestamp to its calendar day.
pub fn resolve_cycle_index_at(
    at: NaiveDateTime,
    reference_date: NaiveDate,
    cycle_length: NonZeroUsize,
) -> usize {
    resolve_cycle_index(at.date(), reference_date, cycle_length)
}

/// The workout and meals resolved for one calendar date
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyPlan<'a> {
    pub date: NaiveDate,
    pub cycle_index: usize,
    pub workout: &'a WorkoutSlot,
    pub nutrition: &'a NutritionEntry,
}

impl<'a> DailyPlan<'a> {
    /// Meal labels for the day, in serving order
    pub fn meals(&self) -> &'a [String] {
        self.nutrition
    }
}

/// Resolves dates to daily plans over immutable cycle tables.
///
/// Tables are validated once in [`CycleResolver::new`]; after that every
/// lookup is infallible.
#[derive(Clone, Debug)]
pub struct CycleResolver {
    reference_date: NaiveDate,
    cycle_length: NonZeroUsize,
    tables: PlanTables,
}

impl CycleResolver {
    /// Build a resolver, rejecting tables that do not have exactly
    /// `cycle_length` entries.
    pub fn new(reference_date: NaiveDate, cycle_length: usize, tables: PlanTables) -> Result<Self> {
        let cycle_length = NonZeroUsize::new(cycle_length)
            .ok_or_else(|| Error::PlanTable("cycle length must be positive".into()))?;

        if tables.workout_cycle.is_empty() || tables.nutrition_cycle.is_empty() {
            return Err(Error::PlanTable("cycle tables must not be empty".into()));
        }

        if tables.workout_cycle.len() != cycle_length.get() {
            return Err(Error::PlanTable(format!(
                "workout cycle has {} entries, expected {}",
                tables.workout_cycle.len(),
                cycle_length
            )));
        }

        if tables.nutrition_cycle.len() != cycle_length.get() {
            return Err(Error::PlanTable(format!(
                "nutrition cycle has {} entries, expected {}",
                tables.nutrition_cycle.len(),
                cycle_length
            )));
        }

        tracing::debug!(
            "Cycle resolver ready: reference {}, length {}",
            reference_date,
            cycle_length
        );

        Ok(Self {
            reference_date,
            cycle_length,
            tables,
        })
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn cycle_length(&self) -> NonZeroUsize {
        self.cycle_length
    }

    pub fn tables(&self) -> &PlanTables {
        &self.tables
    }

    /// Cycle position of `date` against this resolver's reference date
    pub fn index_for(&self, date: NaiveDate) -> usize {
        resolve_cycle_index(date, self.reference_date, self.cycle_length)
    }

    /// Resolve the plan for a calendar date
    pub fn plan_for(&self, date: NaiveDate) -> DailyPlan<'_> {
        let cycle_index = self.index_for(date);
        tracing::debug!("Resolved {} to cycle index {}", date, cycle_index);

        DailyPlan {
            date,
            cycle_index,
            workout: &self.tables.workout_cycle[cycle_index],
            nutrition: &self.tables.nutrition_cycle[cycle_index],
        }
    }

    /// Plans for every day from `start` to `end`, both inclusive.
    ///
    /// Returns an empty list when `end` is before `start`.
    pub fn plans_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<DailyPlan<'_>> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| self.plan_for(day))
            .collect()
    }

    /// Seven consecutive plans starting at `date`
    pub fn week_of(&self, date: NaiveDate) -> Vec<DailyPlan<'_>> {
        date.iter_days()
            .take(DAYS_PER_WEEK)
            .map(|day| self.plan_for(day))
            .collect()
    }

    /// Exercise sheet for a workout slot, if one is defined for its id
    pub fn workout_detail(&self, slot: &WorkoutSlot) -> Option<&WorkoutDetail> {
        self.tables
            .workout_details
            .iter()
            .find(|detail| detail.id == slot.id)
    }
}
