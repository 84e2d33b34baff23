//! Weight goals and progress tracking.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeightLoss,
    MuscleGain,
}

impl FromStr for GoalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weight_loss" | "lose" => Ok(GoalType::WeightLoss),
            "muscle_gain" | "gain" => Ok(GoalType::MuscleGain),
            other => Err(Error::InvalidInput(format!("unknown goal type: {}", other))),
        }
    }
}

/// A target body weight to reach by a date
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub goal_type: GoalType,
    pub start_weight_kg: f64,
    pub target_weight_kg: f64,
    pub target_date: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalStatus {
    /// The target date has passed
    Ended,
    Achieved,
    DaysRemaining(i64),
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Ended => f.write_str("Goal period ended"),
            GoalStatus::Achieved => f.write_str("Goal achieved!"),
            GoalStatus::DaysRemaining(days) => write!(f, "{} days remaining", days),
        }
    }
}

impl Goal {
    /// Create a goal, checking the target lies in the goal's direction
    pub fn new(
        goal_type: GoalType,
        start_weight_kg: f64,
        target_weight_kg: f64,
        target_date: NaiveDate,
    ) -> Result<Self> {
        for (value, what) in [(start_weight_kg, "Start weight"), (target_weight_kg, "Target weight")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidInput(format!("{} must be a positive number", what)));
            }
        }

        let consistent = match goal_type {
            GoalType::WeightLoss => target_weight_kg < start_weight_kg,
            GoalType::MuscleGain => target_weight_kg > start_weight_kg,
        };
        if !consistent {
            return Err(Error::InvalidInput(format!(
                "target weight {} kg does not match a {:?} goal from {} kg",
                target_weight_kg, goal_type, start_weight_kg
            )));
        }

        Ok(Self {
            goal_type,
            start_weight_kg,
            target_weight_kg,
            target_date,
        })
    }

    /// Percentage of the planned change achieved, clamped to 0..=100
    pub fn progress(&self, current_weight_kg: f64) -> f64 {
        let (span, achieved) = match self.goal_type {
            GoalType::WeightLoss => (
                self.start_weight_kg - self.target_weight_kg,
                self.start_weight_kg - current_weight_kg,
            ),
            GoalType::MuscleGain => (
                self.target_weight_kg - self.start_weight_kg,
                current_weight_kg - self.start_weight_kg,
            ),
        };

        if span <= 0.0 {
            return if achieved >= span { 100.0 } else { 0.0 };
        }

        (achieved / span * 100.0).clamp(0.0, 100.0)
    }

    /// Whole days from `today` until the target date; negative once passed
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    pub fn status(&self, current_weight_kg: f64, today: NaiveDate) -> GoalStatus {
        let days_left = self.days_left(today);
        if days_left < 0 {
            GoalStatus::Ended
        } else if self.progress(current_weight_kg) >= 100.0 {
            GoalStatus::Achieved
        } else {
            GoalStatus::DaysRemaining(days_left)
        }
    }
}
