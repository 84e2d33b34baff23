#![forbid(unsafe_code)]

//! Core domain model and plan logic for fitcycle.
//!
//! This crate provides:
//! - Cycle resolution (calendar date → workout/nutrition slot)
//! - Key derivation for meal labels (task keys, recipe keys)
//! - Built-in plan tables and recipe book
//! - Task completion log with file persistence
//! - BMI / calorie calculators and weight goals

pub mod types;
pub mod error;
pub mod keys;
pub mod cycle;
pub mod catalog;
pub mod calendar;
pub mod config;
pub mod logging;
pub mod task_log;
pub mod calculators;
pub mod goals;
pub mod schedule;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use keys::{recipe_key, task_key};
pub use cycle::{resolve_cycle_index, resolve_cycle_index_at, CycleResolver, DailyPlan};
pub use catalog::{build_default_tables, get_default_tables, RecipeBook};
pub use config::Config;
pub use task_log::{DayProgress, TaskLog};
pub use goals::{Goal, GoalStatus, GoalType};
