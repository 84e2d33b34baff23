//! Core domain types for fitcycle.
//!
//! This module defines the static plan data the resolver works over:
//! - Workout slots and their detail sheets
//! - Nutrition entries (ordered meal labels)
//! - Recipes, meal ideas and meal plan groups
//! - Daily reminders

use serde::{Deserialize, Serialize};

// ============================================================================
// Plan Types
// ============================================================================

/// One position in the workout cycle (e.g., "Strength Training")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSlot {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub color: String,
}

/// Ordered meal labels for one day, e.g. `"Breakfast: Protein Oatmeal"`
pub type NutritionEntry = Vec<String>;

/// Exercises and instructions for a workout, joined to a slot by `id`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDetail {
    pub id: String,
    pub name: String,
    pub exercises: Vec<String>,
    pub instructions: String,
}

/// The static tables a resolver is built from
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanTables {
    pub workout_cycle: Vec<WorkoutSlot>,
    pub nutrition_cycle: Vec<NutritionEntry>,
    #[serde(default)]
    pub workout_details: Vec<WorkoutDetail>,
}

// ============================================================================
// Nutrition Reference Types
// ============================================================================

/// A recipe, looked up by the recipe key of its name
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Meal ideas grouped by diet style (e.g., "High Protein")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MealIdeaGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Meal options grouped by time of day (e.g., "Lunch Options")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MealPlanGroup {
    pub title: String,
    pub meals: Vec<String>,
}

// ============================================================================
// Schedule Types
// ============================================================================

/// A fixed time-of-day reminder
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub hour: u32,
    pub minute: u32,
    pub message: String,
}
