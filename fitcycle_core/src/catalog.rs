//! Built-in plan tables, recipes and reference lists.
//!
//! The defaults describe a 7-day cycle starting on a strength day. Recipes
//! are indexed by [`recipe_key`] of their name so lookups from meal labels
//! always agree with how the keys were authored.

use crate::keys::{recipe_key, task_key};
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default tables - built once and reused across all operations
static DEFAULT_TABLES: Lazy<PlanTables> = Lazy::new(build_default_tables);

static DEFAULT_RECIPE_BOOK: Lazy<RecipeBook> =
    Lazy::new(|| RecipeBook::from_recipes(default_recipes()));

/// Get a reference to the cached default plan tables
pub fn get_default_tables() -> &'static PlanTables {
    &DEFAULT_TABLES
}

/// Get a reference to the cached default recipe book
pub fn get_default_recipe_book() -> &'static RecipeBook {
    &DEFAULT_RECIPE_BOOK
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn slot(id: &str, name: &str, tag: &str, color: &str) -> WorkoutSlot {
    WorkoutSlot {
        id: id.into(),
        name: name.into(),
        tag: tag.into(),
        color: color.into(),
    }
}

/// Builds the default workout and nutrition cycles
///
/// **Note**: For production use, prefer `get_default_tables()` which returns a
/// cached reference.
pub fn build_default_tables() -> PlanTables {
    // ========================================================================
    // Workout cycle (7-day rotation)
    // ========================================================================

    let workout_cycle = vec![
        slot("strength", "Strength Training", "Strength", "blue"),
        slot("cardio", "Cardio Session", "Cardio", "green"),
        slot("rest", "Active Recovery", "Rest", "purple"),
        slot("strength", "Strength Training", "Strength", "blue"),
        slot("cardio", "Cardio Session", "Cardio", "green"),
        slot("rest", "Active Recovery", "Rest", "purple"),
        slot("rest", "Rest Day", "Rest", "gray"),
    ];

    // ========================================================================
    // Nutrition cycle (7-day rotation)
    // ========================================================================

    let nutrition_cycle = vec![
        strings(&[
            "Breakfast: Protein Oatmeal",
            "Lunch: Grilled Chicken Salad",
            "Dinner: Baked Salmon with Vegetables",
        ]),
        strings(&[
            "Breakfast: Greek Yogurt with Berries",
            "Lunch: Turkey Wrap",
            "Dinner: Lean Beef Stir-Fry",
        ]),
        strings(&[
            "Breakfast: Protein Smoothie",
            "Lunch: Quinoa Bowl",
            "Dinner: Grilled Fish with Sweet Potato",
        ]),
        strings(&[
            "Breakfast: Egg White Omelette",
            "Lunch: Tuna Salad",
            "Dinner: Chicken Stir-Fry",
        ]),
        strings(&[
            "Breakfast: Protein Pancakes",
            "Lunch: Grilled Chicken Wrap",
            "Dinner: Baked Cod with Vegetables",
        ]),
        strings(&[
            "Breakfast: Protein Shake",
            "Lunch: Turkey and Avocado Salad",
            "Dinner: Lean Beef with Rice",
        ]),
        strings(&[
            "Breakfast: Greek Yogurt with Granola",
            "Lunch: Grilled Chicken Salad",
            "Dinner: Baked Salmon with Vegetables",
        ]),
    ];

    // ========================================================================
    // Workout details
    // ========================================================================

    let workout_details = vec![
        WorkoutDetail {
            id: "strength".into(),
            name: "Strength Training".into(),
            exercises: strings(&[
                "Squats: 3 sets x 12 reps",
                "Deadlifts: 3 sets x 10 reps",
                "Bench Press: 3 sets x 10 reps",
                "Pull-ups: 3 sets x 8 reps",
                "Shoulder Press: 3 sets x 12 reps",
            ]),
            instructions: "Focus on proper form and controlled movements. \
                           Rest 60-90 seconds between sets."
                .into(),
        },
        WorkoutDetail {
            id: "cardio".into(),
            name: "Cardio Session".into(),
            exercises: strings(&[
                "Warm-up: 5 minutes light jogging",
                "High-intensity intervals: 30 seconds sprint, 90 seconds walk (repeat 8 times)",
                "Cool-down: 5 minutes light jogging",
            ]),
            instructions: "Maintain proper breathing throughout. \
                           Adjust intensity based on your fitness level."
                .into(),
        },
        WorkoutDetail {
            id: "rest".into(),
            name: "Active Recovery".into(),
            exercises: strings(&[
                "Light stretching: 10-15 minutes",
                "Foam rolling: 10 minutes",
                "Light walking: 20-30 minutes",
            ]),
            instructions: "Focus on recovery and mobility. Stay active but keep intensity low."
                .into(),
        },
    ];

    PlanTables {
        workout_cycle,
        nutrition_cycle,
        workout_details,
    }
}

fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Protein Oatmeal".into(),
            ingredients: strings(&[
                "1 cup rolled oats",
                "1 scoop protein powder",
                "1 cup almond milk",
                "1 tablespoon honey",
                "1/4 cup mixed berries",
            ]),
            instructions: "Cook oats with almond milk. Stir in protein powder and honey. \
                           Top with berries."
                .into(),
        },
        Recipe {
            name: "Grilled Chicken Salad".into(),
            ingredients: strings(&[
                "6 oz chicken breast",
                "2 cups mixed greens",
                "1/4 cup cherry tomatoes",
                "1/4 cucumber",
                "2 tablespoons olive oil",
                "1 tablespoon balsamic vinegar",
            ]),
            instructions: "Grill chicken breast. Chop vegetables. \
                           Combine all ingredients and toss with dressing."
                .into(),
        },
        Recipe {
            name: "Baked Salmon with Vegetables".into(),
            ingredients: strings(&[
                "6 oz salmon fillet",
                "1 cup broccoli florets",
                "1 bell pepper, sliced",
                "1 tablespoon olive oil",
                "1 lemon",
            ]),
            instructions: "Bake salmon and vegetables at 200°C for 15-18 minutes. \
                           Finish with lemon juice."
                .into(),
        },
        Recipe {
            name: "Turkey Wrap".into(),
            ingredients: strings(&[
                "1 whole wheat tortilla",
                "4 oz sliced turkey breast",
                "1/4 avocado",
                "1 handful spinach",
                "1 tablespoon hummus",
            ]),
            instructions: "Spread hummus on the tortilla, layer turkey, avocado and spinach, \
                           then roll tightly."
                .into(),
        },
        Recipe {
            name: "Quinoa Bowl".into(),
            ingredients: strings(&[
                "1 cup cooked quinoa",
                "1/2 cup black beans",
                "1/2 cup roasted sweet potato",
                "1/4 avocado",
                "1 tablespoon tahini",
            ]),
            instructions: "Layer quinoa, beans and sweet potato in a bowl. \
                           Top with avocado and drizzle with tahini."
                .into(),
        },
        Recipe {
            name: "Protein Smoothie".into(),
            ingredients: strings(&[
                "1 scoop protein powder",
                "1 banana",
                "1 cup almond milk",
                "1 tablespoon peanut butter",
            ]),
            instructions: "Blend all ingredients with ice until smooth.".into(),
        },
    ]
}

/// Meal ideas grouped by diet style
pub fn default_meal_ideas() -> Vec<MealIdeaGroup> {
    vec![
        MealIdeaGroup {
            name: "High Protein".into(),
            items: strings(&[
                "Grilled Chicken Breast",
                "Greek Yogurt with Berries",
                "Protein Smoothie",
                "Egg White Omelette",
                "Tuna Salad",
            ]),
        },
        MealIdeaGroup {
            name: "Low Carb".into(),
            items: strings(&[
                "Cauliflower Rice Bowl",
                "Zucchini Noodles with Pesto",
                "Lettuce Wraps",
                "Avocado Salad",
                "Grilled Fish with Vegetables",
            ]),
        },
        MealIdeaGroup {
            name: "Vegetarian".into(),
            items: strings(&[
                "Quinoa Buddha Bowl",
                "Lentil Soup",
                "Tofu Stir-Fry",
                "Chickpea Salad",
                "Vegetable Curry",
            ]),
        },
    ]
}

/// Meal options grouped by time of day
pub fn default_meal_plans() -> Vec<MealPlanGroup> {
    vec![
        MealPlanGroup {
            title: "Breakfast Options".into(),
            meals: strings(&["Oatmeal with Berries", "Greek Yogurt with Honey", "Avocado Toast"]),
        },
        MealPlanGroup {
            title: "Lunch Options".into(),
            meals: strings(&["Grilled Chicken Salad", "Quinoa Bowl", "Turkey Wrap"]),
        },
        MealPlanGroup {
            title: "Dinner Options".into(),
            meals: strings(&[
                "Salmon with Vegetables",
                "Vegetable Stir Fry",
                "Lean Beef with Sweet Potato",
            ]),
        },
        MealPlanGroup {
            title: "Snack Options".into(),
            meals: strings(&["Protein Smoothie", "Mixed Nuts", "Apple with Peanut Butter"]),
        },
    ]
}

/// Fixed daily reminders, in time order
pub fn default_reminders() -> Vec<Reminder> {
    [
        (7, 0, "Morning workout time!"),
        (12, 0, "Time for lunch and meal prep"),
        (17, 0, "Evening workout session"),
        (20, 0, "Prepare for tomorrow"),
    ]
    .into_iter()
    .map(|(hour, minute, message)| Reminder {
        hour,
        minute,
        message: message.into(),
    })
    .collect()
}

/// Affirmations, one per weekday starting on Sunday
pub fn default_affirmations() -> Vec<String> {
    strings(&[
        "Every step forward is progress.",
        "Your body is capable of amazing things.",
        "Consistency is key to success.",
        "You are stronger than you think.",
        "Small changes lead to big results.",
        "Your health is an investment, not an expense.",
        "You've got this!",
    ])
}

// ============================================================================
// Recipe Book
// ============================================================================

/// Recipes indexed by the recipe key of their name
#[derive(Clone, Debug, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// Index recipes by derived key. Later recipes replace earlier ones with
    /// the same key; recipes whose name derives to an empty key are skipped.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut book = HashMap::new();

        for recipe in recipes {
            let key = recipe_key(recipe.name.as_str());
            if key.is_empty() {
                tracing::warn!("Skipping recipe with unusable name {:?}", recipe.name);
                continue;
            }
            if let Some(previous) = book.insert(key.clone(), recipe) {
                tracing::warn!("Recipe {:?} replaced under key {}", previous.name, key);
            }
        }

        Self { recipes: book }
    }

    /// Find the recipe for a meal label such as `"Lunch: Turkey Wrap"`
    pub fn lookup(&self, meal_label: &str) -> Option<&Recipe> {
        let key = recipe_key(meal_label);
        if key.is_empty() {
            return None;
        }
        self.recipes.get(&key)
    }

    pub fn get(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl PlanTables {
    /// Validate the tables for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    /// Length checks against the cycle length happen in `CycleResolver::new`.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (index, slot) in self.workout_cycle.iter().enumerate() {
            if slot.id.is_empty() {
                errors.push(format!("Workout slot {} has empty ID", index));
            }
            if slot.name.is_empty() {
                errors.push(format!("Workout slot {} has empty name", index));
            }
        }

        for (index, meals) in self.nutrition_cycle.iter().enumerate() {
            if meals.is_empty() {
                errors.push(format!("Nutrition entry {} has no meals", index));
            }
            for meal in meals {
                if task_key(meal.as_str()).is_empty() {
                    tracing::warn!(
                        "Meal {:?} in nutrition entry {} has no task key, completion will not be tracked",
                        meal,
                        index
                    );
                }
            }
        }

        for detail in &self.workout_details {
            if !self.workout_cycle.iter().any(|s| s.id == detail.id) {
                errors.push(format!(
                    "Workout detail {} does not match any workout slot",
                    detail.id
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_load() {
        let tables = build_default_tables();
        assert_eq!(tables.workout_cycle.len(), 7);
        assert_eq!(tables.nutrition_cycle.len(), 7);
        assert_eq!(tables.workout_details.len(), 3);
    }

    #[test]
    fn test_default_tables_validate() {
        let errors = get_default_tables().validate();
        assert!(
            errors.is_empty(),
            "Default tables have validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_workout_slot_has_details() {
        let tables = get_default_tables();
        for slot in &tables.workout_cycle {
            assert!(
                tables.workout_details.iter().any(|d| d.id == slot.id),
                "Workout {} has no details",
                slot.id
            );
        }
    }

    #[test]
    fn test_validate_accepts_untrackable_meal() {
        let mut tables = build_default_tables();
        tables.nutrition_cycle[0].push("Snack: !!!".into());
        tables.nutrition_cycle[1][1] = "Lunch: 寿司".into();

        assert!(tables.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_empty_nutrition_entry() {
        let mut tables = build_default_tables();
        tables.nutrition_cycle[2].clear();

        let errors = tables.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Nutrition entry 2 has no meals"));
    }

    #[test]
    fn test_recipe_lookup_from_meal_label() {
        let book = get_default_recipe_book();

        let recipe = book.lookup("Breakfast: Protein Oatmeal").unwrap();
        assert_eq!(recipe.name, "Protein Oatmeal");

        assert!(book.lookup("Lunch: Quinoa Bowl").is_some());
        assert!(book.get("QuinoaBowl").is_some());
    }

    #[test]
    fn test_recipe_lookup_misses() {
        let book = get_default_recipe_book();
        assert!(book.lookup("Lunch: Tuna Salad").is_none());
        assert!(book.lookup("").is_none());
        assert!(book.lookup("Dinner:").is_none());
    }

    #[test]
    fn test_recipe_book_replaces_duplicate_keys() {
        let first = Recipe {
            name: "Turkey Wrap".into(),
            ingredients: vec![],
            instructions: "first".into(),
        };
        let second = Recipe {
            name: "Turkey-Wrap!".into(),
            ingredients: vec![],
            instructions: "second".into(),
        };

        let book = RecipeBook::from_recipes(vec![first, second]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("TurkeyWrap").unwrap().instructions, "second");
    }

    #[test]
    fn test_reference_lists() {
        assert_eq!(default_affirmations().len(), 7);
        assert_eq!(default_meal_plans().len(), 4);
        assert_eq!(default_meal_ideas().len(), 3);

        let reminders = default_reminders();
        assert!(reminders
            .windows(2)
            .all(|w| (w[0].hour, w[0].minute) < (w[1].hour, w[1].minute)));
    }
}
