use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use fitcycle_core::calculators::{self, NutritionInput};
use fitcycle_core::calendar::{format_full_date, tag_markers, MonthGrid};
use fitcycle_core::catalog::{
    default_affirmations, default_meal_ideas, default_meal_plans, default_reminders,
    get_default_recipe_book,
};
use fitcycle_core::schedule::{affirmation_for, upcoming_reminders};
use fitcycle_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitcycle")]
#[command(about = "Cyclical workout and nutrition planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's plan with reminders (default)
    Today,

    /// Show the plan for a date
    Plan {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show seven days of plans starting at a date
    Week {
        /// First day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show a month calendar with workout tags
    Calendar {
        #[arg(long)]
        year: Option<i32>,

        /// Month number (1-12)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Toggle completion of a meal, e.g. "Lunch: Turkey Wrap"
    Done {
        label: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the recipe for a meal label
    Recipe { label: String },

    /// List meal options and meal ideas
    Meals,

    /// Body mass index
    Bmi {
        /// Weight in kg (lbs with --imperial)
        #[arg(long)]
        weight: f64,

        /// Height in cm (feet with --imperial)
        #[arg(long)]
        height: f64,

        /// Additional inches (with --imperial)
        #[arg(long, default_value_t = 0.0)]
        inches: f64,

        #[arg(long)]
        imperial: bool,
    },

    /// Daily calorie and macro targets
    Calories {
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long)]
        sex: String,

        /// Weight in kg (lbs with --imperial)
        #[arg(long)]
        weight: f64,

        /// Height in cm (feet with --imperial)
        #[arg(long)]
        height: f64,

        /// Additional inches (with --imperial)
        #[arg(long, default_value_t = 0.0)]
        inches: f64,

        #[arg(long)]
        imperial: bool,

        /// sedentary, lightly_active, moderately_active, very_active, extra_active
        #[arg(long, default_value = "moderately_active")]
        activity: String,

        /// maintain, lose_<kg per week> or gain_<kg per week>
        #[arg(long, default_value = "maintain")]
        goal: String,
    },

    /// Progress towards a weight goal
    Goal {
        /// weight_loss or muscle_gain
        #[arg(long = "type")]
        goal_type: String,

        /// Starting weight in kg
        #[arg(long)]
        start: f64,

        /// Target weight in kg
        #[arg(long)]
        target: f64,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target_date: NaiveDate,

        /// Current weight in kg, defaults to profile.weight_kg from config
        #[arg(long)]
        current: Option<f64>,
    },

    /// Show the affirmation of the day
    Affirmation {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitcycle_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let task_log_path = data_dir.join("task_log.json");
    tracing::debug!("Using task log at {:?}", task_log_path);
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => {
            let now = Local::now().time();
            cmd_plan(&config, &task_log_path, today, Some(now))
        }
        Commands::Plan { date } => cmd_plan(&config, &task_log_path, date.unwrap_or(today), None),
        Commands::Week { date } => cmd_week(&config, &task_log_path, date.unwrap_or(today)),
        Commands::Calendar { year, month } => cmd_calendar(
            &config,
            year.unwrap_or(today.year()),
            month.unwrap_or(today.month()),
        ),
        Commands::Done { label, date } => {
            cmd_done(&config, &task_log_path, &label, date.unwrap_or(today))
        }
        Commands::Recipe { label } => cmd_recipe(&label),
        Commands::Meals => cmd_meals(),
        Commands::Bmi {
            weight,
            height,
            inches,
            imperial,
        } => {
            let (weight_kg, height_cm) = to_metric(weight, height, inches, imperial);
            cmd_bmi(weight_kg, height_cm)
        }
        Commands::Calories {
            age,
            sex,
            weight,
            height,
            inches,
            imperial,
            activity,
            goal,
        } => {
            let (weight_kg, height_cm) = to_metric(weight, height, inches, imperial);
            let input = NutritionInput {
                age,
                sex: sex.parse()?,
                weight_kg,
                height_cm,
                activity: activity.parse()?,
                goal: goal.parse()?,
            };
            cmd_calories(&input)
        }
        Commands::Goal {
            goal_type,
            start,
            target,
            target_date,
            current,
        } => {
            let goal = Goal::new(goal_type.parse()?, start, target, target_date)?;
            let current = current.or(config.profile.weight_kg).ok_or_else(|| {
                Error::InvalidInput(
                    "no current weight: pass --current or set profile.weight_kg".into(),
                )
            })?;
            cmd_goal(&goal, current, today)
        }
        Commands::Affirmation { date } => {
            let affirmations = default_affirmations();
            if let Some(text) = affirmation_for(&affirmations, date.unwrap_or(today)) {
                println!("{}", text);
            }
            Ok(())
        }
    }
}

fn to_metric(weight: f64, height: f64, inches: f64, imperial: bool) -> (f64, f64) {
    if imperial {
        (
            calculators::lbs_to_kg(weight),
            calculators::feet_inches_to_cm(height, inches),
        )
    } else {
        (weight, height)
    }
}

fn cmd_plan(
    config: &Config,
    task_log_path: &Path,
    date: NaiveDate,
    now: Option<NaiveTime>,
) -> Result<()> {
    let resolver = config.resolver()?;
    let log = TaskLog::load(task_log_path)?;
    let plan = resolver.plan_for(date);

    display_plan(&resolver, &plan, &log);

    if let Some(now) = now {
        let reminders = default_reminders();
        let upcoming = upcoming_reminders(&reminders, now);
        if !upcoming.is_empty() {
            println!("  Upcoming reminders:");
            for reminder in upcoming {
                println!(
                    "  ⏰ {:02}:{:02}  {}",
                    reminder.hour, reminder.minute, reminder.message
                );
            }
            println!();
        }
    }

    Ok(())
}

fn cmd_week(config: &Config, task_log_path: &Path, start: NaiveDate) -> Result<()> {
    let resolver = config.resolver()?;
    let log = TaskLog::load(task_log_path)?;

    for plan in resolver.week_of(start) {
        let progress = log.day_progress(&plan);
        println!(
            "{}  {:<18} [{}]  {}/{} meals",
            plan.date.format("%a %Y-%m-%d"),
            plan.workout.name,
            plan.workout.tag,
            progress.completed,
            progress.total
        );
    }

    Ok(())
}

fn cmd_calendar(config: &Config, year: i32, month: u32) -> Result<()> {
    let resolver = config.resolver()?;
    let grid = MonthGrid::new(&resolver, year, month)?;
    let markers = tag_markers(&resolver);

    println!("\n  {}\n", grid.title());
    println!("  Sun Mon Tue Wed Thu Fri Sat");

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(plan) => {
                    let marker = markers
                        .iter()
                        .find(|(tag, _)| *tag == plan.workout.tag)
                        .map_or(' ', |(_, marker)| *marker);
                    format!("{:>3}{}", plan.date.day(), marker)
                }
                None => "    ".to_string(),
            })
            .collect();
        println!("  {}", row.join("").trim_end());
    }

    let legend: Vec<String> = markers
        .iter()
        .map(|(tag, marker)| format!("{}={}", marker, tag))
        .collect();
    println!("\n  {}\n", legend.join("  "));

    Ok(())
}

fn cmd_done(config: &Config, task_log_path: &Path, label: &str, date: NaiveDate) -> Result<()> {
    let resolver = config.resolver()?;
    let key = task_key(label);

    let done = TaskLog::update(task_log_path, |log| {
        log.toggle(date, label).ok_or_else(|| {
            Error::InvalidInput(format!("\"{}\" has no trackable task name", label))
        })
    })?;

    tracing::debug!("Toggled task {} on {}: done={}", key, date, done);

    let plan = resolver.plan_for(date);
    let in_plan = plan.meals().iter().any(|meal| task_key(meal.as_str()) == key);
    if !in_plan {
        tracing::info!(
            "Task {} is not part of the {} plan (cycle day {})",
            key,
            date,
            plan.cycle_index
        );
    }

    if done {
        println!("✓ Marked '{}' done for {}", key, TaskLog::date_key(date));
    } else {
        println!("✗ Marked '{}' not done for {}", key, TaskLog::date_key(date));
    }

    if !in_plan {
        println!("  Note: no meal in the plan for {} matches '{}'", date, key);
    }

    Ok(())
}

fn cmd_recipe(label: &str) -> Result<()> {
    match get_default_recipe_book().lookup(label) {
        Some(recipe) => display_recipe(recipe),
        None => println!("No recipe found for \"{}\"", label),
    }
    Ok(())
}

fn cmd_meals() -> Result<()> {
    let recipes = get_default_recipe_book();
    let mark = |meal: &str| if recipes.lookup(meal).is_some() { "  📖" } else { "" };

    for group in default_meal_plans() {
        println!("{}", group.title);
        for meal in &group.meals {
            println!("  • {}{}", meal, mark(meal.as_str()));
        }
    }

    println!();
    println!("Meal ideas");
    for group in default_meal_ideas() {
        println!("  {}: {}", group.name, group.items.join(", "));
    }
    Ok(())
}

fn cmd_bmi(weight_kg: f64, height_cm: f64) -> Result<()> {
    let result = calculators::bmi(weight_kg, height_cm)?;
    println!("BMI: {:.1} ({})", result.value, result.category);
    Ok(())
}

fn cmd_calories(input: &NutritionInput) -> Result<()> {
    let targets = calculators::nutrition_targets(input)?;

    println!("BMR:             {:.0} kcal", targets.bmr);
    println!("TDEE:            {:.0} kcal", targets.tdee);
    println!("Target calories: {:.0} kcal", targets.target_calories);
    println!("Protein:         {} g", targets.protein_g);
    println!("Carbohydrates:   {} g", targets.carbs_g);
    println!("Fat:             {} g", targets.fat_g);
    Ok(())
}

fn cmd_goal(goal: &Goal, current_weight_kg: f64, today: NaiveDate) -> Result<()> {
    println!(
        "Current weight: {} kg  Target: {} kg",
        current_weight_kg, goal.target_weight_kg
    );
    println!("Progress: {:.0}%", goal.progress(current_weight_kg));
    println!("{}", goal.status(current_weight_kg, today));
    Ok(())
}

fn display_plan(resolver: &CycleResolver, plan: &DailyPlan<'_>, log: &TaskLog) {
    let recipes = get_default_recipe_book();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", format_full_date(plan.date));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Workout: {} [{}]", plan.workout.name, plan.workout.tag);

    if let Some(detail) = resolver.workout_detail(plan.workout) {
        for exercise in &detail.exercises {
            println!("  → {}", exercise);
        }
        println!("  ℹ {}", detail.instructions);
    }

    let progress = log.day_progress(plan);
    println!();
    println!(
        "  Meals ({}/{} done, {}%):",
        progress.completed,
        progress.total,
        progress.percent()
    );

    for meal in plan.meals() {
        let mark = if log.is_label_done(plan.date, meal) { "✓" } else { " " };
        let recipe_hint = if recipes.lookup(meal).is_some() { "  📖 recipe" } else { "" };
        println!("  [{}] {}{}", mark, meal, recipe_hint);
    }

    println!();
}

fn display_recipe(recipe: &Recipe) {
    println!("\n  {}\n", recipe.name);
    println!("  Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  • {}", ingredient);
    }
    println!();
    println!("  {}", recipe.instructions);
    println!();
}
