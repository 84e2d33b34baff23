//! BMI and daily calorie calculators.
//!
//! # Formulas
//!
//! - BMI = weight (kg) / height (m)²
//! - BMR (Mifflin-St Jeor) = 10·kg + 6.25·cm − 5·age + 5 (male) / −161 (female)
//! - TDEE = BMR × activity multiplier
//! - Target calories = TDEE ± 1000 kcal per kg/week of the weight goal
//! - Macros: 35% protein, 40% carbohydrate (4 kcal/g), 25% fat (9 kcal/g)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const KG_PER_LB: f64 = 0.453592;
pub const CM_PER_FOOT: f64 = 30.48;
pub const CM_PER_INCH: f64 = 2.54;

const KCAL_PER_KG_WEEKLY_GOAL: f64 = 1000.0;

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet * CM_PER_FOOT + inches * CM_PER_INCH
}

fn require_positive(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("{} must be a positive number", what)))
    }
}

// ============================================================================
// BMI
// ============================================================================

/// Weight category for a BMI value
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::NormalWeight
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

/// Body mass index from metric measurements
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi> {
    require_positive(weight_kg, "Weight")?;
    require_positive(height_cm, "Height")?;

    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);

    Ok(Bmi {
        value,
        category: BmiCategory::from_bmi(value),
    })
}

// ============================================================================
// Calorie targets
// ============================================================================

/// Sex for BMR calculations
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(Error::InvalidInput(format!("unknown sex: {}", other))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    LightlyActive,
    /// 3-5 days/week
    ModeratelyActive,
    /// 6-7 days/week
    VeryActive,
    /// Hard training or a physical job
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" | "very" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "extra" => Ok(ActivityLevel::ExtraActive),
            other => Err(Error::InvalidInput(format!("unknown activity level: {}", other))),
        }
    }
}

/// Weekly weight change the calorie target aims for
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    Maintain,
    /// kg per week
    Lose(f64),
    /// kg per week
    Gain(f64),
}

impl WeightGoal {
    /// Daily calorie adjustment applied to TDEE
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            WeightGoal::Maintain => 0.0,
            WeightGoal::Lose(kg) => -kg * KCAL_PER_KG_WEEKLY_GOAL,
            WeightGoal::Gain(kg) => kg * KCAL_PER_KG_WEEKLY_GOAL,
        }
    }
}

/// Parses `maintain`, `lose_<kg>` or `gain_<kg>` (e.g. `lose_0.5`)
impl FromStr for WeightGoal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.to_lowercase();
        if s == "maintain" {
            return Ok(WeightGoal::Maintain);
        }

        let invalid = || Error::InvalidInput(format!("unknown weight goal: {}", s));
        let (direction, amount) = s.split_once('_').ok_or_else(invalid)?;
        let kg: f64 = amount.parse().map_err(|_| invalid())?;
        if !kg.is_finite() || kg < 0.0 {
            return Err(invalid());
        }

        match direction {
            "lose" => Ok(WeightGoal::Lose(kg)),
            "gain" => Ok(WeightGoal::Gain(kg)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NutritionInput {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: WeightGoal,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> Result<f64> {
    require_positive(weight_kg, "Weight")?;
    require_positive(height_cm, "Height")?;
    if age == 0 {
        return Err(Error::InvalidInput("Age must be a positive number".into()));
    }

    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    Ok(10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_constant)
}

/// Daily energy and macro targets
pub fn nutrition_targets(input: &NutritionInput) -> Result<NutritionTargets> {
    let bmr = mifflin_st_jeor(input.weight_kg, input.height_cm, input.age, input.sex)?;
    let tdee = bmr * input.activity.multiplier();
    let target_calories = (tdee + input.goal.calorie_adjustment()).max(0.0);

    let grams = |share: f64, kcal_per_gram: f64| (target_calories * share / kcal_per_gram).round() as u32;

    Ok(NutritionTargets {
        bmr,
        tdee,
        target_calories,
        protein_g: grams(0.35, 4.0),
        carbs_g: grams(0.40, 4.0),
        fat_g: grams(0.25, 9.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_bmi_normal_weight() {
        let result = bmi(70.0, 175.0).unwrap();
        assert!((result.value - 22.857).abs() < 0.001);
        assert_eq!(result.category, BmiCategory::NormalWeight);
        assert_eq!(result.category.to_string(), "Normal weight");
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Obesity);
    }

    #[test]
    fn test_bmi_rejects_non_positive() {
        assert!(matches!(bmi(0.0, 175.0), Err(Error::InvalidInput(_))));
        assert!(matches!(bmi(70.0, -1.0), Err(Error::InvalidInput(_))));
        assert!(matches!(bmi(f64::NAN, 175.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_imperial_conversions() {
        assert!(close(feet_inches_to_cm(5.0, 10.0), 177.8));
        assert!(close(lbs_to_kg(100.0), 45.3592));
    }

    #[test]
    fn test_mifflin_st_jeor() {
        assert!(close(mifflin_st_jeor(80.0, 180.0, 30, Sex::Male).unwrap(), 1780.0));
        assert!(close(mifflin_st_jeor(60.0, 165.0, 25, Sex::Female).unwrap(), 1345.25));
        assert!(mifflin_st_jeor(60.0, 165.0, 0, Sex::Female).is_err());
    }

    #[test]
    fn test_nutrition_targets_for_weight_loss() {
        let input = NutritionInput {
            age: 30,
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            activity: ActivityLevel::ModeratelyActive,
            goal: WeightGoal::Lose(0.5),
        };

        let targets = nutrition_targets(&input).unwrap();
        assert!(close(targets.tdee, 2759.0));
        assert!(close(targets.target_calories, 2259.0));
        assert_eq!(targets.protein_g, 198);
        assert_eq!(targets.carbs_g, 226);
        assert_eq!(targets.fat_g, 63);
    }

    #[test]
    fn test_parse_weight_goal() {
        assert_eq!("maintain".parse::<WeightGoal>().unwrap(), WeightGoal::Maintain);
        assert_eq!("lose_0.5".parse::<WeightGoal>().unwrap(), WeightGoal::Lose(0.5));
        assert_eq!("gain_0.25".parse::<WeightGoal>().unwrap(), WeightGoal::Gain(0.25));
        assert!("shrink_1".parse::<WeightGoal>().is_err());
        assert!("lose_abc".parse::<WeightGoal>().is_err());
        assert!("lose_-1".parse::<WeightGoal>().is_err());
    }

    #[test]
    fn test_parse_activity_and_sex() {
        assert_eq!(
            "moderately-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!("Sedentary".parse::<ActivityLevel>().unwrap(), ActivityLevel::Sedentary);
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
