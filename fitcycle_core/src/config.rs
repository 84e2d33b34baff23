//! Configuration file support for fitcycle.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitcycle/config.toml`.

use crate::catalog::get_default_tables;
use crate::{
    CycleResolver, Error, NutritionEntry, PlanTables, Result, WorkoutDetail, WorkoutSlot,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub plan: PlanConfig,

    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Cycle anchor and optional replacement tables
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_reference_start_date")]
    pub reference_start_date: NaiveDate,

    #[serde(default = "default_cycle_length")]
    pub cycle_length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_cycle: Option<Vec<NutritionEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_cycle: Option<Vec<WorkoutSlot>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_details: Option<Vec<WorkoutDetail>>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            reference_start_date: default_reference_start_date(),
            cycle_length: default_cycle_length(),
            nutrition_cycle: None,
            workout_cycle: None,
            workout_details: None,
        }
    }
}

/// Personal measurements used by goal tracking
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        home.join(".local/share")
    });
    base.join("fitcycle")
}

fn default_reference_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn default_cycle_length() -> usize {
    7
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
            home.join(".config")
        });
        base.join("fitcycle").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Plan tables with any configured replacements applied over the defaults
    pub fn plan_tables(&self) -> PlanTables {
        let defaults = get_default_tables();
        PlanTables {
            workout_cycle: self
                .plan
                .workout_cycle
                .clone()
                .unwrap_or_else(|| defaults.workout_cycle.clone()),
            nutrition_cycle: self
                .plan
                .nutrition_cycle
                .clone()
                .unwrap_or_else(|| defaults.nutrition_cycle.clone()),
            workout_details: self
                .plan
                .workout_details
                .clone()
                .unwrap_or_else(|| defaults.workout_details.clone()),
        }
    }

    /// Validate the plan tables and build a resolver over them
    pub fn resolver(&self) -> Result<CycleResolver> {
        let tables = self.plan_tables();

        let errors = tables.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        CycleResolver::new(
            self.plan.reference_start_date,
            self.plan.cycle_length,
            tables,
        )
    }
}
