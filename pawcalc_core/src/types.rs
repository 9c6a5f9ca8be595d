//! Core domain types for PawCalc.
//!
//! This module defines the fundamental types used throughout the system:
//! - Units of weight and age
//! - Pet attributes collected by the calculators
//! - Breed reference records
//! - Calculation results

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Units
// ============================================================================

/// Unit a weight was entered in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(WeightUnit::Kg),
            "lb" | "lbs" | "pounds" => Ok(WeightUnit::Lbs),
            other => Err(Error::InvalidInput(format!(
                "unknown weight unit '{}' (expected kg or lbs)",
                other
            ))),
        }
    }
}

/// Unit an age was entered in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AgeUnit {
    #[default]
    Years,
    Months,
}

impl AgeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            AgeUnit::Years => "years",
            AgeUnit::Months => "months",
        }
    }
}

impl FromStr for AgeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "year" | "years" => Ok(AgeUnit::Years),
            "m" | "month" | "months" => Ok(AgeUnit::Months),
            other => Err(Error::InvalidInput(format!(
                "unknown age unit '{}' (expected years or months)",
                other
            ))),
        }
    }
}

// ============================================================================
// Pet Attributes
// ============================================================================

/// Qualitative fat/muscle assessment
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BodyCondition {
    /// Ribs visible
    Underweight,
    /// Ribs felt easily
    #[default]
    Ideal,
    /// Ribs hard to feel
    Overweight,
}

impl BodyCondition {
    pub const ALL: [BodyCondition; 3] = [
        BodyCondition::Underweight,
        BodyCondition::Ideal,
        BodyCondition::Overweight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyCondition::Underweight => "underweight",
            BodyCondition::Ideal => "ideal",
            BodyCondition::Overweight => "overweight",
        }
    }

    /// Short hint shown next to each choice
    pub fn hint(self) -> &'static str {
        match self {
            BodyCondition::Underweight => "Ribs visible",
            BodyCondition::Ideal => "Ribs felt easily",
            BodyCondition::Overweight => "Ribs hard to feel",
        }
    }
}

impl FromStr for BodyCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Ok(BodyCondition::Underweight),
            "ideal" => Ok(BodyCondition::Ideal),
            "overweight" => Ok(BodyCondition::Overweight),
            other => Err(Error::InvalidInput(format!(
                "unknown body condition '{}' (expected underweight, ideal or overweight)",
                other
            ))),
        }
    }
}

/// Day-to-day activity level chosen by the owner
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Mostly resting, short walks only",
            ActivityLevel::Moderate => "1-2 walks per day, some playtime",
            ActivityLevel::Active => "Multiple walks, regular play sessions",
            ActivityLevel::VeryActive => "Running, hiking, or working dog",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" => Ok(ActivityLevel::VeryActive),
            other => Err(Error::InvalidInput(format!(
                "unknown activity level '{}' (expected sedentary, moderate, active or very-active)",
                other
            ))),
        }
    }
}

/// Adult size of the dog; drives the age conversion rates
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
    Giant,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::Giant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::Giant => "giant",
        }
    }

    /// Typical adult weight band and example breeds
    pub fn hint(self) -> &'static str {
        match self {
            SizeCategory::Small => "< 10 kg (Chihuahua, Pomeranian)",
            SizeCategory::Medium => "10-25 kg (Beagle, Cocker Spaniel)",
            SizeCategory::Large => "25-45 kg (Labrador, Golden Retriever)",
            SizeCategory::Giant => "> 45 kg (Great Dane, Mastiff)",
        }
    }
}

impl FromStr for SizeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(SizeCategory::Small),
            "medium" => Ok(SizeCategory::Medium),
            "large" => Ok(SizeCategory::Large),
            "giant" => Ok(SizeCategory::Giant),
            other => Err(Error::InvalidInput(format!(
                "unknown size category '{}' (expected small, medium, large or giant)",
                other
            ))),
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_via_as_str!(WeightUnit, AgeUnit, BodyCondition, ActivityLevel, SizeCategory, BreedActivity);

// ============================================================================
// Form Data
// ============================================================================

/// Values collected by a calculator wizard.
///
/// Enum fields always hold a valid value, so only `subject_name`, `weight`
/// and `age` can block progression.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FormData {
    pub subject_name: String,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub body_condition: BodyCondition,
    pub activity_level: ActivityLevel,
    pub age: f64,
    pub age_unit: AgeUnit,
    pub size_category: SizeCategory,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            subject_name: String::new(),
            weight: 0.0,
            weight_unit: WeightUnit::Kg,
            body_condition: BodyCondition::Ideal,
            activity_level: ActivityLevel::Moderate,
            age: 1.0,
            age_unit: AgeUnit::Years,
            size_category: SizeCategory::Medium,
        }
    }
}

impl FormData {
    /// Fill in a weight only if the user has not entered one yet.
    ///
    /// Returns true when the weight was applied.
    pub fn prefill_weight(&mut self, weight_kg: f64) -> bool {
        if self.weight != 0.0 {
            return false;
        }
        self.weight = weight_kg;
        self.weight_unit = WeightUnit::Kg;
        true
    }

    /// Name to show in results; falls back to a neutral label
    pub fn display_name(&self) -> &str {
        let name = self.subject_name.trim();
        if name.is_empty() {
            "Your dog"
        } else {
            name
        }
    }
}

// ============================================================================
// Breed Types
// ============================================================================

/// Typical activity tier of a breed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BreedActivity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl BreedActivity {
    pub fn as_str(self) -> &'static str {
        match self {
            BreedActivity::Low => "low",
            BreedActivity::Moderate => "moderate",
            BreedActivity::High => "high",
            BreedActivity::VeryHigh => "very-high",
        }
    }
}

/// Inclusive min/max pair (kg for weights, years for lifespans)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Static reference record for a known breed
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BreedInfo {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Kilograms
    pub average_weight: Range,
    /// Years
    pub life_expectancy: Range,
    pub size: SizeCategory,
    pub activity_level: BreedActivity,
    pub description: String,
    pub calorie_notes: String,
    pub popular_names: Vec<String>,
    pub health_considerations: Vec<String>,
}

impl BreedInfo {
    pub fn midpoint_weight_kg(&self) -> f64 {
        self.average_weight.midpoint()
    }

    /// Weight used to seed a breed calculator (midpoint rounded to whole kg)
    pub fn seed_weight_kg(&self) -> f64 {
        self.midpoint_weight_kg().round()
    }

    /// Whether any health consideration mentions obesity
    pub fn prone_to_obesity(&self) -> bool {
        self.health_considerations
            .iter()
            .any(|note| note.to_lowercase().contains("obesity"))
    }
}

// ============================================================================
// Results
// ============================================================================

/// Age-derived life stage
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifeStage {
    Puppy,
    Junior,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Adult,
    Mature,
    Senior,
}

impl LifeStage {
    pub fn label(self) -> &'static str {
        match self {
            LifeStage::Puppy => "Puppy",
            LifeStage::Junior => "Junior",
            LifeStage::YoungAdult => "Young Adult",
            LifeStage::Adult => "Adult",
            LifeStage::Mature => "Mature",
            LifeStage::Senior => "Senior",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a dog-to-human age conversion
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AgeResult {
    /// Human-equivalent age, rounded to the nearest year
    pub human_age: u32,
    /// Dog age normalized to years
    pub age_years: f64,
    pub life_stage: LifeStage,
    pub description: String,
    pub advisory: Vec<String>,
}

/// Daily calorie target together with the inputs that produced it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieReport {
    pub daily_calories: u32,
    pub weight_kg: f64,
    pub breed_multiplier: f64,
    pub breed: Option<String>,
    pub guidance: Vec<String>,
}

/// Output of a calculator that reached its results step
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationResult {
    Calories(CalorieReport),
    Age(AgeResult),
}
