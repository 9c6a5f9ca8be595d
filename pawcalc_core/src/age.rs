//! Dog-to-human age conversion.
//!
//! Dogs age fastest in their first year, still quickly in the second, then
//! at a roughly linear rate that grows with adult size. Giant breeds get a
//! slower first year to reflect delayed skeletal maturity.
//!
//! Life stages use exclusive upper bounds: exactly 1 year is a Young Adult,
//! exactly 10 years is a Senior. The piecewise rate breakpoints are
//! inclusive (`<= 1`, `<= 2`); the mapping is continuous there, so the choice
//! does not change any value.

use crate::units::to_years;
use crate::{AgeResult, AgeUnit, Error, LifeStage, Result, SizeCategory};

/// Oldest dog age (in years) accepted by the engine
pub const MAX_AGE_YEARS: f64 = 30.0;

/// Human years per dog year, for each phase of life
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgingRates {
    pub first_year: f64,
    pub second_year: f64,
    pub after_two: f64,
}

impl SizeCategory {
    pub fn aging_rates(self) -> AgingRates {
        match self {
            SizeCategory::Small => AgingRates {
                first_year: 15.0,
                second_year: 9.0,
                after_two: 4.0,
            },
            SizeCategory::Medium => AgingRates {
                first_year: 15.0,
                second_year: 9.0,
                after_two: 5.0,
            },
            SizeCategory::Large => AgingRates {
                first_year: 15.0,
                second_year: 9.0,
                after_two: 6.0,
            },
            SizeCategory::Giant => AgingRates {
                first_year: 12.0,
                second_year: 10.0,
                after_two: 7.0,
            },
        }
    }
}

impl LifeStage {
    /// Classify an age in years
    pub fn from_age_years(age_years: f64) -> LifeStage {
        if age_years < 0.5 {
            LifeStage::Puppy
        } else if age_years < 1.0 {
            LifeStage::Junior
        } else if age_years < 3.0 {
            LifeStage::YoungAdult
        } else if age_years < 7.0 {
            LifeStage::Adult
        } else if age_years < 10.0 {
            LifeStage::Mature
        } else {
            LifeStage::Senior
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LifeStage::Puppy => {
                "Your pup is in the rapid growth phase! Everything is new and exciting."
            }
            LifeStage::Junior => "Adolescent phase - full of energy and still learning!",
            LifeStage::YoungAdult => "Prime of life! Peak energy and physical condition.",
            LifeStage::Adult => "Mature and settled. A wonderful companion!",
            LifeStage::Mature => "Entering the golden years with wisdom and grace.",
            LifeStage::Senior => "A treasured senior! Extra love and care needed.",
        }
    }

    pub fn advisory(self) -> &'static [&'static str] {
        match self {
            LifeStage::Puppy => &[
                "Complete puppy vaccination series",
                "Start socialization training early",
                "Feed puppy-specific food for proper growth",
                "Begin basic obedience training",
            ],
            LifeStage::Junior => &[
                "Continue training and socialization",
                "Discuss spaying/neutering with your vet",
                "Transition to adult food gradually",
                "Establish regular exercise routine",
            ],
            LifeStage::YoungAdult => &[
                "Annual vet checkups recommended",
                "Maintain healthy weight with proper diet",
                "Regular dental care is important",
                "Keep up with heartworm and flea prevention",
            ],
            LifeStage::Adult => &[
                "Watch for weight gain as metabolism slows",
                "Regular exercise remains important",
                "Consider joint supplements if needed",
                "Monitor for any behavioral changes",
            ],
            LifeStage::Mature => &[
                "Bi-annual vet checkups recommended",
                "Consider senior dog food formula",
                "Watch for signs of arthritis",
                "Adjust exercise to lower impact activities",
            ],
            LifeStage::Senior => &[
                "More frequent vet visits (every 6 months)",
                "Senior blood panel tests recommended",
                "Orthopedic bed for joint comfort",
                "Gentle, regular exercise to maintain mobility",
                "Monitor cognitive function",
            ],
        }
    }
}

/// Check that an age can be converted; returns it normalized to years
pub fn validate_age(age: f64, unit: AgeUnit) -> Result<f64> {
    if !age.is_finite() || age <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "age must be a positive number, got {}",
            age
        )));
    }

    let age_years = to_years(age, unit);
    if age_years > MAX_AGE_YEARS {
        return Err(Error::InvalidInput(format!(
            "age of {} {} exceeds the supported maximum of {} years",
            age, unit, MAX_AGE_YEARS
        )));
    }
    Ok(age_years)
}

/// Unrounded human-equivalent age for an age already in years
pub fn human_years(age_years: f64, size: SizeCategory) -> f64 {
    let rates = size.aging_rates();

    if age_years <= 1.0 {
        age_years * rates.first_year
    } else if age_years <= 2.0 {
        rates.first_year + (age_years - 1.0) * rates.second_year
    } else {
        rates.first_year + rates.second_year + (age_years - 2.0) * rates.after_two
    }
}

/// Convert a dog's age into a human-equivalent age and life stage
pub fn compute_human_age(age: f64, unit: AgeUnit, size: SizeCategory) -> Result<AgeResult> {
    let age_years = validate_age(age, unit)?;
    let human = human_years(age_years, size);
    let life_stage = LifeStage::from_age_years(age_years);

    tracing::debug!(
        age_years,
        size = %size,
        human,
        stage = %life_stage,
        "Computed human age"
    );

    Ok(AgeResult {
        human_age: human.round() as u32,
        age_years,
        life_stage,
        description: life_stage.description().to_string(),
        advisory: life_stage.advisory().iter().map(|s| s.to_string()).collect(),
    })
}
