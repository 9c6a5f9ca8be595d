//! Daily calorie engine.
//!
//! The target is built from the Resting Energy Requirement
//! (RER = 70 * kg^0.75) scaled by three multipliers:
//! - owner-selected activity level
//! - body condition (surplus when underweight, deficit when overweight)
//! - breed activity tier (1.0 without a breed)

use crate::breeds::breed_multiplier;
use crate::units::to_kilograms;
use crate::{ActivityLevel, BodyCondition, BreedInfo, CalorieReport, Error, FormData, Result};

/// RER coefficient
const RER_FACTOR: f64 = 70.0;

/// Metabolic scaling exponent
const RER_EXPONENT: f64 = 0.75;

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Moderate => 1.4,
            ActivityLevel::Active => 1.6,
            ActivityLevel::VeryActive => 1.8,
        }
    }
}

impl BodyCondition {
    pub fn multiplier(self) -> f64 {
        match self {
            BodyCondition::Underweight => 1.2,
            BodyCondition::Ideal => 1.0,
            BodyCondition::Overweight => 0.8,
        }
    }
}

fn validate_weight(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "weight must be a positive number, got {}",
            weight_kg
        )));
    }
    Ok(())
}

/// Resting Energy Requirement in kcal/day
pub fn resting_energy_requirement(weight_kg: f64) -> Result<f64> {
    validate_weight(weight_kg)?;
    Ok(RER_FACTOR * weight_kg.powf(RER_EXPONENT))
}

/// Compute the rounded daily calorie target.
///
/// Fails with `InvalidInput` for zero, negative or non-finite weights and
/// for a non-positive breed multiplier.
pub fn compute_daily_calories(
    weight_kg: f64,
    activity: ActivityLevel,
    condition: BodyCondition,
    breed_multiplier: f64,
) -> Result<u32> {
    let rer = resting_energy_requirement(weight_kg)?;

    if !breed_multiplier.is_finite() || breed_multiplier <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "breed multiplier must be a positive number, got {}",
            breed_multiplier
        )));
    }

    let daily = rer * activity.multiplier() * condition.multiplier() * breed_multiplier;

    tracing::debug!(
        weight_kg,
        rer,
        activity = %activity,
        condition = %condition,
        breed_multiplier,
        daily,
        "Computed daily calories"
    );

    let rounded = daily.round();
    if !rounded.is_finite() || rounded > u32::MAX as f64 {
        return Err(Error::InvalidInput(format!(
            "daily calorie figure {} is out of range; check the weight",
            daily
        )));
    }

    Ok(rounded as u32)
}

/// Run the engine over a calculator's form, optionally in a breed context
pub fn compute_from_form(form: &FormData, breed: Option<&BreedInfo>) -> Result<CalorieReport> {
    let weight_kg = to_kilograms(form.weight, form.weight_unit);
    let multiplier = breed.map(breed_multiplier).unwrap_or(1.0);

    let daily_calories = compute_daily_calories(
        weight_kg,
        form.activity_level,
        form.body_condition,
        multiplier,
    )?;

    Ok(CalorieReport {
        daily_calories,
        weight_kg,
        breed_multiplier: multiplier,
        breed: breed.map(|b| b.slug.clone()),
        guidance: feeding_guidance(form.display_name(), form.body_condition, breed),
    })
}

/// Feeding tips shown alongside the calorie target
pub fn feeding_guidance(
    subject_name: &str,
    condition: BodyCondition,
    breed: Option<&BreedInfo>,
) -> Vec<String> {
    let mut tips = Vec::new();

    if let Some(breed) = breed {
        tips.push(breed.calorie_notes.clone());
    }

    match condition {
        BodyCondition::Underweight => tips.push(
            "Consider gradually increasing food portions and consulting your vet about nutritional supplements."
                .into(),
        ),
        BodyCondition::Overweight => tips.push(
            "Focus on portion control and increase daily exercise gradually. Consult your vet for a weight loss plan."
                .into(),
        ),
        BodyCondition::Ideal => tips.push(format!(
            "{} is at a healthy weight! Maintain current diet and exercise routine.",
            subject_name
        )),
    }

    tips.push("Divide daily calories into 2-3 meals for better digestion.".into());
    tips.push("Always provide fresh water alongside meals.".into());
    tips
}
