//! Weight and age unit conversions.
//!
//! Months are converted with a flat 12 months per year; calendar-accurate
//! month lengths are not modelled.

use crate::{AgeUnit, WeightUnit};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert a weight to kilograms. No validation is performed.
pub fn to_kilograms(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lbs => value * KG_PER_LB,
    }
}

/// Convert a weight to pounds. No validation is performed.
pub fn to_pounds(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value / KG_PER_LB,
        WeightUnit::Lbs => value,
    }
}

/// Normalize an age to years
pub fn to_years(value: f64, unit: AgeUnit) -> f64 {
    match unit {
        AgeUnit::Years => value,
        AgeUnit::Months => value / MONTHS_PER_YEAR,
    }
}
