#![forbid(unsafe_code)]

//! Core domain model and calculation logic for PawCalc.
//!
//! This crate provides:
//! - Domain types (units, pet attributes, breeds, results)
//! - Calorie and age conversion engines
//! - Breed registry
//! - Step wizard and calculator sessions
//! - Page metadata scoping, configuration and logging

pub mod types;
pub mod error;
pub mod units;
pub mod calories;
pub mod age;
pub mod breeds;
pub mod wizard;
pub mod calculator;
pub mod metadata;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use units::to_kilograms;
pub use calories::{compute_daily_calories, compute_from_form};
pub use age::compute_human_age;
pub use breeds::{all_breeds, breed_multiplier, lookup};
pub use wizard::{StepId, Transition, WizardState};
pub use calculator::{Calculator, CalculatorKind};
pub use metadata::{with_page_metadata, PageHead, PageMetadata};
pub use config::Config;
