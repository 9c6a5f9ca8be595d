//! Calculator sessions.
//!
//! A `Calculator` owns one wizard and the form it collects. Each calculator
//! kind fixes its step list and which engine runs on the results step:
//! - generic calorie: name, weight, body condition, activity
//! - breed calorie: breed info first, weight pre-filled from the breed
//! - age: age (with optional name), size

use crate::age::compute_human_age;
use crate::breeds::lookup;
use crate::calories::compute_from_form;
use crate::metadata::{age_page_metadata, breed_page_metadata, calorie_page_metadata, PageMetadata};
use crate::wizard::{StepId, Transition, WizardState, AGE_STEPS, BREED_CALORIE_STEPS, CALORIE_STEPS};
use crate::{
    ActivityLevel, AgeUnit, BodyCondition, BreedInfo, CalculationResult, Error, FormData, Result,
    SizeCategory, WeightUnit,
};

/// Which calculator a session runs
#[derive(Clone, Copy, Debug)]
pub enum CalculatorKind {
    Calorie,
    BreedCalorie(&'static BreedInfo),
    Age,
}

impl CalculatorKind {
    pub fn steps(&self) -> &'static [StepId] {
        match self {
            CalculatorKind::Calorie => CALORIE_STEPS,
            CalculatorKind::BreedCalorie(_) => BREED_CALORIE_STEPS,
            CalculatorKind::Age => AGE_STEPS,
        }
    }

    pub fn page_metadata(&self) -> PageMetadata {
        match self {
            CalculatorKind::Calorie => calorie_page_metadata(),
            CalculatorKind::BreedCalorie(breed) => breed_page_metadata(breed),
            CalculatorKind::Age => age_page_metadata(),
        }
    }
}

/// One in-progress calculation
#[derive(Clone, Debug)]
pub struct Calculator {
    kind: CalculatorKind,
    wizard: WizardState,
    form: FormData,
    initial: FormData,
}

impl Calculator {
    fn build(kind: CalculatorKind, initial: FormData) -> Result<Self> {
        Ok(Self {
            kind,
            wizard: WizardState::new(kind.steps())?,
            form: initial.clone(),
            initial,
        })
    }

    /// Generic dog calorie calculator
    pub fn calorie(defaults: FormData) -> Result<Self> {
        Self::build(CalculatorKind::Calorie, defaults)
    }

    /// Dog age calculator
    pub fn age(defaults: FormData) -> Result<Self> {
        Self::build(CalculatorKind::Age, defaults)
    }

    /// Breed-specific calorie calculator, seeded with the breed's average weight
    pub fn for_breed(slug: &str, defaults: FormData) -> Result<Self> {
        let breed = lookup(slug)?;

        let mut initial = defaults;
        if initial.prefill_weight(breed.seed_weight_kg()) {
            tracing::debug!(
                "Pre-filled weight {} kg from breed '{}'",
                initial.weight,
                breed.slug
            );
        }

        Self::build(CalculatorKind::BreedCalorie(breed), initial)
    }

    /// Breed calculator when the slug is known, generic calorie calculator otherwise
    pub fn for_breed_or_generic(slug: &str, defaults: FormData) -> Result<Self> {
        match Self::for_breed(slug, defaults.clone()) {
            Err(Error::NotFound(msg)) => {
                tracing::warn!("{}; falling back to the generic calorie calculator", msg);
                Self::calorie(defaults)
            }
            other => other,
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn breed(&self) -> Option<&'static BreedInfo> {
        match self.kind {
            CalculatorKind::BreedCalorie(breed) => Some(breed),
            _ => None,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn current_step(&self) -> StepId {
        self.wizard.current_step()
    }

    pub fn page_metadata(&self) -> PageMetadata {
        self.kind.page_metadata()
    }

    /// Reason the current step would refuse `next`, if any
    pub fn blocked_reason(&self) -> Option<String> {
        if self.wizard.is_terminal() || self.wizard.can_advance(&self.form) {
            return None;
        }
        self.current_step().blocked_reason(&self.form)
    }

    // ------------------------------------------------------------------
    // Field assignments. These never move the wizard.
    // ------------------------------------------------------------------

    pub fn set_subject_name(&mut self, name: impl Into<String>) {
        self.form.subject_name = name.into();
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.form.weight = weight;
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.form.weight_unit = unit;
    }

    pub fn set_body_condition(&mut self, condition: BodyCondition) {
        self.form.body_condition = condition;
    }

    pub fn set_activity_level(&mut self, activity: ActivityLevel) {
        self.form.activity_level = activity;
    }

    pub fn set_age(&mut self, age: f64) {
        self.form.age = age;
    }

    pub fn set_age_unit(&mut self, unit: AgeUnit) {
        self.form.age_unit = unit;
    }

    pub fn set_size_category(&mut self, size: SizeCategory) {
        self.form.size_category = size;
    }

    /// Use one of the breed's popular names as the subject name
    pub fn quick_select_name(&mut self, index: usize) -> Result<&str> {
        let breed = self.breed().ok_or_else(|| {
            Error::InvalidInput("popular names are only offered for breed calculators".into())
        })?;
        let name = breed.popular_names.get(index).ok_or_else(|| {
            Error::InvalidInput(format!(
                "popular name #{} does not exist ({} available)",
                index + 1,
                breed.popular_names.len()
            ))
        })?;
        self.form.subject_name = name.clone();
        Ok(&self.form.subject_name)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> Transition {
        self.wizard.next(&self.form)
    }

    pub fn back(&mut self) -> Transition {
        self.wizard.back()
    }

    /// Back to the first step with the form replaced by its initial values
    pub fn reset(&mut self) -> Transition {
        self.form = self.initial.clone();
        tracing::info!("Calculator reset");
        self.wizard.reset()
    }

    /// Compute the result. Only available on the results step.
    pub fn result(&self) -> Result<CalculationResult> {
        if !self.wizard.is_terminal() {
            return Err(Error::Incomplete(format!(
                "still on step '{}'",
                self.current_step()
            )));
        }

        match self.kind {
            CalculatorKind::Calorie => {
                compute_from_form(&self.form, None).map(CalculationResult::Calories)
            }
            CalculatorKind::BreedCalorie(breed) => {
                compute_from_form(&self.form, Some(breed)).map(CalculationResult::Calories)
            }
            CalculatorKind::Age => compute_human_age(
                self.form.age,
                self.form.age_unit,
                self.form.size_category,
            )
            .map(CalculationResult::Age),
        }
    }
}
