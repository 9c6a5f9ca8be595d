//! Ordered step controller shared by every calculator.
//!
//! A wizard walks a fixed list of steps. `next` only moves forward when the
//! current step is valid for the form; `back` and `next` clamp at the ends
//! instead of failing. The last step is terminal and can only be left by
//! going back or resetting.

use crate::age::validate_age;
use crate::{Error, FormData, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a step in a calculator wizard
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Breed overview (breed calculators only)
    Info,
    Name,
    /// Age and optional name (age calculator)
    Age,
    Weight,
    Size,
    BodyCondition,
    Activity,
    Results,
}

/// Generic calorie calculator
pub const CALORIE_STEPS: &[StepId] = &[
    StepId::Name,
    StepId::Weight,
    StepId::BodyCondition,
    StepId::Activity,
    StepId::Results,
];

/// Breed-specific calorie calculator
pub const BREED_CALORIE_STEPS: &[StepId] = &[
    StepId::Info,
    StepId::Name,
    StepId::Weight,
    StepId::BodyCondition,
    StepId::Activity,
    StepId::Results,
];

/// Dog age calculator
pub const AGE_STEPS: &[StepId] = &[StepId::Age, StepId::Size, StepId::Results];

impl StepId {
    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Info => "info",
            StepId::Name => "name",
            StepId::Age => "age",
            StepId::Weight => "weight",
            StepId::Size => "size",
            StepId::BodyCondition => "body-condition",
            StepId::Activity => "activity",
            StepId::Results => "results",
        }
    }

    /// Short label for progress indicators
    pub fn label(self) -> &'static str {
        match self {
            StepId::Info => "Info",
            StepId::Name => "Name",
            StepId::Age => "Age",
            StepId::Weight => "Weight",
            StepId::Size => "Size",
            StepId::BodyCondition => "Body",
            StepId::Activity => "Activity",
            StepId::Results => "Result",
        }
    }

    /// Default validity rule for this step
    pub fn is_valid(self, form: &FormData) -> bool {
        self.blocked_reason(form).is_none()
    }

    /// Why `next` would be refused on this step, if it would
    pub fn blocked_reason(self, form: &FormData) -> Option<String> {
        match self {
            StepId::Name if form.subject_name.trim().is_empty() => {
                Some("a name is required".to_string())
            }
            StepId::Weight if !(form.weight.is_finite() && form.weight > 0.0) => {
                Some("weight must be greater than zero".to_string())
            }
            StepId::Age => validate_age(form.age, form.age_unit)
                .err()
                .map(|e| match e {
                    Error::InvalidInput(msg) => msg,
                    other => other.to_string(),
                }),
            _ => None,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-step validity predicate
pub type StepValidator = fn(StepId, &FormData) -> bool;

fn default_validator(step: StepId, form: &FormData) -> bool {
    step.is_valid(form)
}

/// Outcome of a wizard transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Moved forward one step
    Advanced { from: StepId, to: StepId },
    /// Moved back one step
    Retreated { from: StepId, to: StepId },
    /// `next` refused because the current step is not valid
    Blocked(StepId),
    /// `next` on the terminal step; nothing changed
    AtEnd,
    /// `back` on the first step; nothing changed
    AtStart,
    /// Returned to the first step
    Reset,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(
            self,
            Transition::Advanced { .. } | Transition::Retreated { .. } | Transition::Reset
        )
    }
}

/// Position within a fixed, ordered list of steps
#[derive(Clone)]
pub struct WizardState {
    current_step_index: usize,
    steps: Vec<StepId>,
    validator: StepValidator,
}

impl fmt::Debug for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardState")
            .field("current_step_index", &self.current_step_index)
            .field("steps", &self.steps)
            .finish()
    }
}

impl WizardState {
    /// Create a wizard at the first step using the default validity rules
    pub fn new(steps: &[StepId]) -> Result<Self> {
        Self::with_validator(steps, default_validator)
    }

    /// Create a wizard with a custom validity predicate
    pub fn with_validator(steps: &[StepId], validator: StepValidator) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::InvalidInput("a wizard needs at least one step".into()));
        }
        Ok(Self {
            current_step_index: 0,
            steps: steps.to_vec(),
            validator,
        })
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> StepId {
        self.steps[self.current_step_index]
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn is_first(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.current_step_index + 1 == self.steps.len()
    }

    /// Whether `next` would currently be accepted
    pub fn can_advance(&self, form: &FormData) -> bool {
        !self.is_terminal() && (self.validator)(self.current_step(), form)
    }

    /// 1-based position and total step count
    pub fn progress(&self) -> (usize, usize) {
        (self.current_step_index + 1, self.steps.len())
    }

    pub fn next(&mut self, form: &FormData) -> Transition {
        let from = self.current_step();

        if self.is_terminal() {
            return Transition::AtEnd;
        }
        if !(self.validator)(from, form) {
            tracing::debug!("Wizard blocked on step {}", from);
            return Transition::Blocked(from);
        }

        self.current_step_index += 1;
        let to = self.current_step();
        tracing::debug!("Wizard advanced {} -> {}", from, to);
        Transition::Advanced { from, to }
    }

    pub fn back(&mut self) -> Transition {
        if self.is_first() {
            return Transition::AtStart;
        }

        let from = self.current_step();
        self.current_step_index -= 1;
        let to = self.current_step();
        tracing::debug!("Wizard went back {} -> {}", from, to);
        Transition::Retreated { from, to }
    }

    /// Return to the first step. Form data is owned by the caller and must be
    /// restored separately.
    pub fn reset(&mut self) -> Transition {
        self.current_step_index = 0;
        Transition::Reset
    }
}
