//! Page metadata overrides.
//!
//! Calculator screens set their own title, description and keywords while
//! they are shown and put the previous values back when they are left.
//! `with_page_metadata` applies an override for the duration of a closure and
//! restores the prior metadata on every exit path, including unwinding.

use crate::BreedInfo;
use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "PawCalc";

/// Title, description and keywords of a page
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// The metadata currently in effect
#[derive(Clone, Debug, Default)]
pub struct PageHead {
    current: PageMetadata,
}

impl PageHead {
    pub fn new(base: PageMetadata) -> Self {
        Self { current: base }
    }

    pub fn current(&self) -> &PageMetadata {
        &self.current
    }
}

struct RestoreOnDrop<'a> {
    head: &'a mut PageHead,
    previous: Option<PageMetadata>,
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!("Restoring page metadata '{}'", previous.title);
            self.head.current = previous;
        }
    }
}

/// Run `f` with `metadata` applied to `head`, then restore the previous value
pub fn with_page_metadata<T>(
    head: &mut PageHead,
    metadata: PageMetadata,
    f: impl FnOnce(&PageMetadata) -> T,
) -> T {
    tracing::debug!("Applying page metadata '{}'", metadata.title);
    let previous = std::mem::replace(&mut head.current, metadata);
    let guard = RestoreOnDrop {
        head,
        previous: Some(previous),
    };
    f(&guard.head.current)
}

pub fn home_page_metadata() -> PageMetadata {
    PageMetadata {
        title: format!("{} - Free Pet Health Calculators", SITE_NAME),
        description: "Free, science-backed calculators for your dog's calorie needs and age in human years.".into(),
        keywords: vec!["pet calculator".into(), "dog health".into()],
    }
}

pub fn calorie_page_metadata() -> PageMetadata {
    PageMetadata {
        title: format!("Dog Calorie Calculator - Daily Food Requirements | {}", SITE_NAME),
        description: "Calculate your dog's daily calorie needs with our free, science-backed calculator. Get personalized feeding recommendations based on weight, activity level, and body condition.".into(),
        keywords: vec![
            "dog calorie calculator".into(),
            "dog food calculator".into(),
            "how many calories dog".into(),
            "dog feeding guide".into(),
            "pet nutrition calculator".into(),
        ],
    }
}

pub fn age_page_metadata() -> PageMetadata {
    PageMetadata {
        title: format!("Dog Age Calculator - Convert Dog Years to Human Years | {}", SITE_NAME),
        description: "Accurately calculate your dog's age in human years with our free calculator. Uses the latest research considering dog size for precise age conversion.".into(),
        keywords: vec![
            "dog age calculator".into(),
            "dog years to human years".into(),
            "how old is my dog".into(),
            "dog age converter".into(),
            "pet age calculator".into(),
        ],
    }
}

pub fn breed_page_metadata(breed: &BreedInfo) -> PageMetadata {
    let lower = breed.name.to_lowercase();
    PageMetadata {
        title: format!(
            "{} Calorie Calculator - Daily Food Requirements | {}",
            breed.name, SITE_NAME
        ),
        description: format!(
            "Calculate exactly how many calories your {} needs daily. Free calculator with breed-specific recommendations for {}s.",
            breed.name, lower
        ),
        keywords: vec![
            format!("{} calorie calculator", lower),
            format!("{} food calculator", lower),
            format!("how much to feed {}", lower),
            format!("{} diet", lower),
            format!("{} nutrition", lower),
        ],
    }
}
