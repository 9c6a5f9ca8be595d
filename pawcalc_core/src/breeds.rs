//! Built-in breed registry.
//!
//! Breeds are keyed by URL slug. The registry is built once and never
//! mutated; lookups hand out `'static` references.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The set of known breeds, keyed by slug
#[derive(Clone, Debug)]
pub struct BreedRegistry {
    pub breeds: HashMap<String, BreedInfo>,
}

/// Cached default registry - built once and reused across all lookups
static DEFAULT_REGISTRY: Lazy<BreedRegistry> = Lazy::new(build_default_registry);

/// Get a reference to the cached default registry
pub fn get_default_registry() -> &'static BreedRegistry {
    &DEFAULT_REGISTRY
}

/// Look up a breed by slug in the default registry
pub fn lookup(slug: &str) -> Result<&'static BreedInfo> {
    get_default_registry().get(slug)
}

/// All breeds in the default registry, sorted by slug
pub fn all_breeds() -> Vec<&'static BreedInfo> {
    get_default_registry().sorted()
}

/// Calorie multiplier for a breed's typical activity tier
pub fn breed_multiplier(breed: &BreedInfo) -> f64 {
    breed.activity_level.calorie_multiplier()
}

impl BreedActivity {
    pub fn calorie_multiplier(self) -> f64 {
        match self {
            BreedActivity::Low => 0.9,
            BreedActivity::Moderate => 1.0,
            BreedActivity::High => 1.1,
            BreedActivity::VeryHigh => 1.2,
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Builds the registry with the built-in breeds
pub fn build_default_registry() -> BreedRegistry {
    let entries = vec![
        BreedInfo {
            id: "golden-retriever".into(),
            slug: "golden-retriever".into(),
            name: "Golden Retriever".into(),
            average_weight: Range { min: 25.0, max: 34.0 },
            life_expectancy: Range { min: 10.0, max: 12.0 },
            size: SizeCategory::Large,
            activity_level: BreedActivity::High,
            description: "Golden Retrievers are friendly, intelligent, and devoted dogs known for their beautiful golden coats and gentle temperament.".into(),
            calorie_notes: "Golden Retrievers are prone to obesity, so careful calorie management is essential. They have high energy needs due to their active nature.".into(),
            popular_names: names(&["Max", "Charlie", "Cooper", "Buddy", "Tucker"]),
            health_considerations: names(&["Hip dysplasia", "Obesity tendency", "Heart conditions"]),
        },
        BreedInfo {
            id: "labrador-retriever".into(),
            slug: "labrador-retriever".into(),
            name: "Labrador Retriever".into(),
            average_weight: Range { min: 25.0, max: 36.0 },
            life_expectancy: Range { min: 10.0, max: 14.0 },
            size: SizeCategory::Large,
            activity_level: BreedActivity::High,
            description: "Labrador Retrievers are outgoing, active, and friendly dogs. They are America's most popular breed for good reason.".into(),
            calorie_notes: "Labs are notorious for their love of food and tendency to overeat. Strict portion control is crucial to prevent obesity.".into(),
            popular_names: names(&["Bella", "Lucy", "Daisy", "Molly", "Sadie"]),
            health_considerations: names(&["Obesity (very prone)", "Hip dysplasia", "Exercise-induced collapse"]),
        },
        BreedInfo {
            id: "french-bulldog".into(),
            slug: "french-bulldog".into(),
            name: "French Bulldog".into(),
            average_weight: Range { min: 8.0, max: 14.0 },
            life_expectancy: Range { min: 10.0, max: 12.0 },
            size: SizeCategory::Small,
            activity_level: BreedActivity::Low,
            description: "French Bulldogs are adaptable, playful, and smart companion dogs with their signature bat ears and charming personality.".into(),
            calorie_notes: "Frenchies have lower calorie needs due to their brachycephalic nature and reduced exercise tolerance. Overfeeding leads to breathing difficulties.".into(),
            popular_names: names(&["Gus", "Winston", "Louie", "Frank", "Stella"]),
            health_considerations: names(&["Brachycephalic syndrome", "Heat sensitivity", "Spinal issues"]),
        },
        BreedInfo {
            id: "german-shepherd".into(),
            slug: "german-shepherd".into(),
            name: "German Shepherd".into(),
            average_weight: Range { min: 22.0, max: 40.0 },
            life_expectancy: Range { min: 9.0, max: 13.0 },
            size: SizeCategory::Large,
            activity_level: BreedActivity::VeryHigh,
            description: "German Shepherds are confident, courageous, and smart working dogs known for their versatility and loyalty.".into(),
            calorie_notes: "GSDs have high calorie requirements due to their active nature and muscular build. Working dogs may need even more calories.".into(),
            popular_names: names(&["Rex", "Zeus", "Duke", "Bear", "Rocky"]),
            health_considerations: names(&["Hip dysplasia", "Degenerative myelopathy", "Bloat"]),
        },
        BreedInfo {
            id: "poodle".into(),
            slug: "poodle".into(),
            name: "Poodle".into(),
            average_weight: Range { min: 18.0, max: 32.0 },
            life_expectancy: Range { min: 12.0, max: 15.0 },
            size: SizeCategory::Medium,
            activity_level: BreedActivity::High,
            description: "Poodles are exceptionally smart and active dogs that come in three sizes. They are known for their curly, hypoallergenic coats.".into(),
            calorie_notes: "Standard Poodles are athletic dogs with moderate to high calorie needs. Their intelligence means they benefit from food puzzles and enrichment.".into(),
            popular_names: names(&["Coco", "Sophie", "Teddy", "Milo", "Oliver"]),
            health_considerations: names(&["Hip dysplasia", "Progressive retinal atrophy", "Bloat"]),
        },
    ];

    let breeds = entries
        .into_iter()
        .map(|breed| (breed.slug.clone(), breed))
        .collect();

    BreedRegistry { breeds }
}

impl BreedRegistry {
    pub fn get(&self, slug: &str) -> Result<&BreedInfo> {
        self.breeds
            .get(slug.trim())
            .ok_or_else(|| Error::NotFound(format!("no breed with slug '{}'", slug)))
    }

    pub fn sorted(&self) -> Vec<&BreedInfo> {
        let mut breeds: Vec<_> = self.breeds.values().collect();
        breeds.sort_by(|a, b| a.slug.cmp(&b.slug));
        breeds
    }

    /// Validate the registry for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (slug, breed) in &self.breeds {
            if slug.is_empty() || breed.slug.is_empty() || breed.id.is_empty() {
                errors.push("Breed has empty slug or ID".to_string());
            }
            if slug != &breed.slug {
                errors.push(format!(
                    "Registry key '{}' doesn't match breed.slug '{}'",
                    slug, breed.slug
                ));
            }
            if breed.name.is_empty() {
                errors.push(format!("Breed '{}' has empty name", slug));
            }

            let weight = breed.average_weight;
            if weight.min.is_nan() || weight.min <= 0.0 {
                errors.push(format!(
                    "Breed '{}': minimum weight {} is not positive",
                    slug, weight.min
                ));
            }
            if weight.min > weight.max {
                errors.push(format!(
                    "Breed '{}': min weight {} > max {}",
                    slug, weight.min, weight.max
                ));
            }

            let life = breed.life_expectancy;
            if life.min > life.max {
                errors.push(format!(
                    "Breed '{}': min life expectancy {} > max {}",
                    slug, life.min, life.max
                ));
            }

            if breed.popular_names.is_empty() {
                errors.push(format!("Breed '{}' has no popular names", slug));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = build_default_registry();
        assert_eq!(registry.breeds.len(), 5);
    }

    #[test]
    fn test_default_registry_validates() {
        let errors = get_default_registry().validate();
        assert!(
            errors.is_empty(),
            "Default registry has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_lookup_known_slug() {
        let breed = lookup("french-bulldog").unwrap();
        assert_eq!(breed.name, "French Bulldog");
        assert_eq!(breed.size, SizeCategory::Small);
    }

    #[test]
    fn test_lookup_unknown_slug() {
        assert!(matches!(lookup("dachshund"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_breed_multipliers() {
        assert_eq!(breed_multiplier(lookup("german-shepherd").unwrap()), 1.2);
        assert_eq!(breed_multiplier(lookup("french-bulldog").unwrap()), 0.9);
        assert_eq!(breed_multiplier(lookup("poodle").unwrap()), 1.1);
        assert_eq!(BreedActivity::Moderate.calorie_multiplier(), 1.0);
    }

    #[test]
    fn test_seed_weight_is_rounded_midpoint() {
        let golden = lookup("golden-retriever").unwrap();
        assert_eq!(golden.midpoint_weight_kg(), 29.5);
        assert_eq!(golden.seed_weight_kg(), 30.0);
        assert_eq!(lookup("french-bulldog").unwrap().seed_weight_kg(), 11.0);
    }

    #[test]
    fn test_obesity_prone_breeds() {
        assert!(lookup("golden-retriever").unwrap().prone_to_obesity());
        assert!(lookup("labrador-retriever").unwrap().prone_to_obesity());
        assert!(!lookup("german-shepherd").unwrap().prone_to_obesity());
        assert!(!lookup("poodle").unwrap().prone_to_obesity());
    }

    #[test]
    fn test_all_breeds_sorted() {
        let slugs: Vec<_> = all_breeds().iter().map(|b| b.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "french-bulldog",
                "german-shepherd",
                "golden-retriever",
                "labrador-retriever",
                "poodle"
            ]
        );
    }

    #[test]
    fn test_validate_catches_inverted_range() {
        let mut registry = build_default_registry();
        if let Some(poodle) = registry.breeds.get_mut("poodle") {
            poodle.average_weight = Range { min: 40.0, max: 10.0 };
        }
        let errors = registry.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("min weight"));
    }
}
