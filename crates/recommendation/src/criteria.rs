use alchm_alchemy::ElementalProperties;
use alchm_celestial::Planet;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::candidate::{DietaryRestriction, MealType, Season};

fn default_limit() -> usize {
    10
}

fn default_min_score() -> f64 {
    0.5
}

/// Fully typed ranking request, validated once at the API boundary.
///
/// The target profile is the subject the candidates are compared
/// against; everything else is categorical filtering, cutoffs, and the
/// optional context signals.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    /// Subject elemental profile, usually derived from current planetary
    /// positions.
    pub target: ElementalProperties,

    /// Keep only candidates tagged for this season (untagged candidates
    /// always pass).
    #[serde(default)]
    pub season: Option<Season>,

    /// Candidates must carry every requested dietary tag.
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,

    /// Any allergen hit disqualifies the candidate outright.
    #[serde(default)]
    pub exclude_allergens: Vec<String>,

    /// Candidates must contain every listed ingredient.
    #[serde(default)]
    pub include_ingredients: Vec<String>,

    /// Any excluded ingredient disqualifies the candidate outright.
    #[serde(default)]
    pub exclude_ingredients: Vec<String>,

    #[serde(default)]
    pub meal_type: Option<MealType>,

    /// Current planetary-hour ruler; candidates sharing its element get
    /// a small affinity bonus.
    #[serde(default)]
    pub hour_ruler: Option<Planet>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,

    #[serde(default = "default_min_score")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_score: f64,

    /// Optional seed for result diversification. Same seed, same order;
    /// absent means fully deterministic scoring with no jitter.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RecommendationCriteria {
    pub fn for_target(target: ElementalProperties) -> Self {
        RecommendationCriteria {
            target,
            season: None,
            dietary_restrictions: Vec::new(),
            exclude_allergens: Vec::new(),
            include_ingredients: Vec::new(),
            exclude_ingredients: Vec::new(),
            meal_type: None,
            hour_ruler: None,
            limit: default_limit(),
            min_score: default_min_score(),
            seed: None,
        }
    }

    /// Names of the active criteria, for result observability.
    pub fn active_filters(&self) -> Vec<String> {
        let mut used = vec!["elemental_target".to_string()];
        if self.season.is_some() {
            used.push("season".to_string());
        }
        if !self.dietary_restrictions.is_empty() {
            used.push("dietary_restrictions".to_string());
        }
        if !self.exclude_allergens.is_empty() {
            used.push("exclude_allergens".to_string());
        }
        if !self.include_ingredients.is_empty() {
            used.push("include_ingredients".to_string());
        }
        if !self.exclude_ingredients.is_empty() {
            used.push("exclude_ingredients".to_string());
        }
        if self.meal_type.is_some() {
            used.push("meal_type".to_string());
        }
        if self.hour_ruler.is_some() {
            used.push("planetary_hour".to_string());
        }
        used
    }
}
