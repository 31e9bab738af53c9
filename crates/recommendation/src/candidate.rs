use alchm_alchemy::ElementalProperties;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CandidateKind {
    Recipe,
    Ingredient,
    Cuisine,
    CookingMethod,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    LowCarb,
}

impl DietaryRestriction {
    pub fn exists_in<'a>(
        &self,
        iterator: impl IntoIterator<Item = &'a DietaryRestriction>,
    ) -> bool {
        iterator.into_iter().any(|d| d == self)
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Anything rankable against a target profile: a recipe, an ingredient,
/// a cuisine, or a cooking method.
///
/// The elemental profile drives scoring; all other tags are categorical
/// metadata used only for filtering. Empty tag lists mean "applies to
/// everything" (an untagged candidate is never filtered out by a season
/// or meal-type criterion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub kind: CandidateKind,
    pub elements: ElementalProperties,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub dietary_tags: Vec<DietaryRestriction>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub meal_types: Vec<MealType>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Candidate {
    pub fn contains_ingredient(&self, name: &str) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.eq_ignore_ascii_case(name))
    }

    pub fn contains_allergen(&self, name: &str) -> bool {
        self.allergens.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_deserializes_with_defaulted_tags() {
        let json = r#"{
            "id": "tomato",
            "name": "Tomato",
            "kind": "ingredient",
            "elements": {"Fire": 0.4, "Water": 0.3, "Earth": 0.2, "Air": 0.1}
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.kind, CandidateKind::Ingredient);
        assert!(candidate.seasons.is_empty());
        assert!(candidate.ingredients.is_empty());
    }

    #[test]
    fn ingredient_matching_ignores_case() {
        let candidate = Candidate {
            id: "r1".into(),
            name: "Stir Fry".into(),
            kind: CandidateKind::Recipe,
            elements: ElementalProperties::balanced(),
            seasons: vec![],
            dietary_tags: vec![],
            allergens: vec!["Peanut".into()],
            meal_types: vec![],
            ingredients: vec!["Chili".into(), "Garlic".into()],
        };
        assert!(candidate.contains_ingredient("chili"));
        assert!(candidate.contains_allergen("peanut"));
        assert!(!candidate.contains_ingredient("tofu"));
    }
}
