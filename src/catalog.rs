use alchm_recommendation::{Candidate, CandidateKind};
use anyhow::{Context, Result};

/// The built-in candidate catalog: recipes, ingredients, cuisines, and
/// cooking methods with curated elemental profiles.
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Catalog compiled into the binary from `data/catalog.json`.
    pub fn embedded() -> Result<Self> {
        Self::from_json(include_str!("../data/catalog.json"))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let candidates: Vec<Candidate> =
            serde_json::from_str(json).context("failed to parse candidate catalog")?;
        Ok(Catalog { candidates })
    }

    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn by_kind(&self, kind: CandidateKind) -> Vec<Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_covers_every_kind() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        for kind in [
            CandidateKind::Recipe,
            CandidateKind::Ingredient,
            CandidateKind::Cuisine,
            CandidateKind::CookingMethod,
        ] {
            assert!(
                !catalog.by_kind(kind).is_empty(),
                "catalog has no {kind} entries"
            );
        }
    }

    #[test]
    fn embedded_profiles_are_normalized() {
        let catalog = Catalog::embedded().unwrap();
        for candidate in catalog.all() {
            assert!(
                candidate.elements.is_normalized(),
                "{} has a non-normalized profile",
                candidate.id
            );
        }
    }
}
