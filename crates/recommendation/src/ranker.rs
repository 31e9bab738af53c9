use std::collections::BTreeMap;

use alchm_alchemy::CompatibilityScorer;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::criteria::RecommendationCriteria;

/// Affinity bonus when a candidate's dominant element matches the
/// planetary-hour ruler's element.
const HOUR_RULER_BONUS: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingContext {
    pub total_candidates: usize,
    pub matching_candidates: usize,
    pub criteria_used: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Highest score first; ties keep candidate input order.
    pub items: Vec<Candidate>,
    /// Score per returned candidate id.
    pub scores: BTreeMap<String, f64>,
    pub context: RankingContext,
}

/// Filters, scores, sorts, and truncates a candidate set against a
/// target profile.
pub struct RecommendationRanker;

impl RecommendationRanker {
    /// Ranking pipeline, in order: categorical filters, compatibility
    /// scoring, optional seeded jitter, min-score cutoff, stable
    /// descending sort, limit.
    ///
    /// Excluded ingredients and allergens are poison: one hit
    /// disqualifies the candidate no matter how well its elements match.
    /// An empty candidate list, or one the filters empty out, is a valid
    /// empty result and never an error.
    pub fn rank(candidates: &[Candidate], criteria: &RecommendationCriteria) -> RecommendationResult {
        let total_candidates = candidates.len();
        let mut rng = criteria.seed.map(StdRng::seed_from_u64);

        let mut scored: Vec<(f64, &Candidate)> = candidates
            .iter()
            .filter(|c| Self::passes_filters(c, criteria))
            .map(|candidate| {
                let mut score = CompatibilityScorer::score(&candidate.elements, &criteria.target);
                if let Some(ruler) = criteria.hour_ruler
                    && ruler.ruling_element() == Some(candidate.elements.dominant())
                {
                    score += HOUR_RULER_BONUS;
                }
                if let Some(rng) = rng.as_mut() {
                    score *= 0.95 + rng.random::<f64>() * 0.1;
                }
                (score.clamp(0.0, 1.0), candidate)
            })
            .filter(|(score, _)| *score >= criteria.min_score)
            .collect();

        let matching_candidates = scored.len();

        // Stable sort: equal scores keep their input order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(criteria.limit);

        tracing::debug!(
            total_candidates,
            matching_candidates,
            returned = scored.len(),
            "ranked candidate set"
        );

        RecommendationResult {
            scores: scored
                .iter()
                .map(|(score, candidate)| (candidate.id.clone(), *score))
                .collect(),
            items: scored
                .into_iter()
                .map(|(_, candidate)| candidate.clone())
                .collect(),
            context: RankingContext {
                total_candidates,
                matching_candidates,
                criteria_used: criteria.active_filters(),
            },
        }
    }

    fn passes_filters(candidate: &Candidate, criteria: &RecommendationCriteria) -> bool {
        // Poison checks first: a single excluded ingredient or allergen
        // zeroes the candidate regardless of elemental fit.
        if criteria
            .exclude_ingredients
            .iter()
            .any(|name| candidate.contains_ingredient(name))
        {
            return false;
        }
        if criteria
            .exclude_allergens
            .iter()
            .any(|name| candidate.contains_allergen(name))
        {
            return false;
        }

        if let Some(season) = criteria.season
            && !candidate.seasons.is_empty()
            && !candidate.seasons.contains(&season)
        {
            return false;
        }
        if let Some(meal_type) = criteria.meal_type
            && !candidate.meal_types.is_empty()
            && !candidate.meal_types.contains(&meal_type)
        {
            return false;
        }
        if !criteria
            .dietary_restrictions
            .iter()
            .all(|d| d.exists_in(&candidate.dietary_tags))
        {
            return false;
        }
        criteria
            .include_ingredients
            .iter()
            .all(|name| candidate.contains_ingredient(name))
    }
}
