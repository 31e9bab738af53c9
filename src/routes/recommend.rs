use alchm_alchemy::{ElementalAggregator, ElementalProperties};
use alchm_celestial::hour_ruler;
use alchm_recommendation::{
    CandidateKind, DietaryRestriction, MealType, RecommendationCriteria, RecommendationRanker,
    RecommendationResult, Season,
};
use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{AppState, celestial};
use crate::error::AppError;

/// Recommendation request body. Every field is optional; a missing
/// target is resolved from the current planetary chart.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    pub target: Option<ElementalProperties>,
    pub season: Option<Season>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub exclude_allergens: Vec<String>,
    pub include_ingredients: Vec<String>,
    pub exclude_ingredients: Vec<String>,
    pub meal_type: Option<MealType>,
    /// Boost candidates sharing the current hour ruler's element.
    pub use_planetary_hour: bool,
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    /// The resolved target the candidates were scored against.
    pub target: ElementalProperties,
    #[serde(flatten)]
    pub result: RecommendationResult,
}

pub async fn recipes(
    state: State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    recommend(state, CandidateKind::Recipe, request).await
}

pub async fn ingredients(
    state: State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    recommend(state, CandidateKind::Ingredient, request).await
}

pub async fn cuisines(
    state: State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    recommend(state, CandidateKind::Cuisine, request).await
}

pub async fn methods(
    state: State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    recommend(state, CandidateKind::CookingMethod, request).await
}

async fn recommend(
    State(state): State<AppState>,
    kind: CandidateKind,
    request: RecommendRequest,
) -> Result<Json<RecommendResponse>, AppError> {
    let now = Utc::now();

    let target = match request.target {
        Some(target) => target.normalized(),
        None => {
            let positions = state.positions.current(now).await;
            ElementalAggregator::aggregate_chart(&positions.signs())
        }
    };

    let mut criteria = RecommendationCriteria::for_target(target);
    criteria.season = request.season;
    criteria.dietary_restrictions = request.dietary_restrictions;
    criteria.exclude_allergens = request.exclude_allergens;
    criteria.include_ingredients = request.include_ingredients;
    criteria.exclude_ingredients = request.exclude_ingredients;
    criteria.meal_type = request.meal_type;
    criteria.seed = request.seed;
    if request.use_planetary_hour {
        let frame = celestial::default_solar_frame(now);
        criteria.hour_ruler = hour_ruler(now, &frame);
    }
    if let Some(limit) = request.limit {
        criteria.limit = limit;
    }
    if let Some(min_score) = request.min_score {
        criteria.min_score = min_score;
    }
    criteria
        .validate()
        .map_err(alchm_recommendation::RecommendationError::from)?;

    let candidates = state.catalog.by_kind(kind);
    let result = RecommendationRanker::rank(&candidates, &criteria);

    tracing::debug!(
        kind = %kind,
        total = result.context.total_candidates,
        matched = result.context.matching_candidates,
        returned = result.items.len(),
        "ranked candidates"
    );

    Ok(Json(RecommendResponse { target, result }))
}
