use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::positions::PositionService;

mod calculate;
mod celestial;
mod health;
mod recommend;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub positions: Arc<PositionService>,
    pub catalog: Arc<Catalog>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Celestial state
        .route("/positions/current", get(celestial::current_positions))
        .route("/planetary/current-hour", get(celestial::current_hour))
        .route("/lunar/phase", get(celestial::lunar))
        // Recommendations
        .route("/recommend/recipes", post(recommend::recipes))
        .route("/recommend/ingredients", post(recommend::ingredients))
        .route("/recommend/cuisines", post(recommend::cuisines))
        .route("/recommend/methods", post(recommend::methods))
        // Raw calculations
        .route("/calculate/elemental", post(calculate::elemental))
        .route("/calculate/thermodynamics", post(calculate::thermodynamics))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
