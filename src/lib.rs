pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod positions;
pub mod routes;

pub use catalog::Catalog;
pub use config::Config;
pub use error::AppError;
pub use positions::PositionService;

/// Create the app router wired to the embedded catalog and an offline
/// position service. Used by integration tests that never touch the
/// upstream API.
pub fn create_app() -> anyhow::Result<axum::Router> {
    let state = routes::AppState {
        config: Config::load(None)?,
        positions: std::sync::Arc::new(PositionService::offline()),
        catalog: std::sync::Arc::new(Catalog::embedded()?),
    };
    Ok(routes::router(state))
}
