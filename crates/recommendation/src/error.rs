use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("Invalid recommendation criteria: {0}")]
    InvalidCriteria(#[from] validator::ValidationErrors),
}
