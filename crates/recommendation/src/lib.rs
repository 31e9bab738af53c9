pub mod candidate;
pub mod criteria;
pub mod error;
pub mod ranker;

pub use candidate::{Candidate, CandidateKind, DietaryRestriction, MealType, Season};
pub use criteria::RecommendationCriteria;
pub use error::RecommendationError;
pub use ranker::{RankingContext, RecommendationRanker, RecommendationResult};
