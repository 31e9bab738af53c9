use thiserror::Error;

use crate::types::Planet;

#[derive(Error, Debug)]
pub enum CelestialError {
    #[error("Ecliptic longitude out of range: {0}")]
    InvalidLongitude(f64),

    #[error("Incomplete position data: missing {missing:?}")]
    IncompletePositionData { missing: Vec<Planet> },
}
