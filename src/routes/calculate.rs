use alchm_alchemy::{
    AlchemicalDeriver, AlchemicalProperties, ElementalAggregator, ElementalProperties,
    ThermodynamicProfile,
};
use alchm_celestial::{Element, PlanetaryPositions, ZodiacSign};
use axum::Json;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ElementalResponse {
    pub elements: ElementalProperties,
    pub alchemical: AlchemicalProperties,
    pub dominant_element: Element,
}

/// POST /calculate/elemental - full alchemical reading of a planetary
/// chart. Missing core planets are substituted from the fallback table.
pub async fn elemental(
    Json(positions): Json<PlanetaryPositions>,
) -> Result<Json<ElementalResponse>, AppError> {
    for position in positions.0.values() {
        ZodiacSign::from_longitude(position.exact_longitude)?;
    }
    let positions = positions.with_fallbacks();
    let signs = positions.signs();
    let elements = ElementalAggregator::aggregate_chart(&signs);
    let alchemical = AlchemicalDeriver::derive(&signs);
    Ok(Json(ElementalResponse {
        elements,
        alchemical,
        dominant_element: elements.dominant(),
    }))
}

/// POST /calculate/thermodynamics - heat, entropy, reactivity, Greg's
/// energy, and equilibrium for an elemental profile.
pub async fn thermodynamics(
    Json(elements): Json<ElementalProperties>,
) -> Result<Json<ThermodynamicProfile>, AppError> {
    let elements = elements.normalized();
    Ok(Json(ThermodynamicProfile::from_elements(&elements)))
}
