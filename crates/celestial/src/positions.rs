use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CelestialError;
use crate::types::{Planet, ZodiacSign};

/// A single body's placement as delivered by the astrologize API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub sign: ZodiacSign,
    pub degree: f64,
    #[serde(rename = "exactLongitude")]
    pub exact_longitude: f64,
    #[serde(rename = "isRetrograde")]
    pub is_retrograde: bool,
}

impl PlanetPosition {
    pub fn new(sign: ZodiacSign, degree: f64, is_retrograde: bool) -> Self {
        let sign_index = <ZodiacSign as strum::VariantArray>::VARIANTS
            .iter()
            .position(|s| *s == sign)
            .unwrap_or(0) as f64;
        PlanetPosition {
            sign,
            degree,
            exact_longitude: sign_index * 30.0 + degree,
            is_retrograde,
        }
    }
}

/// A full chart: one position per tracked body, keyed by planet.
///
/// The map form mirrors the upstream JSON record. Ordering is fixed
/// (BTreeMap) so derived vectors are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetaryPositions(pub BTreeMap<Planet, PlanetPosition>);

impl PlanetaryPositions {
    pub fn get(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.0.get(&planet)
    }

    pub fn insert(&mut self, planet: Planet, position: PlanetPosition) {
        self.0.insert(planet, position);
    }

    /// Core planets absent from this set, in fixed order.
    pub fn missing_core(&self) -> Vec<Planet> {
        Planet::CORE
            .iter()
            .copied()
            .filter(|p| !self.0.contains_key(p))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_core().is_empty()
    }

    /// Substitute the documented static fallback for every missing core
    /// planet. Substitution is per planet, logged as a warning, and never
    /// fails the whole set.
    pub fn with_fallbacks(mut self) -> Self {
        let missing = self.missing_core();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "incomplete position data, substituting fallback positions"
            );
            let fallback = fallback_positions();
            for planet in missing {
                if let Some(position) = fallback.get(planet) {
                    self.0.insert(planet, position.clone());
                }
            }
        }
        self
    }

    /// Strict variant for callers that must not silently degrade.
    pub fn require_complete(&self) -> Result<(), CelestialError> {
        let missing = self.missing_core();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CelestialError::IncompletePositionData { missing })
        }
    }

    /// Sign placements only, the shape the alchemical layer consumes.
    pub fn signs(&self) -> BTreeMap<Planet, ZodiacSign> {
        self.0.iter().map(|(p, pos)| (*p, pos.sign)).collect()
    }
}

/// Static fallback chart: positions for 2025-01-01 00:00 UTC. Used
/// whenever the upstream API is unreachable or returns a partial record.
const FALLBACK_TABLE: [(Planet, ZodiacSign, f64, bool); 10] = [
    (Planet::Sun, ZodiacSign::Capricorn, 10.66, false),
    (Planet::Moon, ZodiacSign::Aquarius, 10.21, false),
    (Planet::Mercury, ZodiacSign::Sagittarius, 26.68, false),
    (Planet::Venus, ZodiacSign::Aquarius, 2.72, false),
    (Planet::Mars, ZodiacSign::Leo, 1.41, true),
    (Planet::Jupiter, ZodiacSign::Gemini, 12.42, true),
    (Planet::Saturn, ZodiacSign::Pisces, 14.61, false),
    (Planet::Uranus, ZodiacSign::Taurus, 23.33, true),
    (Planet::Neptune, ZodiacSign::Pisces, 27.31, false),
    (Planet::Pluto, ZodiacSign::Aquarius, 1.13, false),
];

pub fn fallback_positions() -> PlanetaryPositions {
    let mut positions = PlanetaryPositions::default();
    for (planet, sign, degree, retrograde) in FALLBACK_TABLE {
        positions.insert(planet, PlanetPosition::new(sign, degree, retrograde));
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_complete() {
        let positions = fallback_positions();
        assert!(positions.is_complete());
        assert!(positions.require_complete().is_ok());
        assert_eq!(positions.0.len(), 10);
    }

    #[test]
    fn with_fallbacks_fills_only_missing_planets() {
        let mut positions = PlanetaryPositions::default();
        positions.insert(
            Planet::Sun,
            PlanetPosition::new(ZodiacSign::Leo, 15.0, false),
        );
        let filled = positions.with_fallbacks();
        assert!(filled.is_complete());
        // The supplied Sun placement survives substitution.
        assert_eq!(filled.get(Planet::Sun).unwrap().sign, ZodiacSign::Leo);
        assert_eq!(
            filled.get(Planet::Moon).unwrap().sign,
            ZodiacSign::Aquarius
        );
    }

    #[test]
    fn incomplete_set_reports_missing_planets() {
        let positions = PlanetaryPositions::default();
        let err = positions.require_complete().unwrap_err();
        match err {
            CelestialError::IncompletePositionData { missing } => {
                assert_eq!(missing.len(), 10);
                assert_eq!(missing[0], Planet::Sun);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exact_longitude_derived_from_sign_and_degree() {
        let position = PlanetPosition::new(ZodiacSign::Taurus, 5.5, false);
        assert!((position.exact_longitude - 35.5).abs() < 1e-9);
    }

    #[test]
    fn positions_deserialize_from_api_record() {
        let json = r#"{
            "Sun": {"sign": "capricorn", "degree": 10.66, "exactLongitude": 280.66, "isRetrograde": false},
            "North Node": {"sign": "aries", "degree": 1.2, "exactLongitude": 1.2, "isRetrograde": true}
        }"#;
        let positions: PlanetaryPositions = serde_json::from_str(json).unwrap();
        assert_eq!(
            positions.get(Planet::Sun).unwrap().sign,
            ZodiacSign::Capricorn
        );
        assert!(positions.get(Planet::NorthNode).unwrap().is_retrograde);
        assert!(!positions.is_complete());
    }
}
