use std::collections::BTreeMap;

use alchm_celestial::{Planet, ZodiacSign};

use crate::elemental::ElementalProperties;

/// Combines weighted per-planet sign placements into a single normalized
/// elemental profile.
pub struct ElementalAggregator;

impl ElementalAggregator {
    /// Each planet deposits its weight into the bucket of its sign's
    /// element; the buckets are then normalized to sum 1.0. Planets
    /// absent from `weights` count with weight 1.0. An empty chart has
    /// no information and yields the balanced default.
    pub fn aggregate(
        signs: &BTreeMap<Planet, ZodiacSign>,
        weights: &BTreeMap<Planet, f64>,
    ) -> ElementalProperties {
        let mut accumulator = ElementalProperties::new(0.0, 0.0, 0.0, 0.0);
        for (planet, sign) in signs {
            let weight = weights.get(planet).copied().unwrap_or(1.0);
            accumulator.add(sign.element(), weight);
        }
        accumulator.normalized()
    }

    /// Aggregate using the fixed chart-importance weights.
    pub fn aggregate_chart(signs: &BTreeMap<Planet, ZodiacSign>) -> ElementalProperties {
        let weights = signs
            .keys()
            .map(|planet| (*planet, planet.chart_weight()))
            .collect();
        Self::aggregate(signs, &weights)
    }
}
