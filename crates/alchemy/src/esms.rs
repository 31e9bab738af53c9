use std::collections::BTreeMap;

use alchm_celestial::{Element, Planet, ZodiacSign};
use serde::{Deserialize, Serialize};

/// The four alchemical quantities. Unlike [`crate::ElementalProperties`]
/// these carry no fixed-sum invariant; values are relative intensities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlchemicalProperties {
    #[serde(rename = "Spirit")]
    pub spirit: f64,
    #[serde(rename = "Essence")]
    pub essence: f64,
    #[serde(rename = "Matter")]
    pub matter: f64,
    #[serde(rename = "Substance")]
    pub substance: f64,
}

impl AlchemicalProperties {
    fn add_scaled(&mut self, other: AlchemicalProperties, factor: f64) {
        self.spirit += other.spirit * factor;
        self.essence += other.essence * factor;
        self.matter += other.matter * factor;
        self.substance += other.substance * factor;
    }
}

/// Fixed per-planet ESMS contribution table. Luminous, active bodies
/// feed Spirit; receptive ones feed Essence and Matter; Mercury and
/// Neptune touch Substance. Constant lookup, never computed.
const fn planet_contribution(planet: Planet) -> AlchemicalProperties {
    match planet {
        Planet::Sun => AlchemicalProperties {
            spirit: 1.0,
            essence: 0.0,
            matter: 0.0,
            substance: 0.0,
        },
        Planet::Moon => AlchemicalProperties {
            spirit: 0.0,
            essence: 1.0,
            matter: 1.0,
            substance: 0.0,
        },
        Planet::Mercury => AlchemicalProperties {
            spirit: 1.0,
            essence: 0.0,
            matter: 0.0,
            substance: 1.0,
        },
        Planet::Venus | Planet::Mars | Planet::Uranus | Planet::Pluto => AlchemicalProperties {
            spirit: 0.0,
            essence: 1.0,
            matter: 1.0,
            substance: 0.0,
        },
        Planet::Jupiter => AlchemicalProperties {
            spirit: 1.0,
            essence: 1.0,
            matter: 0.0,
            substance: 0.0,
        },
        Planet::Saturn => AlchemicalProperties {
            spirit: 1.0,
            essence: 0.0,
            matter: 1.0,
            substance: 0.0,
        },
        Planet::Neptune => AlchemicalProperties {
            spirit: 0.0,
            essence: 1.0,
            matter: 0.0,
            substance: 1.0,
        },
        Planet::NorthNode | Planet::SouthNode | Planet::Ascendant => AlchemicalProperties {
            spirit: 0.0,
            essence: 0.0,
            matter: 0.0,
            substance: 0.0,
        },
    }
}

/// Classical element-to-quantity correspondence: Fire animates Spirit,
/// Water carries Essence, Earth builds Matter, Air binds Substance.
const fn element_contribution(element: Element) -> AlchemicalProperties {
    match element {
        Element::Fire => AlchemicalProperties {
            spirit: 1.0,
            essence: 0.0,
            matter: 0.0,
            substance: 0.0,
        },
        Element::Water => AlchemicalProperties {
            spirit: 0.0,
            essence: 1.0,
            matter: 0.0,
            substance: 0.0,
        },
        Element::Earth => AlchemicalProperties {
            spirit: 0.0,
            essence: 0.0,
            matter: 1.0,
            substance: 0.0,
        },
        Element::Air => AlchemicalProperties {
            spirit: 0.0,
            essence: 0.0,
            matter: 0.0,
            substance: 1.0,
        },
    }
}

/// Derives Spirit/Essence/Matter/Substance from a chart's sign placements.
pub struct AlchemicalDeriver;

impl AlchemicalDeriver {
    /// Every core planet adds its fixed contribution plus the
    /// contribution of its sign's element, scaled by the chart-importance
    /// weight. Missing planets are skipped, never an error. The output is
    /// intentionally not normalized.
    pub fn derive(signs: &BTreeMap<Planet, ZodiacSign>) -> AlchemicalProperties {
        let mut totals = AlchemicalProperties::default();
        for planet in Planet::CORE {
            let Some(sign) = signs.get(&planet) else {
                continue;
            };
            let weight = planet.chart_weight();
            totals.add_scaled(planet_contribution(planet), weight);
            totals.add_scaled(element_contribution(sign.element()), weight);
        }
        totals
    }
}
