use serde::{Deserialize, Serialize};

use crate::elemental::ElementalProperties;

/// Thermodynamic reading of an elemental profile: how hot, chaotic, and
/// reactive a dish or chart runs, plus the aggregate harmony measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermodynamicProfile {
    /// [-1, 1]
    pub heat: f64,
    /// [-1, 1]
    pub entropy: f64,
    /// [-1, 1]
    pub reactivity: f64,
    /// [0, 200]
    #[serde(rename = "gregsEnergy")]
    pub gregs_energy: f64,
    /// [0, 1]
    pub equilibrium: f64,
}

impl ThermodynamicProfile {
    pub fn from_elements(elements: &ElementalProperties) -> Self {
        let heat = elements.fire * 0.8 + elements.air * 0.3 - elements.water * 0.2;
        let entropy =
            elements.air * 0.7 + elements.water * 0.5 - elements.earth * 0.4 - elements.fire * 0.3;
        let reactivity = elements.fire * 0.9 + elements.air * 0.6
            - elements.water * 0.3
            - elements.earth * 0.5;

        // Harmony peaks at the balanced profile and decays with distance
        // from it on every axis.
        let harmony = 1.0
            - (0.25 - elements.fire).abs()
            - (0.25 - elements.water).abs()
            - (0.25 - elements.earth).abs()
            - (0.25 - elements.air).abs();
        let gregs_energy = harmony * 100.0 * (1.0 + heat * 0.1 - entropy * 0.1 + reactivity * 0.05);

        let equilibrium = 1.0 - (heat.abs() + entropy.abs() + reactivity.abs()) / 3.0;

        ThermodynamicProfile {
            heat: heat.clamp(-1.0, 1.0),
            entropy: entropy.clamp(-1.0, 1.0),
            reactivity: reactivity.clamp(-1.0, 1.0),
            gregs_energy: gregs_energy.clamp(0.0, 200.0),
            equilibrium: equilibrium.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_profile_is_near_equilibrium() {
        let thermo = ThermodynamicProfile::from_elements(&ElementalProperties::balanced());
        assert!(thermo.equilibrium > 0.7);
        assert!(thermo.gregs_energy > 90.0);
    }

    #[test]
    fn fire_heavy_profile_runs_hot_and_reactive() {
        let fiery = ElementalProperties::new(0.8, 0.05, 0.05, 0.1);
        let thermo = ThermodynamicProfile::from_elements(&fiery);
        assert!(thermo.heat > 0.5);
        assert!(thermo.reactivity > 0.5);
    }

    #[test]
    fn earth_heavy_profile_resists_entropy() {
        let earthy = ElementalProperties::new(0.05, 0.15, 0.7, 0.1);
        let thermo = ThermodynamicProfile::from_elements(&earthy);
        assert!(thermo.entropy < 0.0);
    }

    #[test]
    fn outputs_respect_their_clamps() {
        // Deliberately un-normalized extreme input.
        let extreme = ElementalProperties::new(5.0, 0.0, 0.0, 5.0);
        let thermo = ThermodynamicProfile::from_elements(&extreme);
        assert!((-1.0..=1.0).contains(&thermo.heat));
        assert!((-1.0..=1.0).contains(&thermo.entropy));
        assert!((-1.0..=1.0).contains(&thermo.reactivity));
        assert!((0.0..=200.0).contains(&thermo.gregs_energy));
        assert!((0.0..=1.0).contains(&thermo.equilibrium));
    }
}
