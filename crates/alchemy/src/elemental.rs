use alchm_celestial::Element;
use serde::{Deserialize, Serialize};

/// Tolerance for the sum-to-one invariant.
pub const NORMALIZATION_EPSILON: f64 = 1e-6;

/// Four-axis elemental profile of any entity: a chart, a recipe, an
/// ingredient, a cuisine, or a cooking method.
///
/// A finished profile is normalized so the four components sum to 1.0;
/// un-normalized values only exist transiently during accumulation.
/// Wire keys are capitalized (`Fire`, `Water`, ...) to match the
/// upstream JSON convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementalProperties {
    #[serde(rename = "Fire")]
    pub fire: f64,
    #[serde(rename = "Water")]
    pub water: f64,
    #[serde(rename = "Earth")]
    pub earth: f64,
    #[serde(rename = "Air")]
    pub air: f64,
}

impl Default for ElementalProperties {
    fn default() -> Self {
        ElementalProperties::balanced()
    }
}

impl ElementalProperties {
    pub const fn new(fire: f64, water: f64, earth: f64, air: f64) -> Self {
        ElementalProperties {
            fire,
            water,
            earth,
            air,
        }
    }

    /// The neutral profile used when nothing is known about an entity.
    pub const fn balanced() -> Self {
        ElementalProperties::new(0.25, 0.25, 0.25, 0.25)
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Fire => self.fire,
            Element::Water => self.water,
            Element::Earth => self.earth,
            Element::Air => self.air,
        }
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        match element {
            Element::Fire => self.fire += amount,
            Element::Water => self.water += amount,
            Element::Earth => self.earth += amount,
            Element::Air => self.air += amount,
        }
    }

    pub fn sum(&self) -> f64 {
        self.fire + self.water + self.earth + self.air
    }

    /// Scale so components sum to 1.0. A zero or non-finite total cannot
    /// be normalized and yields the balanced default instead of dividing
    /// by zero.
    pub fn normalized(self) -> Self {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            return ElementalProperties::balanced();
        }
        ElementalProperties::new(
            self.fire / total,
            self.water / total,
            self.earth / total,
            self.air / total,
        )
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < NORMALIZATION_EPSILON
    }

    /// The single highest-valued element. Ties resolve to the first
    /// maximum in the fixed Fire, Water, Earth, Air order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        let mut best_value = self.fire;
        for element in [Element::Water, Element::Earth, Element::Air] {
            let value = self.get(element);
            if value > best_value {
                best = element;
                best_value = value;
            }
        }
        best
    }
}
