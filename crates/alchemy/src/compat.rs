use alchm_celestial::Element;
use strum::VariantArray;

use crate::elemental::ElementalProperties;

const ABSOLUTE_WEIGHT: f64 = 0.4;
const RELATIVE_WEIGHT: f64 = 0.35;
const DOMINANT_WEIGHT: f64 = 0.25;

/// Similarity between two elemental profiles, in [0, 1].
///
/// Blends three signals: per-element absolute closeness, per-element
/// relative-ratio closeness, and dominant-element harmony. Absolute
/// difference alone penalizes small components unfairly against large
/// ones; the ratio term corrects for that, and the dominant bonus keeps
/// a Fire-heavy profile compatible with a differently weighted but still
/// Fire-led one.
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn score(a: &ElementalProperties, b: &ElementalProperties) -> f64 {
        let combined = ABSOLUTE_WEIGHT * Self::absolute_similarity(a, b)
            + RELATIVE_WEIGHT * Self::relative_similarity(a, b)
            + DOMINANT_WEIGHT * Self::dominant_harmony(a, b);
        combined.clamp(0.0, 1.0)
    }

    /// Weighted mean of `1 - |a[e] - b[e]|`. Weighting each element by
    /// `max(a[e], b[e]) + 0.1` keeps near-zero elements from dominating
    /// the average.
    fn absolute_similarity(a: &ElementalProperties, b: &ElementalProperties) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for element in Element::VARIANTS {
            let (va, vb) = (a.get(*element), b.get(*element));
            let weight = va.max(vb) + 0.1;
            weighted_sum += weight * (1.0 - (va - vb).abs());
            weight_total += weight;
        }
        weighted_sum / weight_total
    }

    /// Mean over elements of the closeness of each element's ratio to the
    /// sum of the other three.
    fn relative_similarity(a: &ElementalProperties, b: &ElementalProperties) -> f64 {
        let mut total = 0.0;
        for element in Element::VARIANTS {
            let ratio_a = Self::ratio_to_rest(a, *element);
            let ratio_b = Self::ratio_to_rest(b, *element);
            total += 1.0 - (ratio_a - ratio_b).abs() / ratio_a.max(ratio_b).max(0.1);
        }
        total / 4.0
    }

    fn ratio_to_rest(v: &ElementalProperties, element: Element) -> f64 {
        let value = v.get(element);
        let rest = v.sum() - value;
        value / rest.max(1e-9)
    }

    /// 1.0 for identical dominant elements, 0.8 for a harmonious pair
    /// (Fire-Air, Water-Earth), 0.4 otherwise.
    fn dominant_harmony(a: &ElementalProperties, b: &ElementalProperties) -> f64 {
        let (da, db) = (a.dominant(), b.dominant());
        if da == db {
            1.0
        } else if da.harmonizes_with(db) {
            0.8
        } else {
            0.4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> Vec<ElementalProperties> {
        vec![
            ElementalProperties::balanced(),
            ElementalProperties::new(0.7, 0.1, 0.1, 0.1),
            ElementalProperties::new(0.1, 0.7, 0.1, 0.1),
            ElementalProperties::new(0.4, 0.1, 0.1, 0.4),
            ElementalProperties::new(0.0, 0.5, 0.5, 0.0),
        ]
    }

    #[test]
    fn self_similarity_is_perfect() {
        for p in profiles() {
            assert!(
                (CompatibilityScorer::score(&p, &p) - 1.0).abs() < 1e-12,
                "score({p:?}, itself) != 1.0"
            );
        }
    }

    #[test]
    fn score_is_symmetric() {
        let all = profiles();
        for a in &all {
            for b in &all {
                let forward = CompatibilityScorer::score(a, b);
                let backward = CompatibilityScorer::score(b, a);
                assert!((forward - backward).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let all = profiles();
        for a in &all {
            for b in &all {
                let score = CompatibilityScorer::score(a, b);
                assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
            }
        }
    }

    #[test]
    fn opposed_dominants_score_from_the_formula() {
        // Fire-led target against a Water-led candidate: absolute 0.52,
        // relative 11/21, dominant 0.4.
        let target = ElementalProperties::new(0.7, 0.1, 0.1, 0.1);
        let candidate = ElementalProperties::new(0.1, 0.7, 0.1, 0.1);
        let expected = 0.4 * 0.52 + 0.35 * (11.0 / 21.0) + 0.25 * 0.4;
        let score = CompatibilityScorer::score(&target, &candidate);
        assert!((score - expected).abs() < 1e-12);
        assert!(score < 0.5);
    }

    #[test]
    fn harmonious_dominants_beat_opposed_ones() {
        let fire = ElementalProperties::new(0.6, 0.1, 0.1, 0.2);
        let air = ElementalProperties::new(0.2, 0.1, 0.1, 0.6);
        let water = ElementalProperties::new(0.2, 0.6, 0.1, 0.1);
        assert!(
            CompatibilityScorer::score(&fire, &air) > CompatibilityScorer::score(&fire, &water)
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = ElementalProperties::new(0.3, 0.3, 0.2, 0.2);
        let b = ElementalProperties::new(0.25, 0.35, 0.15, 0.25);
        assert_eq!(
            CompatibilityScorer::score(&a, &b).to_bits(),
            CompatibilityScorer::score(&a, &b).to_bits()
        );
    }
}
