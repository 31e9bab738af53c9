use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Mean synodic month in days.
const SYNODIC_PERIOD: f64 = 29.530_588_67;

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum LunarPhaseName {
    #[strum(serialize = "New Moon")]
    NewMoon,
    #[strum(serialize = "Waxing Crescent")]
    WaxingCrescent,
    #[strum(serialize = "First Quarter")]
    FirstQuarter,
    #[strum(serialize = "Waxing Gibbous")]
    WaxingGibbous,
    #[strum(serialize = "Full Moon")]
    FullMoon,
    #[strum(serialize = "Waning Gibbous")]
    WaningGibbous,
    #[strum(serialize = "Last Quarter")]
    LastQuarter,
    #[strum(serialize = "Waning Crescent")]
    WaningCrescent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhase {
    pub name: LunarPhaseName,
    /// Illuminated fraction of the lunar disc, 0.0 new to 1.0 full.
    pub illumination: f64,
}

/// Approximate lunar phase at `at`, derived from the mean synodic cycle
/// anchored to the 2023-01-21 20:53 UTC new moon. Deterministic; accuracy
/// is within a few hours, which is plenty for ingredient affinity.
pub fn lunar_phase(at: DateTime<Utc>) -> LunarPhase {
    let anchor = Utc.with_ymd_and_hms(2023, 1, 21, 20, 53, 0).unwrap();
    let days = (at - anchor).num_seconds() as f64 / 86_400.0;
    let position = (days / SYNODIC_PERIOD).rem_euclid(1.0);
    let illumination = 0.5 * (1.0 - (2.0 * std::f64::consts::PI * position).cos());

    let name = if !(0.03..=0.97).contains(&position) {
        LunarPhaseName::NewMoon
    } else if (0.22..0.28).contains(&position) {
        LunarPhaseName::FirstQuarter
    } else if (0.47..0.53).contains(&position) {
        LunarPhaseName::FullMoon
    } else if (0.72..0.78).contains(&position) {
        LunarPhaseName::LastQuarter
    } else if position < 0.25 {
        LunarPhaseName::WaxingCrescent
    } else if position < 0.5 {
        LunarPhaseName::WaxingGibbous
    } else if position < 0.75 {
        LunarPhaseName::WaningGibbous
    } else {
        LunarPhaseName::WaningCrescent
    };

    LunarPhase { name, illumination }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_instant_is_a_new_moon() {
        let phase = lunar_phase(Utc.with_ymd_and_hms(2023, 1, 21, 20, 53, 0).unwrap());
        assert_eq!(phase.name, LunarPhaseName::NewMoon);
        assert!(phase.illumination < 0.01);
    }

    #[test]
    fn half_cycle_later_is_full() {
        let anchor = Utc.with_ymd_and_hms(2023, 1, 21, 20, 53, 0).unwrap();
        let phase = lunar_phase(anchor + chrono::Duration::seconds((SYNODIC_PERIOD * 43_200.0) as i64));
        assert_eq!(phase.name, LunarPhaseName::FullMoon);
        assert!(phase.illumination > 0.99);
    }

    #[test]
    fn phase_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2025, 8, 30, 12, 0, 0).unwrap();
        assert_eq!(lunar_phase(at), lunar_phase(at));
    }

    #[test]
    fn dates_before_anchor_still_resolve() {
        let phase = lunar_phase(Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap());
        assert!((0.0..=1.0).contains(&phase.illumination));
    }
}
