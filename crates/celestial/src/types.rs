use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The four base elements used throughout the alchemical model.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    /// Fire pairs with Air, Water pairs with Earth. All other
    /// cross-element pairings are neutral.
    pub fn harmonizes_with(self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Air)
                | (Element::Air, Element::Fire)
                | (Element::Water, Element::Earth)
                | (Element::Earth, Element::Water)
        )
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The 12 zodiac signs. Wire format is lowercase, matching the
/// astrologize API convention.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Dominant element of the sign. Total and constant-time; the enum
    /// makes an invalid sign unrepresentable.
    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Modality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Modality::Fixed
            }
            ZodiacSign::Gemini | ZodiacSign::Virgo | ZodiacSign::Sagittarius
            | ZodiacSign::Pisces => Modality::Mutable,
        }
    }

    /// Sign occupying the given ecliptic longitude. Each sign spans 30
    /// degrees starting from Aries at 0.
    pub fn from_longitude(longitude: f64) -> Result<ZodiacSign, crate::CelestialError> {
        if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
            return Err(crate::CelestialError::InvalidLongitude(longitude));
        }
        let index = (longitude / 30.0) as usize;
        Ok(<ZodiacSign as VariantArray>::VARIANTS[index.min(11)])
    }

    /// Tropical sun sign for a calendar date. Used for seasonal defaults
    /// when the caller has no fetched positions.
    pub fn from_date(date: NaiveDate) -> ZodiacSign {
        match (date.month(), date.day()) {
            (3, 21..) | (4, ..=19) => ZodiacSign::Aries,
            (4, _) | (5, ..=20) => ZodiacSign::Taurus,
            (5, _) | (6, ..=20) => ZodiacSign::Gemini,
            (6, _) | (7, ..=22) => ZodiacSign::Cancer,
            (7, _) | (8, ..=22) => ZodiacSign::Leo,
            (8, _) | (9, ..=22) => ZodiacSign::Virgo,
            (9, _) | (10, ..=22) => ZodiacSign::Libra,
            (10, _) | (11, ..=21) => ZodiacSign::Scorpio,
            (11, _) | (12, ..=21) => ZodiacSign::Sagittarius,
            (12, _) | (1, ..=19) => ZodiacSign::Capricorn,
            (1, _) | (2, ..=18) => ZodiacSign::Aquarius,
            _ => ZodiacSign::Pisces,
        }
    }
}

/// Celestial bodies tracked in a chart. The first ten are the required
/// scoring planets; nodes and the Ascendant are optional extras.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[strum(serialize = "North Node")]
    #[serde(rename = "North Node")]
    NorthNode,
    #[strum(serialize = "South Node")]
    #[serde(rename = "South Node")]
    SouthNode,
    Ascendant,
}

impl Planet {
    /// The ten planets a position set must carry to be considered complete.
    pub const CORE: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Chart-importance weight. Luminaries and the Ascendant dominate,
    /// personal planets matter more than social ones, outer planets and
    /// nodes least.
    pub fn chart_weight(self) -> f64 {
        match self {
            Planet::Sun | Planet::Moon | Planet::Ascendant => 3.0,
            Planet::Mercury | Planet::Venus | Planet::Mars => 1.5,
            Planet::Jupiter | Planet::Saturn => 1.0,
            Planet::Uranus | Planet::Neptune | Planet::Pluto => 0.5,
            Planet::NorthNode | Planet::SouthNode => 0.5,
        }
    }

    /// Element ruled by each of the seven classical planets, used for the
    /// planetary-hour affinity signal. Modern planets rule no hours.
    pub fn ruling_element(self) -> Option<Element> {
        match self {
            Planet::Sun | Planet::Jupiter | Planet::Mars => Some(Element::Fire),
            Planet::Venus | Planet::Saturn => Some(Element::Earth),
            Planet::Mercury => Some(Element::Air),
            Planet::Moon => Some(Element::Water),
            _ => None,
        }
    }
}
