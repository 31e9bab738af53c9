pub mod error;
pub mod hour;
pub mod lunar;
pub mod positions;
pub mod types;

pub use error::CelestialError;
pub use hour::{CHALDEAN_ORDER, SolarDay, day_ruler, hour_ruler};
pub use lunar::{LunarPhase, LunarPhaseName, lunar_phase};
pub use positions::{PlanetPosition, PlanetaryPositions, fallback_positions};
pub use types::{Element, Modality, Planet, ZodiacSign};
