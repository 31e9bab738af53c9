pub mod aggregate;
pub mod compat;
pub mod elemental;
pub mod esms;
pub mod thermo;

pub use aggregate::ElementalAggregator;
pub use compat::CompatibilityScorer;
pub use elemental::ElementalProperties;
pub use esms::{AlchemicalDeriver, AlchemicalProperties};
pub use thermo::ThermodynamicProfile;
