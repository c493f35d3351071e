pub mod common;
pub mod toxin;

pub use common::{Infected, MobState, MovementBlocked, Nested, Position, ToxinSusceptible};
pub use toxin::{BloodCough, SpeedModifier, ToxinSource, ToxinState};
