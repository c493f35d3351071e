pub mod app;
pub mod clock;
pub mod components;
pub mod conditions;
pub mod events;
pub mod host;
pub mod plugin;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod time;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{
    build_sim_app, build_sim_app_deterministic, build_sim_app_seeded, build_sim_app_with_config,
};
pub use clock::SimClock;
pub use components::{
    BloodCough, Infected, MobState, MovementBlocked, Nested, Position, SpeedModifier, ToxinSource,
    ToxinState, ToxinSusceptible,
};
pub use conditions::is_authoritative;
pub use events::{FullRecovery, StatusEffectKind, StatusStacking, ToxinEffect};
pub use host::{HostPlugin, MovementSpeed, PresentationLog, StatusEffects, Vitals};
pub use plugin::SimPlugin;
pub use resources::{EcsSimConfig, NetRole, NeurotoxinRng, SimRng};
pub use schedule::{SimPhase, SimTick, ToxinSet, configure_sim_schedule};
pub use systems::neurotoxin::NeurotoxinPlugin;
pub use systems::neurotoxin::tiers::{Tier, TierBand, classify};
pub use time::SimTime;
