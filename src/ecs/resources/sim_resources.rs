use std::hash::{DefaultHasher, Hash, Hasher};
use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::ecs::clock::SimClock;
use crate::ecs::time::DEFAULT_TICK;

/// Which side of the simulation this app runs on.
///
/// Only the server mutates toxin state; a client is a read-only observer.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetRole {
    #[default]
    Server,
    Client,
}

/// Simulation configuration (seed, tick length, network role).
#[derive(Resource, Debug, Clone)]
pub struct EcsSimConfig {
    pub seed: u64,
    pub tick: Duration,
    pub role: NetRole,
}

impl Default for EcsSimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick: DEFAULT_TICK,
            role: NetRole::Server,
        }
    }
}

/// Global seed every per-domain RNG is derived from.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimRng {
    pub seed: u64,
}

/// Per-domain RNG for the neurotoxin systems.
#[derive(Resource)]
pub struct NeurotoxinRng(pub SmallRng);

impl Default for NeurotoxinRng {
    fn default() -> Self {
        Self(SmallRng::seed_from_u64(0))
    }
}

/// Derive a deterministic per-domain seed from the global seed, domain name, and tick count.
fn derive_domain_seed(seed: u64, domain: &str, tick: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    tick.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system that re-seeds the per-domain RNGs each tick.
/// Runs in `SimPhase::PreUpdate` before any domain systems.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let tick = world.resource::<SimClock>().tick_count;

    world.resource_mut::<NeurotoxinRng>().0 =
        SmallRng::seed_from_u64(derive_domain_seed(seed, "neurotoxin", tick));
}
