use std::time::Duration;

use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::events::{FullRecovery, ToxinEffect};
use super::resources::{EcsSimConfig, NeurotoxinRng, SimRng, distribute_rng};
use super::schedule::{SimPhase, configure_sim_schedule};
use crate::config::ToxinTuning;

/// Build a headless Bevy app with simulation clock, core resources,
/// message types and default tuning. Domain plugins are added by the caller.
///
/// Manual tick control:
/// ```no_run
/// # use neurotoxin::ecs::{build_sim_app, SimPlugin, SimTick};
/// let mut app = build_sim_app();
/// app.add_plugins(SimPlugin);
/// for _ in 0..300 {  // 10 seconds at the default tick rate
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app() -> App {
    build_sim_app_with_config(EcsSimConfig::default(), ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific RNG seed and multi-threaded executor.
pub fn build_sim_app_seeded(seed: u64) -> App {
    let config = EcsSimConfig {
        seed,
        ..EcsSimConfig::default()
    };
    build_sim_app_with_config(config, ExecutorKind::MultiThreaded)
}

/// Build a headless Bevy app with single-threaded executor for reproducible determinism.
///
/// Use this when exact RNG consumption order across ticks must be identical across runs.
pub fn build_sim_app_deterministic(seed: u64, tick: Duration) -> App {
    let config = EcsSimConfig {
        seed,
        tick,
        ..EcsSimConfig::default()
    };
    build_sim_app_with_config(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app from a full config and executor kind.
pub fn build_sim_app_with_config(config: EcsSimConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new(config.tick));
    app.insert_resource(SimRng { seed: config.seed });
    app.insert_resource(config.role);
    app.init_resource::<ToxinTuning>();

    // Per-domain RNG resources (reseeded each tick by distribute_rng)
    app.init_resource::<NeurotoxinRng>();

    // Register message types
    MessageRegistry::register_message::<ToxinEffect>(app.world_mut());
    MessageRegistry::register_message::<FullRecovery>(app.world_mut());

    // Build schedule with message rotation + RNG distribution
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(distribute_rng.in_set(SimPhase::PreUpdate));
    app.add_schedule(schedule);
    app.insert_resource(config);
    app
}
