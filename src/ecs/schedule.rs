use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for the main simulation tick.
/// Run manually each tick via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each simulation tick.
///
/// Systems are assigned to phases via `.in_set(SimPhase::Update)` etc.
/// Phases run in declaration order: PreUpdate < Update < PostUpdate < Reactions < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Neurotoxin engine stages within `SimPhase::Update`.
///
/// ```text
/// Exposure → Decay → Debuff
/// ```
///
/// Deferred commands (state insertion and removal) are not flushed between
/// these stages: a state created by exposure is first decayed on the next tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToxinSet {
    Exposure,
    Decay,
    Debuff,
}

fn configure_toxin_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(
        (ToxinSet::Exposure, ToxinSet::Decay, ToxinSet::Debuff)
            .chain_ignore_deferred()
            .in_set(SimPhase::Update),
    );
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Update,
            SimPhase::PostUpdate,
            SimPhase::Reactions,
            SimPhase::Last,
        )
            .chain(),
    );
    configure_toxin_ordering(&mut schedule);
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
