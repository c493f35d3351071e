use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::ecs::events::ToxinEffect;
use crate::ecs::schedule::SimTick;

/// Run `n` ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Effects written during the most recent tick.
pub fn collected_effects(app: &App) -> Vec<ToxinEffect> {
    app.world()
        .resource::<Messages<ToxinEffect>>()
        .iter_current_update_messages()
        .cloned()
        .collect()
}

/// Run `n` ticks, gathering every effect written along the way.
pub fn tick_collecting(app: &mut App, n: u32) -> Vec<ToxinEffect> {
    let mut all = Vec::new();
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
        all.extend(collected_effects(app));
    }
    all
}
