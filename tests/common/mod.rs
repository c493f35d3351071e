use std::time::Duration;

use bevy_app::App;
use neurotoxin::ecs::{
    SimClock, SimPlugin, SimTick, SimTime, ToxinState, build_sim_app_deterministic,
};

pub fn build_app(tick: Duration) -> App {
    let mut app = build_sim_app_deterministic(42, tick);
    app.add_plugins(SimPlugin);
    app
}

pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(SimTick);
}

pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        tick(app);
    }
}

pub fn now(app: &App) -> SimTime {
    app.world().resource::<SimClock>().time
}

/// A state that keeps its amount: no decay, cooldowns stamped at zero.
pub fn steady_state(amount: f32) -> ToxinState {
    ToxinState {
        amount,
        ..ToxinState::new(SimTime::ZERO, 0.0)
    }
}
