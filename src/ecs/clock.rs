use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use super::time::SimTime;

/// Simulation clock resource tracking the current time, the length of the
/// current tick and the tick count.
///
/// The host may change `delta` between ticks (variable frame time). The
/// `advance_clock` system moves the clock forward at the end of each tick
/// (in `SimPhase::Last`), so systems see the current time before it advances.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    pub time: SimTime,
    pub delta: Duration,
    pub tick_count: u64,
}

impl SimClock {
    pub fn new(delta: Duration) -> Self {
        Self {
            time: SimTime::ZERO,
            delta,
            tick_count: 0,
        }
    }

    /// Elapsed time of the current tick in seconds.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn set_delta(&mut self, delta: Duration) {
        self.delta = delta;
    }

    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.time = self.time + self.delta;
        self.tick_count += 1;
    }
}

/// Bevy system that advances the simulation clock by the current delta.
/// Registered in `SimPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
