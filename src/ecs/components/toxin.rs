use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::ecs::time::SimTime;
use crate::model::DamageAmount;

/// Gas-emitting source. Presence of the component means the source is active;
/// its location is the entity's `Position`.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToxinSource {
    /// Toxin added to each exposed target per second.
    pub emission_per_second: f32,
    /// Per-point damage composition cached onto exposed targets.
    pub damage: DamageAmount,
    pub affects_dead: bool,
    /// Whether targets that are both nested and infected are exposed.
    pub affects_infected_nested: bool,
}

impl Default for ToxinSource {
    fn default() -> Self {
        Self {
            emission_per_second: 10.0,
            damage: DamageAmount::new(1.0, 2.0, 5.0),
            affects_dead: false,
            affects_infected_nested: false,
        }
    }
}

/// Accumulated toxin on an entity: added on first exposure, removed when
/// the amount reaches zero or on full recovery.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ToxinState {
    pub amount: f32,
    pub depletion_per_second: f32,
    /// Damage profile written by the most recent exposing source.
    pub damage: DamageAmount,
    pub last_message: SimTime,
    pub last_accent: SimTime,
    pub last_stumble: SimTime,
    pub last_cough: SimTime,
}

impl ToxinState {
    /// Fresh state with nothing accumulated. All cooldowns start at `now`
    /// so nothing fires on the first tick.
    pub fn new(now: SimTime, depletion_per_second: f32) -> Self {
        Self {
            amount: 0.0,
            depletion_per_second,
            damage: DamageAmount::ZERO,
            last_message: now,
            last_accent: now,
            last_stumble: now,
            last_cough: now,
        }
    }

    /// Add toxin from a source, clamped to `[0, max_amount]`.
    pub fn expose(&mut self, source: &ToxinSource, dt: f32, max_amount: f32) {
        self.amount = (self.amount + source.emission_per_second * dt).clamp(0.0, max_amount);
        self.damage = source.damage;
    }

    /// Remove `depletion_per_second × dt`. Returns `false` once nothing is left.
    pub fn decay(&mut self, dt: f32) -> bool {
        self.amount -= self.depletion_per_second * dt;
        if self.amount <= 0.0 {
            self.amount = 0.0;
            return false;
        }
        true
    }
}

/// Acceleration and top-speed multipliers contributed to the movement system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModifier {
    pub acceleration: f32,
    pub top_speed: f32,
}

impl SpeedModifier {
    pub const IDENTITY: SpeedModifier = SpeedModifier {
        acceleration: 1.0,
        top_speed: 1.0,
    };

    pub fn uniform(multiplier: f32) -> Self {
        Self {
            acceleration: multiplier,
            top_speed: multiplier,
        }
    }

    pub fn combine(self, other: SpeedModifier) -> Self {
        Self {
            acceleration: self.acceleration * other.acceleration,
            top_speed: self.top_speed * other.top_speed,
        }
    }
}

/// Coughed-blood debuff. Slows movement until `expires_at`; independent of
/// the toxin that caused it.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BloodCough {
    pub expires_at: SimTime,
    pub speed_multiplier: f32,
}

impl BloodCough {
    pub fn is_active(&self, now: SimTime) -> bool {
        now < self.expires_at
    }

    pub fn speed_modifier(&self, now: SimTime) -> Option<SpeedModifier> {
        self.is_active(now)
            .then(|| SpeedModifier::uniform(self.speed_multiplier))
    }
}
