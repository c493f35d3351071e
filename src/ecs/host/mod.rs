//! Minimal host-side collaborators for the neurotoxin engine.
//!
//! The engine only emits `ToxinEffect` messages. These components and the
//! applicator stand in for the host simulation's status-effect, damage,
//! movement and popup services so that the engine can run end-to-end.

pub mod applicator;

use std::collections::BTreeMap;
use std::time::Duration;

use bevy_app::{App, Plugin};
use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::IntoScheduleConfigs;

use crate::ecs::events::{StatusEffectKind, StatusStacking};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::ecs::time::SimTime;
use crate::model::{Audience, DamageAmount, Emote, NarrativeMessage, PopupStyle};

pub use applicator::{apply_toxin_effects, prune_status_effects, refresh_movement_speed};

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Timed status tags keyed by kind, each with its expiry time.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct StatusEffects {
    active: BTreeMap<StatusEffectKind, SimTime>,
}

impl StatusEffects {
    pub fn add(
        &mut self,
        kind: StatusEffectKind,
        now: SimTime,
        duration: Duration,
        stacking: StatusStacking,
    ) {
        let current = self.active.get(&kind).copied().filter(|&end| end > now);
        let expires_at = match (stacking, current) {
            (StatusStacking::Refresh, Some(end)) => end.max(now + duration),
            (StatusStacking::Extend, Some(end)) => end + duration,
            (_, None) => now + duration,
        };
        self.active.insert(kind, expires_at);
    }

    pub fn has(&self, kind: StatusEffectKind, now: SimTime) -> bool {
        self.active.get(&kind).is_some_and(|&end| end > now)
    }

    pub fn remaining(&self, kind: StatusEffectKind, now: SimTime) -> Duration {
        self.active
            .get(&kind)
            .map_or(Duration::ZERO, |&end| end.since(now))
    }

    /// Drop every effect that has run out by `now`.
    pub fn prune(&mut self, now: SimTime) {
        self.active.retain(|_, end| *end > now);
    }
}

/// Accumulated damage and stamina loss.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Vitals {
    pub damage: DamageAmount,
    pub stamina_damage: f32,
}

/// Movement multipliers recomputed every tick from active modifiers.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MovementSpeed {
    pub acceleration: f32,
    pub top_speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            acceleration: 1.0,
            top_speed: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PopupRecord {
    pub at: SimTime,
    pub subject: Entity,
    pub message: NarrativeMessage,
    pub audience: Audience,
    pub style: PopupStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmoteRecord {
    pub at: SimTime,
    pub target: Entity,
    pub emote: Emote,
}

/// Popups and emotes shown so far, in emission order.
#[derive(Resource, Debug, Clone, Default)]
pub struct PresentationLog {
    pub popups: Vec<PopupRecord>,
    pub emotes: Vec<EmoteRecord>,
}

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PresentationLog>();
        app.add_systems(
            SimTick,
            (
                apply_toxin_effects,
                prune_status_effects,
                refresh_movement_speed,
            )
                .chain()
                .in_set(SimPhase::PostUpdate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: u64) -> SimTime {
        SimTime::from_duration(Duration::from_secs(secs))
    }

    #[test]
    fn refresh_restarts_but_never_shortens() {
        let mut effects = StatusEffects::default();
        effects.add(StatusEffectKind::Muted, at(0), Duration::from_secs(5), StatusStacking::Refresh);
        effects.add(StatusEffectKind::Muted, at(1), Duration::from_secs(1), StatusStacking::Refresh);
        assert_eq!(effects.remaining(StatusEffectKind::Muted, at(1)), Duration::from_secs(4));

        effects.add(StatusEffectKind::Muted, at(4), Duration::from_secs(5), StatusStacking::Refresh);
        assert_eq!(effects.remaining(StatusEffectKind::Muted, at(4)), Duration::from_secs(5));
    }

    #[test]
    fn extend_adds_to_remaining() {
        let mut effects = StatusEffects::default();
        effects.add(StatusEffectKind::Drunk, at(0), Duration::from_secs(10), StatusStacking::Extend);
        effects.add(StatusEffectKind::Drunk, at(2), Duration::from_secs(10), StatusStacking::Extend);
        assert_eq!(effects.remaining(StatusEffectKind::Drunk, at(2)), Duration::from_secs(18));
    }

    #[test]
    fn expired_effects_restart_from_now() {
        let mut effects = StatusEffects::default();
        effects.add(StatusEffectKind::Jitter, at(0), Duration::from_secs(1), StatusStacking::Extend);
        effects.add(StatusEffectKind::Jitter, at(5), Duration::from_secs(1), StatusStacking::Extend);
        assert_eq!(effects.remaining(StatusEffectKind::Jitter, at(5)), Duration::from_secs(1));
    }

    #[test]
    fn prune_drops_expired() {
        let mut effects = StatusEffects::default();
        effects.add(
            StatusEffectKind::TemporaryBlindness,
            at(0),
            Duration::from_secs(2),
            StatusStacking::Refresh,
        );
        assert!(effects.has(StatusEffectKind::TemporaryBlindness, at(1)));
        assert!(!effects.has(StatusEffectKind::TemporaryBlindness, at(2)));
        effects.prune(at(2));
        assert_eq!(effects, StatusEffects::default());
    }
}
