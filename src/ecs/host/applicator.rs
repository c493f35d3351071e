use bevy_ecs::message::MessageReader;
use bevy_ecs::system::{Query, Res, ResMut};

use super::{EmoteRecord, MovementSpeed, PopupRecord, PresentationLog, StatusEffects, Vitals};
use crate::ecs::clock::SimClock;
use crate::ecs::components::{BloodCough, Position, SpeedModifier};
use crate::ecs::events::ToxinEffect;

/// Process every `ToxinEffect` written this tick.
///
/// Runs in `SimPhase::PostUpdate`. Effects aimed at an entity lacking the
/// matching host component (or no longer existing) are dropped with a warning.
pub fn apply_toxin_effects(
    clock: Res<SimClock>,
    mut effects: MessageReader<ToxinEffect>,
    mut statuses: Query<&mut StatusEffects>,
    mut vitals: Query<&mut Vitals>,
    mut positions: Query<&mut Position>,
    mut log: ResMut<PresentationLog>,
) {
    let now = clock.time;

    for effect in effects.read() {
        match *effect {
            ToxinEffect::StaminaDamage { target, amount } => {
                if let Ok(mut v) = vitals.get_mut(target) {
                    v.stamina_damage += amount;
                } else {
                    tracing::warn!(?target, "stamina damage for entity without Vitals");
                }
            }
            ToxinEffect::Status {
                target,
                kind,
                duration,
                stacking,
            } => {
                if let Ok(mut s) = statuses.get_mut(target) {
                    s.add(kind, now, duration, stacking);
                } else {
                    tracing::warn!(?target, ?kind, "status effect for entity without StatusEffects");
                }
            }
            ToxinEffect::Damage { target, amount } => {
                if let Ok(mut v) = vitals.get_mut(target) {
                    v.damage += amount;
                } else {
                    tracing::warn!(?target, "damage for entity without Vitals");
                }
            }
            ToxinEffect::Displace {
                target,
                direction,
                magnitude,
            } => {
                if let Ok(mut pos) = positions.get_mut(target) {
                    pos.x += direction[0] * magnitude;
                    pos.y += direction[1] * magnitude;
                } else {
                    tracing::warn!(?target, "displacement for entity without Position");
                }
            }
            ToxinEffect::Popup {
                subject,
                message,
                audience,
                style,
            } => log.popups.push(PopupRecord {
                at: now,
                subject,
                message,
                audience,
                style,
            }),
            ToxinEffect::Emote { target, emote } => log.emotes.push(EmoteRecord {
                at: now,
                target,
                emote,
            }),
        }
    }
}

pub fn prune_status_effects(clock: Res<SimClock>, mut statuses: Query<&mut StatusEffects>) {
    for mut s in statuses.iter_mut() {
        s.prune(clock.time);
    }
}

/// Recompute movement multipliers from the active blood-cough debuff.
pub fn refresh_movement_speed(
    clock: Res<SimClock>,
    mut movers: Query<(&mut MovementSpeed, Option<&BloodCough>)>,
) {
    for (mut speed, cough) in movers.iter_mut() {
        let modifier = cough
            .and_then(|c| c.speed_modifier(clock.time))
            .map_or(SpeedModifier::IDENTITY, |m| SpeedModifier::IDENTITY.combine(m));
        speed.acceleration = modifier.acceleration;
        speed.top_speed = modifier.top_speed;
    }
}
