//! Neurotoxin system.
//!
//! Three chained per-tick systems (Update phase, authoritative side only):
//! 1. `resolve_exposure`: sources accumulate toxin on nearby eligible targets
//! 2. `process_toxin`: decay, removal at zero, tier message, stacking effects,
//!    stumble and cough events
//! 3. `expire_blood_cough`: removes the coughed-blood debuff past its expiry
//!
//! One reaction system (Reactions phase):
//! 4. `handle_full_recovery`: discards toxin state on full recovery
//!
//! Side effects leave the engine as `ToxinEffect` messages.

pub mod tiers;

use std::collections::BTreeMap;

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::{Has, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use rand::Rng;
use tracing::{debug, trace};

use crate::config::ToxinTuning;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{
    BloodCough, Infected, MobState, MovementBlocked, Nested, Position, ToxinSource, ToxinState,
    ToxinSusceptible,
};
use crate::ecs::conditions::is_authoritative;
use crate::ecs::events::{FullRecovery, StatusEffectKind, StatusStacking, ToxinEffect};
use crate::ecs::resources::NeurotoxinRng;
use crate::ecs::schedule::{SimPhase, SimTick, ToxinSet};
use crate::ecs::time::SimTime;
use crate::model::{Audience, Emote, NarrativeMessage, PopupStyle};

use tiers::{
    ACCENT_THRESHOLD, BLINDNESS_THRESHOLD, JITTER_THRESHOLD, MUTE_THRESHOLD,
    OXYGEN_DAMAGE_THRESHOLD, TierBand, roll_per_second,
};

/// A stumble mutes for this many daze lengths.
const STUMBLE_MUTE_FACTOR: u32 = 5;
const STUMBLE_MAGNITUDE: f32 = 1.0;

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct NeurotoxinPlugin;

impl Plugin for NeurotoxinPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            resolve_exposure
                .in_set(ToxinSet::Exposure)
                .run_if(is_authoritative),
        );
        app.add_systems(
            SimTick,
            process_toxin
                .in_set(ToxinSet::Decay)
                .run_if(is_authoritative),
        );
        app.add_systems(
            SimTick,
            expire_blood_cough
                .in_set(ToxinSet::Debuff)
                .run_if(is_authoritative),
        );
        app.add_systems(
            SimTick,
            handle_full_recovery
                .in_set(SimPhase::Reactions)
                .run_if(is_authoritative),
        );
    }
}

// ---------------------------------------------------------------------------
// System 1: Exposure
// ---------------------------------------------------------------------------

#[allow(clippy::type_complexity)]
fn resolve_exposure(
    clock: Res<SimClock>,
    tuning: Res<ToxinTuning>,
    sources: Query<(&ToxinSource, &Position)>,
    mut targets: Query<
        (
            Entity,
            &Position,
            Option<&MobState>,
            Has<Nested>,
            Has<Infected>,
            Option<&mut ToxinState>,
        ),
        With<ToxinSusceptible>,
    >,
    mut commands: Commands,
) {
    let dt = clock.delta_secs();
    let now = clock.time;

    // States created this tick; inserted once every source has been applied.
    let mut fresh: BTreeMap<Entity, ToxinState> = BTreeMap::new();

    for (source, source_pos) in sources.iter() {
        for (entity, pos, mob, nested, infected, state) in targets.iter_mut() {
            if !pos.within(*source_pos, tuning.exposure_radius) {
                continue;
            }
            if !source.affects_dead && mob.is_some_and(|m| m.is_dead()) {
                continue;
            }
            if !source.affects_infected_nested && nested && infected {
                continue;
            }

            match state {
                Some(mut state) => state.expose(source, dt, tuning.max_amount),
                None => fresh
                    .entry(entity)
                    .or_insert_with(|| ToxinState::new(now, tuning.depletion_per_second))
                    .expose(source, dt, tuning.max_amount),
            }
        }
    }

    for (entity, state) in fresh {
        debug!(?entity, amount = state.amount, "neurotoxin exposure started");
        commands.entity(entity).try_insert(state);
    }
}

// ---------------------------------------------------------------------------
// System 2: Decay and tier effects
// ---------------------------------------------------------------------------

/// Everything the per-entity effect helpers need about the current tick.
struct TickContext<'a> {
    target: Entity,
    now: SimTime,
    dt: f32,
    tuning: &'a ToxinTuning,
}

impl TickContext<'_> {
    fn status(&self, kind: StatusEffectKind, duration: std::time::Duration) -> ToxinEffect {
        ToxinEffect::Status {
            target: self.target,
            kind,
            duration,
            stacking: StatusStacking::Refresh,
        }
    }

    fn popup(&self, message: NarrativeMessage, audience: Audience, style: PopupStyle) -> ToxinEffect {
        ToxinEffect::Popup {
            subject: self.target,
            message,
            audience,
            style,
        }
    }
}

#[allow(clippy::type_complexity)]
fn process_toxin(
    clock: Res<SimClock>,
    tuning: Res<ToxinTuning>,
    mut rng: ResMut<NeurotoxinRng>,
    mut states: Query<(
        Entity,
        &mut ToxinState,
        Option<&MobState>,
        Has<MovementBlocked>,
        Option<&mut BloodCough>,
    )>,
    mut effects: MessageWriter<ToxinEffect>,
    mut commands: Commands,
) {
    let rng = &mut rng.0;
    let dt = clock.delta_secs();
    let now = clock.time;

    for (entity, mut state, mob, movement_blocked, blood_cough) in states.iter_mut() {
        if !state.decay(dt) {
            debug!(?entity, "neurotoxin depleted");
            commands.entity(entity).try_remove::<ToxinState>();
            continue;
        }

        if mob.is_some_and(|m| m.is_dead()) {
            continue;
        }

        let ctx = TickContext {
            target: entity,
            now,
            dt,
            tuning: &tuning,
        };

        apply_baseline_effects(&ctx, &mut effects);

        let band = tiers::classify(state.amount);
        emit_tier_message(&ctx, band, &mut state, rng, &mut effects);
        apply_stacking_effects(&ctx, &mut state, rng, &mut effects);

        if roll_per_second(rng, band.stumble_chance, dt)
            && now.has_elapsed(state.last_stumble, tuning.minimum_delay_between_events)
        {
            state.last_stumble = now;
            stumble(&ctx, !movement_blocked, rng, &mut effects);
        }

        if roll_per_second(rng, band.cough_chance, dt)
            && now.has_elapsed(state.last_cough, tuning.minimum_delay_between_events)
        {
            state.last_cough = now;
            let expires_at = now + tuning.blood_cough_duration;
            match blood_cough {
                Some(mut cough) => {
                    cough.expires_at = expires_at;
                    cough.speed_multiplier = tuning.blood_cough_speed_multiplier;
                }
                None => {
                    commands.entity(entity).try_insert(BloodCough {
                        expires_at,
                        speed_multiplier: tuning.blood_cough_speed_multiplier,
                    });
                }
            }
            cough_blood(&ctx, &state, &mut effects);
        }
    }
}

/// Stamina drain and dizziness at any nonzero amount.
fn apply_baseline_effects(ctx: &TickContext, effects: &mut MessageWriter<ToxinEffect>) {
    effects.write(ToxinEffect::StaminaDamage {
        target: ctx.target,
        amount: ctx.tuning.stamina_damage_per_second * ctx.dt,
    });
    effects.write(ctx.status(StatusEffectKind::Drunk, ctx.tuning.dizzy_strength));
}

fn emit_tier_message(
    ctx: &TickContext,
    band: &TierBand,
    state: &mut ToxinState,
    rng: &mut dyn rand::RngCore,
    effects: &mut MessageWriter<ToxinEffect>,
) {
    if !ctx
        .now
        .has_elapsed(state.last_message, ctx.tuning.time_between_messages)
    {
        return;
    }
    let Some(entry) = band.pick_message(rng) else {
        return;
    };
    state.last_message = ctx.now;
    effects.write(ctx.popup(entry.message, Audience::Nearby, entry.style));
}

fn apply_stacking_effects(
    ctx: &TickContext,
    state: &mut ToxinState,
    rng: &mut dyn rand::RngCore,
    effects: &mut MessageWriter<ToxinEffect>,
) {
    let amount = state.amount;
    let tuning = ctx.tuning;

    if amount >= ACCENT_THRESHOLD
        && ctx
            .now
            .has_elapsed(state.last_accent, tuning.minimum_delay_between_events)
    {
        state.last_accent = ctx.now;
        let accent = if rng.random_bool(0.5) {
            StatusEffectKind::SlurredSpeech
        } else {
            StatusEffectKind::Stuttering
        };
        effects.write(ctx.status(accent, tuning.accent_time));
    }

    if amount >= JITTER_THRESHOLD {
        effects.write(ctx.status(StatusEffectKind::Jitter, tuning.jitter_time));
    }

    if amount >= BLINDNESS_THRESHOLD {
        effects.write(ctx.status(StatusEffectKind::TemporaryBlindness, tuning.blind_time));
    }

    if amount >= MUTE_THRESHOLD {
        effects.write(ctx.status(StatusEffectKind::Muted, tuning.daze_length));
        effects.write(ToxinEffect::Damage {
            target: ctx.target,
            amount: state.damage.toxin_only() * ctx.dt,
        });
    }

    if amount >= OXYGEN_DAMAGE_THRESHOLD {
        effects.write(ToxinEffect::Damage {
            target: ctx.target,
            amount: state.damage.oxygen_only() * ctx.dt,
        });
    }
}

fn stumble(
    ctx: &TickContext,
    can_move: bool,
    rng: &mut dyn rand::RngCore,
    effects: &mut MessageWriter<ToxinEffect>,
) {
    trace!(target_entity = ?ctx.target, at = %ctx.now, can_move, "neurotoxin stumble");
    let tuning = ctx.tuning;

    if can_move {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        effects.write(ToxinEffect::Displace {
            target: ctx.target,
            direction: [angle.cos(), angle.sin()],
            magnitude: STUMBLE_MAGNITUDE,
        });
    }
    effects.write(ctx.popup(
        NarrativeMessage::StumbleOthers,
        Audience::NearbyExceptVictim,
        PopupStyle::SmallCaution,
    ));
    effects.write(ctx.popup(
        NarrativeMessage::Stumble,
        Audience::Victim,
        PopupStyle::MediumCaution,
    ));
    effects.write(ctx.status(
        StatusEffectKind::Muted,
        tuning.daze_length.saturating_mul(STUMBLE_MUTE_FACTOR),
    ));
    effects.write(ctx.status(StatusEffectKind::Jitter, tuning.stumble_jitter_time));
    effects.write(ToxinEffect::Status {
        target: ctx.target,
        kind: StatusEffectKind::Drunk,
        duration: tuning.dizzy_strength_on_stumble,
        stacking: StatusStacking::Extend,
    });
    effects.write(ToxinEffect::Emote {
        target: ctx.target,
        emote: Emote::Pain,
    });
}

fn cough_blood(ctx: &TickContext, state: &ToxinState, effects: &mut MessageWriter<ToxinEffect>) {
    trace!(target_entity = ?ctx.target, at = %ctx.now, "neurotoxin blood cough");
    effects.write(ToxinEffect::Damage {
        target: ctx.target,
        amount: state.damage.cough_only(),
    });
    effects.write(ctx.popup(
        NarrativeMessage::BloodCough,
        Audience::Victim,
        PopupStyle::MediumCaution,
    ));
    effects.write(ToxinEffect::Emote {
        target: ctx.target,
        emote: Emote::Cough,
    });
}

// ---------------------------------------------------------------------------
// System 3: Blood cough expiry
// ---------------------------------------------------------------------------

fn expire_blood_cough(
    clock: Res<SimClock>,
    coughs: Query<(Entity, &BloodCough)>,
    mut commands: Commands,
) {
    for (entity, cough) in coughs.iter() {
        if !cough.is_active(clock.time) {
            debug!(?entity, "blood cough expired");
            commands.entity(entity).try_remove::<BloodCough>();
        }
    }
}

// ---------------------------------------------------------------------------
// Reaction system: Full recovery
// ---------------------------------------------------------------------------

fn handle_full_recovery(
    mut events: MessageReader<FullRecovery>,
    states: Query<(), With<ToxinState>>,
    mut commands: Commands,
) {
    for event in events.read() {
        if states.contains(event.entity) {
            debug!(entity = ?event.entity, "neurotoxin cleared by full recovery");
            commands.entity(event.entity).try_remove::<ToxinState>();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
