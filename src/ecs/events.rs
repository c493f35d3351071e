use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{Audience, DamageAmount, Emote, NarrativeMessage, PopupStyle};

/// Timed status effects the toxin applies through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusEffectKind {
    Muted,
    TemporaryBlindness,
    Jitter,
    SlurredSpeech,
    Stuttering,
    Drunk,
}

/// How a status effect combines with an existing one of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStacking {
    /// Restart the timer at `duration` (never shortens a longer one).
    Refresh,
    /// Add `duration` to whatever remains.
    Extend,
}

/// Side effects requested by the neurotoxin engine.
///
/// Engine systems emit these via `MessageWriter<ToxinEffect>`; the host
/// applicator in `SimPhase::PostUpdate` turns them into status effects,
/// damage, displacement and on-screen messages.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum ToxinEffect {
    StaminaDamage {
        target: Entity,
        amount: f32,
    },
    Status {
        target: Entity,
        kind: StatusEffectKind,
        duration: Duration,
        stacking: StatusStacking,
    },
    Damage {
        target: Entity,
        amount: DamageAmount,
    },
    /// Forced displacement without animation, sound or spin.
    Displace {
        target: Entity,
        direction: [f32; 2],
        magnitude: f32,
    },
    Popup {
        subject: Entity,
        message: NarrativeMessage,
        audience: Audience,
        style: PopupStyle,
    },
    Emote {
        target: Entity,
        emote: Emote,
    },
}

impl ToxinEffect {
    pub fn target(&self) -> Entity {
        match self {
            ToxinEffect::StaminaDamage { target, .. }
            | ToxinEffect::Status { target, .. }
            | ToxinEffect::Damage { target, .. }
            | ToxinEffect::Displace { target, .. }
            | ToxinEffect::Emote { target, .. } => *target,
            ToxinEffect::Popup { subject, .. } => *subject,
        }
    }
}

/// External "full recovery" signal: the entity is restored to full health
/// and all accumulated toxin is discarded.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullRecovery {
    pub entity: Entity,
}
