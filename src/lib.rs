pub mod config;
pub mod ecs;
pub mod model;

pub use config::{ConfigError, ToxinTuning};
pub use model::{Audience, DamageAmount, Emote, NarrativeMessage, PopupStyle};
