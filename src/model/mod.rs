pub mod damage;
pub mod narrative;

pub use damage::DamageAmount;
pub use narrative::{Audience, Emote, NarrativeMessage, PopupStyle};
