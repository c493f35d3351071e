use serde::{Deserialize, Serialize};

/// Every narrative line the toxin can show. Display text is looked up by
/// the host through `loc_key`; `fallback_text` is used when no translation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeMessage {
    Tired,
    Numb,
    WhereAmI,
    VeryNumb,
    Erratic,
    Panic,
    Sting,
    WhatIsHappening,
    Hearing,
    Pain,
    Agh,
    SoNumb,
    Limbs,
    Think,
    Stumble,
    StumbleOthers,
    BloodCough,
}

impl NarrativeMessage {
    pub fn loc_key(self) -> &'static str {
        match self {
            NarrativeMessage::Tired => "neurotoxin-tired",
            NarrativeMessage::Numb => "neurotoxin-numb",
            NarrativeMessage::WhereAmI => "neurotoxin-where-am-i",
            NarrativeMessage::VeryNumb => "neurotoxin-very-numb",
            NarrativeMessage::Erratic => "neurotoxin-erratic",
            NarrativeMessage::Panic => "neurotoxin-panic",
            NarrativeMessage::Sting => "neurotoxin-sting",
            NarrativeMessage::WhatIsHappening => "neurotoxin-what-is-happening",
            NarrativeMessage::Hearing => "neurotoxin-hearing",
            NarrativeMessage::Pain => "neurotoxin-pain",
            NarrativeMessage::Agh => "neurotoxin-agh",
            NarrativeMessage::SoNumb => "neurotoxin-so-numb",
            NarrativeMessage::Limbs => "neurotoxin-limbs",
            NarrativeMessage::Think => "neurotoxin-think",
            NarrativeMessage::Stumble => "neurotoxin-stumble",
            NarrativeMessage::StumbleOthers => "neurotoxin-stumble-others",
            NarrativeMessage::BloodCough => "neurotoxin-blood-cough",
        }
    }

    /// English text. `{victim}` is substituted by the host.
    pub fn fallback_text(self) -> &'static str {
        match self {
            NarrativeMessage::Tired => "You feel tired.",
            NarrativeMessage::Numb => "You feel numb.",
            NarrativeMessage::WhereAmI => "Where am I?",
            NarrativeMessage::VeryNumb => "Your whole body feels numb.",
            NarrativeMessage::Erratic => "Your heart beats erratically.",
            NarrativeMessage::Panic => "You start to panic!",
            NarrativeMessage::Sting => "Your skin stings all over!",
            NarrativeMessage::WhatIsHappening => "What is happening?!",
            NarrativeMessage::Hearing => "You can barely hear anything.",
            NarrativeMessage::Pain => "Everything hurts!",
            NarrativeMessage::Agh => "AGH!",
            NarrativeMessage::SoNumb => "You can't feel your body.",
            NarrativeMessage::Limbs => "Your limbs won't respond!",
            NarrativeMessage::Think => "You can't think straight.",
            NarrativeMessage::Stumble => "You stumble!",
            NarrativeMessage::StumbleOthers => "{victim} stumbles!",
            NarrativeMessage::BloodCough => "You cough up blood!",
        }
    }
}

/// Formatting hint for on-screen messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupStyle {
    Small,
    SmallCaution,
    Medium,
    MediumCaution,
    Large,
    LargeCaution,
}

/// Who gets to see a popup anchored on the victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Everyone near the victim, the victim included.
    Nearby,
    /// Only the victim.
    Victim,
    /// Everyone near the victim except the victim.
    NearbyExceptVictim,
}

/// Reaction signals raised for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emote {
    Pain,
    Cough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loc_keys_are_unique() {
        let all = [
            NarrativeMessage::Tired,
            NarrativeMessage::Numb,
            NarrativeMessage::WhereAmI,
            NarrativeMessage::VeryNumb,
            NarrativeMessage::Erratic,
            NarrativeMessage::Panic,
            NarrativeMessage::Sting,
            NarrativeMessage::WhatIsHappening,
            NarrativeMessage::Hearing,
            NarrativeMessage::Pain,
            NarrativeMessage::Agh,
            NarrativeMessage::SoNumb,
            NarrativeMessage::Limbs,
            NarrativeMessage::Think,
            NarrativeMessage::Stumble,
            NarrativeMessage::StumbleOthers,
            NarrativeMessage::BloodCough,
        ];
        let keys: std::collections::BTreeSet<_> = all.iter().map(|m| m.loc_key()).collect();
        assert_eq!(keys.len(), all.len());
        assert!(all.iter().all(|m| !m.fallback_text().is_empty()));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&NarrativeMessage::WhereAmI).unwrap();
        assert_eq!(json, "\"where_am_i\"");
    }
}
