use std::time::Duration;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// Errors raised while loading tuning data.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning constants for the neurotoxin engine.
///
/// Durations are written as seconds in JSON. Missing fields take their
/// default value.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToxinTuning {
    /// Distance from a source within which targets are exposed.
    pub exposure_radius: f32,
    /// Depletion rate given to newly created toxin states.
    pub depletion_per_second: f32,
    pub stamina_damage_per_second: f32,
    /// Dizziness applied every tick while any toxin is present.
    #[serde(with = "secs")]
    pub dizzy_strength: Duration,
    #[serde(with = "secs")]
    pub dizzy_strength_on_stumble: Duration,
    #[serde(with = "secs")]
    pub time_between_messages: Duration,
    /// Cooldown shared by accents, stumbles and coughs (each tracked separately).
    #[serde(with = "secs")]
    pub minimum_delay_between_events: Duration,
    #[serde(with = "secs")]
    pub accent_time: Duration,
    #[serde(with = "secs")]
    pub jitter_time: Duration,
    #[serde(with = "secs")]
    pub stumble_jitter_time: Duration,
    #[serde(with = "secs")]
    pub blind_time: Duration,
    /// Mute duration at critical amounts; a stumble mutes for five times this.
    #[serde(with = "secs")]
    pub daze_length: Duration,
    #[serde(with = "secs")]
    pub blood_cough_duration: Duration,
    pub blood_cough_speed_multiplier: f32,
    /// Upper clamp for accumulated toxin.
    pub max_amount: f32,
}

impl Default for ToxinTuning {
    fn default() -> Self {
        Self {
            exposure_radius: 0.5,
            depletion_per_second: 1.0,
            stamina_damage_per_second: 7.0,
            dizzy_strength: Duration::from_secs(10),
            dizzy_strength_on_stumble: Duration::from_secs(15),
            time_between_messages: Duration::from_secs(5),
            minimum_delay_between_events: Duration::from_secs(3),
            accent_time: Duration::from_secs(8),
            jitter_time: Duration::from_secs(1),
            stumble_jitter_time: Duration::from_secs(5),
            blind_time: Duration::from_secs(2),
            daze_length: Duration::from_secs(1),
            blood_cough_duration: Duration::from_secs(3),
            blood_cough_speed_multiplier: 0.6,
            max_amount: 300.0,
        }
    }
}

impl ToxinTuning {
    /// Parse and validate tuning from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: ToxinTuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.exposure_radius.is_finite() && self.exposure_radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "exposure_radius",
                reason: "must be a positive number",
            });
        }
        if !(self.depletion_per_second.is_finite() && self.depletion_per_second > 0.0) {
            return Err(ConfigError::Invalid {
                field: "depletion_per_second",
                reason: "must be a positive number",
            });
        }
        if !(self.stamina_damage_per_second.is_finite() && self.stamina_damage_per_second >= 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "stamina_damage_per_second",
                reason: "must be a non-negative number",
            });
        }
        if !(self.blood_cough_speed_multiplier.is_finite() && self.blood_cough_speed_multiplier > 0.0)
        {
            return Err(ConfigError::Invalid {
                field: "blood_cough_speed_multiplier",
                reason: "must be a positive number",
            });
        }
        if !(self.max_amount.is_finite() && self.max_amount > 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_amount",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(value.as_secs_f32())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f32::deserialize(deserializer)?;
        Duration::try_from_secs_f32(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_valid() {
        assert!(ToxinTuning::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning =
            ToxinTuning::from_json_str(r#"{"depletion_per_second": 2.5, "blind_time": 4.0}"#)
                .unwrap();
        assert_eq!(tuning.depletion_per_second, 2.5);
        assert_eq!(tuning.blind_time, Duration::from_secs(4));
        assert_eq!(tuning.exposure_radius, 0.5);
    }

    #[test]
    fn negative_duration_is_a_parse_error() {
        let err = ToxinTuning::from_json_str(r#"{"accent_time": -1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_radius_is_rejected() {
        let err = ToxinTuning::from_json_str(r#"{"exposure_radius": 0.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "exposure_radius",
                ..
            }
        ));
    }

    #[test]
    fn zero_depletion_is_rejected() {
        let err = ToxinTuning::from_json_str(r#"{"depletion_per_second": 0.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "depletion_per_second",
                ..
            }
        ));
    }

    #[test]
    fn huge_durations_are_accepted() {
        let tuning = ToxinTuning::from_json_str(r#"{"daze_length": 1e19}"#).unwrap();
        assert!(tuning.daze_length > Duration::from_secs(1_000_000_000));
    }

    #[test]
    fn round_trips_through_json() {
        let tuning = ToxinTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(ToxinTuning::from_json_str(&json).unwrap(), tuning);
    }
}
