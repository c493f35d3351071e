//! Severity bands for accumulated neurotoxin.
//!
//! The non-stacking tier is an ordered table evaluated by first match on an
//! inclusive upper bound. Each band owns a weighted message pool and the
//! per-second chances for the cough and stumble events. Stacking effects are
//! plain thresholds: every one at or below the amount applies.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::{NarrativeMessage, PopupStyle};

// ---------------------------------------------------------------------------
// Constants: Stacking thresholds
// ---------------------------------------------------------------------------

pub const ACCENT_THRESHOLD: f32 = 10.0;
pub const JITTER_THRESHOLD: f32 = 15.0;
pub const BLINDNESS_THRESHOLD: f32 = 20.0;
pub const MUTE_THRESHOLD: f32 = 27.0;
pub const OXYGEN_DAMAGE_THRESHOLD: f32 = 50.0;

// ---------------------------------------------------------------------------
// Band table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Baseline,
    Numb,
    Erratic,
    Sting,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageEntry {
    pub message: NarrativeMessage,
    pub style: PopupStyle,
    pub weight: u32,
}

const fn entry(message: NarrativeMessage, style: PopupStyle, weight: u32) -> MessageEntry {
    MessageEntry {
        message,
        style,
        weight,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBand {
    pub tier: Tier,
    /// Inclusive upper bound on the amount.
    pub upper: f32,
    pub messages: &'static [MessageEntry],
    pub cough_chance: f32,
    pub stumble_chance: f32,
}

use NarrativeMessage as M;
use PopupStyle as S;

const BASELINE_MESSAGES: &[MessageEntry] = &[entry(M::Tired, S::Small, 1)];

const NUMB_MESSAGES: &[MessageEntry] = &[entry(M::Numb, S::SmallCaution, 1)];

// One in four is the disoriented line, the rest split the common pool evenly.
const ERRATIC_MESSAGES: &[MessageEntry] = &[
    entry(M::WhereAmI, S::Large, 1),
    entry(M::VeryNumb, S::MediumCaution, 1),
    entry(M::Erratic, S::MediumCaution, 1),
    entry(M::Panic, S::MediumCaution, 1),
];

const STING_MESSAGES: &[MessageEntry] = &[entry(M::Sting, S::MediumCaution, 1)];

// Two rare lines at one in seven each, the common pool shares the other five sevenths.
const CRITICAL_MESSAGES: &[MessageEntry] = &[
    entry(M::WhatIsHappening, S::Large, 1),
    entry(M::Hearing, S::MediumCaution, 1),
    entry(M::Pain, S::LargeCaution, 1),
    entry(M::Agh, S::LargeCaution, 1),
    entry(M::SoNumb, S::LargeCaution, 1),
    entry(M::Limbs, S::LargeCaution, 1),
    entry(M::Think, S::LargeCaution, 1),
];

pub const TIER_BANDS: [TierBand; 5] = [
    TierBand {
        tier: Tier::Baseline,
        upper: 9.0,
        messages: BASELINE_MESSAGES,
        cough_chance: 0.0,
        stumble_chance: 0.0,
    },
    TierBand {
        tier: Tier::Numb,
        upper: 14.0,
        messages: NUMB_MESSAGES,
        cough_chance: 0.10,
        stumble_chance: 0.0,
    },
    TierBand {
        tier: Tier::Erratic,
        upper: 19.0,
        messages: ERRATIC_MESSAGES,
        cough_chance: 0.10,
        stumble_chance: 0.05,
    },
    TierBand {
        tier: Tier::Sting,
        upper: 24.0,
        messages: STING_MESSAGES,
        cough_chance: 0.25,
        stumble_chance: 0.25,
    },
    TierBand {
        tier: Tier::Critical,
        upper: f32::INFINITY,
        messages: CRITICAL_MESSAGES,
        cough_chance: 0.25,
        stumble_chance: 0.25,
    },
];

/// First band whose upper bound is at or above `amount`.
pub fn classify(amount: f32) -> &'static TierBand {
    TIER_BANDS
        .iter()
        .find(|band| amount <= band.upper)
        .unwrap_or(&TIER_BANDS[TIER_BANDS.len() - 1])
}

impl TierBand {
    /// Weighted draw from this band's message pool.
    pub fn pick_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static MessageEntry> {
        self.messages.choose_weighted(rng, |e| e.weight).ok()
    }

    /// Probability that `message` is drawn from this band.
    pub fn message_probability(&self, message: NarrativeMessage) -> f64 {
        let total: u32 = self.messages.iter().map(|e| e.weight).sum();
        if total == 0 {
            return 0.0;
        }
        let hits: u32 = self
            .messages
            .iter()
            .filter(|e| e.message == message)
            .map(|e| e.weight)
            .sum();
        f64::from(hits) / f64::from(total)
    }
}

/// Per-tick roll for an event with a per-second chance.
pub fn roll_per_second<R: Rng + ?Sized>(rng: &mut R, chance_per_second: f32, dt: f32) -> bool {
    let p = (chance_per_second * dt).clamp(0.0, 1.0);
    rng.random::<f32>() < p
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn band_boundaries_are_closed_above() {
        assert_eq!(classify(0.5).tier, Tier::Baseline);
        assert_eq!(classify(9.0).tier, Tier::Baseline);
        assert_eq!(classify(9.01).tier, Tier::Numb);
        assert_eq!(classify(10.0).tier, Tier::Numb);
        assert_eq!(classify(14.0).tier, Tier::Numb);
        assert_eq!(classify(14.01).tier, Tier::Erratic);
        assert_eq!(classify(19.0).tier, Tier::Erratic);
        assert_eq!(classify(19.5).tier, Tier::Sting);
        assert_eq!(classify(24.0).tier, Tier::Sting);
        assert_eq!(classify(24.01).tier, Tier::Critical);
        assert_eq!(classify(10_000.0).tier, Tier::Critical);
    }

    #[test]
    fn bands_are_ordered() {
        for pair in TIER_BANDS.windows(2) {
            assert!(pair[0].upper < pair[1].upper);
            assert!(pair[0].tier < pair[1].tier);
        }
    }

    #[test]
    fn band_chances() {
        assert_eq!(classify(5.0).cough_chance, 0.0);
        assert_eq!(classify(5.0).stumble_chance, 0.0);
        assert_eq!(classify(12.0).cough_chance, 0.10);
        assert_eq!(classify(12.0).stumble_chance, 0.0);
        assert_eq!(classify(17.0).stumble_chance, 0.05);
        assert_eq!(classify(22.0).cough_chance, 0.25);
        assert_eq!(classify(30.0).stumble_chance, 0.25);
    }

    #[test]
    fn rare_message_weights() {
        let erratic = classify(17.0);
        assert!((erratic.message_probability(M::WhereAmI) - 0.25).abs() < 1e-12);
        assert!((erratic.message_probability(M::Panic) - 0.25).abs() < 1e-12);

        let critical = classify(30.0);
        let seventh = 1.0 / 7.0;
        assert!((critical.message_probability(M::WhatIsHappening) - seventh).abs() < 1e-12);
        assert!((critical.message_probability(M::Hearing) - seventh).abs() < 1e-12);
        assert!((critical.message_probability(M::Tired)).abs() < 1e-12);
    }

    #[test]
    fn weighted_draw_converges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let critical = classify(30.0);
        let draws = 70_000;
        let mut rare = 0;
        for _ in 0..draws {
            let picked = critical.pick_message(&mut rng).unwrap();
            if picked.message == M::WhatIsHappening {
                rare += 1;
            }
        }
        // Expect 10,000 ± ~93 (1 sigma); allow a wide margin.
        assert!((9_500..=10_500).contains(&rare), "rare draws: {rare}");
    }

    #[test]
    fn single_entry_pool_always_picks_it() {
        let mut rng = SmallRng::seed_from_u64(1);
        let numb = classify(12.0);
        for _ in 0..20 {
            assert_eq!(numb.pick_message(&mut rng).unwrap().message, M::Numb);
        }
    }

    #[test]
    fn per_tick_roll_rate() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ticks = 10_000;
        let hits = (0..ticks)
            .filter(|_| roll_per_second(&mut rng, 0.25, 0.1))
            .count();
        // p = 0.025, expected 250 ± ~16 (1 sigma).
        assert!((170..=330).contains(&hits), "hits: {hits}");
    }

    #[test]
    fn zero_chance_never_fires() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!((0..1000).all(|_| !roll_per_second(&mut rng, 0.0, 0.1)));
    }
}
