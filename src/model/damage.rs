use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Structured damage amount with one channel per damage kind the toxin deals.
///
/// Sources carry one of these as their per-point damage composition; the
/// engine applies individual channels scaled by elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageAmount {
    pub toxin: f32,
    pub oxygen: f32,
    pub cough: f32,
}

impl DamageAmount {
    pub const ZERO: DamageAmount = DamageAmount {
        toxin: 0.0,
        oxygen: 0.0,
        cough: 0.0,
    };

    pub fn new(toxin: f32, oxygen: f32, cough: f32) -> Self {
        Self {
            toxin,
            oxygen,
            cough,
        }
    }

    pub fn toxin_only(self) -> Self {
        Self {
            toxin: self.toxin,
            ..Self::ZERO
        }
    }

    pub fn oxygen_only(self) -> Self {
        Self {
            oxygen: self.oxygen,
            ..Self::ZERO
        }
    }

    pub fn cough_only(self) -> Self {
        Self {
            cough: self.cough,
            ..Self::ZERO
        }
    }

    pub fn total(self) -> f32 {
        self.toxin + self.oxygen + self.cough
    }

    pub fn is_zero(self) -> bool {
        self.toxin == 0.0 && self.oxygen == 0.0 && self.cough == 0.0
    }
}

impl Add for DamageAmount {
    type Output = DamageAmount;

    fn add(self, rhs: DamageAmount) -> DamageAmount {
        DamageAmount {
            toxin: self.toxin + rhs.toxin,
            oxygen: self.oxygen + rhs.oxygen,
            cough: self.cough + rhs.cough,
        }
    }
}

impl AddAssign for DamageAmount {
    fn add_assign(&mut self, rhs: DamageAmount) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for DamageAmount {
    type Output = DamageAmount;

    fn mul(self, scale: f32) -> DamageAmount {
        DamageAmount {
            toxin: self.toxin * scale,
            oxygen: self.oxygen * scale,
            cough: self.cough * scale,
        }
    }
}
