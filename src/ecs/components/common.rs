use bevy_ecs::component::Component;

/// Planar position in world units.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn within(self, other: Position, radius: f32) -> bool {
        self.distance_squared(other) <= radius * radius
    }
}

/// Health state of a mob. Entities without one are treated as alive.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobState {
    #[default]
    Alive,
    Critical,
    Dead,
}

impl MobState {
    pub fn is_dead(self) -> bool {
        self == MobState::Dead
    }
}

// ---------------------------------------------------------------------------
// Marker components
// ---------------------------------------------------------------------------

/// Entity can accumulate neurotoxin.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ToxinSusceptible;

/// Entity is held in a nest.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Nested;

/// Entity carries a parasite infection.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Infected;

/// Entity cannot currently move on its own (stunned, buckled, ...).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MovementBlocked;
