use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::components::{MobState, Position, ToxinSource, ToxinSusceptible};
use super::host::{MovementSpeed, StatusEffects, Vitals};

/// Spawn a living character that can be exposed to neurotoxin, carrying
/// every host component the toxin effects land on.
pub fn spawn_character(world: &mut World, position: Position) -> Entity {
    world
        .spawn((
            position,
            MobState::Alive,
            ToxinSusceptible,
            StatusEffects::default(),
            Vitals::default(),
            MovementSpeed::default(),
        ))
        .id()
}

/// Spawn an active toxin source.
pub fn spawn_source(world: &mut World, position: Position, source: ToxinSource) -> Entity {
    world.spawn((position, source)).id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::ToxinState;

    #[test]
    fn character_starts_clean() {
        let mut world = World::new();
        let e = spawn_character(&mut world, Position::new(2.0, 3.0));
        assert_eq!(*world.get::<Position>(e).unwrap(), Position::new(2.0, 3.0));
        assert_eq!(*world.get::<MobState>(e).unwrap(), MobState::Alive);
        assert!(world.get::<ToxinSusceptible>(e).is_some());
        assert!(world.get::<ToxinState>(e).is_none());
    }

    #[test]
    fn source_keeps_parameters() {
        let mut world = World::new();
        let source = ToxinSource {
            emission_per_second: 4.0,
            affects_dead: true,
            ..ToxinSource::default()
        };
        let e = spawn_source(&mut world, Position::default(), source.clone());
        assert_eq!(*world.get::<ToxinSource>(e).unwrap(), source);
    }
}
