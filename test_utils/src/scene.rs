//! Read-only views over the mounted scene.

use bevy::prelude::*;
use lookaway::components::{AnimatedCharacter, BasePose, SceneRoot};
use lookaway::idle::IdleMotion;
use lookaway::pose::Orientation;

/// Orientation of every character, ordered by roster index.
pub fn orientations(app: &mut App) -> Vec<Orientation> {
    let world = app.world_mut();
    let mut characters: Vec<(usize, Orientation)> = world
        .query::<(&AnimatedCharacter, &Orientation)>()
        .iter(world)
        .map(|(character, orientation)| (character.index, *orientation))
        .collect();
    characters.sort_by_key(|(index, _)| *index);
    characters.into_iter().map(|(_, o)| o).collect()
}

/// Base x-position and idle motion of every character, ordered by roster
/// index.
pub fn idle_by_base_x(app: &mut App) -> Vec<(f32, IdleMotion)> {
    let world = app.world_mut();
    let mut characters: Vec<(usize, f32, IdleMotion)> = world
        .query::<(&AnimatedCharacter, &BasePose, &IdleMotion)>()
        .iter(world)
        .map(|(character, base, idle)| (character.index, base.position.x, *idle))
        .collect();
    characters.sort_by_key(|(index, _, _)| *index);
    characters.into_iter().map(|(_, x, idle)| (x, idle)).collect()
}

/// Number of live characters.
pub fn character_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&AnimatedCharacter>().iter(world).count()
}

/// Number of live scene roots.
pub fn root_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&SceneRoot>().iter(world).count()
}

/// Total entity count, used to confirm teardown leaves nothing behind.
pub fn entity_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<Entity>().iter(world).count()
}
