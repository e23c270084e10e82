//! Character registry: which characters a scene spawns and where.
//!
//! The default roster places fourteen characters in a loose crowd on the
//! left half of the view. A [`Roster`] resource inserted before the scene
//! mounts replaces it.
use bevy::prelude::*;

use crate::components::{
    AnimatedCharacter, BasePose, CharacterBody, CharacterCore, CharacterPalette, CharacterRing,
    LookTarget,
};
use crate::idle::{IdleMotion, PhaseOffset};
use crate::pose::Orientation;

/// Authoring data for one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSpec {
    /// Base position relative to the scene root.
    pub position: Vec3,
    /// Uniform base scale.
    pub scale: f32,
    /// Body colour as `0xRRGGBB`.
    pub primary: u32,
    /// Ring and core colour as `0xRRGGBB`.
    pub accent: u32,
}

impl CharacterSpec {
    const fn new(x: f32, y: f32, z: f32, scale: f32, primary: u32, accent: u32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            scale,
            primary,
            accent,
        }
    }
}

/// Fourteen characters making up the reference crowd.
pub const DEFAULT_ROSTER: [CharacterSpec; 14] = [
    CharacterSpec::new(-4.2, 1.6, -1.0, 0.8, 0x6C_5C_E7, 0xA2_9B_FE),
    CharacterSpec::new(-3.1, -0.4, 0.2, 1.0, 0x00_B8_94, 0x55_EF_C4),
    CharacterSpec::new(-2.4, 2.3, -2.0, 0.7, 0xE1_70_55, 0xFA_B1_A0),
    CharacterSpec::new(-1.6, 0.5, 0.8, 1.2, 0x09_84_E3, 0x74_B9_FF),
    CharacterSpec::new(-0.9, -1.7, -0.6, 0.9, 0xFD_CB_6E, 0xFF_EA_A7),
    CharacterSpec::new(-0.2, 1.9, -1.4, 0.75, 0xD6_30_31, 0xFF_76_75),
    CharacterSpec::new(0.5, -0.2, 0.4, 1.1, 0x2D_34_36, 0x63_6E_72),
    CharacterSpec::new(1.2, 1.1, -0.9, 0.85, 0xE8_43_93, 0xFD_79_A8),
    CharacterSpec::new(1.8, -1.4, 0.1, 0.95, 0x00_CE_C9, 0x81_EC_EC),
    CharacterSpec::new(-3.7, -2.1, -1.6, 0.7, 0xA2_9B_FE, 0x6C_5C_E7),
    CharacterSpec::new(-2.0, -2.6, 0.5, 0.8, 0x55_EF_C4, 0x00_B8_94),
    CharacterSpec::new(0.1, 3.0, -2.4, 0.65, 0x74_B9_FF, 0x09_84_E3),
    CharacterSpec::new(2.4, 2.4, -1.8, 0.7, 0xFA_B1_A0, 0xE1_70_55),
    CharacterSpec::new(2.9, 0.3, -0.5, 0.9, 0xFF_EA_A7, 0xFD_CB_6E),
];

/// The characters the next mounted scene will spawn.
#[derive(Resource, Debug, Clone, PartialEq, Deref)]
pub struct Roster(pub Vec<CharacterSpec>);

impl Default for Roster {
    fn default() -> Self {
        Self(DEFAULT_ROSTER.to_vec())
    }
}

/// Components every character entity starts with.
#[derive(Bundle)]
pub struct CharacterBundle {
    name: Name,
    character: AnimatedCharacter,
    base: BasePose,
    palette: CharacterPalette,
    phase: PhaseOffset,
    orientation: Orientation,
    target: LookTarget,
    idle: IdleMotion,
    transform: Transform,
}

impl CharacterBundle {
    /// Builds the bundle for roster entry `index`.
    ///
    /// The phase offset is derived here, once, from the base position.
    #[must_use]
    pub fn new(index: usize, spec: &CharacterSpec) -> Self {
        Self {
            name: Name::new(format!("Character{index}")),
            character: AnimatedCharacter { index },
            base: BasePose {
                position: spec.position,
                scale: spec.scale,
            },
            palette: CharacterPalette {
                primary: spec.primary,
                accent: spec.accent,
            },
            phase: PhaseOffset::from_base_position(spec.position),
            orientation: Orientation::NEUTRAL,
            target: LookTarget::default(),
            idle: IdleMotion::default(),
            transform: Transform::from_translation(spec.position)
                .with_scale(Vec3::splat(spec.scale)),
        }
    }
}

/// Spawns every roster entry as a child of `root`, each with body, ring and
/// core sub-parts.
pub fn spawn_roster(world: &mut World, root: Entity, roster: &Roster) {
    world.entity_mut(root).with_children(|scene| {
        for (index, spec) in roster.iter().enumerate() {
            scene
                .spawn(CharacterBundle::new(index, spec))
                .with_children(|parts| {
                    parts.spawn((CharacterBody, Name::new("Body"), Transform::default()));
                    parts.spawn((CharacterRing, Name::new("Ring"), Transform::default()));
                    parts.spawn((CharacterCore, Name::new("Core"), Transform::default()));
                });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_roster_has_fourteen_characters() {
        assert_eq!(Roster::default().len(), 14);
    }

    #[test]
    fn default_roster_characters_have_distinct_phases() {
        let roster = Roster::default();
        for (i, a) in roster.iter().enumerate() {
            for b in roster.iter().skip(i + 1) {
                assert_ne!(
                    PhaseOffset::from_base_position(a.position),
                    PhaseOffset::from_base_position(b.position),
                    "characters at {:?} and {:?} would animate in sync",
                    a.position,
                    b.position
                );
            }
        }
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(13)]
    fn bundle_stores_phase_from_position(#[case] index: usize) {
        let spec = DEFAULT_ROSTER.get(index).copied().unwrap_or_else(|| panic!("missing {index}"));
        let bundle = CharacterBundle::new(index, &spec);
        assert_eq!(bundle.phase, PhaseOffset::from_base_position(spec.position));
        assert_eq!(bundle.character.index, index);
        assert_eq!(bundle.orientation, Orientation::NEUTRAL);
    }

    #[test]
    fn spawn_roster_creates_three_parts_per_character() {
        let mut world = World::new();
        let root = world.spawn(Transform::default()).id();
        let roster = Roster(DEFAULT_ROSTER.iter().take(3).copied().collect());
        spawn_roster(&mut world, root, &roster);

        let characters = world.query::<&AnimatedCharacter>().iter(&world).count();
        let bodies = world.query::<&CharacterBody>().iter(&world).count();
        let rings = world.query::<&CharacterRing>().iter(&world).count();
        let cores = world.query::<&CharacterCore>().iter(&world).count();
        assert_eq!((characters, bodies, rings, cores), (3, 3, 3, 3));
    }
}
