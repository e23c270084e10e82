//! ECS component types making up the character scene.
//!
//! Characters carry their immutable base pose, palette and eased orientation;
//! sub-part markers tag the child entities driven by idle motion.
use bevy::prelude::*;

use crate::pose::Orientation;

/// Root entity of a mounted scene. Every character is a descendant.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SceneRoot;

/// One decorative character, identified by its roster index.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct AnimatedCharacter {
    /// Position of the character in the roster it was spawned from.
    pub index: usize,
}

/// Where a character stands and how large it is. Fixed for the scene's lifetime.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct BasePose {
    /// Base position relative to the scene root.
    pub position: Vec3,
    /// Uniform base scale.
    pub scale: f32,
}

/// Display colours, packed as `0xRRGGBB`. Only the renderer reads these.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct CharacterPalette {
    /// Body colour.
    pub primary: u32,
    /// Ring and core colour.
    pub accent: u32,
}

/// Orientation the character is currently easing toward.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct LookTarget(pub Orientation);

/// Child entity holding the floating body.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CharacterBody;

/// Child entity holding the spinning ring.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CharacterRing;

/// Child entity holding the pulsing core.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CharacterCore;
