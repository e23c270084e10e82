//! 3D presentation of the character scene.
//!
//! `PresentationPlugin` owns the camera and lights, dresses freshly spawned
//! character parts with meshes and materials, and samples the window cursor
//! into [`PointerState`]. It only reads controller state: transforms are
//! written by [`crate::controller`].
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{
    AnimatedCharacter, CharacterBody, CharacterCore, CharacterPalette, CharacterRing, SceneRoot,
};
use crate::controller::LookAwaySet;
use crate::focus::PointerState;

/// Marker component for the scene camera.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SceneCamera;

/// Where the camera sits and what it looks at.
///
/// The default frames the crowd in the left half of the window, leaving the
/// right half to the auth card.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub focus: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(3.2, 0.4, 11.0),
            focus: Vec3::new(3.2, 0.2, 0.0),
        }
    }
}

/// Shared meshes for every character part.
#[derive(Resource, Debug, Clone)]
pub struct CharacterMeshes {
    body: Handle<Mesh>,
    ring: Handle<Mesh>,
    core: Handle<Mesh>,
    eye: Handle<Mesh>,
    eye_material: Handle<StandardMaterial>,
}

/// Unpacks a `0xRRGGBB` palette entry.
///
/// # Examples
///
/// ```
/// use bevy::prelude::Color;
/// use lookaway::presentation::palette_color;
///
/// assert_eq!(palette_color(0xFF_00_80), Color::srgb_u8(255, 0, 128));
/// ```
#[must_use]
pub fn palette_color(rgb: u32) -> Color {
    let [_, red, green, blue] = rgb.to_be_bytes();
    Color::srgb_u8(red, green, blue)
}

/// Plugin owning the camera, lights, character meshes and pointer sampling.
#[derive(Debug, Default)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneCamera>();
        app.init_resource::<CameraSettings>();
        app.add_systems(Startup, (camera_setup, load_character_meshes));
        app.add_systems(
            Update,
            (
                sample_pointer.in_set(LookAwaySet::Sample),
                (make_visible, dress_bodies, dress_rings, dress_cores)
                    .run_if(resource_exists::<CharacterMeshes>)
                    .before(LookAwaySet::Apply),
            ),
        );
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn camera_setup(mut commands: Commands, settings: Res<CameraSettings>, cameras: Query<&Camera3d>) {
    if !cameras.is_empty() {
        return;
    }
    commands.spawn((
        Camera3d::default(),
        Tonemapping::None,
        Transform::from_translation(settings.eye).looking_at(settings.focus, Vec3::Y),
        SceneCamera,
        Name::new("SceneCamera"),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("KeyLight"),
    ));
    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            range: 40.0,
            ..default()
        },
        Transform::from_xyz(-6.0, -2.0, 8.0),
        Name::new("FillLight"),
    ));
}

fn load_character_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(CharacterMeshes {
        body: meshes.add(Sphere::new(0.5)),
        ring: meshes.add(Torus::new(0.62, 0.7)),
        core: meshes.add(Sphere::new(0.18)),
        eye: meshes.add(Sphere::new(0.07)),
        eye_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.05, 0.05, 0.08),
            perceptual_roughness: 0.2,
            ..default()
        }),
    });
}

/// Scene roots and characters carry no mesh but need visibility so their
/// parts inherit it.
fn make_visible(
    mut commands: Commands,
    added: Query<Entity, Or<(Added<SceneRoot>, Added<AnimatedCharacter>)>>,
) {
    for entity in &added {
        commands.entity(entity).insert(Visibility::default());
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn dress_bodies(
    mut commands: Commands,
    assets: Res<CharacterMeshes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bodies: Query<(Entity, &ChildOf), Added<CharacterBody>>,
    palettes: Query<&CharacterPalette>,
) {
    for (entity, parent) in &bodies {
        let Ok(palette) = palettes.get(parent.parent()) else {
            continue;
        };
        let material = materials.add(StandardMaterial {
            base_color: palette_color(palette.primary),
            perceptual_roughness: 0.6,
            ..default()
        });
        commands
            .entity(entity)
            .insert((Mesh3d(assets.body.clone()), MeshMaterial3d(material)))
            .with_children(|face| {
                for x in [-0.16, 0.16] {
                    face.spawn((
                        Mesh3d(assets.eye.clone()),
                        MeshMaterial3d(assets.eye_material.clone()),
                        Transform::from_xyz(x, 0.12, 0.45),
                        Name::new("Eye"),
                    ));
                }
            });
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn dress_rings(
    mut commands: Commands,
    assets: Res<CharacterMeshes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rings: Query<(Entity, &ChildOf), Added<CharacterRing>>,
    palettes: Query<&CharacterPalette>,
) {
    for (entity, parent) in &rings {
        let Ok(palette) = palettes.get(parent.parent()) else {
            continue;
        };
        let material = materials.add(StandardMaterial {
            base_color: palette_color(palette.accent),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        });
        commands
            .entity(entity)
            .insert((Mesh3d(assets.ring.clone()), MeshMaterial3d(material)));
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn dress_cores(
    mut commands: Commands,
    assets: Res<CharacterMeshes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cores: Query<(Entity, &ChildOf), Added<CharacterCore>>,
    palettes: Query<&CharacterPalette>,
) {
    for (entity, parent) in &cores {
        let Ok(palette) = palettes.get(parent.parent()) else {
            continue;
        };
        let glow = palette_color(palette.accent);
        let material = materials.add(StandardMaterial {
            base_color: glow,
            emissive: glow.to_linear() * 2.0,
            ..default()
        });
        commands.entity(entity).insert((
            Mesh3d(assets.core.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, -0.08, 0.42),
        ));
    }
}

/// Samples the primary window cursor into [`PointerState`].
///
/// The last position is kept while the cursor is outside the window.
fn sample_pointer(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let sampled = window
        .cursor_position()
        .and_then(|cursor| PointerState::from_cursor(cursor, window.size()));
    if let Some(pointer) = sampled {
        commands.insert_resource(pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::black(0x00_00_00, (0, 0, 0))]
    #[case::white(0xFF_FF_FF, (255, 255, 255))]
    #[case::violet(0x6C_5C_E7, (0x6C, 0x5C, 0xE7))]
    #[case::alpha_byte_ignored(0xAB_12_34_56, (0x12, 0x34, 0x56))]
    fn palette_entries_unpack(#[case] rgb: u32, #[case] channels: (u8, u8, u8)) {
        let expected = Color::srgb_u8(channels.0, channels.1, channels.2);
        assert_eq!(palette_color(rgb), expected);
    }

    #[test]
    fn default_camera_looks_into_the_scene() {
        let settings = CameraSettings::default();
        assert!(settings.eye.z > settings.focus.z);
    }
}
