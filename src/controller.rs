//! Look-away animation controller.
//!
//! Each frame, while a scene is mounted, the controller:
//! 1. picks one target orientation for every character from [`FocusState`]
//!    and, in tracking mode, [`PointerState`];
//! 2. eases each character's [`Orientation`] toward it and samples idle
//!    motion from the time since mount;
//! 3. writes the results into character and sub-part transforms.
//!
//! The controller never writes [`FocusState`] and owns all character state.
use bevy::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::{
    AnimatedCharacter, BasePose, CharacterBody, CharacterCore, CharacterPalette, CharacterRing,
    LookTarget, SceneRoot,
};
use crate::config::LookAwaySettings;
use crate::focus::{log_password_focus, FocusState, PointerState};
use crate::idle::{IdleMotion, PhaseOffset};
use crate::pose::{ease_toward, target_orientation, Orientation};
use crate::roster::Roster;
use crate::scene::{on_mount_scene, on_unmount_scene, play_preset_state, SceneHandle};

/// Ordered stages of the per-frame controller work in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookAwaySet {
    /// External signals such as the pointer are sampled.
    Sample,
    /// Target orientations are chosen.
    Target,
    /// Orientation and idle motion advance.
    Animate,
    /// Results are written into transforms.
    Apply,
}

/// Installs the controller, its resources and the scene lifecycle observers.
///
/// Settings and roster resources inserted before this plugin are kept.
#[derive(Debug, Default)]
pub struct LookAwayPlugin;

impl Plugin for LookAwayPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Orientation>()
            .register_type::<LookTarget>()
            .register_type::<PhaseOffset>()
            .register_type::<IdleMotion>()
            .register_type::<AnimatedCharacter>()
            .register_type::<BasePose>()
            .register_type::<CharacterPalette>()
            .register_type::<SceneRoot>()
            .register_type::<CharacterBody>()
            .register_type::<CharacterRing>()
            .register_type::<CharacterCore>()
            .register_type::<FocusState>();

        app.init_resource::<LookAwaySettings>()
            .init_resource::<Roster>()
            .init_resource::<FocusState>();

        app.add_observer(on_mount_scene)
            .add_observer(on_unmount_scene)
            .add_observer(log_password_focus)
            .add_observer(play_preset_state);

        app.configure_sets(
            Update,
            (
                LookAwaySet::Sample,
                LookAwaySet::Target,
                LookAwaySet::Animate,
                LookAwaySet::Apply,
            )
                .chain(),
        );
        app.add_systems(
            Update,
            (
                update_look_targets.in_set(LookAwaySet::Target),
                (ease_orientation, animate_idle).in_set(LookAwaySet::Animate),
                (apply_character_transforms, emphasise_scene).in_set(LookAwaySet::Apply),
            )
                .run_if(resource_exists::<SceneHandle>),
        );
    }
}

/// Chooses the shared target orientation and stores it on every character.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn update_look_targets(
    handle: Res<SceneHandle>,
    focus: Res<FocusState>,
    pointer: Option<Res<PointerState>>,
    settings: Res<LookAwaySettings>,
    mut targets: Query<&mut LookTarget, With<AnimatedCharacter>>,
) {
    let tracked = pointer
        .filter(|_| handle.mode().tracks_pointer())
        .map(|state| state.0);
    let target = target_orientation(
        focus.is_password_focused(),
        tracked,
        settings.look_away,
        settings.pointer_damping,
    );
    for mut look in &mut targets {
        look.set_if_neq(LookTarget(target));
    }
}

/// Eases each orientation toward its target.
///
/// Frame time is clamped to `max_delta_seconds` so a hitch cannot snap the
/// characters. Does nothing in static mode.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn ease_orientation(
    handle: Res<SceneHandle>,
    time: Res<Time>,
    settings: Res<LookAwaySettings>,
    mut characters: Query<(&LookTarget, &mut Orientation), With<AnimatedCharacter>>,
) {
    if !handle.mode().drives_orientation() {
        return;
    }
    let dt = time.delta_secs().min(settings.max_delta_seconds);
    let fraction = settings.easing.step_fraction(dt);
    for (target, mut orientation) in &mut characters {
        *orientation = ease_toward(*orientation, **target, fraction);
    }
}

/// Samples idle motion from the time since the scene was mounted.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn animate_idle(
    handle: Res<SceneHandle>,
    time: Res<Time>,
    mut characters: Query<(&PhaseOffset, &BasePose, &mut IdleMotion)>,
) {
    let elapsed = handle.elapsed(time.elapsed_secs());
    for (phase, base, mut idle) in &mut characters {
        *idle = IdleMotion::sample(elapsed, *phase, base.scale);
    }
}

/// Sub-part transforms driven by their parent character's idle motion.
#[derive(SystemParam)]
pub struct CharacterParts<'w, 's> {
    rings: Query<
        'w,
        's,
        (&'static ChildOf, &'static mut Transform),
        (With<CharacterRing>, Without<AnimatedCharacter>, Without<CharacterCore>),
    >,
    cores: Query<
        'w,
        's,
        (&'static ChildOf, &'static mut Transform),
        (With<CharacterCore>, Without<AnimatedCharacter>, Without<CharacterRing>),
    >,
}

/// Writes orientation and idle motion into character and sub-part transforms.
///
/// The character floats and turns as a whole; the ring spins and wobbles and
/// the core pulses in the character's local space.
pub fn apply_character_transforms(
    mut characters: Query<
        (&BasePose, &Orientation, &IdleMotion, &mut Transform),
        With<AnimatedCharacter>,
    >,
    mut parts: CharacterParts,
) {
    for (base, orientation, idle, mut transform) in &mut characters {
        transform.translation = base.position + Vec3::Y * idle.float_offset;
        transform.rotation = orientation.to_rotation();
        transform.scale = Vec3::splat(base.scale);
    }

    for (parent, mut transform) in &mut parts.rings {
        if let Ok((_, _, idle, _)) = characters.get(parent.parent()) {
            transform.rotation = idle.ring_rotation();
        }
    }
    for (parent, mut transform) in &mut parts.cores {
        if let Ok((_, _, idle, _)) = characters.get(parent.parent()) {
            transform.scale = Vec3::splat(idle.core_pulse);
        }
    }
}

/// Eases the scene root toward its emphasised scale while focused.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn emphasise_scene(
    time: Res<Time>,
    focus: Res<FocusState>,
    settings: Res<LookAwaySettings>,
    mut roots: Query<&mut Transform, With<SceneRoot>>,
) {
    let goal = if focus.is_password_focused() {
        settings.focused_scene_scale
    } else {
        1.0
    };
    let dt = time.delta_secs().min(settings.max_delta_seconds);
    let fraction = settings.easing.step_fraction(dt);
    for mut transform in &mut roots {
        let current = transform.scale.x;
        transform.scale = Vec3::splat((goal - current).mul_add(fraction, current));
    }
}
