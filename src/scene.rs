//! Scene lifecycle and backend capability negotiation.
//!
//! A scene is mounted by handing a [`SceneBackend`] to [`mount_scene`]. The
//! backend is asked up front whether it can hold an arbitrary pose; the
//! answer becomes the [`AnimationMode`] stored in the [`SceneHandle`]. The
//! handle is the single owner of the live scene: every controller system is
//! gated on its presence and [`unmount_scene`] tears everything down.
use std::fmt;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, info, warn};
use thiserror::Error;

use crate::components::SceneRoot;
use crate::config::SceneVariant;
use crate::focus::PasswordFocusChanged;
use crate::roster::{spawn_roster, Roster};

/// Preset state a player-driven backend must expose for the look-away pose.
pub const LOOK_AWAY_STATE: &str = "look-away";
/// Preset state a player-driven backend must expose for the resting pose.
pub const NEUTRAL_STATE: &str = "neutral";

/// Why a backend cannot have its pose driven by the controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A required preset state is missing.
    #[error("scene backend `{backend}` has no `{state}` preset state")]
    MissingPresetState {
        /// Backend label.
        backend: &'static str,
        /// Name of the missing state.
        state: &'static str,
    },
    /// A state was requested that the backend does not expose.
    #[error("scene backend `{backend}` cannot play state `{state}`")]
    UnknownState {
        /// Backend label.
        backend: &'static str,
        /// Requested state.
        state: String,
    },
    /// The backend does not accept pose overrides at all.
    #[error("scene backend `{backend}` does not support pose overrides")]
    PoseOverrideUnsupported {
        /// Backend label.
        backend: &'static str,
    },
}

/// Capabilities of whatever renders and animates the characters.
#[cfg_attr(test, mockall::automock)]
pub trait SceneBackend: Send + Sync + 'static {
    /// Short name used in logs and errors.
    fn label(&self) -> &'static str;

    /// Whether the backend wants orientation to follow the pointer.
    fn tracks_pointer(&self) -> bool;

    /// Confirms the controller may drive the characters' pose.
    ///
    /// # Errors
    ///
    /// Returns a [`SceneError`] describing the missing capability.
    fn check_pose_override(&self) -> Result<(), SceneError>;

    /// Switches the scene to a named preset state.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownState`] when the state does not exist.
    fn show_state(&self, state: &str) -> Result<(), SceneError>;
}

/// Characters built and animated entirely in code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProceduralBackend;

impl SceneBackend for ProceduralBackend {
    fn label(&self) -> &'static str {
        "procedural"
    }

    fn tracks_pointer(&self) -> bool {
        true
    }

    fn check_pose_override(&self) -> Result<(), SceneError> {
        Ok(())
    }

    // Every pose is reached through orientation; there is nothing to play.
    fn show_state(&self, _state: &str) -> Result<(), SceneError> {
        Ok(())
    }
}

/// Characters played back from named states of an authored scene.
///
/// Such scenes ignore the pointer and can only show poses they were authored
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetBackend {
    /// Names of the states the authored scene exposes.
    pub states: Vec<String>,
}

impl PresetBackend {
    /// Backend exposing exactly the states the controller needs.
    #[must_use]
    pub fn with_required_states() -> Self {
        Self {
            states: vec![LOOK_AWAY_STATE.to_owned(), NEUTRAL_STATE.to_owned()],
        }
    }

    fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|name| name == state)
    }
}

impl SceneBackend for PresetBackend {
    fn label(&self) -> &'static str {
        "preset"
    }

    fn tracks_pointer(&self) -> bool {
        false
    }

    fn check_pose_override(&self) -> Result<(), SceneError> {
        [LOOK_AWAY_STATE, NEUTRAL_STATE]
            .into_iter()
            .find(|state| !self.has_state(state))
            .map_or(Ok(()), |state| {
                Err(SceneError::MissingPresetState {
                    backend: self.label(),
                    state,
                })
            })
    }

    fn show_state(&self, state: &str) -> Result<(), SceneError> {
        if !self.has_state(state) {
            return Err(SceneError::UnknownState {
                backend: self.label(),
                state: state.to_owned(),
            });
        }
        debug!("preset scene playing `{state}`");
        Ok(())
    }
}

/// Builds the backend for a configured variant.
#[must_use]
pub fn backend_for(variant: SceneVariant) -> Box<dyn SceneBackend> {
    match variant {
        SceneVariant::Procedural => Box::new(ProceduralBackend),
        SceneVariant::Preset => Box::new(PresetBackend::with_required_states()),
    }
}

/// How the controller drives orientation for the mounted scene.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Follow the pointer, look away on password focus.
    Tracking,
    /// Rest at neutral, look away on password focus.
    Preset,
    /// Never drive orientation. Idle motion still runs.
    Static,
}

impl AnimationMode {
    /// Resolves the mode a backend supports.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`SceneError`] when it cannot take a pose.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookaway::scene::{AnimationMode, PresetBackend, ProceduralBackend};
    ///
    /// assert_eq!(AnimationMode::negotiate(&ProceduralBackend), Ok(AnimationMode::Tracking));
    /// let bare = PresetBackend { states: Vec::new() };
    /// assert!(AnimationMode::negotiate(&bare).is_err());
    /// ```
    pub fn negotiate(backend: &dyn SceneBackend) -> Result<Self, SceneError> {
        backend.check_pose_override()?;
        Ok(if backend.tracks_pointer() {
            Self::Tracking
        } else {
            Self::Preset
        })
    }

    /// Like [`AnimationMode::negotiate`], but logs the error and falls back
    /// to [`AnimationMode::Static`].
    #[must_use]
    pub fn negotiate_or_static(backend: &dyn SceneBackend) -> Self {
        Self::negotiate(backend).unwrap_or_else(|err| {
            warn!("{err}; characters will stay in their current pose");
            Self::Static
        })
    }

    /// Whether the controller writes orientation in this mode.
    #[must_use]
    pub const fn drives_orientation(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Whether the pointer feeds the target orientation in this mode.
    #[must_use]
    pub const fn tracks_pointer(self) -> bool {
        matches!(self, Self::Tracking)
    }
}

/// The mounted scene. Present exactly while a scene is mounted.
#[derive(Resource)]
pub struct SceneHandle {
    backend: Box<dyn SceneBackend>,
    mode: AnimationMode,
    root: Entity,
    mounted_at: f32,
}

impl SceneHandle {
    /// Backend the scene was mounted with.
    #[must_use]
    pub fn backend(&self) -> &dyn SceneBackend {
        self.backend.as_ref()
    }

    /// Mode negotiated at mount time.
    #[must_use]
    pub const fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Root entity; every character descends from it.
    #[must_use]
    pub const fn root(&self) -> Entity {
        self.root
    }

    /// Seconds since mount, given the app's current elapsed time.
    #[must_use]
    pub fn elapsed(&self, now: f32) -> f32 {
        (now - self.mounted_at).max(0.0)
    }
}

impl fmt::Debug for SceneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneHandle")
            .field("backend", &self.backend.label())
            .field("mode", &self.mode)
            .field("root", &self.root)
            .field("mounted_at", &self.mounted_at)
            .finish()
    }
}

/// Spawns the scene root and roster and installs the [`SceneHandle`].
///
/// Mounting while a scene is already live only logs and returns the existing
/// root.
pub fn mount_scene(world: &mut World, backend: Box<dyn SceneBackend>) -> Entity {
    if let Some(handle) = world.get_resource::<SceneHandle>() {
        info!(
            "scene `{}` already mounted; ignoring mount of `{}`",
            handle.backend.label(),
            backend.label()
        );
        return handle.root;
    }

    let mode = AnimationMode::negotiate_or_static(backend.as_ref());
    let mounted_at = world
        .get_resource::<Time>()
        .map_or(0.0, Time::elapsed_secs);
    let roster = world.get_resource::<Roster>().cloned().unwrap_or_default();

    let root = world
        .spawn((SceneRoot, Name::new("LookAwayScene"), Transform::default()))
        .id();
    spawn_roster(world, root, &roster);

    info!(
        "mounted `{}` scene with {} characters in {mode:?} mode",
        backend.label(),
        roster.len()
    );
    world.insert_resource(SceneHandle {
        backend,
        mode,
        root,
        mounted_at,
    });
    root
}

/// Removes the [`SceneHandle`] and despawns the whole scene.
///
/// Returns `false` when nothing was mounted.
pub fn unmount_scene(world: &mut World) -> bool {
    let Some(handle) = world.remove_resource::<SceneHandle>() else {
        return false;
    };
    if let Ok(root) = world.get_entity_mut(handle.root) {
        root.despawn();
    }
    info!("unmounted `{}` scene", handle.backend.label());
    true
}

/// Requests a scene mount for `variant`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountScene {
    /// Backend to mount.
    pub variant: SceneVariant,
}

/// Requests the live scene be torn down.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnmountScene;

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn on_mount_scene(event: On<MountScene>, mut commands: Commands) {
    let variant = event.event().variant;
    commands.queue(move |world: &mut World| {
        mount_scene(world, backend_for(variant));
    });
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn on_unmount_scene(event: On<UnmountScene>, mut commands: Commands) {
    debug!("{:?} requested", event.event());
    commands.queue(|world: &mut World| {
        unmount_scene(world);
    });
}

/// Plays the matching preset state when password focus flips.
///
/// Only [`AnimationMode::Preset`] scenes are driven this way; the other modes
/// either ease orientation themselves or hold still.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn play_preset_state(
    event: On<PasswordFocusChanged>,
    handle: Option<Res<SceneHandle>>,
) {
    let Some(handle) = handle else {
        return;
    };
    if handle.mode != AnimationMode::Preset {
        return;
    }
    let state = if event.event().focused {
        LOOK_AWAY_STATE
    } else {
        NEUTRAL_STATE
    };
    if let Err(err) = handle.backend.show_state(state) {
        warn!("{err}");
    }
}
