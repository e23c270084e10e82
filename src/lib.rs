#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate behind the look-away login page.
//!
//! A crowd of decorative 3D characters idles beside a sign-in card and turns
//! away while the password field is focused. The animation maths, the ECS
//! controller, the form model and the scene lifecycle all run headless; the
//! window, meshes and bevy_ui card sit behind the `render` feature.
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use lookaway::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins((MinimalPlugins, LookAwayPlugin, AuthFormPlugin));
//! app.world_mut().trigger(MountScene { variant: SceneVariant::Procedural });
//! app.world_mut().trigger(FormInput::Focus(FormField::Password));
//! app.update();
//! ```
pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod focus;
pub mod form;
pub mod idle;
pub mod logging;
pub mod pose;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod roster;
pub mod scene;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod ui;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, LookAwaySettings, SceneVariant};
pub use controller::{LookAwayPlugin, LookAwaySet};
pub use focus::{FocusState, PasswordFocusChanged, PointerState};
pub use form::{
    AuthForm, AuthFormPlugin, AuthMode, FormField, FormInput, Submission, SubmissionLog,
};
pub use logging::init as init_logging;
pub use pose::{ease_toward, target_orientation, Easing, Orientation};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use scene::{
    mount_scene, unmount_scene, AnimationMode, MountScene, SceneError, SceneHandle, UnmountScene,
};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use ui::AuthUiPlugin;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use lookaway::prelude::*;
    //! ```

    pub use crate::components::{AnimatedCharacter, SceneRoot};
    pub use crate::idle::IdleMotion;
    pub use crate::{
        AnimationMode, AuthForm, AuthFormPlugin, FocusState, FormField, FormInput,
        LookAwayPlugin, LookAwaySettings, MountScene, Orientation, SceneHandle, SceneVariant,
        UnmountScene,
    };
}
