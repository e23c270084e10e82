//! Runtime tuning for the look-away scene.
//!
//! [`LookAwaySettings`] mirrors the way presentation settings are kept as a
//! resource with sensible defaults. A JSON file may override any subset of
//! fields; unknown keys are rejected so typos do not silently fall back to
//! defaults.
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pose::{Easing, Orientation, PointerDamping};
use crate::{FOCUSED_SCENE_SCALE, MAX_EASING_DELTA_SECONDS};

/// Which scene backend to mount.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SceneVariant {
    /// Code-driven characters that track the pointer.
    #[default]
    Procedural,
    /// Characters played back from named animation states.
    Preset,
}

/// Errors raised while loading [`LookAwaySettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid settings JSON.
    #[error("failed to parse settings: {source}")]
    Parse {
        /// Underlying parse error.
        #[from]
        source: serde_json::Error,
    },
    /// A field parsed but holds an unusable value.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Field name as written in the file.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Tunables for the controller and scene.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LookAwaySettings {
    /// Backend mounted at startup.
    pub variant: SceneVariant,
    /// How orientation eases toward its target.
    pub easing: Easing,
    /// Largest frame delta fed into time-based easing, in seconds.
    pub max_delta_seconds: f32,
    /// Pose held while the password is focused.
    pub look_away: Orientation,
    /// Pointer-to-pose scale factors.
    pub pointer_damping: PointerDamping,
    /// Scene root scale while the password is focused.
    pub focused_scene_scale: f32,
}

impl Default for LookAwaySettings {
    fn default() -> Self {
        Self {
            variant: SceneVariant::default(),
            easing: Easing::default(),
            max_delta_seconds: MAX_EASING_DELTA_SECONDS,
            look_away: Orientation::LOOK_AWAY,
            pointer_damping: PointerDamping::default(),
            focused_scene_scale: FOCUSED_SCENE_SCALE,
        }
    }
}

impl LookAwaySettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookaway::config::{LookAwaySettings, SceneVariant};
    ///
    /// let settings = LookAwaySettings::from_json_str(r#"{ "variant": "preset" }"#)?;
    /// assert_eq!(settings.variant, SceneVariant::Preset);
    /// # Ok::<(), lookaway::config::ConfigError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`LookAwaySettings::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every numeric field is finite and within range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.easing {
            Easing::PerFrame { fraction } if !(fraction > 0.0 && fraction <= 1.0) => {
                return Err(invalid("easing.fraction", "must lie in (0, 1]"));
            }
            Easing::Exponential { rate } if !(rate.is_finite() && rate > 0.0) => {
                return Err(invalid("easing.rate", "must be a positive number"));
            }
            _ => {}
        }
        if !(self.max_delta_seconds.is_finite() && self.max_delta_seconds > 0.0) {
            return Err(invalid("max_delta_seconds", "must be a positive number"));
        }
        if !(self.look_away.yaw.is_finite() && self.look_away.pitch.is_finite()) {
            return Err(invalid("look_away", "must be finite"));
        }
        if !(self.pointer_damping.yaw.is_finite() && self.pointer_damping.pitch.is_finite()) {
            return Err(invalid("pointer_damping", "must be finite"));
        }
        if !(self.focused_scene_scale.is_finite() && self.focused_scene_scale > 0.0) {
            return Err(invalid("focused_scene_scale", "must be a positive number"));
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
