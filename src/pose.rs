//! Pure pose maths for the look-away controller.
//!
//! Target selection and easing live here as plain functions over
//! [`Orientation`] values so they can be exercised without a Bevy `App`, a
//! window or a GPU. The ECS systems in [`crate::controller`] only feed these
//! functions and write the results back.
use bevy::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    EXPONENTIAL_EASING_RATE, LOOK_AWAY_PITCH, LOOK_AWAY_YAW, PER_FRAME_EASING_FRACTION,
    POINTER_PITCH_DAMPING, POINTER_YAW_DAMPING,
};

/// Head orientation of a character, in radians.
///
/// `yaw` turns around the vertical axis (positive looks to the viewer's
/// right), `pitch` tilts around the horizontal axis.
#[derive(Component, Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component, Default)]
pub struct Orientation {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the horizontal axis.
    pub pitch: f32,
}

impl Orientation {
    /// The neutral pose, facing the viewer.
    pub const NEUTRAL: Self = Self::new(0.0, 0.0);

    /// The reference look-away pose.
    pub const LOOK_AWAY: Self = Self::new(LOOK_AWAY_YAW, LOOK_AWAY_PITCH);

    /// Creates an orientation from yaw and pitch.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Returns the orientation as a `(yaw, pitch)` vector.
    #[must_use]
    pub const fn as_vec2(self) -> Vec2 {
        Vec2::new(self.yaw, self.pitch)
    }

    /// Euclidean distance to `other` in yaw/pitch space.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Rotation applied to a character transform for this orientation.
    ///
    /// Yaw turns about +Y first, then pitch about the local +X axis. A
    /// positive pitch tilts the +Z face toward -Y, so the character looks
    /// down; negative yaw swings the face toward -X.
    #[must_use]
    pub fn to_rotation(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

impl From<Vec2> for Orientation {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Scale factors mapping a normalised pointer position to a target pose.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PointerDamping {
    /// Multiplier for the pointer x component.
    pub yaw: f32,
    /// Multiplier for the pointer y component.
    pub pitch: f32,
}

impl Default for PointerDamping {
    fn default() -> Self {
        Self {
            yaw: POINTER_YAW_DAMPING,
            pitch: POINTER_PITCH_DAMPING,
        }
    }
}

/// Chooses the pose every character should ease toward this frame.
///
/// While the password is focused the answer is always `look_away`. Otherwise
/// the pose follows `pointer` scaled by `damping`, or rests at
/// [`Orientation::NEUTRAL`] when no pointer is tracked.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use lookaway::pose::{target_orientation, Orientation, PointerDamping};
///
/// let damping = PointerDamping::default();
/// let away = target_orientation(true, Some(Vec2::ONE), Orientation::LOOK_AWAY, damping);
/// assert_eq!(away, Orientation::LOOK_AWAY);
///
/// let idle = target_orientation(false, None, Orientation::LOOK_AWAY, damping);
/// assert_eq!(idle, Orientation::NEUTRAL);
/// ```
#[must_use]
pub fn target_orientation(
    password_focused: bool,
    pointer: Option<Vec2>,
    look_away: Orientation,
    damping: PointerDamping,
) -> Orientation {
    if password_focused {
        return look_away;
    }
    pointer.map_or(Orientation::NEUTRAL, |pointer| {
        Orientation::new(pointer.x * damping.yaw, pointer.y * damping.pitch)
    })
}

/// Moves `current` a fraction of the remaining way toward `target`.
///
/// `fraction` is clamped to `[0, 1]`, so the result always lies on the
/// segment between the two poses and never overshoots.
#[must_use]
pub fn ease_toward(current: Orientation, target: Orientation, fraction: f32) -> Orientation {
    let step = fraction.clamp(0.0, 1.0);
    Orientation::from(current.as_vec2().lerp(target.as_vec2(), step))
}

/// How the per-frame easing fraction is derived.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Easing {
    /// A fixed fraction per rendered frame, regardless of frame time.
    PerFrame {
        /// Share of the remaining distance covered each frame.
        fraction: f32,
    },
    /// `1 - exp(-rate * dt)`, independent of the display refresh rate.
    Exponential {
        /// Convergence rate in 1/s.
        rate: f32,
    },
}

impl Easing {
    /// The frame-count based reference easing.
    #[must_use]
    pub const fn per_frame() -> Self {
        Self::PerFrame {
            fraction: PER_FRAME_EASING_FRACTION,
        }
    }

    /// Time-based easing tuned to match [`Easing::per_frame`] at 60 Hz.
    #[must_use]
    pub const fn exponential() -> Self {
        Self::Exponential {
            rate: EXPONENTIAL_EASING_RATE,
        }
    }

    /// Fraction of the remaining distance to cover for a frame of
    /// `delta_seconds`, clamped to `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookaway::pose::Easing;
    ///
    /// assert!((Easing::per_frame().step_fraction(1.0) - 0.05).abs() < f32::EPSILON);
    /// assert_eq!(Easing::exponential().step_fraction(0.0), 0.0);
    /// ```
    #[must_use]
    pub fn step_fraction(self, delta_seconds: f32) -> f32 {
        let raw = match self {
            Self::PerFrame { fraction } => fraction,
            Self::Exponential { rate } => 1.0 - (-rate * delta_seconds.max(0.0)).exp(),
        };
        raw.clamp(0.0, 1.0)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::exponential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const DAMPING: PointerDamping = PointerDamping {
        yaw: POINTER_YAW_DAMPING,
        pitch: POINTER_PITCH_DAMPING,
    };

    #[rstest]
    #[case::centre(Vec2::ZERO, Orientation::NEUTRAL)]
    #[case::right_edge(Vec2::new(1.0, 0.0), Orientation::new(0.4, 0.0))]
    #[case::bottom_left(Vec2::new(-1.0, 1.0), Orientation::new(-0.4, 0.25))]
    fn pointer_target_is_damped(#[case] pointer: Vec2, #[case] expected: Orientation) {
        let target = target_orientation(false, Some(pointer), Orientation::LOOK_AWAY, DAMPING);
        assert_relative_eq!(target.yaw, expected.yaw);
        assert_relative_eq!(target.pitch, expected.pitch);
    }

    #[rstest]
    #[case::with_pointer(Some(Vec2::new(0.7, -0.3)))]
    #[case::without_pointer(None)]
    fn focus_overrides_pointer(#[case] pointer: Option<Vec2>) {
        let target = target_orientation(true, pointer, Orientation::LOOK_AWAY, DAMPING);
        assert_eq!(target, Orientation::LOOK_AWAY);
    }

    #[test]
    fn look_away_pose_turns_away_and_up() {
        assert!(Orientation::LOOK_AWAY.yaw < 0.0);
        assert!(Orientation::LOOK_AWAY.pitch > 0.0);
    }

    #[rstest]
    #[case::towards_look_away(Orientation::NEUTRAL, Orientation::LOOK_AWAY)]
    #[case::back_to_neutral(Orientation::LOOK_AWAY, Orientation::NEUTRAL)]
    #[case::mixed_signs(Orientation::new(0.3, -0.2), Orientation::new(-0.1, 0.4))]
    fn easing_step_never_overshoots(#[case] start: Orientation, #[case] target: Orientation) {
        let mut current = start;
        for _ in 0..200 {
            let next = ease_toward(current, target, 0.05);
            assert!(next.distance(target) < current.distance(target));
            assert!((next.yaw - target.yaw).abs() <= (current.yaw - target.yaw).abs());
            assert!((next.pitch - target.pitch).abs() <= (current.pitch - target.pitch).abs());
            current = next;
        }
    }

    #[rstest]
    #[case::negative(-0.5)]
    #[case::above_one(1.5)]
    fn easing_fraction_is_clamped(#[case] fraction: f32) {
        let eased = ease_toward(Orientation::NEUTRAL, Orientation::LOOK_AWAY, fraction);
        let span = Orientation::LOOK_AWAY.distance(Orientation::NEUTRAL);
        assert!(eased.distance(Orientation::NEUTRAL) <= span);
        assert!(eased.yaw >= LOOK_AWAY_YAW && eased.yaw <= 0.0);
    }

    #[test]
    fn exponential_easing_matches_reference_at_sixty_hertz() {
        let fraction = Easing::exponential().step_fraction(1.0 / 60.0);
        assert_relative_eq!(fraction, PER_FRAME_EASING_FRACTION, epsilon = 1e-4);
    }

    #[rstest]
    #[case::short_frame(1.0 / 240.0)]
    #[case::long_frame(1.0 / 30.0)]
    fn exponential_easing_is_refresh_rate_independent(#[case] dt: f32) {
        let easing = Easing::exponential();
        let frames = (1.0 / dt).round() as usize;
        let mut current = Orientation::NEUTRAL;
        for _ in 0..frames {
            current = ease_toward(current, Orientation::LOOK_AWAY, easing.step_fraction(dt));
        }
        let mut reference = Orientation::NEUTRAL;
        for _ in 0..60 {
            let step = easing.step_fraction(1.0 / 60.0);
            reference = ease_toward(reference, Orientation::LOOK_AWAY, step);
        }
        assert_relative_eq!(current.yaw, reference.yaw, epsilon = 1e-3);
        assert_relative_eq!(current.pitch, reference.pitch, epsilon = 1e-3);
    }

    #[test]
    fn rotation_of_neutral_is_identity() {
        assert!(Orientation::NEUTRAL.to_rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
