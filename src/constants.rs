//! Animation constants shared by the pose, idle-motion and scene systems.
//!
//! Values describe the reference look of the login scene. Everything that a
//! deployment may want to tune lives in [`crate::LookAwaySettings`]; these
//! constants seed its defaults.
use std::f32::consts::PI;

/// Yaw of the look-away pose in radians. Negative turns away from the viewer.
pub const LOOK_AWAY_YAW: f32 = -0.4 * PI;
/// Pitch of the look-away pose in radians. Positive tilts the face down.
pub const LOOK_AWAY_PITCH: f32 = 0.3 * PI;

/// Scale applied to the pointer x component when tracking the cursor.
pub const POINTER_YAW_DAMPING: f32 = 0.4;
/// Scale applied to the pointer y component when tracking the cursor.
pub const POINTER_PITCH_DAMPING: f32 = 0.25;

/// Fraction of the remaining distance covered each frame in per-frame easing.
pub const PER_FRAME_EASING_FRACTION: f32 = 0.05;
/// Rate constant for time-based easing, in 1/s.
///
/// Equal to `-ln(0.95) * 60`, so a 60 Hz display converges exactly like the
/// per-frame reference.
pub const EXPONENTIAL_EASING_RATE: f32 = 3.077_6;
/// Largest frame delta fed into time-based easing.
pub const MAX_EASING_DELTA_SECONDS: f32 = 0.1;

/// Angular frequency of the body float, in rad/s.
pub const FLOAT_FREQUENCY: f32 = 1.2;
/// Float amplitude as a fraction of the character's base scale.
pub const FLOAT_AMPLITUDE: f32 = 0.05;
/// Constant angular velocity of the ring spin, in rad/s.
pub const RING_SPIN_SPEED: f32 = 0.6;
/// Angular frequency of the secondary ring wobble, in rad/s.
pub const RING_WOBBLE_FREQUENCY: f32 = 0.9;
/// Peak ring wobble in radians.
pub const RING_WOBBLE_AMPLITUDE: f32 = 0.15;
/// Angular frequency of the core pulse, in rad/s.
pub const PULSE_FREQUENCY: f32 = 2.4;
/// Centre of the core pulse scale range.
pub const PULSE_BASELINE: f32 = 0.95;
/// Half-width of the core pulse scale range.
pub const PULSE_AMPLITUDE: f32 = 0.05;
/// Phase shift per world unit of base x-position.
pub const PHASE_PER_UNIT: f32 = 1.0;

/// Scene root scale while the password field is focused.
pub const FOCUSED_SCENE_SCALE: f32 = 1.05;
