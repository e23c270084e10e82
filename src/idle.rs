//! Focus-independent idle motion.
//!
//! Every character floats, spins its ring and pulses its core whether or not
//! the password is focused. Each value is a pure function of the time since
//! the scene mounted and the character's stored [`PhaseOffset`].
use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::{
    FLOAT_AMPLITUDE, FLOAT_FREQUENCY, PHASE_PER_UNIT, PULSE_AMPLITUDE, PULSE_BASELINE,
    PULSE_FREQUENCY, RING_SPIN_SPEED, RING_WOBBLE_AMPLITUDE, RING_WOBBLE_FREQUENCY,
};

/// Per-character time offset that keeps idle motion out of sync.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default, Deref)]
#[reflect(Component, Default)]
pub struct PhaseOffset(pub f32);

impl PhaseOffset {
    /// Derives the phase from a character's base position.
    ///
    /// Only the x coordinate contributes, so characters stacked vertically
    /// share a phase.
    #[must_use]
    pub fn from_base_position(position: Vec3) -> Self {
        Self(position.x * PHASE_PER_UNIT)
    }
}

/// Idle-motion values for one character at one instant.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct IdleMotion {
    /// Vertical offset of the body in world units.
    pub float_offset: f32,
    /// Ring spin angle in radians, wrapped to `[0, TAU)`.
    pub ring_spin: f32,
    /// Secondary ring tilt in radians.
    pub ring_wobble: f32,
    /// Uniform scale of the glowing core.
    pub core_pulse: f32,
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self {
            float_offset: 0.0,
            ring_spin: 0.0,
            ring_wobble: 0.0,
            core_pulse: PULSE_BASELINE,
        }
    }
}

impl IdleMotion {
    /// Samples idle motion `elapsed` seconds after mount.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookaway::idle::{IdleMotion, PhaseOffset};
    ///
    /// let motion = IdleMotion::sample(0.0, PhaseOffset(0.0), 1.0);
    /// assert_eq!(motion.float_offset, 0.0);
    /// assert!((motion.core_pulse - 0.95).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    pub fn sample(elapsed: f32, phase: PhaseOffset, base_scale: f32) -> Self {
        let shift = phase.0;
        Self {
            float_offset: (elapsed * FLOAT_FREQUENCY + shift).sin() * FLOAT_AMPLITUDE * base_scale,
            ring_spin: (elapsed * RING_SPIN_SPEED + shift).rem_euclid(TAU),
            ring_wobble: (elapsed * RING_WOBBLE_FREQUENCY + shift).sin() * RING_WOBBLE_AMPLITUDE,
            core_pulse: PULSE_AMPLITUDE
                .mul_add((elapsed * PULSE_FREQUENCY + shift).sin(), PULSE_BASELINE),
        }
    }

    /// Seconds for the body float to repeat.
    #[must_use]
    pub fn float_period() -> f32 {
        TAU / FLOAT_FREQUENCY
    }

    /// Seconds for the ring to complete one revolution.
    #[must_use]
    pub fn spin_period() -> f32 {
        TAU / RING_SPIN_SPEED
    }

    /// Seconds for the ring wobble to repeat.
    #[must_use]
    pub fn wobble_period() -> f32 {
        TAU / RING_WOBBLE_FREQUENCY
    }

    /// Seconds for the core pulse to repeat.
    #[must_use]
    pub fn pulse_period() -> f32 {
        TAU / PULSE_FREQUENCY
    }

    /// Ring rotation combining spin about the vertical axis with wobble.
    #[must_use]
    pub fn ring_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.ring_spin) * Quat::from_rotation_x(self.ring_wobble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case::origin(0.0)]
    #[case::left(-2.5)]
    #[case::right(3.25)]
    fn float_returns_after_one_period(#[case] x: f32) {
        let phase = PhaseOffset::from_base_position(Vec3::new(x, 0.0, 0.0));
        let start = IdleMotion::sample(0.7, phase, 1.0);
        let later = IdleMotion::sample(0.7 + IdleMotion::float_period(), phase, 1.0);
        assert_abs_diff_eq!(start.float_offset, later.float_offset, epsilon = 1e-4);
    }

    #[test]
    fn wobble_and_pulse_return_after_their_periods() {
        let phase = PhaseOffset(1.3);
        let start = IdleMotion::sample(0.2, phase, 1.0);
        let wobble = IdleMotion::sample(0.2 + IdleMotion::wobble_period(), phase, 1.0);
        let pulse = IdleMotion::sample(0.2 + IdleMotion::pulse_period(), phase, 1.0);
        assert_abs_diff_eq!(start.ring_wobble, wobble.ring_wobble, epsilon = 1e-4);
        assert_abs_diff_eq!(start.core_pulse, pulse.core_pulse, epsilon = 1e-4);
    }

    #[test]
    fn spin_advances_at_constant_rate_and_wraps() {
        let phase = PhaseOffset(0.0);
        let quarter = IdleMotion::sample(IdleMotion::spin_period() / 4.0, phase, 1.0);
        assert_abs_diff_eq!(quarter.ring_spin, TAU / 4.0, epsilon = 1e-4);
        let wrapped = IdleMotion::sample(IdleMotion::spin_period() * 1.25, phase, 1.0);
        assert!(wrapped.ring_spin < TAU);
        assert_abs_diff_eq!(wrapped.ring_spin, TAU / 4.0, epsilon = 1e-3);
    }

    #[test]
    fn pulse_stays_within_its_range() {
        let phase = PhaseOffset(0.4);
        for step in 0..400 {
            let motion = IdleMotion::sample(step as f32 * 0.05, phase, 1.0);
            assert!((0.9 - 1e-6..=1.0 + 1e-6).contains(&motion.core_pulse));
        }
    }

    #[test]
    fn float_amplitude_scales_with_character_size() {
        let phase = PhaseOffset(0.0);
        let t = IdleMotion::float_period() / 4.0;
        let small = IdleMotion::sample(t, phase, 1.0);
        let large = IdleMotion::sample(t, phase, 2.0);
        assert_abs_diff_eq!(small.float_offset, FLOAT_AMPLITUDE, epsilon = 1e-5);
        assert_abs_diff_eq!(large.float_offset, 2.0 * FLOAT_AMPLITUDE, epsilon = 1e-5);
    }

    #[test]
    fn characters_at_different_x_are_out_of_sync() {
        let left = PhaseOffset::from_base_position(Vec3::new(-1.5, 0.2, 0.0));
        let right = PhaseOffset::from_base_position(Vec3::new(2.0, -0.4, 0.0));
        let a = IdleMotion::sample(1.0, left, 1.0);
        let b = IdleMotion::sample(1.0, right, 1.0);
        assert_ne!(a.float_offset, b.float_offset);
        assert_ne!(a.core_pulse, b.core_pulse);
        assert_ne!(a.ring_spin, b.ring_spin);
    }
}
