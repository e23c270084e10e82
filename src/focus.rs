//! Signals the controller reads but never writes.
//!
//! [`FocusState`] is owned by the auth form and flips only on explicit
//! password focus and blur. [`PointerState`] is resampled from the cursor
//! every frame while pointer tracking is active.
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::debug;

/// Whether the password input currently has keyboard focus.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Resource, Default)]
pub struct FocusState {
    password_focused: bool,
}

impl FocusState {
    /// Returns `true` while the password field is focused.
    #[must_use]
    pub const fn is_password_focused(self) -> bool {
        self.password_focused
    }

    /// Records a focus edge. Only the form calls this.
    pub(crate) const fn set_password_focused(&mut self, focused: bool) {
        self.password_focused = focused;
    }
}

/// Raised when password focus flips. Not raised for repeated focus or blur.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordFocusChanged {
    /// New focus value.
    pub focused: bool,
}

/// Normalised pointer position in `[-1, 1]` on both axes.
///
/// `x` grows to the right and `y` grows downward, matching window cursor
/// coordinates, so the centre of the window is the origin.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq, Deref)]
#[reflect(Resource, Default)]
pub struct PointerState(pub Vec2);

impl PointerState {
    /// Normalises a cursor position within a window of `window_size`.
    ///
    /// Returns `None` for a degenerate window. Positions outside the window
    /// clamp to the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::math::Vec2;
    /// use lookaway::focus::PointerState;
    ///
    /// let size = Vec2::new(800.0, 600.0);
    /// let centre = PointerState::from_cursor(Vec2::new(400.0, 300.0), size);
    /// assert_eq!(centre, Some(PointerState(Vec2::ZERO)));
    /// ```
    #[must_use]
    pub fn from_cursor(cursor: Vec2, window_size: Vec2) -> Option<Self> {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return None;
        }
        let normalised = (cursor / window_size) * 2.0 - Vec2::ONE;
        Some(Self(normalised.clamp(Vec2::NEG_ONE, Vec2::ONE)))
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn log_password_focus(event: On<PasswordFocusChanged>) {
    let PasswordFocusChanged { focused } = event.event();
    if *focused {
        debug!("password focused; characters looking away");
    } else {
        debug!("password blurred; characters looking back");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::top_left(Vec2::ZERO, Vec2::new(-1.0, -1.0))]
    #[case::bottom_right(Vec2::new(800.0, 600.0), Vec2::new(1.0, 1.0))]
    #[case::right_middle(Vec2::new(600.0, 300.0), Vec2::new(0.5, 0.0))]
    #[case::outside(Vec2::new(-200.0, 900.0), Vec2::new(-1.0, 1.0))]
    fn cursor_is_normalised(#[case] cursor: Vec2, #[case] expected: Vec2) {
        let state = PointerState::from_cursor(cursor, Vec2::new(800.0, 600.0));
        let actual = state.map(|pointer| pointer.0);
        assert_eq!(actual, Some(expected));
    }

    #[test]
    fn degenerate_window_yields_nothing() {
        assert_eq!(PointerState::from_cursor(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn focus_state_starts_unfocused() {
        assert!(!FocusState::default().is_password_focused());
    }
}
