//! Headless app construction and stepping.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use lookaway::{AuthFormPlugin, LookAwayPlugin};

/// Frame time every headless app advances by.
pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Builds an app running the controller and form with a fixed 60 Hz clock.
///
/// The app has already ticked once, so the next `update` advances time by
/// exactly [`FRAME`].
///
/// # Examples
/// ```
/// use test_utils::app::headless_app;
/// let app = headless_app();
/// assert!(app.world().contains_resource::<lookaway::FocusState>());
/// ```
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.add_plugins((LookAwayPlugin, AuthFormPlugin));
    app.update();
    app
}

/// Runs `frames` updates.
pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Seconds elapsed on the app clock.
pub fn elapsed_secs(app: &App) -> f32 {
    app.world().resource::<Time>().elapsed_secs()
}
