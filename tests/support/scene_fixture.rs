//! Shared fixture for behavioural scene tests.
//!
//! rspec clones its environment between examples, so the Bevy `App` lives
//! behind an `Arc<Mutex<_>>` and every clone drives the same world.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use lookaway::{FormInput, MountScene, SceneVariant, UnmountScene};
use test_utils::app::{headless_app, step};

/// `App` wrapper that may cross the rspec runner's `Send + Sync` bound.
#[derive(Debug)]
pub struct SharedWorld(App);

impl Deref for SharedWorld {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SharedWorld {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: suites run with `parallel(false)` and every access goes through
// the fixture's mutex, so the wrapped app is never touched from two threads
// at once.
unsafe impl Send for SharedWorld {}
unsafe impl Sync for SharedWorld {}

/// Clonable handle to one headless app.
#[derive(Debug, Clone)]
pub struct SceneFixture {
    app: Arc<Mutex<SharedWorld>>,
}

impl SceneFixture {
    /// Wraps a fresh headless app with the controller and form installed.
    pub fn headless() -> Self {
        Self::from_app(headless_app())
    }

    /// Wraps an already configured app.
    pub fn from_app(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(SharedWorld(app))),
        }
    }

    /// Locks the app for inspection or mutation.
    pub fn app(&self) -> MutexGuard<'_, SharedWorld> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sends a form intent.
    pub fn input(&self, input: FormInput) {
        let mut app = self.app();
        app.world_mut().trigger(input);
        app.world_mut().flush();
    }

    /// Requests a scene mount and applies it.
    pub fn mount(&self, variant: SceneVariant) {
        let mut app = self.app();
        app.world_mut().trigger(MountScene { variant });
        app.world_mut().flush();
    }

    /// Requests the scene be torn down and applies it.
    pub fn unmount(&self) {
        let mut app = self.app();
        app.world_mut().trigger(UnmountScene);
        app.world_mut().flush();
    }

    /// Advances the app by `frames` updates.
    pub fn tick(&self, frames: usize) {
        step(&mut self.app(), frames);
    }
}
