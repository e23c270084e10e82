//! Utility helpers for tests.
//!
//! Builds headless apps with a fixed frame time and reads character state
//! back out of the world.
pub mod app;
pub mod scene;
