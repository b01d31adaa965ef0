//! Astro Siege - a top-down asteroid-defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `frame`: Display-list render handoff for the presentation adapter
//! - `audio`: Fire-and-forget sound playback seam
//!
//! The crate contains no window, renderer or audio backend. A presentation
//! adapter drives `sim::tick` once per frame with measured elapsed time and
//! an input snapshot, then consumes `frame::build` and the drained sound
//! events.

pub mod audio;
pub mod frame;
pub mod sim;

pub use sim::{GameState, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (pixels, y-down screen space)
    pub const SCREEN_W: f32 = 1000.0;
    pub const SCREEN_H: f32 = 1000.0;

    /// Asteroid population cap - the spawner stalls above this
    pub const MAX_ASTEROIDS: usize = 150;

    /// Asteroid spawn interval range (seconds, redrawn after each spawn)
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_MAX: f32 = 3.0;

    /// Seconds of held charge before the doomsday device arms
    pub const DOOMSDAY_CHARGE: f32 = 5.0;
    /// Seconds past zero an armed charge may run before the session ends
    pub const DOOMSDAY_OVERCHARGE: f32 = 1.0;

    /// Entity capacity reserved at session start
    pub const ASTEROID_CAPACITY: usize = 1000;
    pub const PROJECTILE_CAPACITY: usize = 10_000;
}

/// Rotate a vector by an angle given in degrees
#[inline]
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    Vec2::from_angle(deg.to_radians()).rotate(v)
}

/// Unit vector at `rad` radians (0 pointing +x, y down)
#[inline]
pub fn unit_from_angle(rad: f32) -> Vec2 {
    Vec2::new(rad.cos(), rad.sin())
}
