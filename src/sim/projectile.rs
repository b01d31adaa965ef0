//! Weapon profiles and projectile entities
//!
//! Each weapon is a per-variant table entry (damage, radius, velocity
//! profile). HomingSecondary is never fired by the player; it radiates from
//! a homing projectile's asteroid impact.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::rotate_deg;

/// Weapon profile tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Beam,
    Bullet,
    HomingPrimary,
    HomingSecondary,
}

impl WeaponKind {
    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Beam => 20,
            WeaponKind::Bullet => 10,
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => 5,
        }
    }

    /// Collision radius. Homing radius is half the 32 px rendered sprite.
    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Beam => 2.0,
            WeaponKind::Bullet => 5.0,
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => 16.0,
        }
    }

    /// HUD label
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Beam => "BEAM",
            WeaponKind::Bullet => "BULLET",
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => "HOMING",
        }
    }

    /// Both homing tags trigger impact side effects
    pub fn is_homing(self) -> bool {
        matches!(self, WeaponKind::HomingPrimary | WeaponKind::HomingSecondary)
    }

    /// Next weapon in the manual selection cycle. HomingSecondary is not
    /// player-selectable and cycles back to the start.
    pub fn next_selectable(self) -> WeaponKind {
        match self {
            WeaponKind::Beam => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::HomingPrimary,
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => WeaponKind::Beam,
        }
    }
}

/// A ship-fired entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: WeaponKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    /// Construct a projectile of `kind` at `pos` with the weapon's velocity
    /// profile for `travel_speed`. Secondaries radiate at a random angle.
    pub fn fire(kind: WeaponKind, pos: Vec2, travel_speed: f32, rng: &mut Pcg32) -> Self {
        let vel = match kind {
            WeaponKind::Beam | WeaponKind::Bullet => Vec2::new(0.0, -travel_speed),
            WeaponKind::HomingPrimary => Vec2::new(0.0, -travel_speed / 2.0),
            WeaponKind::HomingSecondary => rotate_deg(
                Vec2::new(0.0, -travel_speed / 2.0),
                rng.random_range(0.0..360.0),
            ),
        };
        Self { kind, pos, vel }
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Zero-margin bounds check: a projectile despawns the instant its
    /// center crosses any screen edge.
    pub fn in_bounds(&self, bounds: Vec2) -> bool {
        !(self.pos.x < 0.0 || self.pos.x > bounds.x || self.pos.y < 0.0 || self.pos.y > bounds.y)
    }
}
