//! The player ship
//!
//! Position, health, per-weapon fire tables and a one-way alive/dead state
//! machine. A dead ship drifts downward until the session is restarted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::WeaponKind;
use super::tick::TickInput;

/// Half the 48 px rendered sprite width
pub const SHIP_RADIUS: f32 = 24.0;
/// Movement speed, pixels/sec
pub const SHIP_SPEED: f32 = 250.0;
pub const SHIP_START_HP: i32 = 100;

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub(crate) hp: i32,
    pub(crate) speed: f32,
    pub(crate) alive: bool,
}

impl Ship {
    /// Fresh ship at screen center with full health
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: bounds * 0.5,
            hp: SHIP_START_HP,
            speed: SHIP_SPEED,
            alive: true,
        }
    }

    /// While alive, move by the held axes (diagonals unnormalized); while
    /// dead, drift downward.
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        if self.alive {
            if input.up {
                self.pos.y -= self.speed * dt;
            }
            if input.down {
                self.pos.y += self.speed * dt;
            }
            if input.left {
                self.pos.x -= self.speed * dt;
            }
            if input.right {
                self.pos.x += self.speed * dt;
            }
        } else {
            self.pos.y += self.speed * dt;
        }
    }

    /// Apply contact damage. No-op when already dead. Returns true on the
    /// call that kills the ship, so the caller can emit the death sound
    /// exactly once.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn radius(&self) -> f32 {
        SHIP_RADIUS
    }

    /// Muzzle position: ship center offset upward by one radius
    pub fn nose(&self) -> Vec2 {
        self.pos - Vec2::new(0.0, SHIP_RADIUS)
    }

    /// Shots per second for `weapon`
    pub fn fire_rate(&self, weapon: WeaponKind) -> f32 {
        match weapon {
            WeaponKind::Beam => 18.0,
            WeaponKind::Bullet => 22.0,
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => 5.0,
        }
    }

    /// Projectile spacing in pixels for `weapon`; travel speed is
    /// spacing x fire rate
    pub fn spacing(&self, weapon: WeaponKind) -> f32 {
        match weapon {
            WeaponKind::Beam => 40.0,
            WeaponKind::Bullet => 20.0,
            WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(1000.0, 1000.0);

    #[test]
    fn test_new_ship_centered_full_hp() {
        let ship = Ship::new(BOUNDS);
        assert_eq!(ship.pos, Vec2::new(500.0, 500.0));
        assert_eq!(ship.hp(), 100);
        assert!(ship.is_alive());
    }

    #[test]
    fn test_diagonal_movement_unnormalized() {
        let mut ship = Ship::new(BOUNDS);
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        ship.update(&input, 0.1);
        // Both axes move the full speed*dt, so diagonal travel is faster
        assert_eq!(ship.pos, Vec2::new(500.0 - 25.0, 500.0 - 25.0));
    }

    #[test]
    fn test_dead_ship_drifts_down_and_ignores_input() {
        let mut ship = Ship::new(BOUNDS);
        ship.take_damage(100);
        assert!(!ship.is_alive());

        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        ship.update(&input, 0.1);
        assert_eq!(ship.pos, Vec2::new(500.0, 525.0));
    }

    #[test]
    fn test_damage_monotonic_and_one_way() {
        let mut ship = Ship::new(BOUNDS);
        assert!(!ship.take_damage(60));
        assert_eq!(ship.hp(), 40);
        assert!(ship.is_alive());

        // Killing blow reports true exactly once
        assert!(ship.take_damage(60));
        assert_eq!(ship.hp(), -20);
        assert!(!ship.is_alive());

        // Further damage is a no-op on a dead ship
        assert!(!ship.take_damage(1000));
        assert_eq!(ship.hp(), -20);
    }

    #[test]
    fn test_overkill_goes_negative() {
        let mut ship = Ship::new(BOUNDS);
        ship.hp = 10;
        assert!(ship.take_damage(60));
        assert_eq!(ship.hp(), -50);
    }

    #[test]
    fn test_fire_tables() {
        let ship = Ship::new(BOUNDS);
        assert_eq!(ship.fire_rate(WeaponKind::Beam), 18.0);
        assert_eq!(ship.spacing(WeaponKind::Beam), 40.0);
        assert_eq!(ship.fire_rate(WeaponKind::Bullet), 22.0);
        assert_eq!(ship.spacing(WeaponKind::Bullet), 20.0);
        assert_eq!(ship.fire_rate(WeaponKind::HomingPrimary), 5.0);
        assert_eq!(ship.spacing(WeaponKind::HomingPrimary), 100.0);
        // Secondary shares the homing table
        assert_eq!(ship.fire_rate(WeaponKind::HomingSecondary), 5.0);
        assert_eq!(ship.spacing(WeaponKind::HomingSecondary), 100.0);
    }

    #[test]
    fn test_nose_offset() {
        let ship = Ship::new(BOUNDS);
        assert_eq!(ship.nose(), Vec2::new(500.0, 500.0 - SHIP_RADIUS));
    }
}
