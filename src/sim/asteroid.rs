//! Asteroid variants, edge spawning and fragmentation
//!
//! Asteroids are a closed set of variants differing in silhouette, contact
//! damage and destroy behavior. All construction randomness flows through
//! the session RNG so spawns replay identically for a given seed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::unit_from_angle;

/// Radius contributed by one size unit
pub const UNIT_RADIUS: f32 = 16.0;

/// Spawn velocity range (pixels/sec)
const SPEED_MIN: f32 = 125.0;
const SPEED_MAX: f32 = 250.0;
/// Spawn angular velocity range (deg/sec, always positive)
const ROT_MIN: f32 = 50.0;
const ROT_MAX: f32 = 240.0;

/// Fragment velocity range (pixels/sec)
const FRAG_SPEED_MIN: f32 = 150.0;
const FRAG_SPEED_MAX: f32 = 300.0;

/// Asteroid shape/behavior profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidKind {
    Triangle,
    Square,
    Pentagon,
    /// Composite silhouette; shatters into Triangle fragments when shot
    Angry,
}

impl AsteroidKind {
    /// Contact damage per size unit
    pub fn base_damage(self) -> i32 {
        match self {
            AsteroidKind::Triangle => 5,
            AsteroidKind::Square => 10,
            AsteroidKind::Pentagon => 15,
            AsteroidKind::Angry => 15,
        }
    }
}

/// Size class, encoded as the radius/damage multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small = 1,
    Medium = 2,
    Large = 4,
}

impl SizeClass {
    pub fn multiplier(self) -> u32 {
        self as u32
    }

    /// Uniform draw over {1, 2, 4}
    fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..=2) {
            0 => SizeClass::Small,
            1 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

/// The player's current spawn-shape selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeSelection {
    #[default]
    Triangle,
    Square,
    Pentagon,
    Angry,
    /// Resolved to a concrete variant at spawn time
    Random,
}

impl ShapeSelection {
    fn resolve(self, rng: &mut Pcg32) -> AsteroidKind {
        match self {
            ShapeSelection::Triangle => AsteroidKind::Triangle,
            ShapeSelection::Square => AsteroidKind::Square,
            ShapeSelection::Pentagon => AsteroidKind::Pentagon,
            ShapeSelection::Angry => AsteroidKind::Angry,
            ShapeSelection::Random => match rng.random_range(0..4) {
                0 => AsteroidKind::Triangle,
                1 => AsteroidKind::Square,
                2 => AsteroidKind::Pentagon,
                _ => AsteroidKind::Angry,
            },
        }
    }
}

/// A hazard entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub kind: AsteroidKind,
    pub size: SizeClass,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Angular velocity in deg/sec
    pub rot_speed: f32,
}

impl Asteroid {
    /// Spawn at a random screen edge, aimed at screen center with jitter.
    ///
    /// The spawn position sits exactly one radius outside the chosen edge,
    /// so a fresh asteroid is never despawned by the out-of-bounds rule
    /// (strictly more than one radius out) before it moves.
    pub fn spawn(rng: &mut Pcg32, bounds: Vec2, selection: ShapeSelection) -> Self {
        let kind = selection.resolve(rng);
        let size = SizeClass::random(rng);
        let radius = UNIT_RADIUS * size.multiplier() as f32;

        let pos = match rng.random_range(0..4) {
            0 => Vec2::new(rng.random_range(0.0..bounds.x), -radius),
            1 => Vec2::new(bounds.x + radius, rng.random_range(0.0..bounds.y)),
            2 => Vec2::new(rng.random_range(0.0..bounds.x), bounds.y + radius),
            _ => Vec2::new(-radius, rng.random_range(0.0..bounds.y)),
        };

        // Aim at a jittered point near screen center
        let max_off = bounds.x.min(bounds.y) * 0.1;
        let jitter_angle = rng.random_range(0.0..TAU);
        let jitter_radius = rng.random_range(0.0..=max_off);
        let target = bounds * 0.5 + unit_from_angle(jitter_angle) * jitter_radius;

        let dir = (target - pos).normalize_or_zero();

        Self {
            kind,
            size,
            pos,
            vel: dir * rng.random_range(SPEED_MIN..SPEED_MAX),
            rotation: rng.random_range(0.0..360.0),
            rot_speed: rng.random_range(ROT_MIN..ROT_MAX),
        }
    }

    pub fn radius(&self) -> f32 {
        UNIT_RADIUS * self.size.multiplier() as f32
    }

    /// Contact damage dealt to the ship
    pub fn damage(&self) -> i32 {
        self.kind.base_damage() * self.size.multiplier() as i32
    }

    /// Integrate by `dt`. Returns false once the center lies strictly more
    /// than one radius beyond any screen edge (fully off-screen).
    pub fn advance(&mut self, dt: f32, bounds: Vec2) -> bool {
        self.pos += self.vel * dt;
        self.rotation += self.rot_speed * dt;

        let r = self.radius();
        !(self.pos.x < -r
            || self.pos.x > bounds.x + r
            || self.pos.y < -r
            || self.pos.y > bounds.y + r)
    }

    /// Entities left behind when a projectile destroys this asteroid.
    ///
    /// Only Angry shatters: 3..=10 Triangle shards at the parent position,
    /// each with an independently random size, outward velocity and spin.
    pub fn fragments(&self, rng: &mut Pcg32) -> Vec<Asteroid> {
        match self.kind {
            AsteroidKind::Triangle | AsteroidKind::Square | AsteroidKind::Pentagon => Vec::new(),
            AsteroidKind::Angry => {
                let count = 3 + rng.random_range(0..8);
                (0..count)
                    .map(|_| {
                        let dir = unit_from_angle(rng.random_range(0.0..TAU));
                        Asteroid {
                            kind: AsteroidKind::Triangle,
                            size: SizeClass::random(rng),
                            pos: self.pos,
                            vel: dir * rng.random_range(FRAG_SPEED_MIN..FRAG_SPEED_MAX),
                            rotation: rng.random_range(0.0..360.0),
                            rot_speed: rng.random_range(-180.0..180.0),
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn test_rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    const BOUNDS: Vec2 = Vec2::new(1000.0, 1000.0);

    #[test]
    fn test_radius_and_damage_scale_with_size() {
        let ast = Asteroid {
            kind: AsteroidKind::Pentagon,
            size: SizeClass::Large,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rotation: 0.0,
            rot_speed: 0.0,
        };
        assert_eq!(ast.radius(), 64.0);
        assert_eq!(ast.damage(), 60);
    }

    #[test]
    fn test_spawn_size_is_valid_class() {
        let mut rng = test_rng(7);
        for _ in 0..100 {
            let ast = Asteroid::spawn(&mut rng, BOUNDS, ShapeSelection::Random);
            assert!(matches!(
                ast.size.multiplier(),
                1 | 2 | 4
            ));
            assert_eq!(ast.radius(), 16.0 * ast.size.multiplier() as f32);
        }
    }

    #[test]
    fn test_spawn_starts_in_play() {
        // Spawn position is exactly one radius out, which the despawn rule
        // (strictly more than one radius) must not immediately cull.
        let mut rng = test_rng(11);
        for _ in 0..100 {
            let mut ast = Asteroid::spawn(&mut rng, BOUNDS, ShapeSelection::Triangle);
            assert!(ast.advance(0.0, BOUNDS));
        }
    }

    #[test]
    fn test_spawn_aims_inward() {
        let mut rng = test_rng(13);
        for _ in 0..100 {
            let ast = Asteroid::spawn(&mut rng, BOUNDS, ShapeSelection::Square);
            // Velocity must reduce the distance to screen center
            let before = ast.pos.distance(BOUNDS * 0.5);
            let after = (ast.pos + ast.vel * 0.01).distance(BOUNDS * 0.5);
            assert!(after < before);
        }
    }

    #[test]
    fn test_advance_despawns_past_one_radius() {
        let mut ast = Asteroid {
            kind: AsteroidKind::Triangle,
            size: SizeClass::Small,
            pos: Vec2::new(-16.0, 500.0),
            vel: Vec2::new(-100.0, 0.0),
            rotation: 0.0,
            rot_speed: 0.0,
        };
        // At exactly -radius: still in play
        assert!(ast.advance(0.0, BOUNDS));
        // After drifting further out: gone
        assert!(!ast.advance(0.1, BOUNDS));
    }

    #[test]
    fn test_only_angry_fragments() {
        let mut rng = test_rng(17);
        for kind in [
            AsteroidKind::Triangle,
            AsteroidKind::Square,
            AsteroidKind::Pentagon,
        ] {
            let ast = Asteroid {
                kind,
                size: SizeClass::Medium,
                pos: Vec2::new(300.0, 300.0),
                vel: Vec2::ZERO,
                rotation: 0.0,
                rot_speed: 0.0,
            };
            assert!(ast.fragments(&mut rng).is_empty());
        }
    }

    #[test]
    fn test_angry_fragment_spread() {
        let mut rng = test_rng(19);
        let parent = Asteroid {
            kind: AsteroidKind::Angry,
            size: SizeClass::Large,
            pos: Vec2::new(420.0, 610.0),
            vel: Vec2::ZERO,
            rotation: 0.0,
            rot_speed: 0.0,
        };
        for _ in 0..200 {
            let frags = parent.fragments(&mut rng);
            assert!((3..=10).contains(&frags.len()));
            for frag in &frags {
                assert_eq!(frag.kind, AsteroidKind::Triangle);
                assert_eq!(frag.pos, parent.pos);
                let speed = frag.vel.length();
                assert!((FRAG_SPEED_MIN..FRAG_SPEED_MAX).contains(&speed));
                assert!((-180.0..180.0).contains(&frag.rot_speed));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_zero_dt_is_identity(px in -2000.0f32..2000.0, py in -2000.0f32..2000.0,
                                    vx in -500.0f32..500.0, vy in -500.0f32..500.0,
                                    rot in 0.0f32..360.0, spin in -240.0f32..240.0) {
            let mut ast = Asteroid {
                kind: AsteroidKind::Square,
                size: SizeClass::Medium,
                pos: Vec2::new(px, py),
                vel: Vec2::new(vx, vy),
                rotation: rot,
                rot_speed: spin,
            };
            let before = ast.clone();
            ast.advance(0.0, BOUNDS);
            prop_assert_eq!(ast.pos, before.pos);
            prop_assert_eq!(ast.rotation, before.rotation);
        }

        #[test]
        fn prop_motion_is_linear(dt in 0.0f32..0.25) {
            let mut ast = Asteroid {
                kind: AsteroidKind::Triangle,
                size: SizeClass::Small,
                pos: Vec2::new(500.0, 500.0),
                vel: Vec2::new(40.0, -25.0),
                rotation: 10.0,
                rot_speed: 90.0,
            };
            ast.advance(dt, BOUNDS);
            prop_assert!((ast.pos.x - (500.0 + 40.0 * dt)).abs() < 1e-3);
            prop_assert!((ast.pos.y - (500.0 - 25.0 * dt)).abs() < 1e-3);
            prop_assert!((ast.rotation - (10.0 + 90.0 * dt)).abs() < 1e-3);
        }
    }
}
