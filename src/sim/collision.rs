//! Circle-overlap collision tests
//!
//! Everything in the playfield collides as a circle. The boundary is a
//! strict `<` on center distance vs radius sum: exact contact is a miss.

use glam::Vec2;

use super::asteroid::Asteroid;

/// Strict circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Index of the first asteroid (in set order) overlapping the given circle
pub fn first_hit(pos: Vec2, radius: f32, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|ast| circles_overlap(pos, radius, ast.pos, ast.radius()))
}
