//! Per-frame simulation step
//!
//! One `tick` per presented frame, consuming the measured elapsed time.
//! Step order matters and is covered by the tests: ship integration,
//! restart, selections, doomsday, firing, spawning, projectile pass,
//! asteroid pass.

use rand::Rng;

use super::collision::{circles_overlap, first_hit};
use super::projectile::{Projectile, WeaponKind};
use super::state::{GameEvent, GamePhase, GameState, OverReason};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement axes (four independent directions)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Held: fire the current weapon
    pub fire: bool,
    /// Held: charge the doomsday device
    pub nuke: bool,
    /// Just pressed: advance the weapon selection
    pub cycle_weapon: bool,
    /// Just pressed: change the asteroid spawn shape
    pub select_shape: Option<super::asteroid::ShapeSelection>,
    /// Just pressed: restart after the ship is lost or the session ended
    pub restart: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // The adapter measures dt; a clock hiccup must not run time backwards
    let dt = if dt < 0.0 {
        log::debug!("negative dt {dt} clamped to 0");
        0.0
    } else {
        dt
    };

    if let GamePhase::Over(_) = state.phase {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_secs += dt;

    // Ship integrates first; a ship that died last tick keeps drifting
    state.ship.update(input, dt);

    // Restart replaces the session in place and the frame continues on the
    // fresh state
    if !state.ship.is_alive() && input.restart {
        state.restart();
    }

    // Selections
    if input.cycle_weapon {
        state.weapon = state.weapon.next_selectable();
    }
    if let Some(shape) = input.select_shape {
        state.shape = shape;
    }

    // Doomsday charge
    if state.doomsday.advance(input.nuke, dt) {
        state.push_event(GameEvent::DoomsdayDetonated);
    }
    if state.doomsday.expired() {
        state.phase = GamePhase::Over(OverReason::Doomsday);
        log::info!("session over: doomsday, final score {}", state.score);
        return;
    }

    fire_weapons(state, input, dt);
    spawn_asteroids(state, dt);
    advance_projectiles(state, dt);
    resolve_projectile_hits(state);
    resolve_ship_hits(state, dt);
}

/// Shot cadence: the timer accumulates only while firing, and one projectile
/// is emitted per elapsed interval (several per frame at high dt).
fn fire_weapons(state: &mut GameState, input: &TickInput, dt: f32) {
    let rate = state.ship.fire_rate(state.weapon);
    let interval = 1.0 / rate;

    if state.ship.is_alive() && input.fire {
        state.shot_timer += dt;
        let travel_speed = state.ship.spacing(state.weapon) * rate;
        while state.shot_timer >= interval {
            let shot = Projectile::fire(state.weapon, state.ship.nose(), travel_speed, &mut state.rng);
            state.projectiles.push(shot);
            state.shot_timer -= interval;
        }
    } else if state.shot_timer > interval {
        // Fold a stale timer into [0, interval) so resuming fire cannot
        // release a burst
        state.shot_timer %= interval;
    }
}

fn spawn_asteroids(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval && state.asteroids.len() < MAX_ASTEROIDS {
        let ast = super::asteroid::Asteroid::spawn(&mut state.rng, state.bounds, state.shape);
        state.asteroids.push(ast);
        state.spawn_timer = 0.0;
        state.spawn_interval = state
            .rng
            .random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
    }
}

fn advance_projectiles(state: &mut GameState, dt: f32) {
    for p in &mut state.projectiles {
        p.advance(dt);
    }
    let bounds = state.bounds;
    state.projectiles.retain(|p| p.in_bounds(bounds));
}

/// O(n*m) projectile-asteroid pass. Each projectile destroys at most the
/// first asteroid it overlaps; homing impacts spawn a secondary that is
/// scanned later in this same pass.
fn resolve_projectile_hits(state: &mut GameState) {
    let mut pi = 0;
    while pi < state.projectiles.len() {
        let hit = first_hit(
            state.projectiles[pi].pos,
            state.projectiles[pi].radius(),
            &state.asteroids,
        );
        let Some(ai) = hit else {
            pi += 1;
            continue;
        };

        let fragments = state.asteroids[ai].fragments(&mut state.rng);
        state.asteroids.extend(fragments);
        state.asteroids.swap_remove(ai);

        if state.projectiles[pi].kind.is_homing() {
            let impact = state.projectiles[pi].pos;
            let rate = state.ship.fire_rate(WeaponKind::HomingPrimary);
            // Travel speed re-derived at impact time, not fire time
            let travel_speed = state.ship.spacing(WeaponKind::HomingPrimary) * rate;
            let secondary =
                Projectile::fire(WeaponKind::HomingSecondary, impact, travel_speed, &mut state.rng);
            state.projectiles.push(secondary);
            state.push_event(GameEvent::HomingImpact);
        }

        state.score += 1;
        state.projectiles.swap_remove(pi);
        // Do not advance pi: the swapped-in projectile has not been scanned
    }
}

/// Asteroid-ship pass. Contact damage resolves before movement: a colliding
/// asteroid is consumed without advancing. Once the ship is dead the
/// remaining asteroids only integrate, despawning when fully off-screen.
fn resolve_ship_hits(state: &mut GameState, dt: f32) {
    let bounds = state.bounds;
    let GameState {
        ship,
        asteroids,
        events,
        ..
    } = state;

    asteroids.retain_mut(|ast| {
        if ship.is_alive() && circles_overlap(ship.pos, ship.radius(), ast.pos, ast.radius()) {
            if ship.take_damage(ast.damage()) {
                events.push(GameEvent::ShipDestroyed);
            }
            return false;
        }
        ast.advance(dt, bounds)
    });
}
