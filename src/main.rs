//! astro-siege entry point
//!
//! Runs a headless demo session with a scripted pilot. The real game is
//! embedded by a presentation adapter that owns the window, input devices
//! and audio; this driver exercises the same public surface (tick, frame
//! build, event drain) against a fixed 60 Hz clock.
//!
//! Environment:
//! - `ASTRO_SIEGE_SEED`: session seed (default: derived from the clock)
//! - `ASTRO_SIEGE_SECS`: simulated seconds to run (default 60)
//! - `ASTRO_SIEGE_DUMP`: write the final session state as JSON to this path

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use astro_siege::audio::{AudioSink, LogAudio};
use astro_siege::consts::{SCREEN_H, SCREEN_W};
use astro_siege::frame;
use astro_siege::sim::{GamePhase, GameState, TickInput, tick};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = env_parse("ASTRO_SIEGE_SEED").unwrap_or_else(clock_seed);
    let secs: f32 = env_parse("ASTRO_SIEGE_SECS").unwrap_or(60.0);
    let ticks = (secs * 60.0) as u64;

    log::info!("astro-siege headless demo: seed {seed}, {secs}s at 60Hz");

    let mut state = GameState::new(seed, Vec2::new(SCREEN_W, SCREEN_H));
    let mut audio = LogAudio;

    for n in 0..ticks {
        let input = demo_input(&state, n);
        tick(&mut state, &input, DT);

        for event in state.take_events() {
            audio.play(event);
        }

        // The adapter would draw this; here it only paces the log
        let frame = frame::build(&state);
        if n % 300 == 0 {
            log::info!(
                "t={:>5.1}s score={} hp={} asteroids={} projectiles={} draws={}",
                state.time_secs,
                frame.hud.score,
                frame.hud.hp,
                state.asteroids.len(),
                state.projectiles.len(),
                frame.draws.len(),
            );
        }

        if let GamePhase::Over(reason) = state.phase {
            log::info!("session over: {reason:?}");
            break;
        }
    }

    log::info!(
        "demo finished: score={} hp={} alive={}",
        state.score,
        state.ship.hp(),
        state.ship.is_alive()
    );

    if let Ok(path) = std::env::var("ASTRO_SIEGE_DUMP") {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&path, json) {
                    log::error!("failed to write state dump to {path}: {err}");
                } else {
                    log::info!("final state dumped to {path}");
                }
            }
            Err(err) => log::error!("failed to serialize state: {err}"),
        }
    }
}

/// Scripted pilot: strafe side to side, hold fire, rotate through the
/// weapons, and restart a few seconds after losing the ship.
fn demo_input(state: &GameState, tick_no: u64) -> TickInput {
    TickInput {
        fire: true,
        left: (tick_no / 180) % 2 == 0,
        right: (tick_no / 180) % 2 == 1,
        cycle_weapon: tick_no % 600 == 599,
        restart: !state.ship.is_alive() && tick_no % 180 == 0,
        ..Default::default()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
