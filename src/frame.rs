//! Render handoff
//!
//! Flattens the sim state into a display list plus HUD readout once per
//! frame. Commands are plain data: the presentation adapter executes them
//! with whatever drawing primitives it has and never reports back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{AsteroidKind, DoomsdayPhase, GameState, OverReason, WeaponKind};

/// Rendered beam dimensions (a thin rectangle extending up from the tip)
const BEAM_WIDTH: f32 = 4.0;
const BEAM_LENGTH: f32 = 30.0;

/// Rendered sprite widths; collision radii are half of these
const HOMING_SPRITE_SIZE: f32 = 32.0;
const SHIP_SPRITE_SIZE: f32 = 48.0;

/// Dead-ship blink cadence: skip the sprite for the second half of each
/// 0.4s window
const BLINK_PERIOD: f32 = 0.4;

/// Textured sprites the adapter is expected to have loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Ship,
    Homing,
}

/// One drawing primitive invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// n-sided regular polygon outline
    PolyOutline {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
    },
    /// Filled circle
    Disc { center: Vec2, radius: f32 },
    /// Axis-aligned filled rectangle
    Rect { min: Vec2, size: Vec2 },
    /// Textured sprite, centered
    Sprite {
        id: SpriteId,
        center: Vec2,
        size: f32,
        rotation: f32,
    },
}

/// Doomsday charge readout, shown only while the device is in use
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoomsdayReadout {
    pub label: &'static str,
    pub seconds: f32,
}

/// Per-frame HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub hp: i32,
    pub weapon: &'static str,
    pub score: u32,
    pub doomsday: Option<DoomsdayReadout>,
    pub over: Option<OverReason>,
}

/// Everything the adapter needs to present one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub hud: Hud,
    pub draws: Vec<DrawCommand>,
}

/// Build the display list for the current state: projectiles, then
/// asteroids, then the ship on top.
pub fn build(state: &GameState) -> Frame {
    let mut draws = Vec::with_capacity(state.projectiles.len() + state.asteroids.len() * 5 + 1);

    for p in &state.projectiles {
        draws.push(projectile_command(p.kind, p.pos));
    }

    for ast in &state.asteroids {
        push_asteroid(&mut draws, ast.kind, ast.pos, ast.radius(), ast.rotation);
    }

    if ship_visible(state) {
        draws.push(DrawCommand::Sprite {
            id: SpriteId::Ship,
            center: state.ship.pos,
            size: SHIP_SPRITE_SIZE,
            rotation: 0.0,
        });
    }

    Frame {
        hud: build_hud(state),
        draws,
    }
}

fn build_hud(state: &GameState) -> Hud {
    let doomsday = match state.doomsday.phase {
        DoomsdayPhase::Idle => None,
        DoomsdayPhase::Charging => Some(DoomsdayReadout {
            label: "NUKE HOLD",
            seconds: state.doomsday.charge,
        }),
        DoomsdayPhase::Armed => Some(DoomsdayReadout {
            label: "NUKE SEND",
            seconds: state.doomsday.charge,
        }),
    };

    Hud {
        hp: state.ship.hp(),
        weapon: state.weapon.name(),
        score: state.score,
        doomsday,
        over: match state.phase {
            crate::sim::GamePhase::Running => None,
            crate::sim::GamePhase::Over(reason) => Some(reason),
        },
    }
}

fn projectile_command(kind: WeaponKind, pos: Vec2) -> DrawCommand {
    match kind {
        WeaponKind::Beam => DrawCommand::Rect {
            min: pos + Vec2::new(-BEAM_WIDTH / 2.0, -BEAM_LENGTH),
            size: Vec2::new(BEAM_WIDTH, BEAM_LENGTH),
        },
        WeaponKind::Bullet => DrawCommand::Disc {
            center: pos,
            radius: kind.radius(),
        },
        WeaponKind::HomingPrimary | WeaponKind::HomingSecondary => DrawCommand::Sprite {
            id: SpriteId::Homing,
            center: pos,
            size: HOMING_SPRITE_SIZE,
            rotation: 0.0,
        },
    }
}

/// The Angry silhouette: four offset triangles and a square, all oversized
const ANGRY_COMPOSITE: [(u32, f32); 5] = [
    (3, 100.0),
    (3, 200.0),
    (3, 70.0),
    (3, 20.0),
    (4, 0.0),
];
const ANGRY_OVERSIZE: f32 = 30.0;

fn push_asteroid(draws: &mut Vec<DrawCommand>, kind: AsteroidKind, center: Vec2, radius: f32, rotation: f32) {
    let sides = match kind {
        AsteroidKind::Triangle => 3,
        AsteroidKind::Square => 4,
        AsteroidKind::Pentagon => 5,
        AsteroidKind::Angry => {
            for (sides, offset) in ANGRY_COMPOSITE {
                draws.push(DrawCommand::PolyOutline {
                    center,
                    sides,
                    radius: radius + ANGRY_OVERSIZE,
                    rotation: rotation + offset,
                });
            }
            return;
        }
    };
    draws.push(DrawCommand::PolyOutline {
        center,
        sides,
        radius,
        rotation,
    });
}

/// Dead ships blink; live ships always draw
fn ship_visible(state: &GameState) -> bool {
    state.ship.is_alive() || state.time_secs % BLINK_PERIOD <= BLINK_PERIOD / 2.0
}
