//! Session state and core simulation types
//!
//! One `GameState` owns everything for one play-through: entity sets, score,
//! timers, selections and the seeded RNG. Restart reinitializes it in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, ShapeSelection};
use super::projectile::{Projectile, WeaponKind};
use super::ship::Ship;
use crate::consts::*;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverReason {
    /// The doomsday charge ran past its overcharge threshold
    Doomsday,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Terminal; only restart is honored
    Over(OverReason),
}

/// Fire-and-forget sound triggers, drained by the adapter each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A homing projectile struck an asteroid
    HomingImpact,
    /// The ship's health crossed to zero
    ShipDestroyed,
    /// An armed doomsday charge reached zero
    DoomsdayDetonated,
}

/// Doomsday charge progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DoomsdayPhase {
    #[default]
    Idle,
    /// Input held, charge accumulating toward the arm threshold
    Charging,
    /// Fully charged; the charge now counts down regardless of input
    Armed,
}

/// Charge-then-release ultimate weapon timer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Doomsday {
    pub phase: DoomsdayPhase,
    /// Seconds of charge; counts up to the arm threshold, then back down
    pub charge: f32,
}

impl Doomsday {
    /// Advance the charge state machine. Returns true on the tick an armed
    /// charge first reaches zero (the detonation instant).
    pub fn advance(&mut self, held: bool, dt: f32) -> bool {
        match self.phase {
            DoomsdayPhase::Idle | DoomsdayPhase::Charging => {
                if held {
                    self.phase = DoomsdayPhase::Charging;
                    self.charge += dt;
                    if self.charge >= DOOMSDAY_CHARGE {
                        self.phase = DoomsdayPhase::Armed;
                        self.charge = DOOMSDAY_CHARGE;
                    }
                } else {
                    self.phase = DoomsdayPhase::Idle;
                    self.charge = 0.0;
                }
                false
            }
            DoomsdayPhase::Armed => {
                let was_positive = self.charge > 0.0;
                self.charge -= dt;
                was_positive && self.charge <= 0.0
            }
        }
    }

    /// True once the armed charge has run past the overcharge threshold
    pub fn expired(&self) -> bool {
        self.phase == DoomsdayPhase::Armed && self.charge <= -DOOMSDAY_OVERCHARGE
    }

    /// Whether the HUD should display the charge readout
    pub fn active(&self) -> bool {
        self.phase != DoomsdayPhase::Idle
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Playfield dimensions
    pub bounds: Vec2,
    pub phase: GamePhase,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    /// Destroyed-asteroid count
    pub score: u32,
    /// Current weapon selection
    pub weapon: WeaponKind,
    /// Current asteroid spawn-shape selection
    pub shape: ShapeSelection,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    /// Accumulates only while the fire input is held
    pub shot_timer: f32,
    pub doomsday: Doomsday,
    /// Session clock, seconds
    pub time_secs: f32,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed and playfield size
    pub fn new(seed: u64, bounds: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);

        Self {
            seed,
            bounds,
            phase: GamePhase::Running,
            ship: Ship::new(bounds),
            asteroids: Vec::with_capacity(ASTEROID_CAPACITY),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            score: 0,
            weapon: WeaponKind::Beam,
            shape: ShapeSelection::Triangle,
            spawn_timer: 0.0,
            spawn_interval,
            shot_timer: 0.0,
            doomsday: Doomsday::default(),
            time_secs: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Reinitialize in place for a fresh play-through. The RNG stream
    /// continues rather than reseeding, so consecutive runs differ.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.ship = Ship::new(self.bounds);
        self.asteroids.clear();
        self.projectiles.clear();
        self.score = 0;
        self.spawn_timer = 0.0;
        self.spawn_interval = self
            .rng
            .random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX);
        self.shot_timer = 0.0;
        self.doomsday = Doomsday::default();
        self.events.clear();
        log::info!("session restarted");
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the sound events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
