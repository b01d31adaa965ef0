//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Variable timestep, one `tick` per presented frame

pub mod asteroid;
pub mod collision;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidKind, ShapeSelection, SizeClass};
pub use collision::{circles_overlap, first_hit};
pub use projectile::{Projectile, WeaponKind};
pub use ship::Ship;
pub use state::{Doomsday, DoomsdayPhase, GameEvent, GamePhase, GameState, OverReason};
pub use tick::{TickInput, tick};
