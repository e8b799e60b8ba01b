//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - All randomness through `SpawnSource`
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod fish;
pub mod geometry;
pub mod growth;
pub mod population;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Resolution, resolve_collisions};
pub use fish::{Direction, Fish, FishKind, Impulse, Impulses};
pub use geometry::{Hitbox, intervals_overlap};
pub use population::{PLAYER_ID, Population};
pub use spawn::{PcgSpawner, SpawnSource};
pub use state::{GameEvent, GamePhase, SessionState};
pub use tick::{TickInput, tick};
