//! Fyshy - a single-screen grow-by-eating arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, growth, population, session)
//! - `render`: Renderer-agnostic frames and the asset boundary
//! - `platform`: Input and timing boundaries, plus headless implementations
//! - `game`: The fixed-rate driver loop tying the boundaries to the simulation
//! - `tuning`: Startup game balance

pub mod game;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use game::{Game, RunSummary};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Pond dimensions (pixels)
    pub const POND_WIDTH: f32 = 640.0;
    pub const POND_HEIGHT: f32 = 480.0;

    /// Fixed simulation rate (ticks per second)
    pub const FPS: u32 = 30;

    /// Player motion
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    pub const PLAYER_ACCELERATION: f32 = 1.5;
    /// Quadratic drag: drag = v * |v| / DRAG_DIVISOR
    pub const DRAG_DIVISOR: f32 = 30.0;
    /// Velocity components below this snap to zero after drag
    pub const PLAYER_SPEED_EPSILON: f32 = 0.2;

    /// Enemy drift speed range (pixels per tick, inclusive)
    pub const ENEMY_SPEED_MIN: f32 = 2.0;
    pub const ENEMY_SPEED_MAX: f32 = 5.0;

    /// Population target
    pub const MAX_ENEMY_FISH: usize = 16;
    /// Hitbox shrink factor applied about the sprite centre
    pub const ALLOWED_OVERLAP: f32 = 0.8;

    /// Enemy score = size * BASE_SCORE
    pub const BASE_SCORE: f32 = 100.0;
    /// Eat count that wins the round
    pub const WIN_EATEN: u32 = 32;

    /// Base sprite sizes (unscaled, facing left)
    pub const PLAYER_SPRITE_SIZE: (u32, u32) = (50, 32);
    pub const ENEMY_SPRITE_SIZE: (u32, u32) = (50, 32);
    pub const DEAD_SPRITE_SIZE: (u32, u32) = (50, 32);

    /// Animation frame counts
    pub const PLAYER_SWIM_FRAMES: usize = 2;
    pub const PLAYER_EAT_FRAMES: usize = 5;
    pub const ENEMY_SWIM_FRAMES: usize = 2;
    /// Each enemy swim frame is held for this many ticks
    pub const ENEMY_FRAME_STRETCH: usize = 3;
}

/// Round half to even, matching how sprite positions snap to pixels
#[inline]
pub fn snap_to_pixel(value: f32) -> i32 {
    value.round_ties_even() as i32
}
