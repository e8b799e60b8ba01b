//! Data-driven game balance
//!
//! Every tunable the simulation reads lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a binary may override them once at startup from inline
//! JSON. Nothing is persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::Rgb;

/// Eight-colour palette used to tint enemy fish by size tier
pub const IWH_PALETTE: [Rgb; 8] = [
    Rgb::new(202, 82, 89),
    Rgb::new(201, 126, 62),
    Rgb::new(152, 150, 62),
    Rgb::new(103, 178, 70),
    Rgb::new(79, 166, 124),
    Rgb::new(86, 167, 216),
    Rgb::new(117, 120, 196),
    Rgb::new(143, 97, 210),
];

/// A spawnable enemy size and its cosmetic tint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyTier {
    /// Multiplier applied to the enemy base sprite
    pub size: f32,
    /// Multiply-blend colour (no gameplay effect)
    pub tint: Option<Rgb>,
}

/// Player growth milestone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthTier {
    /// Cumulative eat count that unlocks this scale
    pub eaten: u32,
    /// Multiplier applied to the player base sprite
    pub scale: f32,
}

/// Base sprite sizes reported by the asset collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    pub player: (u32, u32),
    pub enemy: (u32, u32),
    pub dead: (u32, u32),
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            player: PLAYER_SPRITE_SIZE,
            enemy: ENEMY_SPRITE_SIZE,
            dead: DEAD_SPRITE_SIZE,
        }
    }
}

/// Startup game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub pond_width: f32,
    pub pond_height: f32,
    pub fps: u32,

    // === Player motion ===
    pub player_max_speed: f32,
    pub player_acceleration: f32,
    pub drag_divisor: f32,
    /// `None` disables the low-speed snap
    pub speed_epsilon: Option<f32>,

    // === Enemies ===
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub max_enemy_fish: usize,
    pub enemy_tiers: Vec<EnemyTier>,

    // === Rules ===
    pub allowed_overlap: f32,
    pub base_score: f32,
    pub growth: Vec<GrowthTier>,
    pub win_eaten: u32,

    pub sprites: SpriteMetrics,
}

impl Default for Tuning {
    fn default() -> Self {
        let sizes = [0.25, 0.5, 0.75, 1.25, 1.75, 2.25, 3.25, 4.5];
        let enemy_tiers = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| EnemyTier {
                size,
                // Tiers share colours pairwise: palette 1, 1, 3, 3, 5, 5, 7, 7
                tint: Some(IWH_PALETTE[i | 1]),
            })
            .collect();

        Self {
            pond_width: POND_WIDTH,
            pond_height: POND_HEIGHT,
            fps: FPS,

            player_max_speed: PLAYER_MAX_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            drag_divisor: DRAG_DIVISOR,
            speed_epsilon: Some(PLAYER_SPEED_EPSILON),

            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            max_enemy_fish: MAX_ENEMY_FISH,
            enemy_tiers,

            allowed_overlap: ALLOWED_OVERLAP,
            base_score: BASE_SCORE,
            growth: vec![
                GrowthTier { eaten: 4, scale: 1.5 },
                GrowthTier { eaten: 8, scale: 2.0 },
                GrowthTier { eaten: 16, scale: 3.0 },
                GrowthTier { eaten: 32, scale: 4.0 },
            ],
            win_eaten: WIN_EATEN,

            sprites: SpriteMetrics::default(),
        }
    }
}

/// Reasons a [`Tuning`] cannot drive a session
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    InvalidPondSize,
    InvalidFps,
    InvalidMaxSpeed,
    InvalidAcceleration,
    InvalidDragDivisor,
    InvalidSpeedEpsilon,
    InvalidEnemySpeedRange { min: f32, max: f32 },
    NoEnemyTiers,
    InvalidEnemySize { index: usize },
    InvalidAllowedOverlap,
    InvalidBaseScore,
    InvalidGrowthTable,
    InvalidWinEaten,
    InvalidSpriteSize,
    Parse(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPondSize => write!(f, "pond width and height must be positive and finite"),
            Self::InvalidFps => write!(f, "fps must be greater than 0"),
            Self::InvalidMaxSpeed => write!(f, "player_max_speed must be positive and finite"),
            Self::InvalidAcceleration => {
                write!(f, "player_acceleration must be non-negative and finite")
            }
            Self::InvalidDragDivisor => write!(f, "drag_divisor must be positive and finite"),
            Self::InvalidSpeedEpsilon => {
                write!(f, "speed_epsilon must be non-negative and below player_max_speed")
            }
            Self::InvalidEnemySpeedRange { min, max } => {
                write!(f, "enemy speed range [{min}, {max}] must be finite with 0 < min <= max")
            }
            Self::NoEnemyTiers => write!(f, "enemy_tiers must not be empty"),
            Self::InvalidEnemySize { index } => {
                write!(f, "enemy_tiers[{index}].size must be positive and finite")
            }
            Self::InvalidAllowedOverlap => write!(f, "allowed_overlap must be within (0, 1]"),
            Self::InvalidBaseScore => write!(f, "base_score must be non-negative and finite"),
            Self::InvalidGrowthTable => write!(
                f,
                "growth tiers must have strictly increasing eat counts and positive scales"
            ),
            Self::InvalidWinEaten => write!(f, "win_eaten must be greater than 0"),
            Self::InvalidSpriteSize => write!(f, "base sprite sizes must be non-zero"),
            Self::Parse(msg) => write!(f, "invalid tuning JSON: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Tuning {
    /// Parse a (possibly partial) tuning override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every value the simulation depends on
    pub fn validate(&self) -> Result<(), TuningError> {
        if !positive(self.pond_width) || !positive(self.pond_height) {
            return Err(TuningError::InvalidPondSize);
        }
        if self.fps == 0 {
            return Err(TuningError::InvalidFps);
        }
        if !positive(self.player_max_speed) {
            return Err(TuningError::InvalidMaxSpeed);
        }
        if !self.player_acceleration.is_finite() || self.player_acceleration < 0.0 {
            return Err(TuningError::InvalidAcceleration);
        }
        if !positive(self.drag_divisor) {
            return Err(TuningError::InvalidDragDivisor);
        }
        if let Some(eps) = self.speed_epsilon {
            if !eps.is_finite() || eps < 0.0 || eps >= self.player_max_speed {
                return Err(TuningError::InvalidSpeedEpsilon);
            }
        }
        if !positive(self.enemy_speed_min)
            || !self.enemy_speed_max.is_finite()
            || self.enemy_speed_min > self.enemy_speed_max
        {
            return Err(TuningError::InvalidEnemySpeedRange {
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }
        if self.enemy_tiers.is_empty() {
            return Err(TuningError::NoEnemyTiers);
        }
        if let Some(index) = self.enemy_tiers.iter().position(|t| !positive(t.size)) {
            return Err(TuningError::InvalidEnemySize { index });
        }
        if !positive(self.allowed_overlap) || self.allowed_overlap > 1.0 {
            return Err(TuningError::InvalidAllowedOverlap);
        }
        if !self.base_score.is_finite() || self.base_score < 0.0 {
            return Err(TuningError::InvalidBaseScore);
        }
        let increasing = self.growth.windows(2).all(|w| w[0].eaten < w[1].eaten);
        if !increasing || self.growth.iter().any(|g| g.eaten == 0 || !positive(g.scale)) {
            return Err(TuningError::InvalidGrowthTable);
        }
        if self.win_eaten == 0 {
            return Err(TuningError::InvalidWinEaten);
        }
        let SpriteMetrics { player, enemy, dead } = self.sprites;
        if [player, enemy, dead].iter().any(|&(w, h)| w == 0 || h == 0) {
            return Err(TuningError::InvalidSpriteSize);
        }
        Ok(())
    }

    /// Milliseconds per tick at the configured rate
    pub fn tick_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}
