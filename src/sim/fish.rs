//! Fish entities and their per-tick motion
//!
//! Player and enemies share one record; the variant decides how a tick moves
//! it. The player is impulse driven with quadratic drag and is clamped to the
//! pond. Enemies drift horizontally at a constant speed and are never clamped,
//! the population manager removes them once they have left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Hitbox;
use super::growth;
use crate::consts::{ENEMY_FRAME_STRETCH, ENEMY_SWIM_FRAMES, PLAYER_EAT_FRAMES, PLAYER_SWIM_FRAMES};
use crate::snap_to_pixel;
use crate::tuning::{EnemyTier, Tuning};

/// Facing / travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impulse {
    Up,
    Down,
    Left,
    Right,
}

impl Impulse {
    pub const ALL: [Impulse; 4] = [Impulse::Up, Impulse::Down, Impulse::Left, Impulse::Right];

    /// Unit vector in screen space (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Impulse::Up => Vec2::new(0.0, -1.0),
            Impulse::Down => Vec2::new(0.0, 1.0),
            Impulse::Left => Vec2::new(-1.0, 0.0),
            Impulse::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Held state of the four directional inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impulses {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Impulses {
    pub fn set(&mut self, impulse: Impulse, held: bool) {
        match impulse {
            Impulse::Up => self.up = held,
            Impulse::Down => self.down = held,
            Impulse::Left => self.left = held,
            Impulse::Right => self.right = held,
        }
    }

    pub fn is_held(&self, impulse: Impulse) -> bool {
        match impulse {
            Impulse::Up => self.up,
            Impulse::Down => self.down,
            Impulse::Left => self.left,
            Impulse::Right => self.right,
        }
    }

    /// Sum of held unit vectors; opposing inputs cancel
    pub fn axis(&self) -> Vec2 {
        Impulse::ALL
            .iter()
            .filter(|&&i| self.is_held(i))
            .map(|i| i.unit())
            .sum()
    }
}

/// Player-only state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub impulses: Impulses,
    /// Unscaled sprite size; growth always scales from this
    pub base_size: (u32, u32),
    /// Chomp frame while the eat animation plays
    pub eat_frame: Option<usize>,
}

/// Enemy-only state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    pub tier: EnemyTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FishKind {
    Player(PlayerState),
    Enemy(EnemyState),
}

/// A fish in the pond
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: u32,
    /// Sprite centre
    pub pos: Vec2,
    pub vel: Vec2,
    pub direction: Direction,
    pub width: u32,
    pub height: u32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub fish_eaten: u32,
    /// Points collected (player) or points worth (enemy)
    pub score: u64,
    /// Swim animation index
    pub frame: usize,
    pub kind: FishKind,
}

impl Fish {
    /// Fresh player at the pond centre, facing left
    pub fn new_player(id: u32, tuning: &Tuning) -> Self {
        let base_size = tuning.sprites.player;
        Self {
            id,
            pos: Vec2::new(
                (tuning.pond_width / 2.0).floor(),
                (tuning.pond_height / 2.0).floor(),
            ),
            vel: Vec2::ZERO,
            direction: Direction::Left,
            width: base_size.0,
            height: base_size.1,
            max_speed: tuning.player_max_speed,
            acceleration: tuning.player_acceleration,
            fish_eaten: 0,
            score: 0,
            frame: 0,
            kind: FishKind::Player(PlayerState {
                impulses: Impulses::default(),
                base_size,
                eat_frame: None,
            }),
        }
    }

    /// Enemy of the given tier drifting at `speed`
    pub fn new_enemy(
        id: u32,
        pos: Vec2,
        direction: Direction,
        speed: f32,
        tier: EnemyTier,
        frame: usize,
        tuning: &Tuning,
    ) -> Self {
        let (width, height) = growth::scaled_size(tuning.sprites.enemy, tier.size);
        Self {
            id,
            pos,
            vel: Vec2::new(direction.sign() * speed, 0.0),
            direction,
            width,
            height,
            max_speed: speed,
            acceleration: 0.0,
            fish_eaten: 0,
            score: growth::enemy_score(tier.size, tuning.base_score),
            frame: frame % (ENEMY_SWIM_FRAMES * ENEMY_FRAME_STRETCH),
            kind: FishKind::Enemy(EnemyState { tier }),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, FishKind::Player(_))
    }

    /// Held impulses (player only)
    pub fn impulses_mut(&mut self) -> Option<&mut Impulses> {
        match &mut self.kind {
            FishKind::Player(player) => Some(&mut player.impulses),
            FishKind::Enemy(_) => None,
        }
    }

    /// Integer half extents of the sprite
    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    pub fn hitbox(&self, allowed_overlap: f32) -> Hitbox {
        Hitbox::around(self.pos, self.half_size(), allowed_overlap)
    }

    /// X of the trailing edge (behind the direction of travel)
    #[inline]
    pub fn tail_x(&self) -> f32 {
        self.pos.x - self.half_size().x * self.direction.sign()
    }

    /// Whole-pixel top-left corner for blitting
    pub fn top_left(&self) -> (i32, i32) {
        let half = self.half_size();
        (snap_to_pixel(self.pos.x - half.x), snap_to_pixel(self.pos.y - half.y))
    }

    /// True once the trailing edge has crossed the pond edge it swims toward
    pub fn has_exited(&self, pond_width: f32) -> bool {
        match self.direction {
            Direction::Left => self.tail_x() <= 0.0,
            Direction::Right => self.tail_x() >= pond_width,
        }
    }

    /// Advance one tick
    pub fn advance(&mut self, tuning: &Tuning) {
        match self.kind {
            FishKind::Player(_) => self.advance_player(tuning),
            FishKind::Enemy(_) => self.advance_enemy(),
        }
    }

    fn advance_player(&mut self, tuning: &Tuning) {
        let FishKind::Player(player) = &mut self.kind else {
            return;
        };

        let thrust = player.impulses.axis() * self.acceleration;
        let drag = self.vel * self.vel.abs() / tuning.drag_divisor;
        let limit = Vec2::splat(self.max_speed);
        let mut vel = (self.vel + thrust - drag).clamp(-limit, limit);
        if let Some(eps) = tuning.speed_epsilon {
            if vel.x.abs() < eps {
                vel.x = 0.0;
            }
            if vel.y.abs() < eps {
                vel.y = 0.0;
            }
        }
        self.vel = vel;

        let bounds = Vec2::new(tuning.pond_width, tuning.pond_height);
        self.pos = (self.pos + vel).clamp(Vec2::ZERO, bounds);

        if thrust.x != 0.0 {
            if thrust.x.signum() != self.direction.sign() {
                self.direction = self.direction.flipped();
            }
            self.frame = (self.frame + 1) % PLAYER_SWIM_FRAMES;
        }

        if let Some(frame) = player.eat_frame {
            let next = frame + 1;
            player.eat_frame = (next < PLAYER_EAT_FRAMES).then_some(next);
        }
    }

    fn advance_enemy(&mut self) {
        self.pos.x += self.direction.sign() * self.max_speed;
        self.frame = (self.frame + 1) % (ENEMY_SWIM_FRAMES * ENEMY_FRAME_STRETCH);
    }

    /// Player eats `prey`. Returns the new scale when a milestone is reached.
    pub fn eat(&mut self, prey: &Fish, tuning: &Tuning) -> Option<f32> {
        let FishKind::Player(player) = &mut self.kind else {
            return None;
        };
        self.fish_eaten += 1;
        self.score += prey.score;
        player.eat_frame = Some(0);

        if growth::is_milestone(self.fish_eaten, &tuning.growth) {
            Some(self.apply_growth(tuning))
        } else {
            None
        }
    }

    /// Resize the player from its base size for the current eat count
    pub fn apply_growth(&mut self, tuning: &Tuning) -> f32 {
        let FishKind::Player(player) = &self.kind else {
            return 1.0;
        };
        let scale = growth::scale_for(self.fish_eaten, &tuning.growth);
        let (width, height) = growth::scaled_size(player.base_size, scale);
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.frame = 0;
        }
        scale
    }
}
