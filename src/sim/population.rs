//! Enemy population manager
//!
//! Sole owner of enemy membership. Other stages may move enemies but only
//! this type adds or removes them: removals arrive as a batch of ids after
//! collision classification and the collection is rebuilt by filtering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fish::{Direction, Fish};
use super::growth;
use super::spawn::SpawnSource;
use crate::consts::{ENEMY_FRAME_STRETCH, ENEMY_SWIM_FRAMES};
use crate::tuning::Tuning;

/// Id reserved for the player; enemies count up from 1
pub const PLAYER_ID: u32 = 0;

/// Live enemies in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    enemies: Vec<Fish>,
    next_id: u32,
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl Population {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            next_id: PLAYER_ID + 1,
        }
    }

    pub fn enemies(&self) -> &[Fish] {
        &self.enemies
    }

    /// Mutable access for motion; membership cannot change through a slice
    pub fn enemies_mut(&mut self) -> &mut [Fish] {
        &mut self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Add an already-built enemy, assigning it a fresh id
    pub fn insert(&mut self, mut fish: Fish) -> u32 {
        fish.id = self.allocate_id();
        let id = fish.id;
        self.enemies.push(fish);
        id
    }

    /// Drop every enemy whose id is in `doomed`, keeping survivor order
    pub fn remove(&mut self, doomed: &[u32]) -> usize {
        if doomed.is_empty() {
            return 0;
        }
        let before = self.enemies.len();
        self.enemies = std::mem::take(&mut self.enemies)
            .into_iter()
            .filter(|fish| !doomed.contains(&fish.id))
            .collect();
        let removed = before - self.enemies.len();
        log::debug!("Removed {} enemies, {} remain", removed, self.enemies.len());
        removed
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    /// Spawn exactly enough enemies to reach `target`; returns their ids
    pub fn replenish(
        &mut self,
        target: usize,
        source: &mut dyn SpawnSource,
        tuning: &Tuning,
    ) -> Vec<u32> {
        if tuning.enemy_tiers.is_empty() {
            log::warn!("No enemy tiers configured, nothing to spawn");
            return Vec::new();
        }
        let missing = target.saturating_sub(self.enemies.len());
        let mut spawned = Vec::with_capacity(missing);
        for _ in 0..missing {
            let id = self.allocate_id();
            let fish = roll_enemy(id, source, tuning);
            log::trace!(
                "Spawned enemy {} size={} dir={:?} pos=({:.1}, {:.1}) speed={:.2}",
                id,
                fish.width,
                fish.direction,
                fish.pos.x,
                fish.pos.y,
                fish.max_speed
            );
            self.enemies.push(fish);
            spawned.push(id);
        }
        spawned
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(PLAYER_ID + 1);
        id
    }
}

/// Roll a new enemy just outside the pond edge it enters from.
///
/// The swim cycle starts at a random phase rather than frame 0, so a fresh
/// school does not flap in lockstep. `tuning.enemy_tiers` must not be empty.
pub fn roll_enemy(id: u32, source: &mut dyn SpawnSource, tuning: &Tuning) -> Fish {
    let tier = tuning.enemy_tiers[source.pick_index(tuning.enemy_tiers.len())];
    let (width, _) = growth::scaled_size(tuning.sprites.enemy, tier.size);
    let direction = if source.coin_flip() {
        Direction::Left
    } else {
        Direction::Right
    };

    let entry_edge = match direction {
        Direction::Left => tuning.pond_width,
        Direction::Right => 0.0,
    };
    let x = entry_edge - (direction.sign() * width as f32 / 2.0).floor();
    let y = source.below(tuning.pond_height as u32) as f32;
    let speed = source.uniform(tuning.enemy_speed_min, tuning.enemy_speed_max);
    let frame = source.pick_index(ENEMY_SWIM_FRAMES * ENEMY_FRAME_STRETCH);

    Fish::new_enemy(id, Vec2::new(x, y), direction, speed, tier, frame, tuning)
}
