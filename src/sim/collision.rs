//! Player-vs-enemy collision resolution
//!
//! The resolver walks the enemies in population order and classifies each
//! one. It feeds the player as it goes, so a milestone reached mid-pass
//! already counts for the enemies after it, but it never touches the enemy
//! collection: eaten and expired ids are handed back for a single batch
//! removal.

use serde::{Deserialize, Serialize};

use super::fish::Fish;
use crate::tuning::Tuning;

/// Outcome of one collision pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    Survived {
        /// Eaten enemies, in the order they were eaten
        eaten: Vec<u32>,
        /// Enemies that swam out of the pond
        expired: Vec<u32>,
        /// Last scale unlocked during the pass
        grew_to: Option<f32>,
    },
    /// The player touched a fish at least as wide as itself
    Died { killer: u32 },
}

impl Resolution {
    pub fn survived(&self) -> bool {
        matches!(self, Resolution::Survived { .. })
    }

    /// Every id to drop from the population
    pub fn doomed(&self) -> Vec<u32> {
        match self {
            Resolution::Survived { eaten, expired, .. } => {
                eaten.iter().chain(expired).copied().collect()
            }
            Resolution::Died { .. } => Vec::new(),
        }
    }
}

/// Classify every enemy against the player
pub fn resolve_collisions(player: &mut Fish, enemies: &[Fish], tuning: &Tuning) -> Resolution {
    let mut eaten = Vec::new();
    let mut expired = Vec::new();
    let mut grew_to = None;

    for enemy in enemies {
        let touching = player
            .hitbox(tuning.allowed_overlap)
            .overlaps(&enemy.hitbox(tuning.allowed_overlap));

        if touching {
            if enemy.width >= player.width {
                return Resolution::Died { killer: enemy.id };
            }
            if let Some(scale) = player.eat(enemy, tuning) {
                log::debug!(
                    "Player grew to {}x after {} fish ({}x{})",
                    scale,
                    player.fish_eaten,
                    player.width,
                    player.height
                );
                grew_to = Some(scale);
            }
            eaten.push(enemy.id);
        } else if enemy.has_exited(tuning.pond_width) {
            expired.push(enemy.id);
        }
    }

    Resolution::Survived {
        eaten,
        expired,
        grew_to,
    }
}
