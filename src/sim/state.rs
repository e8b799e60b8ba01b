//! Session state
//!
//! Everything the simulation mutates lives in one [`SessionState`] owned by
//! the driver. Randomness is not stored here; it is passed into each call
//! that spawns.

use serde::{Deserialize, Serialize};

use super::fish::Fish;
use super::population::{PLAYER_ID, Population};
use super::spawn::SpawnSource;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Win threshold reached; splash pending
    Won,
    /// Player was eaten; splash pending
    Lost,
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Ate { id: u32, points: u64 },
    Grew { scale: f32 },
    Expired { id: u32 },
    Spawned { id: u32 },
    Eaten { by: u32 },
    Won,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Fish,
    pub population: Population,
    /// Ticks simulated in Playing, across rounds
    pub time_ticks: u64,
    /// Rounds started, including the current one
    pub round: u32,
    pub wins: u32,
    pub losses: u32,
    /// Best final score over finished rounds
    pub best_score: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl SessionState {
    /// New session: fresh player and a full pond. Rejects tuning that
    /// fails [`Tuning::validate`].
    pub fn new(tuning: Tuning, source: &mut dyn SpawnSource) -> Result<Self, TuningError> {
        tuning.validate()?;
        let player = Fish::new_player(PLAYER_ID, &tuning);
        let mut state = Self {
            tuning,
            phase: GamePhase::Playing,
            player,
            population: Population::new(),
            time_ticks: 0,
            round: 1,
            wins: 0,
            losses: 0,
            best_score: 0,
            events: Vec::new(),
        };
        state.refill(source);
        log::info!(
            "Session started: {} enemies, win at {} fish",
            state.population.len(),
            state.tuning.win_eaten
        );
        Ok(state)
    }

    pub fn enemies(&self) -> &[Fish] {
        self.population.enemies()
    }

    /// Score of the current round
    pub fn score(&self) -> u64 {
        self.player.score
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Leave Won/Lost: fresh player, emptied pond refilled from zero
    pub fn finish_round(&mut self, source: &mut dyn SpawnSource) {
        match self.phase {
            GamePhase::Playing => return,
            GamePhase::Won => self.wins += 1,
            GamePhase::Lost => self.losses += 1,
        }
        self.best_score = self.best_score.max(self.player.score);
        log::info!(
            "Round {} over ({:?}): score {}, best {}",
            self.round,
            self.phase,
            self.player.score,
            self.best_score
        );

        self.player = Fish::new_player(PLAYER_ID, &self.tuning);
        self.population.clear();
        self.events.clear();
        self.refill(source);
        self.round += 1;
        self.phase = GamePhase::Playing;
    }

    /// Top the population back up to target, recording spawn events
    pub(crate) fn refill(&mut self, source: &mut dyn SpawnSource) -> usize {
        let spawned = self
            .population
            .replenish(self.tuning.max_enemy_fish, source, &self.tuning);
        let count = spawned.len();
        self.events
            .extend(spawned.into_iter().map(|id| GameEvent::Spawned { id }));
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::PcgSpawner;

    #[test]
    fn test_new_session_is_full() {
        let mut source = PcgSpawner::new(12345);
        let state = SessionState::new(Tuning::default(), &mut source).unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies().len(), 16);
        assert_eq!(state.player.id, PLAYER_ID);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_finish_round_is_noop_while_playing() {
        let mut source = PcgSpawner::new(1);
        let mut state = SessionState::new(Tuning::default(), &mut source).unwrap();
        let ids: Vec<u32> = state.enemies().iter().map(|f| f.id).collect();
        state.finish_round(&mut source);
        let after: Vec<u32> = state.enemies().iter().map(|f| f.id).collect();
        assert_eq!(ids, after);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_finish_lost_round_resets() {
        let mut source = PcgSpawner::new(2);
        let mut state = SessionState::new(Tuning::default(), &mut source).unwrap();
        state.player.score = 700;
        state.player.fish_eaten = 9;
        state.player.width = 100;
        let old: Vec<u32> = state.enemies().iter().map(|f| f.id).collect();
        state.phase = GamePhase::Lost;

        state.finish_round(&mut source);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.fish_eaten, 0);
        assert_eq!(state.player.width, 50);
        assert_eq!(state.best_score, 700);
        assert_eq!(state.losses, 1);
        assert_eq!(state.round, 2);
        assert_eq!(state.enemies().len(), 16);
        assert!(state.enemies().iter().all(|f| !old.contains(&f.id)));
    }

    #[test]
    fn test_empty_tier_table_is_rejected() {
        let tuning = Tuning {
            enemy_tiers: Vec::new(),
            ..Tuning::default()
        };
        let state = SessionState::new(tuning, &mut PcgSpawner::new(3));
        assert!(matches!(state, Err(TuningError::NoEnemyTiers)));
    }

    #[test]
    fn test_zero_drag_divisor_is_rejected() {
        let tuning = Tuning {
            drag_divisor: 0.0,
            ..Tuning::default()
        };
        let state = SessionState::new(tuning, &mut PcgSpawner::new(3));
        assert!(matches!(state, Err(TuningError::InvalidDragDivisor)));
    }
}
