//! Fixed-rate simulation tick
//!
//! One call runs the whole pipeline: input → motion → collisions →
//! population upkeep → win check. Won and Lost are not interactive; ticks
//! in those phases do nothing until the driver calls
//! [`SessionState::finish_round`].

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::collision::{Resolution, resolve_collisions};
use super::fish::Impulses;
use super::spawn::SpawnSource;
use super::state::{GameEvent, GamePhase, SessionState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held directional impulses
    pub impulses: Impulses,
    /// Idle/demo mode - the autopilot steers instead of `impulses`
    pub autopilot: bool,
}

impl TickInput {
    pub fn held(impulses: Impulses) -> Self {
        Self {
            impulses,
            autopilot: false,
        }
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut SessionState, input: &TickInput, source: &mut dyn SpawnSource) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.events.clear();
    state.time_ticks += 1;

    let impulses = if input.autopilot {
        autopilot::steer(state)
    } else {
        input.impulses
    };
    if let Some(held) = state.player.impulses_mut() {
        *held = impulses;
    }

    // Enemies first, then the player
    for enemy in state.population.enemies_mut() {
        enemy.advance(&state.tuning);
    }
    state.player.advance(&state.tuning);

    let resolution = resolve_collisions(
        &mut state.player,
        state.population.enemies(),
        &state.tuning,
    );

    match &resolution {
        Resolution::Died { killer } => {
            log::info!(
                "Player eaten by enemy {} after {} fish, score {}",
                killer,
                state.player.fish_eaten,
                state.player.score
            );
            state.events.push(GameEvent::Eaten { by: *killer });
            state.phase = GamePhase::Lost;
            return;
        }
        Resolution::Survived {
            eaten,
            expired,
            grew_to,
        } => {
            for &id in eaten {
                let points = state
                    .population
                    .enemies()
                    .iter()
                    .find(|f| f.id == id)
                    .map_or(0, |f| f.score);
                state.events.push(GameEvent::Ate { id, points });
            }
            if let Some(scale) = *grew_to {
                state.events.push(GameEvent::Grew { scale });
            }
            state
                .events
                .extend(expired.iter().map(|&id| GameEvent::Expired { id }));
        }
    }

    state.population.remove(&resolution.doomed());
    state.refill(source);

    if state.player.fish_eaten >= state.tuning.win_eaten {
        log::info!(
            "Round {} won with score {}",
            state.round,
            state.player.score
        );
        state.events.push(GameEvent::Won);
        state.phase = GamePhase::Won;
    }
}
