//! Fixed-rate driver loop
//!
//! Owns the session and every collaborator. One [`Game::step`] is one tick:
//! read input, run the simulation, show any end-of-round splash (blocking),
//! draw the pond, then wait out the rest of the tick. Quit is only noticed
//! between ticks.

use serde::{Deserialize, Serialize};

use crate::platform::{InputSource, InputState, Pacer};
use crate::render::{Renderer, play_frame, splash_frames};
use crate::sim::{GamePhase, SessionState, SpawnSource, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub best_score: u64,
    pub final_score: u64,
}

/// Game instance holding all state
pub struct Game<S, I, R, P> {
    pub state: SessionState,
    spawner: S,
    input: I,
    renderer: R,
    pacer: P,
    held: InputState,
    autopilot: bool,
}

impl<S, I, R, P> Game<S, I, R, P>
where
    S: SpawnSource,
    I: InputSource,
    R: Renderer,
    P: Pacer,
{
    pub fn new(
        tuning: Tuning,
        mut spawner: S,
        input: I,
        renderer: R,
        pacer: P,
    ) -> Result<Self, TuningError> {
        let state = SessionState::new(tuning, &mut spawner)?;
        Ok(Self {
            state,
            spawner,
            input,
            renderer,
            pacer,
            held: InputState::default(),
            autopilot: false,
        })
    }

    /// Let the autopilot steer instead of held keys
    pub fn with_autopilot(mut self, on: bool) -> Self {
        self.autopilot = on;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run one tick. Returns false once quit has been requested.
    pub fn step(&mut self) -> bool {
        let events = self.input.poll();
        self.held.apply(&events);
        if self.held.quit_requested() {
            log::info!("Quit requested after {} ticks", self.state.time_ticks);
            return false;
        }

        let input = TickInput {
            impulses: self.held.held(),
            autopilot: self.autopilot,
        };
        tick(&mut self.state, &input, &mut self.spawner);

        if self.state.phase != GamePhase::Playing {
            // The winning bite is shown before the flashes start
            if self.state.phase == GamePhase::Won {
                self.renderer.draw(&play_frame(&self.state));
            }
            self.play_splash();
            self.state.finish_round(&mut self.spawner);
            self.held.release_all();
        }

        self.renderer.draw(&play_frame(&self.state));
        self.pacer.pace(self.state.tuning.fps);
        true
    }

    /// Blocking end-of-round sequence; nothing else runs meanwhile
    fn play_splash(&mut self) {
        for frame in splash_frames(&self.state) {
            self.renderer.draw(&frame);
            if let Some(ms) = frame.hold_ms {
                self.pacer.wait_ms(ms);
            }
        }
    }

    /// Step until quit
    pub fn run(&mut self) -> RunSummary {
        while self.step() {}
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.state.time_ticks,
            rounds: self.state.round,
            wins: self.state.wins,
            losses: self.state.losses,
            best_score: self.state.best_score.max(self.state.score()),
            final_score: self.state.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputEvent, LogRenderer, NullPacer, ScriptedInput};
    use crate::render::style::{BG_COLOR, WIN_FLASHES};
    use crate::render::{Frame, SpriteImage};
    use crate::sim::{Direction, Fish, Impulse, PcgSpawner};
    use crate::tuning::EnemyTier;

    /// Keeps every frame it is handed
    #[derive(Default)]
    struct Recorder(Vec<Frame>);

    impl Renderer for Recorder {
        fn draw(&mut self, frame: &Frame) {
            self.0.push(frame.clone());
        }
    }

    fn quiet() -> Tuning {
        Tuning {
            max_enemy_fish: 0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut game = Game::new(
            quiet(),
            PcgSpawner::new(1),
            ScriptedInput::quit_after(10),
            LogRenderer::new(),
            NullPacer::default(),
        )
        .unwrap();
        let summary = game.run();
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.rounds, 1);
        assert_eq!(game.renderer().frames, 10);
        assert_eq!(game.pacer().ticks_paced, 10);
    }

    #[test]
    fn test_held_keys_move_player() {
        let input = ScriptedInput::quit_after(5)
            .at(0, InputEvent::Press(Impulse::Right))
            .at(2, InputEvent::Release(Impulse::Right));
        let mut game = Game::new(
            quiet(),
            PcgSpawner::new(1),
            input,
            LogRenderer::new(),
            NullPacer::default(),
        )
        .unwrap();
        game.run();
        assert!(game.state.player.pos.x > 320.0);
        assert_eq!(game.state.player.direction, crate::sim::Direction::Right);
    }

    #[test]
    fn test_loss_plays_splash_and_resets() {
        let mut game = Game::new(
            Tuning::default(),
            PcgSpawner::new(5),
            ScriptedInput::quit_after(1),
            LogRenderer::new(),
            NullPacer::default(),
        )
        .unwrap();
        // Park a giant on top of the player
        let mut giant = game.state.enemies()[0].clone();
        giant.pos = game.state.player.pos;
        giant.width = 400;
        giant.height = 400;
        giant.max_speed = 0.0;
        game.state.population.insert(giant);

        assert!(game.step());
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_eq!(game.state.losses, 1);
        assert_eq!(game.state.round, 2);
        assert_eq!(game.state.enemies().len(), 16);
        assert_eq!(game.pacer().waited_ms, 2000);
        assert_eq!(game.renderer().splash_frames, 1);
        assert_eq!(game.renderer().frames, 2);
        assert!(!game.step());
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            drag_divisor: 0.0,
            ..Tuning::default()
        };
        let game = Game::new(
            tuning,
            PcgSpawner::new(1),
            ScriptedInput::quit_after(1),
            LogRenderer::new(),
            NullPacer::default(),
        );
        assert!(matches!(game, Err(TuningError::InvalidDragDivisor)));
    }

    #[test]
    fn test_winning_pond_drawn_before_flashes() {
        let mut game = Game::new(
            Tuning::default(),
            PcgSpawner::new(8),
            ScriptedInput::quit_after(1),
            Recorder::default(),
            NullPacer::default(),
        )
        .unwrap();
        let tuning = game.state.tuning.clone();
        game.state.player.fish_eaten = tuning.win_eaten - 1;
        game.state.player.apply_growth(&tuning);
        let mut snack = Fish::new_enemy(
            0,
            game.state.player.pos,
            Direction::Left,
            0.0,
            EnemyTier {
                size: 0.25,
                tint: None,
            },
            0,
            &tuning,
        );
        snack.max_speed = 0.0;
        game.state.population.insert(snack);

        assert!(game.step());
        let frames = &game.renderer().0;
        assert_eq!(frames.len(), 1 + WIN_FLASHES + 1);

        let winning = &frames[0];
        assert_eq!(winning.background, BG_COLOR);
        assert_eq!(winning.hold_ms, None);
        let player = winning.sprites.last().unwrap();
        assert_eq!(player.key.size, (200, 128));
        assert_eq!(player.key.image, SpriteImage::PlayerChomp(1));
        assert!(frames[1..=WIN_FLASHES].iter().all(|f| f.hold_ms.is_some()));
        assert_eq!(frames[WIN_FLASHES + 1].hold_ms, None);
    }
}
