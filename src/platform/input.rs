//! Input boundary

use serde::{Deserialize, Serialize};

use crate::sim::{Impulse, Impulses};

/// Discrete event from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Press(Impulse),
    Release(Impulse),
    Quit,
}

/// Source of input events, polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Held state folded from press/release events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: Impulses,
    quit: bool,
}

impl InputState {
    /// Fold events in arrival order
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::Press(impulse) => self.held.set(impulse, true),
                InputEvent::Release(impulse) => self.held.set(impulse, false),
                InputEvent::Quit => self.quit = true,
            }
        }
    }

    /// Snapshot for the next tick
    pub fn held(&self) -> Impulses {
        self.held
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Forget held keys (a fresh player starts with none)
    pub fn release_all(&mut self) {
        self.held = Impulses::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut state = InputState::default();
        state.apply(&[
            InputEvent::Press(Impulse::Left),
            InputEvent::Press(Impulse::Up),
            InputEvent::Release(Impulse::Left),
        ]);
        let held = state.held();
        assert!(held.up);
        assert!(!held.left);
        assert!(!state.quit_requested());
    }

    #[test]
    fn test_quit_latches() {
        let mut state = InputState::default();
        state.apply(&[InputEvent::Quit]);
        state.apply(&[]);
        assert!(state.quit_requested());
    }

    #[test]
    fn test_release_all() {
        let mut state = InputState::default();
        state.apply(&[InputEvent::Press(Impulse::Down)]);
        state.release_all();
        assert_eq!(state.held(), Impulses::default());
    }
}
