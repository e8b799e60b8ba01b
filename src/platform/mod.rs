//! Platform abstraction layer
//!
//! Handles the collaborators outside the simulation:
//! - Input events and the held-impulse snapshot
//! - Tick pacing and blocking waits
//! - Headless implementations for demos and tests

pub mod headless;
pub mod input;
pub mod time;

pub use headless::{LogRenderer, ScriptedInput};
pub use input::{InputEvent, InputSource, InputState};
pub use time::{NullPacer, Pacer, SleepPacer};
