//! Headless collaborators
//!
//! Let the full loop run without a window: a scripted input source, and a
//! renderer that resolves sprites through the asset cache, logs, and can
//! dump every frame as JSON lines.

use std::io::Write;

use super::input::{InputEvent, InputSource};
use crate::render::{Frame, NamedAssets, Renderer, SpriteCache};

/// Replays a fixed schedule of events, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// (poll index, event), in any order
    schedule: Vec<(u64, InputEvent)>,
    quit_at: Option<u64>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit on the `polls`-th poll (so `polls` ticks run before it)
    pub fn quit_after(polls: u64) -> Self {
        Self {
            quit_at: Some(polls),
            ..Self::default()
        }
    }

    /// Deliver `event` on poll number `at` (0-based)
    pub fn at(mut self, at: u64, event: InputEvent) -> Self {
        self.schedule.push((at, event));
        self
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let now = self.polls;
        self.polls += 1;
        let mut events: Vec<InputEvent> = self
            .schedule
            .iter()
            .filter(|(at, _)| *at == now)
            .map(|(_, event)| *event)
            .collect();
        if self.quit_at == Some(now) {
            events.push(InputEvent::Quit);
        }
        events
    }
}

/// Renderer that draws nothing
pub struct LogRenderer {
    assets: SpriteCache<NamedAssets>,
    dump: Option<Box<dyn Write>>,
    pub frames: u64,
    pub splash_frames: u64,
    pub last: Option<Frame>,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRenderer {
    pub fn new() -> Self {
        Self {
            assets: SpriteCache::new(NamedAssets::default()),
            dump: None,
            frames: 0,
            splash_frames: 0,
            last: None,
        }
    }

    /// Also write each frame as one JSON line to `out`
    pub fn with_dump(mut self, out: Box<dyn Write>) -> Self {
        self.dump = Some(out);
        self
    }

    /// Distinct sprite variants built so far
    pub fn sprite_variants(&self) -> usize {
        self.assets.len()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        if frame.hold_ms.is_some() {
            self.splash_frames += 1;
        }
        for sprite in &frame.sprites {
            self.assets.resolve(&sprite.key);
        }
        log::trace!(
            "Frame {}: {} sprites, text {:?}",
            self.frames,
            frame.sprites.len(),
            frame.texts.iter().map(|t| t.text.as_str()).collect::<Vec<_>>()
        );

        if let Some(out) = self.dump.as_mut() {
            let written = serde_json::to_writer(&mut *out, frame)
                .map_err(std::io::Error::from)
                .and_then(|()| out.write_all(b"\n"));
            if let Err(e) = written {
                log::warn!("Frame dump failed, disabling: {}", e);
                self.dump = None;
            }
        }
        self.last = Some(frame.clone());
    }
}
