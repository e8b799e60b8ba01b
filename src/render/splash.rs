//! End-of-round splash sequences
//!
//! Each splash is a short, fixed list of frames with hold times. The driver
//! shows them back to back with no simulation in between.

use super::frame::{Frame, SpriteDraw, SpriteImage, SpriteKey, TextDraw};
use super::scene::sprite_key;
use super::style::*;
use crate::sim::{GamePhase, SessionState};
use crate::tuning::Tuning;

/// Centre of the pond, and where the splash fish sits
fn anchors(tuning: &Tuning) -> ((i32, i32), (i32, i32)) {
    let center = (
        (tuning.pond_width / 2.0) as i32,
        (tuning.pond_height / 2.0) as i32,
    );
    let fish = (center.0, center.1 - END_SPLASH_PLAYER_OFFSET);
    (center, fish)
}

/// Top-left that centres a sprite of `size` on `at`
fn centred(at: (i32, i32), size: (u32, u32)) -> (i32, i32) {
    (at.0 - (size.0 / 2) as i32, at.1 - (size.1 / 2) as i32)
}

/// Flashing win screen with the grown player above the message
pub fn won_frames(state: &SessionState) -> Vec<Frame> {
    let (center, fish_at) = anchors(&state.tuning);
    let key = sprite_key(&state.player);

    let (mut curr, mut next) = (BG_COLOR, INVERT_BG_COLOR);
    (0..WIN_FLASHES)
        .map(|_| {
            std::mem::swap(&mut curr, &mut next);
            let mut frame = Frame::new(curr);
            frame.sprites.push(SpriteDraw {
                key,
                top_left: centred(fish_at, key.size),
            });
            frame.texts.push(TextDraw {
                text: WIN_TEXT.to_string(),
                center,
                font_size: END_SPLASH_FONT_SIZE,
                color: next,
            });
            frame.hold_ms = Some(WIN_FLASH_DURATION_MS);
            frame
        })
        .collect()
}

/// Single crimson frame with the dead fish
pub fn lost_frames(state: &SessionState) -> Vec<Frame> {
    let (center, fish_at) = anchors(&state.tuning);
    let key = SpriteKey {
        image: SpriteImage::DeadFish,
        size: state.tuning.sprites.dead,
        mirrored: false,
        tint: None,
    };

    let mut frame = Frame::new(LOSE_SCREEN_COLOR);
    frame.sprites.push(SpriteDraw {
        key,
        top_left: centred(fish_at, key.size),
    });
    frame.texts.push(TextDraw {
        text: LOSE_TEXT.to_string(),
        center,
        font_size: END_SPLASH_FONT_SIZE,
        color: BLACK,
    });
    frame.hold_ms = Some(LOSE_SCREEN_DURATION_MS);
    vec![frame]
}

/// Splash for the current phase (empty while playing)
pub fn splash_frames(state: &SessionState) -> Vec<Frame> {
    match state.phase {
        GamePhase::Playing => Vec::new(),
        GamePhase::Won => won_frames(state),
        GamePhase::Lost => lost_frames(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PcgSpawner;

    fn session() -> SessionState {
        SessionState::new(Tuning::default(), &mut PcgSpawner::new(3)).unwrap()
    }

    #[test]
    fn test_no_splash_while_playing() {
        assert!(splash_frames(&session()).is_empty());
    }

    #[test]
    fn test_win_flashes_alternate() {
        let mut state = session();
        state.phase = GamePhase::Won;
        state.player.width = 200;
        state.player.height = 128;
        let frames = splash_frames(&state);

        assert_eq!(frames.len(), WIN_FLASHES);
        assert_eq!(frames[0].background, INVERT_BG_COLOR);
        assert_eq!(frames[0].texts[0].color, BG_COLOR);
        assert_eq!(frames[1].background, BG_COLOR);
        assert_eq!(frames[1].texts[0].color, INVERT_BG_COLOR);
        assert_eq!(frames[4].background, INVERT_BG_COLOR);
        for frame in &frames {
            assert_eq!(frame.hold_ms, Some(WIN_FLASH_DURATION_MS));
            assert_eq!(frame.texts[0].text, WIN_TEXT);
            assert_eq!(frame.texts[0].center, (320, 240));
            assert_eq!(frame.sprites[0].top_left, (220, 76));
            assert_eq!(frame.sprites[0].key.size, (200, 128));
        }
    }

    #[test]
    fn test_lost_splash() {
        let mut state = session();
        state.phase = GamePhase::Lost;
        let frames = splash_frames(&state);

        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.background, LOSE_SCREEN_COLOR);
        assert_eq!(frame.hold_ms, Some(LOSE_SCREEN_DURATION_MS));
        assert_eq!(frame.sprites[0].key.image, SpriteImage::DeadFish);
        assert_eq!(frame.sprites[0].top_left, (295, 124));
        assert_eq!(frame.texts[0].text, LOSE_TEXT);
        assert_eq!(frame.texts[0].color, BLACK);
    }
}
