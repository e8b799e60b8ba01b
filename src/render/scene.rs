//! Play-frame composition

use super::frame::{Frame, SpriteDraw, SpriteImage, SpriteKey, TextDraw};
use super::style::*;
use crate::consts::ENEMY_FRAME_STRETCH;
use crate::sim::{Direction, Fish, FishKind, SessionState};

/// Chomp image shown for each eat-animation frame
pub const CHOMP_SEQUENCE: [u8; 5] = [1, 2, 3, 2, 1];

/// Current sprite of a fish
pub fn sprite_key(fish: &Fish) -> SpriteKey {
    let (image, tint) = match &fish.kind {
        FishKind::Player(player) => {
            let image = match player.eat_frame {
                Some(frame) => SpriteImage::PlayerChomp(
                    CHOMP_SEQUENCE[frame.min(CHOMP_SEQUENCE.len() - 1)],
                ),
                None => SpriteImage::PlayerSwim(fish.frame as u8),
            };
            (image, None)
        }
        FishKind::Enemy(enemy) => (
            SpriteImage::EnemySwim((fish.frame / ENEMY_FRAME_STRETCH) as u8),
            enemy.tier.tint,
        ),
    };
    SpriteKey {
        image,
        size: (fish.width, fish.height),
        mirrored: fish.direction == Direction::Right,
        tint,
    }
}

fn draw_fish(fish: &Fish) -> SpriteDraw {
    SpriteDraw {
        key: sprite_key(fish),
        top_left: fish.top_left(),
    }
}

/// The pond: enemies in population order, the player on top, then the score
pub fn play_frame(state: &SessionState) -> Frame {
    let mut frame = Frame::new(BG_COLOR);
    frame.sprites = state
        .enemies()
        .iter()
        .chain(std::iter::once(&state.player))
        .map(draw_fish)
        .collect();
    frame.texts.push(TextDraw {
        text: state.score().to_string(),
        center: ((state.tuning.pond_width / 2.0) as i32, SCORE_HEIGHT_OFFSET),
        font_size: SCORE_FONT_SIZE,
        color: BLACK,
    });
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PcgSpawner;
    use crate::sim::fish::Impulse;
    use crate::tuning::Tuning;

    #[test]
    fn test_player_drawn_last_with_score() {
        let mut source = PcgSpawner::new(4);
        let mut state = SessionState::new(Tuning::default(), &mut source).unwrap();
        state.player.score = 1275;
        let frame = play_frame(&state);

        assert_eq!(frame.background, BG_COLOR);
        assert_eq!(frame.sprites.len(), state.enemies().len() + 1);
        let last = frame.sprites.last().unwrap();
        assert_eq!(last.key.image, SpriteImage::PlayerSwim(0));
        assert_eq!(last.top_left, (295, 224));
        assert_eq!(frame.texts[0].text, "1275");
        assert_eq!(frame.texts[0].center, (320, 32));
        assert_eq!(frame.hold_ms, None);
    }

    #[test]
    fn test_right_facing_player_is_mirrored() {
        let tuning = Tuning::default();
        let mut player = Fish::new_player(0, &tuning);
        player.impulses_mut().unwrap().set(Impulse::Right, true);
        player.advance(&tuning);
        let key = sprite_key(&player);
        assert!(key.mirrored);
        assert_eq!(key.image, SpriteImage::PlayerSwim(1));
        assert_eq!(key.tint, None);
    }

    #[test]
    fn test_enemy_key_carries_tint_and_stretched_frame() {
        let mut source = PcgSpawner::new(10);
        let state = SessionState::new(Tuning::default(), &mut source).unwrap();
        for enemy in state.enemies() {
            let key = sprite_key(enemy);
            let FishKind::Enemy(e) = &enemy.kind else {
                panic!("expected enemy");
            };
            assert_eq!(key.tint, e.tier.tint);
            assert!(key.tint.is_some());
            assert_eq!(key.image, SpriteImage::EnemySwim((enemy.frame / 3) as u8));
            assert_eq!(key.mirrored, enemy.direction == Direction::Right);
        }
    }

    #[test]
    fn test_eating_shows_chomp_sequence() {
        let tuning = Tuning::default();
        let mut player = Fish::new_player(0, &tuning);
        let prey = player.clone();
        player.eat(&prey, &tuning);
        let mut images = vec![sprite_key(&player).image];
        for _ in 0..5 {
            player.advance(&tuning);
            images.push(sprite_key(&player).image);
        }
        assert_eq!(
            images,
            vec![
                SpriteImage::PlayerChomp(1),
                SpriteImage::PlayerChomp(2),
                SpriteImage::PlayerChomp(3),
                SpriteImage::PlayerChomp(2),
                SpriteImage::PlayerChomp(1),
                SpriteImage::PlayerSwim(0),
            ]
        );
    }
}
