//! Idle/demo mode steering
//!
//! Flee the closest fish that could eat us, otherwise chase the closest one
//! we can eat, otherwise drift back toward the middle of the pond.

use glam::Vec2;

use super::fish::{Fish, Impulse, Impulses};
use super::state::SessionState;

/// Extra clearance (pixels) kept between sprite edges and a threat
const DANGER_MARGIN: f32 = 60.0;
/// Offsets smaller than this on an axis produce no thrust
const DEADZONE: f32 = 4.0;

/// Impulses the autopilot would hold this tick
pub fn steer(state: &SessionState) -> Impulses {
    let player = &state.player;
    let pond = Vec2::new(state.tuning.pond_width, state.tuning.pond_height);

    let heading = if let Some(threat) = nearest(player, state.enemies(), |e| {
        e.width >= player.width && within_danger(player, e)
    }) {
        player.pos - threat.pos
    } else if let Some(prey) = nearest(player, state.enemies(), |e| {
        e.width < player.width && (0.0..=pond.x).contains(&e.pos.x)
    }) {
        prey.pos - player.pos
    } else {
        pond / 2.0 - player.pos
    };

    impulses_toward(heading)
}

fn within_danger(player: &Fish, enemy: &Fish) -> bool {
    let reach = player.half_size() + enemy.half_size() + Vec2::splat(DANGER_MARGIN);
    let gap = (player.pos - enemy.pos).abs();
    gap.x <= reach.x && gap.y <= reach.y
}

fn nearest<'a>(
    player: &Fish,
    enemies: &'a [Fish],
    keep: impl Fn(&Fish) -> bool,
) -> Option<&'a Fish> {
    enemies
        .iter()
        .filter(|e| keep(e))
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .total_cmp(&b.pos.distance_squared(player.pos))
        })
}

fn impulses_toward(heading: Vec2) -> Impulses {
    let mut impulses = Impulses::default();
    if heading.x > DEADZONE {
        impulses.set(Impulse::Right, true);
    } else if heading.x < -DEADZONE {
        impulses.set(Impulse::Left, true);
    }
    if heading.y > DEADZONE {
        impulses.set(Impulse::Down, true);
    } else if heading.y < -DEADZONE {
        impulses.set(Impulse::Up, true);
    }
    impulses
}
