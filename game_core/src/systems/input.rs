//! Keyboard input handling
//!
//! Left paddle: `w`/`W` up, `s`/`S` down. Right paddle: `ArrowUp`/`ArrowDown`.
//!
//! Releasing either of a paddle's keys stops that paddle, even if its other
//! key is still held. Pressing up, pressing down, then releasing up leaves
//! the paddle still rather than moving down.

use crate::{Config, Paddle, Side};
use hecs::World;

/// Map a `KeyboardEvent.key` value to a paddle and direction
/// (-1 = up, 1 = down)
pub fn key_binding(key: &str) -> Option<(Side, i8)> {
    match key {
        "w" | "W" => Some((Side::Left, -1)),
        "s" | "S" => Some((Side::Left, 1)),
        "ArrowUp" => Some((Side::Right, -1)),
        "ArrowDown" => Some((Side::Right, 1)),
        _ => None,
    }
}

/// Handle key down event. Returns false for unmapped keys.
pub fn handle_key_down(world: &mut World, key: &str, config: &Config) -> bool {
    let Some((side, dir)) = key_binding(key) else {
        return false;
    };
    set_paddle_velocity(world, side, dir as f32 * config.paddle_speed);
    true
}

/// Handle key up event. Returns false for unmapped keys.
pub fn handle_key_up(world: &mut World, key: &str) -> bool {
    let Some((side, _dir)) = key_binding(key) else {
        return false;
    };
    set_paddle_velocity(world, side, 0.0);
    true
}

fn set_paddle_velocity(world: &mut World, side: Side, dy: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.dy = dy;
        }
    }
}
