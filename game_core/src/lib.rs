pub mod clock;
pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// One call advances everything by exactly one tick of velocity; there
/// is no delta-time scaling.
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles and clamp them to the court
    move_paddles(world, court, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then left and right paddle)
    check_collisions(world, court, config, events);

    // 4. Check scoring (ball exited court)
    check_scoring(world, court, score, events, rng, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
