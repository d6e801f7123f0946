use crate::{Ball, Config, Court, Events, GameRng, Score};
use hecs::World;

/// Check if ball left the court (scoring)
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Check if ball exited left or right edge
        if ball.pos.x < 0.0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;

            ball.reset(court.center(), config.ball_speed, rng);
        } else if ball.pos.x > court.width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;

            ball.reset(court.center(), config.ball_speed, rng);
        }
    }

    if events.scored() {
        log::debug!("score {} - {}", score.left, score.right);
    }
}
