use crate::{Ball, Config, Court, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Runs after both paddles and the ball have moved this tick, so the
/// paddle positions seen here are already this tick's.
pub fn check_collisions(world: &mut World, court: &Court, config: &Config, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let mut left = None;
    let mut right = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, court, config) {
            events.ball_hit_wall = true;
            log::trace!("ball hit wall at y={}", ball.pos.y);
        }
        for paddle in [left, right].iter().flatten() {
            if bounce_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = true;
                log::trace!("ball hit {:?} paddle at y={}", paddle.side, ball.pos.y);
            }
        }
    }
}

/// Reflect vertical velocity once the ball centre is within a radius of
/// the top or bottom edge. The ball is not pushed back inside.
pub fn bounce_off_walls(ball: &mut Ball, court: &Court, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y < r || ball.pos.y > court.height - r {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Reflect horizontal velocity if the ball overlaps the paddle's inner
/// face, then snap the ball flush against that face.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let r = config.ball_radius;
    let within_span = ball.pos.y > paddle.y && ball.pos.y < paddle.y + config.paddle_height;
    if !within_span {
        return false;
    }

    match paddle.side {
        Side::Left if ball.pos.x - r < paddle.x + config.paddle_width => {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = paddle.x + config.paddle_width + r;
            true
        }
        Side::Right if ball.pos.x + r > paddle.x => {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = paddle.x - r;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Court, Events) {
        let world = World::new();
        let config = Config::new();
        let court = Court::new(800.0, 400.0, &config).unwrap();
        let events = Events::new();
        (world, config, court, events)
    }

    fn only_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball should exist");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, court, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, config.ball_radius - 1.0);
        create_ball(&mut world, ball_pos, Vec2::new(5.0, -5.0));

        check_collisions(&mut world, &court, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0), "Only Y velocity flips");
        assert_eq!(ball.pos, ball_pos, "Wall bounce does not reposition");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, court, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, court.height - config.ball_radius + 1.0);
        create_ball(&mut world, ball_pos, Vec2::new(-5.0, 5.0));

        check_collisions(&mut world, &court, &config, &mut events);

        let ball = only_ball(&world);
        assert!(ball.vel.y < 0.0, "Ball should bounce up off the bottom wall");
        assert_eq!(ball.vel.x, -5.0, "X velocity should be unchanged");
    }

    #[test]
    fn test_ball_touching_wall_exactly_does_not_bounce() {
        let (mut world, config, court, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, config.ball_radius),
            Vec2::new(5.0, -5.0),
        );

        check_collisions(&mut world, &court, &config, &mut events);

        assert_eq!(only_ball(&world).vel.y, -5.0, "Boundary is exclusive");
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, court, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 0.0, 150.0);
        create_ball(&mut world, Vec2::new(15.0, 200.0), Vec2::new(-5.0, 5.0));

        check_collisions(&mut world, &court, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, 5.0, "Ball should bounce right off left paddle");
        assert_eq!(ball.pos.x, config.paddle_width + config.ball_radius);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, court, mut events) = setup_world();
        let paddle_x = config.paddle_x(Side::Right, court.width);
        create_paddle(&mut world, Side::Right, paddle_x, 150.0);
        create_ball(&mut world, Vec2::new(785.0, 200.0), Vec2::new(5.0, -5.0));

        check_collisions(&mut world, &court, &config, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel.x, -5.0, "Ball should bounce left off right paddle");
        assert_eq!(ball.pos.x, paddle_x - config.ball_radius);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_misses_paddle_outside_span() {
        let (mut world, config, court, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 0.0, 0.0);
        create_ball(&mut world, Vec2::new(15.0, 300.0), Vec2::new(-5.0, 5.0));

        check_collisions(&mut world, &court, &config, &mut events);

        assert_eq!(only_ball(&world).vel.x, -5.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_edges_are_exclusive() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 0.0, 150.0);

        let mut at_top = Ball::new(Vec2::new(15.0, 150.0), Vec2::new(-5.0, 0.0));
        assert!(!bounce_off_paddle(&mut at_top, &paddle, &config));

        let mut at_bottom = Ball::new(Vec2::new(15.0, 250.0), Vec2::new(-5.0, 0.0));
        assert!(!bounce_off_paddle(&mut at_bottom, &paddle, &config));
    }

    #[test]
    fn test_paddle_bounce_ignores_ball_direction() {
        // No direction check: an overlapping ball flips either way.
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 0.0, 150.0);
        let mut ball = Ball::new(Vec2::new(15.0, 200.0), Vec2::new(5.0, 0.0));

        assert!(bounce_off_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.pos.x, 22.0);
    }

    #[test]
    fn test_paddle_reposition_does_not_retrigger() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 0.0, 150.0);
        let mut ball = Ball::new(Vec2::new(15.0, 200.0), Vec2::new(-5.0, 0.0));

        assert!(bounce_off_paddle(&mut ball, &paddle, &config));
        let after_first = ball;
        assert!(
            !bounce_off_paddle(&mut ball, &paddle, &config),
            "Flush ball must not collide again"
        );
        assert_eq!(ball, after_first);
    }
}
