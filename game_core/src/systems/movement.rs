use crate::{Ball, Config, Court, Paddle};
use hecs::World;

/// Apply paddle velocity, then clamp to the court
pub fn move_paddles(world: &mut World, court: &Court, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y += paddle.dy;

        // Clamp to court bounds; dy is left as is
        paddle.y = court.clamp_paddle_y(paddle.y, config.paddle_height);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn setup() -> (World, Court, Config) {
        let config = Config::new();
        let court = Court::new(800.0, 400.0, &config).unwrap();
        (World::new(), court, config)
    }

    #[test]
    fn test_paddle_moves_by_dy() {
        let (mut world, court, config) = setup();
        let paddle = create_paddle(&mut world, Side::Left, 0.0, 150.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 7.0;

        move_paddles(&mut world, &court, &config);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, 157.0);
    }

    #[test]
    fn test_paddle_clamped_at_top_keeps_velocity() {
        let (mut world, court, config) = setup();
        let paddle = create_paddle(&mut world, Side::Left, 0.0, 0.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = -7.0;

        move_paddles(&mut world, &court, &config);

        let paddle = world.get::<&Paddle>(paddle).unwrap();
        assert_eq!(paddle.y, 0.0, "Paddle should not leave the top");
        assert_eq!(paddle.dy, -7.0, "Clamping must not zero velocity");
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let (mut world, court, config) = setup();
        let paddle = create_paddle(&mut world, Side::Right, 790.0, 297.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 7.0;

        move_paddles(&mut world, &court, &config);

        assert_eq!(
            world.get::<&Paddle>(paddle).unwrap().y,
            court.height - config.paddle_height
        );
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let (mut world, _court, _config) = setup();
        let ball = create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(5.0, -5.0));

        move_ball(&mut world);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(405.0, 195.0));
    }
}
