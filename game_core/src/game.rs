use glam::Vec2;
use hecs::World;

use crate::systems::{handle_key_down, handle_key_up};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Court, Events, GameRng, Paddle, Score, Side,
};

/// All state for one Pong session
///
/// Owned by the frame driver and handed by reference to update, render
/// and input handling, which never run concurrently.
pub struct Game {
    world: World,
    court: Court,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl Game {
    /// Both paddles centred vertically, ball at the centre heading down-right
    pub fn new(court: Court, config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        let paddle_y = court.paddle_spawn_y(config.paddle_height);
        create_paddle(
            &mut world,
            Side::Left,
            config.paddle_x(Side::Left, court.width),
            paddle_y,
        );
        create_paddle(
            &mut world,
            Side::Right,
            config.paddle_x(Side::Right, court.width),
            paddle_y,
        );

        // First serve is fixed; only later serves are randomised
        create_ball(&mut world, court.center(), Vec2::splat(config.ball_speed));

        Self {
            world,
            court,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.court,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        handle_key_down(&mut self.world, key, &self.config)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        handle_key_up(&mut self.world, key)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        self.world
            .query_mut::<&mut Paddle>()
            .into_iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.world
            .query_mut::<&mut Ball>()
            .into_iter()
            .next()
            .map(|(_e, ball)| ball)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }
}
