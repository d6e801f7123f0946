use glam::Vec2;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,  // Left edge, fixed for the session
    pub y: f32,  // Top edge (clamped to court)
    pub dy: f32, // Vertical velocity, written by input
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y, dy: 0.0 }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to `center` with an independent random sign on each axis
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        self.pos = center;
        self.vel = Vec2::new(rng.sign() * speed, rng.sign() * speed);
    }
}
