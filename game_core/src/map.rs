use glam::Vec2;
use thiserror::Error;

use crate::Config;

/// Reasons a canvas cannot host a court
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourtError {
    #[error("court dimensions must be positive and finite, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("court height {height} is shorter than a paddle ({paddle_height})")]
    TooShort { height: f32, paddle_height: f32 },
    #[error("court width {width} cannot fit two paddles of width {paddle_width}")]
    TooNarrow { width: f32, paddle_width: f32 },
}

/// The rectangular playing field, sized once from the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32, config: &Config) -> Result<Self, CourtError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CourtError::InvalidSize { width, height });
        }
        if height < config.paddle_height || height < config.ball_radius * 2.0 {
            return Err(CourtError::TooShort {
                height,
                paddle_height: config.paddle_height,
            });
        }
        if width < config.paddle_width * 2.0 {
            return Err(CourtError::TooNarrow {
                width,
                paddle_width: config.paddle_width,
            });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the court
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.height - paddle_height).max(0.0)
    }

    /// Top edge of a paddle centred vertically
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }
}
