//! Frame rendering against an abstract 2D drawing surface

use crate::{Ball, Game, Paddle, Params};

/// Primitive drawing operations a host must provide
///
/// Coordinates are court pixels with the origin at the top-left.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
    /// Draw text in the score font and foreground colour
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Redraw the whole court from the current game state
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, game: &Game) {
    let court = game.court();
    let config = game.config();

    // Clear
    surface.fill_rect(0.0, 0.0, court.width, court.height, Params::BACKGROUND);

    draw_net(surface, court.width, court.height);

    for (_e, paddle) in game.world().query::<&Paddle>().iter() {
        surface.fill_rect(
            paddle.x,
            paddle.y,
            config.paddle_width,
            config.paddle_height,
            Params::FOREGROUND,
        );
    }

    for (_e, ball) in game.world().query::<&Ball>().iter() {
        surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, Params::FOREGROUND);
    }

    let score = game.score();
    surface.draw_text(&score.left.to_string(), court.width / 4.0, Params::SCORE_Y);
    surface.draw_text(
        &score.right.to_string(),
        3.0 * court.width / 4.0,
        Params::SCORE_Y,
    );
}

/// Dashed centre line
fn draw_net<S: Surface + ?Sized>(surface: &mut S, width: f32, height: f32) {
    let x = width / 2.0 - Params::NET_WIDTH / 2.0;
    let mut y = Params::NET_OFFSET;
    while y < height {
        surface.fill_rect(x, y, Params::NET_WIDTH, Params::NET_SEGMENT, Params::FOREGROUND);
        y += Params::NET_PERIOD;
    }
}
