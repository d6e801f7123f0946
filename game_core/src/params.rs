/// Game tuning parameters for Pong
///
/// Distances are canvas pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 5.0;

    // Net
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT: f32 = 20.0;
    pub const NET_PERIOD: f32 = 30.0;
    pub const NET_OFFSET: f32 = 10.0;

    // Score text
    pub const SCORE_Y: f32 = 50.0;
    pub const SCORE_FONT: &'static str = "40px Arial";

    // Colours
    pub const BACKGROUND: &'static str = "#000";
    pub const FOREGROUND: &'static str = "#fff";

    // Frame clock
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    pub const MAX_FRAME_DT_MS: f64 = 250.0;
    pub const MAX_TICKS_PER_FRAME: u32 = 5;
}
