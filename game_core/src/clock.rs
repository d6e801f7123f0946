//! Fixed-timestep frame clock
//!
//! Display refresh callbacks arrive at whatever rate the host runs at
//! (60 Hz, 120 Hz, throttled background tabs). The simulation assumes a
//! constant tick, so the clock converts frame timestamps into a whole
//! number of ticks and carries the remainder to the next frame.

use crate::Params;

/// Timestamps within this much of a full tick count as a full tick, so a
/// 60 Hz display with jittery timestamps still runs one tick per frame.
const JITTER_MS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: f64,
    max_frame_dt_ms: f64,
    max_ticks_per_frame: u32,
    last_frame_ms: Option<f64>,
    accumulator_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(
            Params::TICK_MS,
            Params::MAX_FRAME_DT_MS,
            Params::MAX_TICKS_PER_FRAME,
        )
    }
}

impl FrameClock {
    pub fn new(tick_ms: f64, max_frame_dt_ms: f64, max_ticks_per_frame: u32) -> Self {
        Self {
            tick_ms,
            max_frame_dt_ms,
            max_ticks_per_frame,
            last_frame_ms: None,
            accumulator_ms: 0.0,
        }
    }

    /// Number of ticks to run for a frame stamped `now_ms`
    ///
    /// The first frame always runs exactly one tick. Elapsed time is
    /// clamped to `max_frame_dt_ms` and at most `max_ticks_per_frame` ticks
    /// are returned; any backlog beyond that is dropped rather than
    /// replayed later.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_frame_ms.replace(now_ms) else {
            return 1;
        };

        let dt = (now_ms - last).clamp(0.0, self.max_frame_dt_ms);
        self.accumulator_ms += dt;

        let mut ticks = 0;
        while self.accumulator_ms >= self.tick_ms - JITTER_MS && ticks < self.max_ticks_per_frame
        {
            self.accumulator_ms -= self.tick_ms;
            ticks += 1;
        }

        if self.accumulator_ms >= self.tick_ms {
            log::debug!(
                "frame clock dropped {:.1}ms of backlog",
                self.accumulator_ms
            );
            self.accumulator_ms = 0.0;
        }

        ticks
    }
}
