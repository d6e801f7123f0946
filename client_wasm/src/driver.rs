//! Frame driver: tick, draw, schedule the next frame, forever

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{draw_frame, FrameClock, Game};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::canvas::CanvasSurface;

struct Driver {
    game: Rc<RefCell<Game>>,
    surface: CanvasSurface,
    clock: FrameClock,
}

impl Driver {
    fn frame(&mut self, now_ms: f64) {
        let ticks = self.clock.advance(now_ms);
        let mut game = self.game.borrow_mut();

        for _ in 0..ticks {
            game.tick();
            if game.events().scored() {
                let score = game.score();
                let side = if game.events().left_scored { "left" } else { "right" };
                log::info!("point to {side}: {} - {}", score.left, score.right);
            }
        }

        draw_frame(&mut self.surface, &game);
    }
}

/// Start the animation loop; it never stops on its own
pub fn run(game: Rc<RefCell<Game>>, surface: CanvasSurface) -> Result<(), JsValue> {
    let driver = Rc::new(RefCell::new(Driver {
        game,
        surface,
        clock: FrameClock::default(),
    }));
    request_animation_frame(driver)
}

fn request_animation_frame(driver: Rc<RefCell<Driver>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::once(move |now_ms: f64| {
        game_loop(driver, now_ms);
    });
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(driver: Rc<RefCell<Driver>>, now_ms: f64) {
    driver.borrow_mut().frame(now_ms);

    if let Err(e) = request_animation_frame(driver) {
        log::error!("failed to schedule next frame: {e:?}");
    }
}
