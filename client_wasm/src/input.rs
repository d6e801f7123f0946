//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::Game;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Register `keydown`/`keyup` listeners for the lifetime of the page
pub fn register(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let down_game = game.clone();
    let on_key_down = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if down_game.borrow_mut().key_down(&event.key()) {
            // Keep arrow keys from scrolling the page
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let on_key_up = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if game.borrow_mut().key_up(&event.key()) {
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    Ok(())
}
