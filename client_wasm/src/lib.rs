//! Browser client for canvas Pong
//!
//! Looks up the `pong` canvas, sizes the court from it, wires keyboard
//! input and runs the game loop on `requestAnimationFrame`.
//! Only builds for the wasm32 target.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod driver;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use game_core::{Config, Court, CourtError, Game, GameRng};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

const CANVAS_ID: &str = "pong";

/// Missing host pieces that stop the game from starting
#[derive(Debug, Error)]
pub enum StartError {
    #[error("no global window or document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotCanvas(String),
    #[error("failed to get 2d context: {0}")]
    Context(String),
    #[error("failed to seed rng: {0}")]
    Seed(String),
    #[error(transparent)]
    Court(#[from] CourtError),
    #[error("failed to register callback: {0}")]
    Callback(String),
}

impl From<StartError> for JsValue {
    fn from(e: StartError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).map_err(|e| JsValue::from_str(&e.to_string()))?;

    start(CANVAS_ID).map_err(|e| {
        log::error!("pong failed to start: {e}");
        JsValue::from(e)
    })
}

fn start(canvas_id: &str) -> Result<(), StartError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StartError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| StartError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| StartError::NotCanvas(canvas_id.to_string()))?;

    let surface = CanvasSurface::new(&canvas)?;
    let (width, height) = surface.size();
    let config = Config::new();
    let court = Court::new(width, height, &config)?;

    let seed = random_seed()?;
    log::info!("court {width}x{height}, seed {seed}");

    let game = Rc::new(RefCell::new(Game::new(court, config, GameRng::new(seed))));

    input::register(&document, game.clone())
        .map_err(|e| StartError::Callback(format!("{e:?}")))?;
    driver::run(game, surface).map_err(|e| StartError::Callback(format!("{e:?}")))?;

    Ok(())
}

fn random_seed() -> Result<u64, StartError> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes).map_err(|e| StartError::Seed(e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}
