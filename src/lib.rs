// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod logic;

pub use app::game_app::SolitaireApp;
pub use app::interaction::{Gesture, InteractionController, TouchEvent};
pub use components::{Card, CardLayer, StackType};
pub use config::ViewConfig;
pub use error::SolitaireError;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook and logger set!");
}
