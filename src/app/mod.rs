// src/app/mod.rs
//! ビュー側のロジックを役割ごとに分割して置くモジュールだよ！

pub mod game_app;
pub mod hit_resolver;
pub mod interaction;
pub mod layer_registry;
pub mod renderer;
pub mod state_getter;
pub mod tap_counter;
pub mod win_sequence;
