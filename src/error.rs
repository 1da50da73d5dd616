// src/error.rs
//! クレート全体で使うエラー型だよ。
//! タッチ操作の経路ではエラーは出さない (無効な操作は黙って何もしない) ので、
//! ここに来るのは設定ミスか、ゲート無しで状態を変えようとしたバグだけ！

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::logic::commit_engine::Move;

#[derive(Debug, Error, PartialEq)]
pub enum SolitaireError {
    #[error("move was not approved by the rules engine: {0:?}")]
    IllegalMove(Move),
    #[error("approval for {mv:?} was issued in generation {issued}, engine is at {current}")]
    StaleApproval { mv: Move, issued: u64, current: u64 },
    #[error("invalid view config: {0}")]
    Config(String),
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    #[error("failed to serialize layers: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for SolitaireError {
    fn from(e: serde_json::Error) -> Self {
        SolitaireError::Config(e.to_string())
    }
}

// JS 側には普通の Error オブジェクトとして投げる
impl From<SolitaireError> for JsValue {
    fn from(e: SolitaireError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
