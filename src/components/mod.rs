// src/components/mod.rs

// カード・山・座標・描画プロキシ・ドラッグ状態。ゲームの「データ」はここに集める！🧹✨
pub mod card;
pub mod card_layer;
pub mod dragging_info;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, CardId, Rank, Suit};
pub use card_layer::{CardLayer, Transition};
pub use dragging_info::{DragSession, DragState};
pub use position::{Position, Rect};
pub use stack::StackType;
