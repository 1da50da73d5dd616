// src/components/card_layer.rs

use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::position::{Position, Rect};

/// 位置の変更をアニメーションさせるかどうかのヒント。
/// ドラッグ中は `Immediate` (指に吸い付く)、レイアウトパスでは `Animated` にするよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Immediate,
    Animated,
}

/// カード 1 枚分の描画用プロキシだよ！🖼️
/// LayerRegistry だけが持ってて、描画側はこれを読むだけ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayer {
    pub card: Card,
    /// 中心座標
    pub position: Position,
    pub width: f32,
    pub height: f32,
    /// 描画順 & ヒットテストの優先度。大きいほど手前！
    pub z: u64,
    pub face_up: bool,
    pub visible: bool,
    /// 勝利演出で扇状に並べる時だけ使う回転 (ラジアン)
    pub rotation: f32,
    pub transition: Transition,
}

impl CardLayer {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            position: Position::default(),
            width: 0.0,
            height: 0.0,
            z: 0,
            face_up: false,
            visible: true,
            rotation: 0.0,
            transition: Transition::Immediate,
        }
    }

    pub fn frame(&self) -> Rect {
        Rect::from_center(self.position, self.width, self.height)
    }

    /// frame をまるごと差し替える (位置とサイズ)。
    pub fn set_frame(&mut self, frame: Rect) {
        self.position = frame.center();
        self.width = frame.width;
        self.height = frame.height;
    }
}
