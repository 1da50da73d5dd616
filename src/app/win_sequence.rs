// src/app/win_sequence.rs
//! クリアした時のお祝い演出 🎉
//! デッキ順で最後の 2 枚を画面上のほうに並べて、残り 50 枚を円弧状に広げる。

use std::f32::consts::{FRAC_PI_2, PI};

use log::info;

use crate::components::card::{Card, CardId, DECK_SIZE};
use crate::components::card_layer::Transition;
use crate::components::position::Position;
use crate::config::layout::TableLayout;

use super::layer_registry::LayerRegistry;

/// 円弧の半径 (画面の縦横の半分の大きい方に対する割合)
const ARC_RADIUS_RATIO: f32 = 0.35;

#[derive(Debug, Clone, Default)]
pub struct WinSequence {
    active: bool,
    prompt_pending: bool,
}

impl WinSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 勝ちを記録する。2 回目以降は何もしない (プロンプトは 1 勝につき 1 回だけ)。
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        info!("🎉 You won!");
        self.active = true;
        self.prompt_pending = true;
        true
    }

    /// 「もう一回遊ぶ？」を出すべきなら true を返して、フラグを下ろす。
    pub fn take_prompt(&mut self) -> bool {
        std::mem::take(&mut self.prompt_pending)
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.prompt_pending = false;
    }

    /// 全カードをお祝いの並びに置く。置いたカードには新しい z を振る。
    pub fn arrange(&self, layers: &mut LayerRegistry, table: &TableLayout) {
        let (width, height) = (table.width, table.height);

        let showcase = [
            (DECK_SIZE - 2, Position::new(width / 5.0 * 2.0, height / 3.0)),
            (DECK_SIZE - 1, Position::new(width / 5.0 * 3.0, height / 3.0)),
        ];
        for (id, position) in showcase {
            if let Some(card) = Card::from_id(CardId(id as u8)) {
                place(layers, card, position, 0.0);
            }
        }

        let center = table.center();
        let radius = ARC_RADIUS_RATIO * (width / 2.0).max(height / 2.0);
        let step = -PI / (DECK_SIZE - 1) as f32;
        for (i, card) in Card::deck().into_iter().take(DECK_SIZE - 2).enumerate() {
            let theta = PI + i as f32 * step;
            let position = Position::new(center.x - radius * theta.cos(), center.y + radius * theta.sin());
            place(layers, card, position, FRAC_PI_2 - theta);
        }
    }
}

fn place(layers: &mut LayerRegistry, card: Card, position: Position, rotation: f32) {
    let z = layers.next_z();
    let layer = layers.layer_mut(card);
    layer.position = position;
    layer.rotation = rotation;
    layer.z = z;
    layer.face_up = true;
    layer.visible = true;
    layer.transition = Transition::Immediate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::view_config::ViewConfig;

    #[test]
    fn prompt_is_raised_once_per_win() {
        let mut win = WinSequence::new();
        assert!(!win.take_prompt());
        assert!(win.begin());
        assert!(!win.begin(), "2 回目の begin は無視");
        assert!(win.take_prompt());
        assert!(!win.take_prompt());

        win.reset();
        assert!(!win.is_active());
        assert!(win.begin());
        assert!(win.take_prompt());
    }

    #[test]
    fn arrangement_puts_last_two_cards_on_show() {
        let table = TableLayout::compute(400.0, 600.0, &ViewConfig::default());
        let mut layers = LayerRegistry::new();
        let before = layers.top_z();
        WinSequence::new().arrange(&mut layers, &table);

        let deck = Card::deck();
        assert_eq!(layers.layer(deck[50]).position, Position::new(160.0, 200.0));
        assert_eq!(layers.layer(deck[51]).position, Position::new(240.0, 200.0));

        // 最初のカードは円弧の右端 (θ = π)
        let first = layers.layer(deck[0]);
        let radius = 0.35 * 300.0;
        assert!((first.position.x - (200.0 + radius)).abs() < 1e-3);
        assert!((first.position.y - 300.0).abs() < 1e-3);
        assert!((first.rotation - (FRAC_PI_2 - PI)).abs() < 1e-5);

        assert!(layers.layers().iter().all(|l| l.z > before));
        assert_eq!(layers.top_z(), before + DECK_SIZE as u64);
    }
}
