// src/app/layer_registry.rs
//! 52 枚ぶんの描画プロキシ (`CardLayer`) と、z 値カウンターを持つレジストリだよ！🗂️
//!
//! z 値は絶対に減らないし、使い回しもしない。レイアウトのたびに全カードへ新しい番号を
//! 決まった順番で振り直すので、山の一番上のカードはいつもその山で一番手前になる。

use log::{debug, trace};

use crate::components::card::{Card, DECK_SIZE};
use crate::components::card_layer::{CardLayer, Transition};
use crate::components::position::{Position, Rect};
use crate::components::stack::StackType;
use crate::config::layout::TableLayout;
use crate::logic::rules::PileQuery;

/// 単調増加する z 値カウンター。`next()` のたびに 1 つ大きい値をくれる。
#[derive(Debug, Clone, Default)]
pub struct ZCounter {
    top: u64,
}

impl ZCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        self.top += 1;
        self.top
    }

    /// 今までに配った一番大きい値 (ベースライン)
    pub fn top(&self) -> u64 {
        self.top
    }
}

#[derive(Debug, Clone)]
pub struct LayerRegistry {
    /// `CardId` でインデックスするアリーナ
    layers: Vec<CardLayer>,
    z: ZCounter,
}

impl LayerRegistry {
    pub fn new() -> Self {
        let layers: Vec<CardLayer> = Card::deck().into_iter().map(CardLayer::new).collect();
        debug_assert_eq!(layers.len(), DECK_SIZE, "every card needs exactly one layer");
        debug_assert!(layers.iter().enumerate().all(|(i, l)| l.card.id().index() == i));
        Self { layers, z: ZCounter::new() }
    }

    pub fn layer(&self, card: Card) -> &CardLayer {
        &self.layers[card.id().index()]
    }

    pub fn layer_mut(&mut self, card: Card) -> &mut CardLayer {
        &mut self.layers[card.id().index()]
    }

    pub fn layers(&self) -> &[CardLayer] {
        &self.layers
    }

    /// z の小さい順 (奥から手前) に並べたもの。描画とヒットテストで使う。
    pub fn by_z(&self) -> Vec<&CardLayer> {
        let mut sorted: Vec<&CardLayer> = self.layers.iter().collect();
        sorted.sort_by_key(|layer| layer.z);
        sorted
    }

    pub fn top_z(&self) -> u64 {
        self.z.top()
    }

    pub fn next_z(&mut self) -> u64 {
        self.z.next()
    }

    /// カードを今いる全部のカードより手前に持ってくる。
    pub fn raise(&mut self, card: Card) -> u64 {
        let z = self.z.next();
        let layer = &mut self.layers[card.id().index()];
        layer.z = z;
        layer.transition = Transition::Immediate;
        trace!("Raised {:?} to z={}", card, z);
        z
    }

    pub fn move_to(&mut self, card: Card, position: Position, transition: Transition) {
        let layer = self.layer_mut(card);
        layer.position = position;
        layer.transition = transition;
    }

    /// モデルの状態に合わせて 52 枚全部の位置・表裏・z を決め直す。
    ///
    /// 走査順は 山札 → 捨て札 → 組札 0..3 → 場札 0..6、各山の中は下から上。
    /// 山札・捨て札・組札は全部同じ場所に重ね、場札は `fan_spacing` ずつ下にずらす。
    pub fn layout<Q: PileQuery + ?Sized>(&mut self, piles: &Q, table: &TableLayout, transition: Transition) {
        let spacing = table.fan_spacing();
        for stack in StackType::traversal_order() {
            let anchor = table.anchor(stack);
            for (j, &card) in piles.pile(stack).iter().enumerate() {
                let frame = if stack.shows_only_top() {
                    anchor
                } else {
                    Rect { y: anchor.y + j as f32 * spacing, ..anchor }
                };
                let z = self.z.next();
                let layer = &mut self.layers[card.id().index()];
                layer.set_frame(frame);
                layer.face_up = piles.is_face_up(card);
                layer.visible = true;
                layer.rotation = 0.0;
                layer.z = z;
                layer.transition = transition;
            }
        }
        debug!("Layout pass done, baseline z={}", self.z.top());
    }

    /// 勝利演出で付いた回転や非表示を全部元に戻す。
    pub fn reset_transforms(&mut self) {
        for layer in &mut self.layers {
            layer.rotation = 0.0;
            layer.visible = true;
            layer.transition = Transition::Immediate;
        }
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
