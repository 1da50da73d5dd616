// src/app/hit_resolver.rs
//! 画面上の座標から「何に触ったか」を調べるよ！👆
//!
//! タッチ開始の判定は点で、ドロップ先の判定はカードの枠と置き場所の枠の重なりで見る。

use log::trace;

use crate::components::card::Card;
use crate::components::position::{Position, Rect};
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::layout::TableLayout;
use crate::logic::rules::PileQuery;

use super::layer_registry::LayerRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Card(Card),
    /// カードの無いところで、山の置き場所に触った
    PileZone(StackType),
}

/// ホストの座標 → レイヤー座標の変換 (canvas の位置と拡大率)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitResolver {
    transform: ViewTransform,
}

impl HitResolver {
    pub fn new(transform: ViewTransform) -> Self {
        Self { transform }
    }

    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    pub fn to_layer_space(&self, point: Position) -> Position {
        let t = &self.transform;
        let scale = if t.scale > 0.0 { t.scale } else { 1.0 };
        Position::new((point.x - t.offset_x) / scale, (point.y - t.offset_y) / scale)
    }

    /// 一番手前 (z 最大) の見えてるカードを返す。カードが無ければ山の置き場所。
    pub fn hit_test(&self, point: Position, layers: &LayerRegistry, table: &TableLayout) -> Option<Hit> {
        let p = self.to_layer_space(point);
        let hit = layers
            .layers()
            .iter()
            .filter(|layer| layer.visible && layer.frame().contains(p))
            .max_by_key(|layer| layer.z)
            .map(|layer| Hit::Card(layer.card))
            .or_else(|| {
                StackType::traversal_order()
                    .find(|&stack| table.anchor(stack).contains(p))
                    .map(Hit::PileZone)
            });
        trace!("hit_test({:?}) -> {:?}", p, hit);
        hit
    }

    /// 組札のドロップ判定枠 (いつも置き場所そのもの)
    pub fn foundation_zones(table: &TableLayout) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..FOUNDATION_COUNT).map(move |i| (i, table.anchor(StackType::Foundation(i as u8))))
    }

    /// 場札のドロップ判定枠。カードがあれば一番上のカードの枠、空なら置き場所。
    pub fn tableau_zones<'a, Q: PileQuery + ?Sized>(
        piles: &'a Q,
        layers: &'a LayerRegistry,
        table: &'a TableLayout,
    ) -> impl Iterator<Item = (usize, Rect)> + 'a {
        (0..TABLEAU_COUNT).map(move |i| {
            let stack = StackType::Tableau(i as u8);
            let zone = piles
                .top(stack)
                .map(|top| layers.layer(top).frame())
                .unwrap_or_else(|| table.anchor(stack));
            (i, zone)
        })
    }

    /// `frame` と重なってる枠の番号だけを、順番どおりに残す。
    pub fn overlapping(frame: Rect, zones: impl Iterator<Item = (usize, Rect)>) -> impl Iterator<Item = usize> {
        zones.filter(move |(_, zone)| frame.intersects(zone)).map(|(i, _)| i)
    }
}
