// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数と、画面サイズから各山の位置を計算する
//! `TableLayout` を置くよ！📐

use crate::components::position::{Position, Rect};
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::view_config::ViewConfig;

/// カードの 高さ / 幅
pub const CARD_ASPECT_RATIO: f32 = 215.0 / 150.0;

// --- 縦画面 ---
pub const PORTRAIT_MARGIN: f32 = 8.0; // 画面の左右の余白
pub const PORTRAIT_TOP: f32 = 8.0; // 上の余白
pub const PORTRAIT_GAP: f32 = 4.0; // カード間の水平方向の間隔
pub const PORTRAIT_ROW_SPACING: f32 = 16.0; // 上段 (山札・組札) と場札の間

// --- 横画面 ---
pub const LANDSCAPE_MARGIN: f32 = 64.0;
pub const LANDSCAPE_TOP: f32 = 8.0;
pub const LANDSCAPE_ROW_SPACING: f32 = 12.0;
/// 横画面ではカード 2 枚分 + 重なり 2.7 枚分が縦に収まるようにする
pub const LANDSCAPE_HEIGHT_UNITS: f32 = 4.7;

/// 画面サイズから求めた、13 個の山の置き場所。
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub width: f32,
    pub height: f32,
    pub portrait: bool,
    pub card_width: f32,
    pub card_height: f32,
    /// カードの高さに対する重なり幅の割合
    pub fan_fraction: f32,
    stock: Rect,
    waste: Rect,
    foundations: [Rect; FOUNDATION_COUNT],
    tableaus: [Rect; TABLEAU_COUNT],
}

impl TableLayout {
    /// 画面の幅・高さから配置を計算する。幅 < 高さ なら縦画面！
    pub fn compute(width: f32, height: f32, config: &ViewConfig) -> Self {
        let portrait = width < height;

        let (margin, top, gap, spacing, w, h, fan_fraction) = if portrait {
            let w = (width - 2.0 * PORTRAIT_MARGIN - 6.0 * PORTRAIT_GAP) / 7.0;
            (
                PORTRAIT_MARGIN,
                PORTRAIT_TOP,
                PORTRAIT_GAP,
                PORTRAIT_ROW_SPACING,
                w,
                w * CARD_ASPECT_RATIO,
                config.fan_offset_portrait,
            )
        } else {
            let h = (height - 2.0 * LANDSCAPE_TOP - LANDSCAPE_ROW_SPACING) / LANDSCAPE_HEIGHT_UNITS;
            let w = h / CARD_ASPECT_RATIO;
            let gap = (width - 2.0 * LANDSCAPE_MARGIN - 7.0 * w) / 6.0;
            (
                LANDSCAPE_MARGIN,
                LANDSCAPE_TOP,
                gap,
                LANDSCAPE_ROW_SPACING,
                w,
                h,
                config.fan_offset_landscape,
            )
        };

        // 列 i の左端の X 座標
        let column_x = |i: usize| margin + i as f32 * (w + gap);
        let top_row_y = top;
        let tableau_row_y = top + spacing + h;

        let foundations = std::array::from_fn(|i| Rect::new(column_x(3 + i), top_row_y, w, h));
        let tableaus = std::array::from_fn(|i| Rect::new(column_x(i), tableau_row_y, w, h));

        Self {
            width,
            height,
            portrait,
            card_width: w,
            card_height: h,
            fan_fraction,
            stock: Rect::new(column_x(0), top_row_y, w, h),
            waste: Rect::new(column_x(1), top_row_y, w, h),
            foundations,
            tableaus,
        }
    }

    /// 山の置き場所 (空の時に見えるエリア) の矩形。
    pub fn anchor(&self, stack: StackType) -> Rect {
        match stack {
            StackType::Stock => self.stock,
            StackType::Waste => self.waste,
            StackType::Foundation(i) => self.foundations[i as usize % FOUNDATION_COUNT],
            StackType::Tableau(i) => self.tableaus[i as usize % TABLEAU_COUNT],
        }
    }

    /// カード 1 枚の (幅, 高さ)
    pub fn card_size(&self) -> (f32, f32) {
        (self.card_width, self.card_height)
    }

    /// ビュー全体の矩形
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// 場札でカードを縦にずらす量 (px)
    pub fn fan_spacing(&self) -> f32 {
        self.fan_fraction * self.card_height
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}
