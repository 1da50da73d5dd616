// src/components/stack.rs

use serde::{Serialize, Deserialize};

pub const FOUNDATION_COUNT: usize = 4;
pub const TABLEAU_COUNT: usize = 7;
/// 山札 + 捨て札 + 組札4つ + 場札7列 = 13 個の山。
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

/// カードが存在する場所 (山) の種類を示す Enum だよ。
/// 52 枚のカードは、いつでもこの 13 個のどれか 1 つにだけ入ってる！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードだけが積まれる。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。0..4 のインデックスを持つ。
    Foundation(u8),
    /// 場札 (Tableau)。7 列あるので 0..7 のインデックスを持つ。
    Tableau(u8),
}

impl StackType {
    /// レイアウトパスで z を振っていく順番そのままの並び！
    /// 山札 → 捨て札 → 組札 0..3 → 場札 0..6
    pub fn traversal_order() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }

    /// 一番上のカードしか見せない山かどうか。
    /// 場札以外は全部のカードが同じ場所に重なるよ。
    pub fn shows_only_top(self) -> bool {
        !matches!(self, StackType::Tableau(_))
    }
}
