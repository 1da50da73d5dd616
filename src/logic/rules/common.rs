//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, Rank};
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};

use super::PileQuery;

/// 山 → 配列のインデックス。並びは z を振る順番と同じにしてあるよ。
pub fn slot_of(stack: StackType) -> usize {
    match stack {
        StackType::Stock => 0,
        StackType::Waste => 1,
        StackType::Foundation(i) => 2 + (i as usize % FOUNDATION_COUNT),
        StackType::Tableau(i) => 2 + FOUNDATION_COUNT + (i as usize % TABLEAU_COUNT),
    }
}

/// 1 枚で動かせる状態のカードなら、今いる山を返す。
/// 条件: 表向き & 捨て札・場札・組札のどれかの一番上。山札のカードは動かせない！
pub(crate) fn movable_source<Q: PileQuery + ?Sized>(piles: &Q, card: Card) -> Option<StackType> {
    if !piles.is_face_up(card) {
        return None;
    }
    let (stack, _) = piles.locate(card)?;
    match stack {
        StackType::Stock => None,
        _ if piles.top(stack) == Some(card) => Some(stack),
        _ => None,
    }
}

/// `lower` の上に `upper` を場札ルールで重ねられるか (色違い & ランクが 1 つ下)。
pub(crate) fn stacks_on_tableau(upper: Card, lower: Card) -> bool {
    upper.color() != lower.color() && (upper.rank as u8) + 1 == lower.rank as u8
}

/// `upper` を組札ルールで `lower` の上に置けるか (同じスート & ランクが 1 つ上)。
pub(crate) fn stacks_on_foundation(upper: Card, lower: Card) -> bool {
    upper.suit == lower.suit && upper.rank as u8 == (lower.rank as u8) + 1
}

pub(crate) fn is_ace(card: Card) -> bool {
    card.rank == Rank::Ace
}

pub(crate) fn is_king(card: Card) -> bool {
    card.rank == Rank::King
}
