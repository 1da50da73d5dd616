//! ゲームの勝利条件判定ロジックを定義するよ。🏆

use crate::components::card::ALL_RANKS;
use crate::components::stack::FOUNDATION_COUNT;

use super::PileQuery;

/// 4 つの組札が全部 13 枚ずつ埋まってたらクリア！
pub fn check_win_condition<Q: PileQuery + ?Sized>(piles: &Q) -> bool {
    (0..FOUNDATION_COUNT).all(|i| piles.foundation(i).len() == ALL_RANKS.len())
}
