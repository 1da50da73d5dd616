//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::{StackType, FOUNDATION_COUNT};

use super::common::{is_ace, movable_source, stacks_on_foundation};
use super::PileQuery;

/// 指定されたカードが、特定の組札の一番上に置けるかチェックする。
///
/// - 空の組札には A だけ (スートはどれでも OK)
/// - そうでなければ、同じスートでランクが 1 つ上のカードだけ
pub fn can_move_to_foundation<Q: PileQuery + ?Sized>(piles: &Q, card: Card, index: usize) -> bool {
    if index >= FOUNDATION_COUNT {
        return false;
    }
    let Some(source) = movable_source(piles, card) else {
        return false;
    };
    let target = StackType::Foundation(index as u8);
    if source == target {
        return false;
    }

    let result = match piles.top(target) {
        None => is_ace(card),
        Some(top) => stacks_on_foundation(card, top),
    };
    debug!("[Foundation Rule] {:?} -> Foundation({}): {}", card, index, result);
    result
}
