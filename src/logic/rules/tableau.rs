//! 場札 (Tableau) へのカード移動ルールと、裏向きカードをめくるルール。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::{StackType, TABLEAU_COUNT};

use super::common::{is_king, movable_source, stacks_on_tableau};
use super::PileQuery;

/// 指定されたカードが、特定の場札の一番上に置けるかチェックする。
pub fn can_move_to_tableau<Q: PileQuery + ?Sized>(piles: &Q, card: Card, index: usize) -> bool {
    let Some(source) = movable_source(piles, card) else {
        return false;
    };
    if source == StackType::Tableau(index as u8) {
        return false;
    }
    accepts_on_tableau(piles, card, index)
}

/// 移動元のことは気にせず、場札 `index` の一番上に `card` を重ねられるかだけ見る。
/// 列 (ファン) の先頭カードの判定でも使うよ。
pub(crate) fn accepts_on_tableau<Q: PileQuery + ?Sized>(piles: &Q, card: Card, index: usize) -> bool {
    if index >= TABLEAU_COUNT {
        return false;
    }
    let result = match piles.top(StackType::Tableau(index as u8)) {
        // 空の列には K だけ！👑
        None => is_king(card),
        Some(top) => piles.is_face_up(top) && stacks_on_tableau(card, top),
    };
    debug!("[Tableau Rule] {:?} -> Tableau({}): {}", card, index, result);
    result
}

/// 裏向きで、しかも場札の一番上にあるカードだけめくれる。
pub fn can_flip<Q: PileQuery + ?Sized>(piles: &Q, card: Card) -> bool {
    if piles.is_face_up(card) {
        return false;
    }
    match piles.locate(card) {
        Some((stack @ StackType::Tableau(_), _)) => piles.top(stack) == Some(card),
        _ => false,
    }
}
