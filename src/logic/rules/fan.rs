//! 場札の途中から、表向きで正しく並んだカードの列 (ファン) をまとめて動かすルール。

use itertools::Itertools;
use log::debug;

use crate::components::card::Card;
use crate::components::stack::StackType;

use super::common::stacks_on_tableau;
use super::tableau::accepts_on_tableau;
use super::{Klondike, PileQuery};

/// `card` から列の一番上までが、表向き・色違い・ランク 1 ずつ降順に並んでいれば、
/// その列を下から順に返す。1 つでも崩れてたら `None`。
pub fn maximal_fan_from<Q: PileQuery + ?Sized>(piles: &Q, card: Card) -> Option<Vec<Card>> {
    let (stack, index) = piles.locate(card)?;
    if !matches!(stack, StackType::Tableau(_)) {
        return None;
    }
    let run = &piles.pile(stack)[index..];

    let all_face_up = run.iter().all(|&c| piles.is_face_up(c));
    let ordered = run
        .iter()
        .tuple_windows()
        .all(|(&lower, &upper)| stacks_on_tableau(upper, lower));

    if all_face_up && ordered {
        Some(run.to_vec())
    } else {
        None
    }
}

/// ファンを場札 `index` に落とせるか。
/// ファンがまだ元の列の一番上に繋がったままで、先頭カードが移動先に重なれば OK！
pub fn can_move_fan_to_tableau<Q: PileQuery + ?Sized>(piles: &Q, fan: &[Card], index: usize) -> bool {
    let Some(&head) = fan.first() else {
        return false;
    };
    let Some((source, _)) = piles.locate(head) else {
        return false;
    };
    if source == StackType::Tableau(index as u8) {
        return false;
    }
    if maximal_fan_from(piles, head).as_deref() != Some(fan) {
        debug!("[Fan Rule] {:?} is no longer the live run of {:?}", fan, source);
        return false;
    }
    accepts_on_tableau(piles, head, index)
}

/// ファンを順番を保ったまま移動先の列に積む。
pub(crate) fn move_fan_to_tableau(game: &mut Klondike, fan: &[Card], index: usize) {
    let Some(&head) = fan.first() else {
        return;
    };
    let Some((source, start)) = game.locate(head) else {
        return;
    };
    let moved: Vec<Card> = game.pile_mut(source).drain(start..).collect();
    debug!("[Fan Rule] moving {} cards {:?} -> Tableau({})", moved.len(), source, index);
    game.pile_mut(StackType::Tableau(index as u8)).extend(moved);
}
