//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use log::info;

use crate::components::stack::StackType;

use super::{Klondike, PileQuery};

/// 山札から捨て札にカードを配れるかチェックする。
pub fn can_deal_from_stock<Q: PileQuery + ?Sized>(piles: &Q) -> bool {
    !piles.stock().is_empty()
}

/// 山札の一番上を表向きにして捨て札に載せる。
pub(crate) fn deal_one_card(game: &mut Klondike) {
    if let Some(card) = game.pile_mut(StackType::Stock).pop() {
        game.set_face_up(card, true);
        game.pile_mut(StackType::Waste).push(card);
        info!("Dealt {:?} from stock to waste", card);
    }
}

/// 捨て札を裏返して山札に戻す。順番は逆になる (捨て札の一番上が山札の一番下へ)。
/// 捨て札が空なら何もしない。
pub(crate) fn recycle_waste(game: &mut Klondike) {
    let waste: Vec<_> = game.pile_mut(StackType::Waste).drain(..).collect();
    if waste.is_empty() {
        return;
    }
    info!("Recycling {} cards from waste to stock", waste.len());
    for &card in waste.iter() {
        game.set_face_up(card, false);
    }
    game.pile_mut(StackType::Stock).extend(waste.into_iter().rev());
}
