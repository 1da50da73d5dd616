// src/logic/rules/mod.rs
//! ソリティア (クロンダイク) のルールエンジンだよ！🃏✅
//!
//! ビュー側からは `PileQuery` (読むだけ) と `RulesEngine` (判定 + 実行) の
//! 2 つのトレイト越しにしか触らない。実体は `Klondike`。

pub mod common;
pub mod fan;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::card::{Card, DECK_SIZE};
use crate::components::stack::{StackType, PILE_COUNT, TABLEAU_COUNT};
use crate::logic::deck;

pub use common::slot_of;

/// 13 個の山の中身と、カードごとの表裏を読むためのビュー。
/// 中身は全部「下 → 上」の順に並んでる (最後の要素が一番上)。
pub trait PileQuery {
    fn stock(&self) -> &[Card];
    fn waste(&self) -> &[Card];
    fn foundation(&self, index: usize) -> &[Card];
    fn tableau(&self, index: usize) -> &[Card];
    fn is_face_up(&self, card: Card) -> bool;

    fn pile(&self, stack: StackType) -> &[Card] {
        match stack {
            StackType::Stock => self.stock(),
            StackType::Waste => self.waste(),
            StackType::Foundation(i) => self.foundation(i as usize),
            StackType::Tableau(i) => self.tableau(i as usize),
        }
    }

    fn top(&self, stack: StackType) -> Option<Card> {
        self.pile(stack).last().copied()
    }

    /// カードがどの山の何番目にいるか探す。52 枚どれも必ずどこかにいるはず！
    fn locate(&self, card: Card) -> Option<(StackType, usize)> {
        StackType::traversal_order().find_map(|stack| {
            self.pile(stack)
                .iter()
                .position(|&c| c == card)
                .map(|index| (stack, index))
        })
    }
}

/// 判定 (`can_*`) と実行がペアになったルールエンジンの操作たち。
///
/// 実行系のメソッドは、対になる判定が `true` だった時にしか呼んじゃダメ！
/// ビュー側は `CommitEngine` を通すことでそれを型で保証してるよ。
pub trait RulesEngine: PileQuery {
    fn can_deal(&self) -> bool;
    fn deal(&mut self);

    fn can_flip(&self, card: Card) -> bool;
    fn flip(&mut self, card: Card);

    fn can_drop_on_foundation(&self, card: Card, index: usize) -> bool;
    fn drop_on_foundation(&mut self, card: Card, index: usize);

    fn can_drop_on_tableau(&self, card: Card, index: usize) -> bool;
    fn drop_on_tableau(&mut self, card: Card, index: usize);

    fn maximal_fan_from(&self, card: Card) -> Option<Vec<Card>>;
    fn can_drop_fan_on_tableau(&self, fan: &[Card], index: usize) -> bool;
    fn drop_fan_on_tableau(&mut self, fan: &[Card], index: usize);

    fn recycle_waste_to_stock(&mut self);
    fn has_won(&self) -> bool;
    fn new_game(&mut self);
}

/// クロンダイクのゲーム状態そのもの！
#[derive(Debug, Clone)]
pub struct Klondike {
    /// `slot_of(stack)` でインデックスする 13 個の山
    piles: [Vec<Card>; PILE_COUNT],
    /// `CardId` でインデックスする表裏フラグ
    face_up: [bool; DECK_SIZE],
    rng: ChaCha8Rng,
}

impl Klondike {
    /// ランダムなシードで新しいゲームを配る。
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// 同じシードなら毎回同じ配りになるよ🎲 (テストやリプレイ用)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        let mut game = Self {
            piles: std::array::from_fn(|_| Vec::new()),
            face_up: [false; DECK_SIZE],
            rng,
        };
        game.deal_fresh();
        game
    }

    /// 山の中身を直接指定して作る。表向きにするカードも指定できる。
    /// 52 枚が過不足なく入ってるかは呼び出し側の責任 (テスト用の道具だよ)。
    #[cfg(test)]
    pub(crate) fn from_piles(piles: Vec<(StackType, Vec<Card>)>, face_up: &[Card]) -> Self {
        let mut game = Self {
            piles: std::array::from_fn(|_| Vec::new()),
            face_up: [false; DECK_SIZE],
            rng: ChaCha8Rng::seed_from_u64(0),
        };
        for (stack, cards) in piles {
            game.piles[slot_of(stack)] = cards;
        }
        for card in face_up {
            game.face_up[card.id().index()] = true;
        }
        game
    }

    /// シャッフルして場札に 1..7 枚ずつ配り、残りを山札にする。
    fn deal_fresh(&mut self) {
        let mut cards = deck::create_standard_deck();
        deck::shuffle_deck(&mut cards, &mut self.rng);

        self.piles.iter_mut().for_each(Vec::clear);
        self.face_up = [false; DECK_SIZE];

        for i in 0..TABLEAU_COUNT {
            for _ in 0..=i {
                if let Some(card) = cards.pop() {
                    self.piles[slot_of(StackType::Tableau(i as u8))].push(card);
                }
            }
            // 一番上だけ表向き！
            if let Some(&top) = self.piles[slot_of(StackType::Tableau(i as u8))].last() {
                self.set_face_up(top, true);
            }
        }
        self.piles[slot_of(StackType::Stock)] = cards;
        info!("Dealt a fresh game: {} cards left in stock", self.stock().len());
    }

    pub(crate) fn pile_mut(&mut self, stack: StackType) -> &mut Vec<Card> {
        &mut self.piles[slot_of(stack)]
    }

    pub(crate) fn set_face_up(&mut self, card: Card, face_up: bool) {
        self.face_up[card.id().index()] = face_up;
    }

    /// カードを今いる山から取り除く (どこにもいなければ何もしない)。
    pub(crate) fn detach(&mut self, card: Card) -> Option<StackType> {
        let (stack, index) = self.locate(card)?;
        self.pile_mut(stack).remove(index);
        debug!("Detached {:?} from {:?}[{}]", card, stack, index);
        Some(stack)
    }
}

impl Default for Klondike {
    fn default() -> Self {
        Self::new()
    }
}

impl PileQuery for Klondike {
    fn stock(&self) -> &[Card] {
        &self.piles[slot_of(StackType::Stock)]
    }

    fn waste(&self) -> &[Card] {
        &self.piles[slot_of(StackType::Waste)]
    }

    fn foundation(&self, index: usize) -> &[Card] {
        &self.piles[slot_of(StackType::Foundation(index as u8))]
    }

    fn tableau(&self, index: usize) -> &[Card] {
        &self.piles[slot_of(StackType::Tableau(index as u8))]
    }

    fn is_face_up(&self, card: Card) -> bool {
        self.face_up[card.id().index()]
    }
}

impl RulesEngine for Klondike {
    fn can_deal(&self) -> bool {
        stock_waste::can_deal_from_stock(self)
    }

    fn deal(&mut self) {
        stock_waste::deal_one_card(self);
    }

    fn can_flip(&self, card: Card) -> bool {
        tableau::can_flip(self, card)
    }

    fn flip(&mut self, card: Card) {
        self.set_face_up(card, true);
    }

    fn can_drop_on_foundation(&self, card: Card, index: usize) -> bool {
        foundation::can_move_to_foundation(self, card, index)
    }

    fn drop_on_foundation(&mut self, card: Card, index: usize) {
        self.detach(card);
        self.pile_mut(StackType::Foundation(index as u8)).push(card);
    }

    fn can_drop_on_tableau(&self, card: Card, index: usize) -> bool {
        tableau::can_move_to_tableau(self, card, index)
    }

    fn drop_on_tableau(&mut self, card: Card, index: usize) {
        self.detach(card);
        self.pile_mut(StackType::Tableau(index as u8)).push(card);
    }

    fn maximal_fan_from(&self, card: Card) -> Option<Vec<Card>> {
        fan::maximal_fan_from(self, card)
    }

    fn can_drop_fan_on_tableau(&self, fan: &[Card], index: usize) -> bool {
        fan::can_move_fan_to_tableau(self, fan, index)
    }

    fn drop_fan_on_tableau(&mut self, fan: &[Card], index: usize) {
        fan::move_fan_to_tableau(self, fan, index);
    }

    fn recycle_waste_to_stock(&mut self) {
        stock_waste::recycle_waste(self);
    }

    fn has_won(&self) -> bool {
        win_condition::check_win_condition(self)
    }

    fn new_game(&mut self) {
        self.deal_fresh();
    }
}
