// src/logic/commit_engine.rs
//! ルールエンジンの状態を変えていい、たった 1 つの入り口だよ！🚪
//!
//! 判定メソッド (`approve_*`) は OK の時だけ `Approved` を返す。
//! 状態を変える `commit` はその `Approved` を受け取って消費するので、
//! 「判定せずに実行」はコンパイルが通らない。さらに `Approved` は発行された
//! 世代を覚えていて、間に別の commit が挟まると `StaleApproval` で弾かれる。

use log::{debug, error};

use crate::components::card::Card;
use crate::error::SolitaireError;
use crate::logic::rules::{PileQuery, RulesEngine};

/// ルールエンジンに頼める状態変更の種類。
#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    Deal,
    Flip(Card),
    DropOnFoundation { card: Card, index: usize },
    DropOnTableau { card: Card, index: usize },
    DropFanOnTableau { fan: Vec<Card>, index: usize },
    RecycleWaste,
    NewGame,
}

/// 判定を通った操作の「許可証」。このモジュールの外では作れないよ。
#[derive(Debug)]
#[must_use = "an approved move does nothing until it is committed"]
pub struct Approved {
    mv: Move,
    generation: u64,
}

impl Approved {
    pub fn mv(&self) -> &Move {
        &self.mv
    }
}

pub struct CommitEngine {
    rules: Box<dyn RulesEngine>,
    /// commit が成功するたびに 1 つ進む
    generation: u64,
}

impl CommitEngine {
    pub fn new(rules: Box<dyn RulesEngine>) -> Self {
        Self { rules, generation: 0 }
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn check(&self, mv: &Move) -> bool {
        let rules = &self.rules;
        match mv {
            Move::Deal => rules.can_deal(),
            Move::Flip(card) => rules.can_flip(*card),
            Move::DropOnFoundation { card, index } => rules.can_drop_on_foundation(*card, *index),
            Move::DropOnTableau { card, index } => rules.can_drop_on_tableau(*card, *index),
            Move::DropFanOnTableau { fan, index } => rules.can_drop_fan_on_tableau(fan, *index),
            // 捨て札が空でもルールエンジンが何もしないだけなので、いつでも OK
            Move::RecycleWaste | Move::NewGame => true,
        }
    }

    /// 判定して、OK なら許可証を発行する。
    pub fn approve(&self, mv: Move) -> Option<Approved> {
        if self.check(&mv) {
            Some(Approved { mv, generation: self.generation })
        } else {
            debug!("Rejected {:?}", mv);
            None
        }
    }

    pub fn approve_deal(&self) -> Option<Approved> {
        self.approve(Move::Deal)
    }

    pub fn approve_flip(&self, card: Card) -> Option<Approved> {
        self.approve(Move::Flip(card))
    }

    pub fn approve_foundation_drop(&self, card: Card, index: usize) -> Option<Approved> {
        self.approve(Move::DropOnFoundation { card, index })
    }

    pub fn approve_tableau_drop(&self, card: Card, index: usize) -> Option<Approved> {
        self.approve(Move::DropOnTableau { card, index })
    }

    pub fn approve_fan_drop(&self, fan: &[Card], index: usize) -> Option<Approved> {
        self.approve(Move::DropFanOnTableau { fan: fan.to_vec(), index })
    }

    pub fn approve_recycle(&self) -> Option<Approved> {
        self.approve(Move::RecycleWaste)
    }

    pub fn approve_new_game(&self) -> Option<Approved> {
        self.approve(Move::NewGame)
    }

    pub fn maximal_fan_from(&self, card: Card) -> Option<Vec<Card>> {
        self.rules.maximal_fan_from(card)
    }

    pub fn has_won(&self) -> bool {
        self.rules.has_won()
    }

    /// 許可証を使って実際に状態を変える。
    pub fn commit(&mut self, approved: Approved) -> Result<(), SolitaireError> {
        let Approved { mv, generation } = approved;
        if generation != self.generation {
            error!("Stale approval for {:?} ({} != {})", mv, generation, self.generation);
            return Err(SolitaireError::StaleApproval { mv, issued: generation, current: self.generation });
        }
        if !self.check(&mv) {
            error!("Approved move no longer passes its check: {:?}", mv);
            return Err(SolitaireError::IllegalMove(mv));
        }

        let rules = &mut self.rules;
        match &mv {
            Move::Deal => rules.deal(),
            Move::Flip(card) => rules.flip(*card),
            Move::DropOnFoundation { card, index } => rules.drop_on_foundation(*card, *index),
            Move::DropOnTableau { card, index } => rules.drop_on_tableau(*card, *index),
            Move::DropFanOnTableau { fan, index } => rules.drop_fan_on_tableau(fan, *index),
            Move::RecycleWaste => rules.recycle_waste_to_stock(),
            Move::NewGame => rules.new_game(),
        }
        self.generation += 1;
        debug!("Committed {:?} (generation {})", mv, self.generation);
        Ok(())
    }
}

// 読み取りはルールエンジンにそのまま流す。
impl PileQuery for CommitEngine {
    fn stock(&self) -> &[Card] {
        self.rules.stock()
    }

    fn waste(&self) -> &[Card] {
        self.rules.waste()
    }

    fn foundation(&self, index: usize) -> &[Card] {
        self.rules.foundation(index)
    }

    fn tableau(&self, index: usize) -> &[Card] {
        self.rules.tableau(index)
    }

    fn is_face_up(&self, card: Card) -> bool {
        self.rules.is_face_up(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::StackType;
    use crate::logic::rules::Klondike;

    fn engine(seed: u64) -> CommitEngine {
        CommitEngine::new(Box::new(Klondike::with_seed(seed)))
    }

    #[test]
    fn approved_move_commits_and_bumps_generation() {
        let mut engine = engine(4);
        let top = engine.top(StackType::Stock).unwrap();
        let approved = engine.approve_deal().expect("山札があるなら配れる");
        assert_eq!(approved.mv(), &Move::Deal);

        engine.commit(approved).unwrap();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.top(StackType::Waste), Some(top));
        assert!(engine.is_face_up(top));
    }

    #[test]
    fn approval_from_an_earlier_turn_is_rejected() {
        let mut engine = engine(4);
        let first = engine.approve_deal().unwrap();
        let second = engine.approve_deal().unwrap();
        engine.commit(first).unwrap();

        let waste_before = engine.waste().to_vec();
        let err = engine.commit(second).unwrap_err();
        assert_eq!(err, SolitaireError::StaleApproval { mv: Move::Deal, issued: 0, current: 1 });
        assert_eq!(engine.waste(), waste_before.as_slice(), "弾かれたら何も変わらない");
    }

    #[test]
    fn rejected_predicates_give_no_permit() {
        let engine = engine(4);
        // 山札のカードは表向きじゃないので、どこにも落とせない
        let stock_top = engine.top(StackType::Stock).unwrap();
        assert!(engine.approve_foundation_drop(stock_top, 0).is_none());
        assert!(engine.approve_tableau_drop(stock_top, 0).is_none());
        assert!(engine.approve_fan_drop(&[], 0).is_none());
        // 捨て札の回収と新しいゲームはいつでも OK
        assert!(engine.approve_recycle().is_some());
        assert!(engine.approve_new_game().is_some());
    }
}
