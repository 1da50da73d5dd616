// src/components/dragging_info.rs

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
///
/// `fan` が `Some` の時は、`card` 自身が先頭に入ったカードの列をまとめて運んでる。
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub card: Card,
    pub fan: Option<Vec<Card>>,
    /// どの山から持ち上げたか
    pub origin: StackType,
    /// タッチを始めた座標
    pub start_point: Position,
    /// タッチ開始時のレイヤー中心座標
    pub start_position: Position,
}

impl DragSession {
    /// このドラッグで動いてるカードを全部 (上から見て下→上の順)。
    pub fn cards(&self) -> Vec<Card> {
        match &self.fan {
            Some(fan) => fan.clone(),
            None => vec![self.card],
        }
    }
}

/// 操作状態。ドラッグ中かどうかは型で決まる！
/// `Dragging` の時だけ `DragSession` が存在するよ。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// セッションを取り出して Idle に戻す。
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn session(fan: Option<Vec<Card>>) -> DragSession {
        DragSession {
            card: Card::new(Suit::Heart, Rank::Nine),
            fan,
            origin: StackType::Tableau(3),
            start_point: Position::new(1.0, 2.0),
            start_position: Position::new(3.0, 4.0),
        }
    }

    #[test]
    fn take_leaves_idle_behind() {
        let mut state = DragState::Dragging(session(None));
        assert!(state.is_dragging());
        let taken = state.take();
        assert!(taken.is_some());
        assert_eq!(state, DragState::Idle);
        assert!(state.take().is_none());
    }

    #[test]
    fn cards_lists_fan_or_single() {
        let nine = Card::new(Suit::Heart, Rank::Nine);
        let eight = Card::new(Suit::Spade, Rank::Eight);
        assert_eq!(session(None).cards(), vec![nine]);
        assert_eq!(session(Some(vec![nine, eight])).cards(), vec![nine, eight]);
    }
}
