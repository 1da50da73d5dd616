// src/app/interaction.rs
//! タッチの流れをジェスチャーに振り分けるステートマシンだよ！🤏🃏
//!
//! 状態は `DragState` (Idle / Dragging) だけ。ゲームの状態を変えるのは必ず
//! `CommitEngine` 経由で、ダメな操作は何も言わずに元のレイアウトへ戻すだけ。

use log::{debug, error, info, warn};

use crate::components::card::Card;
use crate::components::card_layer::{CardLayer, Transition};
use crate::components::dragging_info::{DragSession, DragState};
use crate::components::position::Position;
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::layout::TableLayout;
use crate::config::view_config::ViewConfig;
use crate::logic::auto_move::first_accepting_foundation;
use crate::logic::commit_engine::{Approved, CommitEngine};
use crate::logic::rules::{PileQuery, RulesEngine};

use super::hit_resolver::{Hit, HitResolver, ViewTransform};
use super::layer_registry::LayerRegistry;
use super::win_sequence::WinSequence;

/// ホストから届くタッチ 1 回ぶん。`tap_count` が 2 以上ならダブルタップ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub id: i32,
    pub point: Position,
    pub tap_count: u32,
}

impl TouchEvent {
    pub fn new(id: i32, x: f32, y: f32, tap_count: u32) -> Self {
        Self { id, point: Position::new(x, y), tap_count }
    }
}

/// 1 つのタッチイベントが結局どうなったか。
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Ignored,
    AutoMoved { card: Card, foundation: usize },
    DragStarted { card: Card, origin: StackType, fan_len: usize },
    DragMoved,
    Dropped { cards: Vec<Card>, target: StackType },
    DragReverted,
    Flipped(Card),
    Dealt(Card),
    Recycled,
}

pub struct InteractionController {
    commit: CommitEngine,
    layers: LayerRegistry,
    table: TableLayout,
    hits: HitResolver,
    state: DragState,
    /// 追いかけてるタッチの ID。2 本目の指は無視する
    tracked_touch: Option<i32>,
    win: WinSequence,
    config: ViewConfig,
}

impl InteractionController {
    pub fn new(rules: Box<dyn RulesEngine>, config: ViewConfig, width: f32, height: f32) -> Self {
        let table = TableLayout::compute(width, height, &config);
        let mut controller = Self {
            commit: CommitEngine::new(rules),
            layers: LayerRegistry::new(),
            table,
            hits: HitResolver::default(),
            state: DragState::Idle,
            tracked_touch: None,
            win: WinSequence::new(),
            config,
        };
        controller.layers.layout(&controller.commit, &controller.table, Transition::Immediate);
        info!("InteractionController ready ({}x{})", width, height);
        controller
    }

    // --- 読み取り用 ---

    pub fn engine(&self) -> &CommitEngine {
        &self.commit
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    pub fn layer(&self, card: Card) -> &CardLayer {
        self.layers.layer(card)
    }

    pub fn table(&self) -> &TableLayout {
        &self.table
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn is_won(&self) -> bool {
        self.win.is_active()
    }

    /// 勝った直後に 1 回だけ true になる。ホストはこれを見て確認ダイアログを出す。
    pub fn take_win_prompt(&mut self) -> bool {
        self.win.take_prompt()
    }

    pub fn set_view_transform(&mut self, transform: ViewTransform) {
        self.hits.set_transform(transform);
    }

    // --- タッチイベント ---

    pub fn touch_began(&mut self, event: TouchEvent) -> Gesture {
        if self.win.is_active() {
            return Gesture::Ignored;
        }
        if self.tracked_touch.is_some() {
            debug!("Ignoring extra touch {}", event.id);
            return Gesture::Ignored;
        }
        self.tracked_touch = Some(event.id);

        let Some(hit) = self.hits.hit_test(event.point, &self.layers, &self.table) else {
            return Gesture::Ignored;
        };
        debug!("touch_began {:?} (taps: {})", hit, event.tap_count);

        match hit {
            Hit::Card(card) if self.commit.is_face_up(card) => {
                if event.tap_count > 1 {
                    self.double_tap(card)
                } else {
                    let start = self.hits.to_layer_space(event.point);
                    self.begin_drag(card, start)
                }
            }
            Hit::Card(card) => self.tap_face_down(card),
            Hit::PileZone(StackType::Stock) => self.recycle(),
            Hit::PileZone(_) => Gesture::Ignored,
        }
    }

    pub fn touch_moved(&mut self, event: TouchEvent) -> Gesture {
        if self.tracked_touch != Some(event.id) || !self.state.is_dragging() {
            return Gesture::Ignored;
        }
        let point = self.hits.to_layer_space(event.point);
        self.track_drag(point);
        Gesture::DragMoved
    }

    pub fn touch_ended(&mut self, event: TouchEvent) -> Gesture {
        if self.tracked_touch != Some(event.id) {
            return Gesture::Ignored;
        }
        self.tracked_touch = None;
        if !self.state.is_dragging() {
            return Gesture::Ignored;
        }

        // 最後の位置まで動かしてからドロップ先を探す
        let point = self.hits.to_layer_space(event.point);
        self.track_drag(point);
        let Some(session) = self.state.take() else {
            return Gesture::Ignored;
        };

        let target = match &session.fan {
            None => self.drop_card(session.card),
            Some(fan) => self.drop_fan(fan),
        };
        self.relayout();

        match target {
            Some(target) => {
                info!("Dropped {:?} on {:?}", session.card, target);
                self.check_win();
                Gesture::Dropped { cards: session.cards(), target }
            }
            None => {
                debug!("No target accepted {:?}, reverting", session.card);
                Gesture::DragReverted
            }
        }
    }

    pub fn touch_cancelled(&mut self, id: i32) -> Gesture {
        if self.tracked_touch != Some(id) {
            return Gesture::Ignored;
        }
        self.tracked_touch = None;
        self.cancel_drag()
    }

    // --- ジェスチャー ---

    /// ダブルタップ: 受け入れてくれる一番若い組札へ飛ばす。
    fn double_tap(&mut self, card: Card) -> Gesture {
        let Some((index, approved)) = first_accepting_foundation(&self.commit, card, |_| true) else {
            return Gesture::Ignored;
        };
        if !self.apply(approved) {
            return Gesture::Ignored;
        }
        let target = self.table.anchor(StackType::Foundation(index as u8)).center();
        self.layers.raise(card);
        self.layers.move_to(card, target, Transition::Animated);
        self.relayout();
        self.check_win();
        Gesture::AutoMoved { card, foundation: index }
    }

    /// 表向きのカードを掴めるか、決まった優先順で調べる。最初に当たったものだけ使う。
    fn drag_candidate(&self, card: Card) -> Option<(StackType, Option<Vec<Card>>)> {
        let q = &self.commit;
        let is_top = |stack: StackType| q.top(stack) == Some(card);

        if is_top(StackType::Waste) {
            return Some((StackType::Waste, None));
        }
        if let Some(i) = (0..TABLEAU_COUNT).find(|&i| is_top(StackType::Tableau(i as u8))) {
            return Some((StackType::Tableau(i as u8), None));
        }
        if let Some(i) = (0..FOUNDATION_COUNT).find(|&i| is_top(StackType::Foundation(i as u8))) {
            return Some((StackType::Foundation(i as u8), None));
        }
        let i = (0..TABLEAU_COUNT).find(|&i| q.tableau(i).contains(&card))?;
        let fan = q.maximal_fan_from(card).filter(|fan| !fan.is_empty())?;
        Some((StackType::Tableau(i as u8), Some(fan)))
    }

    fn begin_drag(&mut self, card: Card, start_point: Position) -> Gesture {
        let Some((origin, fan)) = self.drag_candidate(card) else {
            debug!("{:?} is not draggable", card);
            return Gesture::Ignored;
        };
        let session = DragSession {
            card,
            fan,
            origin,
            start_point,
            start_position: self.layers.layer(card).position,
        };
        let cards = session.cards();
        // ドラッグ中のカードは全部、今の一番手前よりさらに手前へ (ファンは順番どおり)
        for &c in &cards {
            self.layers.raise(c);
        }
        debug!("Drag started: {:?} from {:?} ({} cards)", card, origin, cards.len());
        self.state = DragState::Dragging(session);
        Gesture::DragStarted { card, origin, fan_len: cards.len() }
    }

    /// ドラッグ中のカードを指に追従させる。見た目だけで、モデルは触らない。
    fn track_drag(&mut self, point: Position) {
        let DragState::Dragging(session) = &self.state else {
            return;
        };
        let (dx, dy) = point.delta_from(session.start_point);
        let head = session.start_position.offset(dx, dy);
        let spacing = self.table.fan_spacing();
        for (k, &card) in session.cards().iter().enumerate() {
            self.layers.move_to(card, head.offset(0.0, k as f32 * spacing), Transition::Immediate);
        }
    }

    /// 1 枚ドラッグのドロップ先: 組札 0..3、次に場札 0..6。最初に OK だった所で決まり。
    fn drop_card(&mut self, card: Card) -> Option<StackType> {
        let frame = self.layers.layer(card).frame();
        let touched: Vec<usize> = HitResolver::overlapping(frame, HitResolver::foundation_zones(&self.table)).collect();
        if let Some((i, approved)) = first_accepting_foundation(&self.commit, card, |i| touched.contains(&i)) {
            return self.apply(approved).then_some(StackType::Foundation(i as u8));
        }

        let zones = HitResolver::tableau_zones(&self.commit, &self.layers, &self.table);
        let (i, approved) = HitResolver::overlapping(frame, zones)
            .find_map(|i| self.commit.approve_tableau_drop(card, i).map(|a| (i, a)))?;
        self.apply(approved).then_some(StackType::Tableau(i as u8))
    }

    /// ファンは場札にしか置けない。当たり判定は先頭カードの枠で見る。
    fn drop_fan(&mut self, fan: &[Card]) -> Option<StackType> {
        let head = *fan.first()?;
        let frame = self.layers.layer(head).frame();
        let zones = HitResolver::tableau_zones(&self.commit, &self.layers, &self.table);
        let (i, approved) = HitResolver::overlapping(frame, zones)
            .find_map(|i| self.commit.approve_fan_drop(fan, i).map(|a| (i, a)))?;
        self.apply(approved).then_some(StackType::Tableau(i as u8))
    }

    fn cancel_drag(&mut self) -> Gesture {
        match self.state.take() {
            Some(session) => {
                debug!("Drag of {:?} cancelled", session.card);
                self.relayout();
                Gesture::DragReverted
            }
            None => Gesture::Ignored,
        }
    }

    /// 裏向きのカード: めくれるならめくる、山札の一番上なら 1 枚配る。
    fn tap_face_down(&mut self, card: Card) -> Gesture {
        if let Some(approved) = self.commit.approve_flip(card) {
            if !self.apply(approved) {
                return Gesture::Ignored;
            }
            self.layers.raise(card);
            self.layers.layer_mut(card).face_up = true;
            self.relayout();
            return Gesture::Flipped(card);
        }
        if self.commit.top(StackType::Stock) == Some(card) {
            return self.deal(card);
        }
        Gesture::Ignored
    }

    fn deal(&mut self, card: Card) -> Gesture {
        let Some(approved) = self.commit.approve_deal() else {
            return Gesture::Ignored;
        };
        if !self.apply(approved) {
            return Gesture::Ignored;
        }
        let waste = self.table.anchor(StackType::Waste).center();
        self.layers.raise(card);
        self.layers.move_to(card, waste, Transition::Animated);
        self.relayout();
        Gesture::Dealt(card)
    }

    /// 空の山札をタップ: 捨て札を全部山札に戻す (捨て札が空なら何も起きない)。
    fn recycle(&mut self) -> Gesture {
        let Some(approved) = self.commit.approve_recycle() else {
            return Gesture::Ignored;
        };
        if !self.apply(approved) {
            return Gesture::Ignored;
        }
        self.relayout();
        Gesture::Recycled
    }

    // --- 補助 ---

    fn apply(&mut self, approved: Approved) -> bool {
        match self.commit.commit(approved) {
            Ok(()) => true,
            Err(e) => {
                error!("Commit failed: {}", e);
                false
            }
        }
    }

    fn layout_transition(&self) -> Transition {
        if self.config.animate_layout {
            Transition::Animated
        } else {
            Transition::Immediate
        }
    }

    /// 全カードの位置と z を決め直す。勝利中はお祝いの並びを置き直す。
    pub fn relayout(&mut self) {
        if self.win.is_active() {
            self.win.arrange(&mut self.layers, &self.table);
        } else {
            let transition = self.layout_transition();
            self.layers.layout(&self.commit, &self.table, transition);
        }
    }

    /// 勝っていたらお祝い演出を始める。ダブルタップとドロップの両方から呼ぶ。
    fn check_win(&mut self) -> bool {
        if !self.commit.has_won() || !self.win.begin() {
            return false;
        }
        self.win.arrange(&mut self.layers, &self.table);
        true
    }

    pub fn new_game(&mut self) {
        let Some(approved) = self.commit.approve_new_game() else {
            return;
        };
        if !self.apply(approved) {
            return;
        }
        self.state = DragState::Idle;
        self.tracked_touch = None;
        self.win.reset();
        self.layers.reset_transforms();
        for card in Card::deck() {
            self.layers.raise(card);
        }
        self.relayout();
        info!("New game started");
    }

    /// 画面サイズが変わった。ドラッグ中ならキャンセル扱いにしてレイアウトし直す。
    pub fn resize(&mut self, width: f32, height: f32) {
        self.table = TableLayout::compute(width, height, &self.config);
        if self.state.take().is_some() {
            warn!("Resize during drag, drag cancelled");
        }
        self.tracked_touch = None;
        self.relayout();
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;
