// src/logic/auto_move.rs
//! 「組札 0..3 を順番に見て、最初に受け入れてくれた所に置く」探索をまとめたモジュールだよ！🪄
//! ダブルタップでの自動移動と、ドラッグ終了時の組札チェックの両方がこれを使う。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::FOUNDATION_COUNT;
use crate::logic::commit_engine::{Approved, CommitEngine};

/// `eligible(i)` が true の組札だけを 0 から順に調べて、最初に判定を通った組札の許可証を返す。
/// 見つかった時点で探索は終わり！
pub fn first_accepting_foundation(
    engine: &CommitEngine,
    card: Card,
    mut eligible: impl FnMut(usize) -> bool,
) -> Option<(usize, Approved)> {
    let found = (0..FOUNDATION_COUNT)
        .filter(|&i| eligible(i))
        .find_map(|i| engine.approve_foundation_drop(card, i).map(|approved| (i, approved)));
    match &found {
        Some((i, _)) => debug!("[AutoMove] {:?} fits Foundation({})", card, i),
        None => debug!("[AutoMove] no foundation accepts {:?}", card),
    }
    found
}
