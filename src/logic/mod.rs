// src/logic/mod.rs
//! ゲームのルールと、ルールエンジンへの唯一の書き込み口。

pub mod auto_move;
pub mod commit_engine;
pub mod deck;
pub mod rules;

pub use commit_engine::{Approved, CommitEngine, Move};
pub use rules::{Klondike, PileQuery, RulesEngine};
