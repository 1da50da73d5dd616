// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::Card;

/// 標準的な52枚のカードデッキを ID 順に生成する関数だよ！🃏
pub fn create_standard_deck() -> Vec<Card> {
    Card::deck()
}

/// カードデッキをシャッフルする関数だよ。
/// 乱数生成器は呼び出し側から渡す (シード付きで再現できるようにするため)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
